// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numeric Foundations
//!
//! Scalar helpers shared by the interval engine and its geometric consumers.
//! Both modules operate on plain floating-point values and carry no state.
//!
//! ## Submodules
//!
//! - `tolerance`: Tolerant comparisons against zero (`ApproxZero`) with a
//!   crate-wide `DEFAULT_PRECISION`, implemented for every `num_traits::Float`.
//! - `ulp`: Unit in the last place (`Ulp`) for `f32` and `f64`, used to judge
//!   whether a width is numerically significant.
//!
//! ## Motivation
//!
//! Geometric predicates routinely compare quantities that should be zero but
//! carry rounding residue. Naming the precision once and reusing the same
//! comparison helpers keeps those decisions consistent across the toolkit.

pub mod tolerance;
pub mod ulp;
