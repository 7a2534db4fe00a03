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

//! # Caliper Core
//!
//! Foundational numerics for the Caliper geometry toolkit. This crate provides
//! closed real intervals and the arithmetic, comparison and elementary
//! functions needed to carry bounded uncertainty through vector, direction,
//! bounding-box and transformation code.
//!
//! ## Modules
//!
//! - `math`: The `Interval` type and its algebra (set operations, tolerant
//!   predicates, sound arithmetic, elementary functions), the `Sign` type and
//!   the `Bounded` trait.
//! - `num`: Scalar helpers: tolerant comparisons against zero with a shared
//!   default precision, and unit-in-the-last-place queries.
//!
//! ## Example
//!
//! ```rust
//! use caliper_core::math::interval::Interval;
//!
//! let radius = Interval::new(0.99, 1.01);
//! let area = radius.squared() * std::f64::consts::PI;
//! assert!(area.contains(std::f64::consts::PI));
//! ```
//!
//! Intervals are immutable `Copy` values and all operations are pure, so they
//! can be shared freely across threads.

pub mod math;
pub mod num;
