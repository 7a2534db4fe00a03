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

//! # Math Primitives
//!
//! Interval arithmetic for propagating numeric uncertainty through geometric
//! computations. A value known only up to some tolerance is carried as a
//! closed interval, and every operation widens the result just enough to stay
//! sound.
//!
//! ## Submodules
//!
//! - `interval`: The closed `[lower, upper]` interval type with the `EMPTY`,
//!   `WHOLE`, `UNIT` and `ZERO` constants, sampling and bisection, hull and
//!   intersection, tolerant containment and overlap predicates, arithmetic
//!   (also via `std::ops` operators, including scalar-on-the-left forms), and
//!   `Display`/`FromStr`.
//! - `elementary`: `sqrt`, `sin`, `cos`, `tan`, `asin`, `acos`, `atan`,
//!   `atan2`, `exp`, `ln` and `ulp` over intervals, aware of periodicity,
//!   asymptotes and restricted domains.
//! - `sign`: The three-valued `Sign` of a quantity and its action on scalars
//!   and intervals.
//! - `bounds`: The `Bounded` trait, shared by scalars, intervals and the
//!   higher-dimensional types built on them.
//!
//! ## Conventions
//!
//! Degenerate intervals are encoded in the bounds themselves: an empty
//! interval has `lower > upper`, the whole line is `[-inf, +inf]`. No
//! operation panics; invalid inputs degrade to `EMPTY`, `WHOLE` or NaN.

pub mod bounds;
pub mod elementary;
pub mod interval;
pub mod sign;
