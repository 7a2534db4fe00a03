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

use crate::math::interval::Interval;

/// A value that can report a bounding range of itself.
///
/// Scalars are bounded by intervals; higher-dimensional geometric types
/// implement this with their own box types so that generic code can ask any
/// value for its bounds.
///
/// # Examples
///
/// ```rust
/// # use caliper_core::math::{bounds::Bounded, interval::Interval};
///
/// fn widest<T: Bounded<Bounds = Interval>>(values: &[T]) -> Interval {
///     values.iter().fold(Interval::EMPTY, |acc, v| acc.hull(v.bounds()))
/// }
///
/// assert_eq!(widest(&[2.0, -1.0, 0.5]), Interval::new(-1.0, 2.0));
/// assert_eq!(widest(&[Interval::UNIT, Interval::new(3.0, 4.0)]), Interval::new(0.0, 4.0));
/// ```
pub trait Bounded {
    /// The type of the bounding range.
    type Bounds;

    /// Returns the bounding range of `self`.
    fn bounds(&self) -> Self::Bounds;
}

impl Bounded for Interval {
    type Bounds = Interval;

    #[inline]
    fn bounds(&self) -> Interval {
        Interval::bounds(self)
    }
}

impl Bounded for f64 {
    type Bounds = Interval;

    #[inline]
    fn bounds(&self) -> Interval {
        Interval::singleton(*self)
    }
}
