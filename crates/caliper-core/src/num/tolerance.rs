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

use num_traits::{Float, NumCast};

/// The precision used by tolerant comparisons when none is given.
pub const DEFAULT_PRECISION: f64 = 1e-12;

/// Tolerant comparisons of a floating-point value against zero.
///
/// Each predicate treats values within `precision` of zero as zero, so a tiny
/// residue left by rounding does not flip the outcome of a geometric test.
///
/// # Examples
///
/// ```rust
/// # use caliper_core::num::tolerance::ApproxZero;
/// assert!(1e-14_f64.is_approx_zero());
/// assert!(!1e-8_f64.is_approx_zero());
/// assert!(1e-8_f64.is_zero_within(1e-6));
/// ```
pub trait ApproxZero: Sized {
    /// The precision used by the methods without an explicit precision.
    fn default_precision() -> Self;

    /// Returns `true` if `|self| <= precision`.
    fn is_zero_within(self, precision: Self) -> bool;

    /// Returns `true` if `self < -precision`.
    fn is_less_than_zero_within(self, precision: Self) -> bool;

    /// Returns `true` if `self <= precision`.
    fn is_less_than_or_equal_to_zero_within(self, precision: Self) -> bool;

    /// Returns `true` if `self > precision`.
    fn is_greater_than_zero_within(self, precision: Self) -> bool;

    /// Returns `true` if `self >= -precision`.
    fn is_greater_than_or_equal_to_zero_within(self, precision: Self) -> bool;

    /// Returns `true` if the value is zero within [`DEFAULT_PRECISION`].
    #[inline]
    fn is_approx_zero(self) -> bool {
        self.is_zero_within(Self::default_precision())
    }

    /// Returns `true` if the value is not zero within [`DEFAULT_PRECISION`].
    #[inline]
    fn is_approx_nonzero(self) -> bool {
        !self.is_approx_zero()
    }
}

impl<T> ApproxZero for T
where
    T: Float,
{
    #[inline]
    fn default_precision() -> Self {
        <T as NumCast>::from(DEFAULT_PRECISION).unwrap_or_else(T::epsilon)
    }

    #[inline]
    fn is_zero_within(self, precision: Self) -> bool {
        self >= -precision && self <= precision
    }

    #[inline]
    fn is_less_than_zero_within(self, precision: Self) -> bool {
        self < -precision
    }

    #[inline]
    fn is_less_than_or_equal_to_zero_within(self, precision: Self) -> bool {
        self <= precision
    }

    #[inline]
    fn is_greater_than_zero_within(self, precision: Self) -> bool {
        self > precision
    }

    #[inline]
    fn is_greater_than_or_equal_to_zero_within(self, precision: Self) -> bool {
        self >= -precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        assert_eq!(f64::default_precision(), DEFAULT_PRECISION);
        assert!(1e-14_f64.is_approx_zero());
        assert!(1e-8_f64.is_approx_nonzero());
    }

    #[test]
    fn test_zero_within_explicit_precision() {
        assert!(1e-8_f64.is_zero_within(1e-6));
        assert!((-1e-8_f64).is_zero_within(1e-6));
        assert!(!1e-3_f64.is_zero_within(1e-6));
    }

    #[test]
    fn test_sign_predicates_near_zero() {
        let tiny = 1e-14_f64;
        assert!(!(-tiny).is_less_than_zero_within(1e-12));
        assert!((-tiny).is_less_than_or_equal_to_zero_within(1e-12));
        assert!(tiny.is_less_than_or_equal_to_zero_within(1e-12));
        assert!(!tiny.is_greater_than_zero_within(1e-12));
        assert!((-tiny).is_greater_than_or_equal_to_zero_within(1e-12));
    }

    #[test]
    fn test_sign_predicates_far_from_zero() {
        assert!((-1.0_f64).is_less_than_zero_within(1e-12));
        assert!(!1.0_f64.is_less_than_or_equal_to_zero_within(1e-12));
        assert!(1.0_f64.is_greater_than_zero_within(1e-12));
        assert!(!(-1.0_f64).is_greater_than_or_equal_to_zero_within(1e-12));
    }

    #[test]
    fn test_f32_uses_the_same_default() {
        assert!(1e-14_f32.is_approx_zero());
        assert!(!1e-3_f32.is_approx_zero());
    }
}
