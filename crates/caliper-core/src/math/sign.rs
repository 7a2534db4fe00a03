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

use crate::num::tolerance::ApproxZero;
use std::ops::{Mul, Neg};

/// The sign of a real quantity.
///
/// `None` is the sign of zero. Multiplying by a sign scales by its
/// [`value`](Sign::value), so `None` collapses any finite operand to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    None,
    Positive,
}

impl Sign {
    /// Returns the sign of `value`.
    ///
    /// Both zeros and NaN map to `Sign::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::sign::Sign;
    /// assert_eq!(Sign::of(-3.0), Sign::Negative);
    /// assert_eq!(Sign::of(0.0), Sign::None);
    /// assert_eq!(Sign::of(2.5), Sign::Positive);
    /// ```
    #[inline]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::None
        }
    }

    /// Returns the sign of `value`, treating anything within `precision` of
    /// zero as zero.
    #[inline]
    pub fn of_within(value: f64, precision: f64) -> Self {
        if value.is_zero_within(precision) {
            Self::None
        } else {
            Self::of(value)
        }
    }

    /// Returns `-1`, `0` or `1`.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::None => 0,
            Self::Positive => 1,
        }
    }

    #[inline]
    pub const fn negated(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::None => Self::None,
            Self::Positive => Self::Negative,
        }
    }

    #[inline]
    pub const fn times(self, other: Self) -> Self {
        match (self, other) {
            (Self::None, _) | (_, Self::None) => Self::None,
            (Self::Positive, s) => s,
            (Self::Negative, s) => s.negated(),
        }
    }

    /// Scales `value` by this sign.
    #[inline]
    pub fn times_value(self, value: f64) -> f64 {
        match self {
            Self::Negative => -value,
            Self::None => 0.0,
            Self::Positive => value,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Mul for Sign {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

impl Mul<f64> for Sign {
    type Output = f64;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.times_value(rhs)
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "-"),
            Self::None => write!(f, "0"),
            Self::Positive => write!(f, "+"),
        }
    }
}
