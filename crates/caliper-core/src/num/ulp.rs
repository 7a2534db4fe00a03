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

/// A trait for floating-point types that can report their unit in the last place.
///
/// The ulp of a value is the gap between its magnitude and the next larger
/// representable value of the same type. It is the finest granularity at which
/// two nearby values can still be told apart.
///
/// # Examples
///
/// ```rust
/// # use caliper_core::num::ulp::Ulp;
/// assert_eq!(1.0_f64.ulp(), f64::EPSILON);
/// assert_eq!((-2.0_f64).ulp(), 2.0 * f64::EPSILON);
/// assert_eq!(f64::INFINITY.ulp(), f64::INFINITY);
/// ```
pub trait Ulp: Copy {
    /// Returns the unit in the last place of `self`.
    ///
    /// Infinite inputs yield positive infinity, NaN yields NaN and zero yields
    /// the smallest positive subnormal.
    fn ulp(self) -> Self;
}

macro_rules! impl_ulp_for {
    ($t:ty) => {
        impl Ulp for $t {
            #[inline]
            fn ulp(self) -> Self {
                if self.is_nan() {
                    return <$t>::NAN;
                }
                let magnitude = self.abs();
                if magnitude.is_infinite() {
                    return <$t>::INFINITY;
                }
                if magnitude == <$t>::MAX {
                    // No larger finite neighbour, so measure the gap below.
                    return magnitude - <$t>::from_bits(magnitude.to_bits() - 1);
                }
                <$t>::from_bits(magnitude.to_bits() + 1) - magnitude
            }
        }
    };
}

impl_ulp_for!(f32);
impl_ulp_for!(f64);
