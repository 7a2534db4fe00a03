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

//! Elementary functions over intervals.
//!
//! Every function returns the smallest interval (up to rounding of the
//! underlying `f64` function) containing the image of the input. Periodic
//! functions check whether an extremum or asymptote falls inside the input
//! instead of relying on endpoint values alone.
//!
//! Functions with a restricted domain clamp their argument to that domain
//! first. An argument lying entirely outside the domain yields
//! [`Interval::EMPTY`].
//!
//! All functions are methods, so both `x.sin()` and `Interval::sin(x)` work.

use crate::math::interval::Interval;
use crate::num::ulp::Ulp;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::trace;

/// The domain of `sqrt` and `ln`.
const NON_NEGATIVE: Interval = Interval::new(0.0, f64::INFINITY);

/// The domain of `asin` and `acos`.
const UNIT_RANGE: Interval = Interval::new(-1.0, 1.0);

/// Returns `true` if `phase + k * period` lies in `x` for some integer `k`.
#[inline]
fn contains_phase(x: Interval, phase: f64, period: f64) -> bool {
    let k = ((x.lower_bound() - phase) / period).ceil();
    phase + k * period <= x.upper_bound()
}

/// Encloses a function that is monotonically increasing on `x`.
#[inline]
fn increasing(x: Interval, f: impl Fn(f64) -> f64) -> Interval {
    if x.is_empty() {
        return Interval::EMPTY;
    }
    Interval::new(f(x.lower_bound()), f(x.upper_bound()))
}

impl Interval {
    /// Intersects the interval with `domain`, logging when anything is cut off.
    fn clamped_to(self, domain: Interval, function: &'static str) -> Self {
        let clamped = self.intersection(domain);
        if clamped != self {
            trace!(
                function,
                lower = self.lower_bound(),
                upper = self.upper_bound(),
                "argument clamped to domain"
            );
        }
        clamped
    }

    /// Returns the square roots of the non-negative part of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(4.0, 9.0).sqrt(), Interval::new(2.0, 3.0));
    /// assert_eq!(Interval::new(-4.0, 9.0).sqrt(), Interval::new(0.0, 3.0));
    /// assert!(Interval::new(-4.0, -1.0).sqrt().is_empty());
    /// ```
    pub fn sqrt(self) -> Self {
        increasing(self.clamped_to(NON_NEGATIVE, "sqrt"), f64::sqrt)
    }

    /// Returns the interval of sines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    /// use std::f64::consts::PI;
    ///
    /// let s = Interval::new(0.0, PI).sin();
    /// assert_eq!(s.upper_bound(), 1.0);
    /// assert_eq!(s.lower_bound(), 0.0);
    /// assert_eq!(Interval::new(0.0, 7.0).sin(), Interval::new(-1.0, 1.0));
    /// ```
    pub fn sin(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let width = self.width();
        if width.is_nan() || width >= TAU {
            return UNIT_RANGE;
        }
        let a = self.lower_bound().sin();
        let b = self.upper_bound().sin();
        let lower = if contains_phase(self, -FRAC_PI_2, TAU) {
            -1.0
        } else {
            a.min(b)
        };
        let upper = if contains_phase(self, FRAC_PI_2, TAU) {
            1.0
        } else {
            a.max(b)
        };
        Self::new(lower, upper)
    }

    /// Returns the interval of cosines.
    pub fn cos(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let width = self.width();
        if width.is_nan() || width >= TAU {
            return UNIT_RANGE;
        }
        let a = self.lower_bound().cos();
        let b = self.upper_bound().cos();
        let lower = if contains_phase(self, PI, TAU) {
            -1.0
        } else {
            a.min(b)
        };
        let upper = if contains_phase(self, 0.0, TAU) {
            1.0
        } else {
            a.max(b)
        };
        Self::new(lower, upper)
    }

    /// Returns the interval of tangents.
    ///
    /// If the interval reaches an asymptote at an odd multiple of `pi / 2`,
    /// the result is [`Interval::WHOLE`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(1.0, 2.0).tan(), Interval::WHOLE);
    /// assert_eq!(Interval::new(0.0, 1.0).tan(), Interval::new(0.0, 1.0_f64.tan()));
    /// ```
    pub fn tan(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let width = self.width();
        if width.is_nan() || width >= PI || contains_phase(self, FRAC_PI_2, PI) {
            return Self::WHOLE;
        }
        let lower = self.lower_bound().tan();
        let upper = self.upper_bound().tan();
        if lower > upper {
            // The rounded phase test can miss an asymptote lying within an ulp
            // of a bound; tan is increasing between asymptotes, so a decrease
            // means one was crossed.
            trace!(
                lower = self.lower_bound(),
                upper = self.upper_bound(),
                "tangent crosses an asymptote"
            );
            return Self::WHOLE;
        }
        Self::new(lower, upper)
    }

    /// Returns the arcsines of the part of the interval inside `[-1, 1]`.
    pub fn asin(self) -> Self {
        increasing(self.clamped_to(UNIT_RANGE, "asin"), f64::asin)
    }

    /// Returns the arccosines of the part of the interval inside `[-1, 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Interval::new(-1.0, 1.0).acos(), Interval::new(0.0, PI));
    /// assert_eq!(Interval::new(0.5, 3.0).acos(), Interval::new(0.0, 0.5_f64.acos()));
    /// ```
    pub fn acos(self) -> Self {
        let x = self.clamped_to(UNIT_RANGE, "acos");
        if x.is_empty() {
            return Self::EMPTY;
        }
        Self::new(x.upper_bound().acos(), x.lower_bound().acos())
    }

    pub fn atan(self) -> Self {
        increasing(self, f64::atan)
    }

    /// Returns the angles of all points `(x, y)` with `y` in `self` and `x` in
    /// `x`, as computed by `f64::atan2`.
    ///
    /// When the points lie in one half-plane that avoids the branch cut along
    /// the negative x axis (`x >= 0`, `y >= 0` or `y < 0`), the angle is
    /// monotonic along every edge of the box and the four corners bound the
    /// result. The origin maps to `0`, which the corners already cover. Otherwise the box touches the
    /// cut or contains the origin and the result is `[-pi, pi]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    /// use std::f64::consts::PI;
    ///
    /// let y = Interval::new(1.0, 2.0);
    /// let x = Interval::new(1.0, 2.0);
    /// assert_eq!(y.atan2(x), Interval::new(1.0_f64.atan2(2.0), 2.0_f64.atan2(1.0)));
    ///
    /// let y = Interval::new(-1.0, 1.0);
    /// let x = Interval::new(-2.0, -1.0);
    /// assert_eq!(Interval::atan2(y, x), Interval::new(-PI, PI));
    /// ```
    pub fn atan2(self, x: Interval) -> Self {
        if self.is_empty() || x.is_empty() {
            return Self::EMPTY;
        }
        // Adding zero turns -0.0 into +0.0, which atan2 would otherwise map to -pi.
        let y_lower = self.lower_bound() + 0.0;
        let y_upper = self.upper_bound() + 0.0;
        let x_lower = x.lower_bound() + 0.0;
        let x_upper = x.upper_bound() + 0.0;

        if x_lower >= 0.0 || y_lower >= 0.0 || y_upper < 0.0 {
            Self::hull_of([
                y_lower.atan2(x_lower),
                y_lower.atan2(x_upper),
                y_upper.atan2(x_lower),
                y_upper.atan2(x_upper),
            ])
        } else {
            Self::new(-PI, PI)
        }
    }

    pub fn exp(self) -> Self {
        increasing(self, f64::exp)
    }

    /// Returns the natural logarithms of the non-negative part of the interval.
    ///
    /// A zero lower bound maps to `-inf`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(0.0, 1.0).ln(), Interval::new(f64::NEG_INFINITY, 0.0));
    /// assert!(Interval::new(-2.0, -1.0).ln().is_empty());
    /// ```
    #[doc(alias = "log")]
    pub fn ln(self) -> Self {
        increasing(self.clamped_to(NON_NEGATIVE, "ln"), f64::ln)
    }

    /// Returns the unit in the last place at the magnitude of the interval.
    ///
    /// This is the ulp of the larger bound magnitude: widths below it are
    /// numerically insignificant. It is `+inf` for [`Interval::WHOLE`] and
    /// [`Interval::EMPTY`] and the smallest subnormal for [`Interval::ZERO`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(-1.0, 0.5).ulp(), f64::EPSILON);
    /// assert_eq!(Interval::WHOLE.ulp(), f64::INFINITY);
    /// ```
    pub fn ulp(self) -> f64 {
        self.lower_bound()
            .abs()
            .max(self.upper_bound().abs())
            .ulp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-12;

    fn iv(lower: f64, upper: f64) -> Interval {
        Interval::new(lower, upper)
    }

    fn assert_close(actual: Interval, expected: Interval) {
        assert!(
            (actual.lower_bound() - expected.lower_bound()).abs() < EPS
                && (actual.upper_bound() - expected.upper_bound()).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    /// Samples points of random intervals and checks that `f` maps each into
    /// the interval computed by `g`.
    fn assert_encloses(
        seed: u64,
        range: f64,
        max_width: f64,
        g: impl Fn(Interval) -> Interval,
        f: impl Fn(f64) -> f64,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..300 {
            let lower = rng.random_range(-range..range);
            let width = rng.random_range(0.0..max_width);
            let x = iv(lower, lower + width);
            let image = g(x);
            for _ in 0..20 {
                let value = f(x.random_value_with(&mut rng));
                if value.is_nan() {
                    continue;
                }
                assert!(
                    image.contains_with_tolerance(value, EPS),
                    "{value} not in {image} for argument {x}"
                );
            }
        }
    }

    #[test]
    fn test_contains_phase() {
        assert!(contains_phase(iv(1.0, 2.0), FRAC_PI_2, PI));
        assert!(contains_phase(iv(4.0, 5.0), FRAC_PI_2, PI));
        assert!(!contains_phase(iv(2.0, 4.0), FRAC_PI_2, PI));
        assert!(contains_phase(iv(-0.1, 0.1), 0.0, TAU));
        assert!(contains_phase(iv(TAU - 0.1, TAU + 0.1), 0.0, TAU));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(iv(4.0, 9.0).sqrt(), iv(2.0, 3.0));
        assert_eq!(iv(-4.0, 9.0).sqrt(), iv(0.0, 3.0));
        assert_eq!(Interval::WHOLE.sqrt(), iv(0.0, f64::INFINITY));
        assert!(iv(-4.0, -1.0).sqrt().is_empty());
        assert!(Interval::EMPTY.sqrt().is_empty());
        assert_eq!(Interval::sqrt(Interval::ZERO), Interval::ZERO);
    }

    #[test]
    fn test_sin() {
        assert_close(iv(0.0, FRAC_PI_2).sin(), iv(0.0, 1.0));
        assert_close(
            iv(PI / 4.0, 3.0 * PI / 4.0).sin(),
            iv((PI / 4.0).sin(), 1.0),
        );
        assert_close(iv(PI, 2.0 * PI).sin(), iv(-1.0, 0.0));
        assert_close(iv(0.1, 0.2).sin(), iv(0.1_f64.sin(), 0.2_f64.sin()));
        assert_eq!(iv(0.0, TAU).sin(), iv(-1.0, 1.0));
        assert_eq!(Interval::WHOLE.sin(), iv(-1.0, 1.0));
        assert!(Interval::EMPTY.sin().is_empty());
    }

    #[test]
    fn test_cos() {
        assert_close(iv(-1.0, 1.0).cos(), iv(1.0_f64.cos(), 1.0));
        assert_eq!(iv(0.0, PI).cos(), iv(-1.0, 1.0));
        assert_close(iv(FRAC_PI_2, 3.0 * FRAC_PI_2).cos(), iv(-1.0, 0.0));
        assert_close(iv(0.1, 0.2).cos(), iv(0.2_f64.cos(), 0.1_f64.cos()));
        assert_eq!(iv(-100.0, 100.0).cos(), iv(-1.0, 1.0));
        assert_eq!(Interval::WHOLE.cos(), iv(-1.0, 1.0));
        assert!(Interval::EMPTY.cos().is_empty());
    }

    #[test]
    fn test_sin_and_cos_enclose_samples() {
        assert_encloses(1, 20.0, 8.0, Interval::sin, f64::sin);
        assert_encloses(2, 20.0, 8.0, Interval::cos, f64::cos);
        assert_encloses(3, 20.0, 0.5, Interval::sin, f64::sin);
        assert_encloses(4, 20.0, 0.5, Interval::cos, f64::cos);
    }

    #[test]
    fn test_tan() {
        assert_eq!(iv(1.0, 2.0).tan(), Interval::WHOLE);
        assert_eq!(iv(-2.0, -1.0).tan(), Interval::WHOLE);
        assert_eq!(iv(0.0, 1.0).tan(), iv(0.0, 1.0_f64.tan()));
        assert_eq!(iv(2.0, 4.0).tan(), iv(2.0_f64.tan(), 4.0_f64.tan()));
        assert_eq!(iv(0.0, 4.0).tan(), Interval::WHOLE);
        assert_eq!(Interval::WHOLE.tan(), Interval::WHOLE);
        assert!(Interval::EMPTY.tan().is_empty());
    }

    #[test]
    fn test_tan_adjacent_floats_across_asymptote() {
        let mut crossings = 0;
        for k in 0..20_000 {
            let asymptote = FRAC_PI_2 + k as f64 * PI;
            let bits = asymptote.to_bits();
            for offset in 0..16 {
                let x = f64::from_bits(bits - 8 + offset);
                let y = f64::from_bits(bits - 7 + offset);
                if x.tan() > 0.0 && y.tan() < 0.0 {
                    crossings += 1;
                    let image = iv(x, y).tan();
                    assert!(image.is_whole(), "k = {k}: [{x}, {y}] -> {image}");
                }
            }
        }
        assert!(crossings > 0, "no sign change found near an asymptote");
    }

    #[test]
    fn test_tan_never_empty_for_non_empty_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..10_000 {
            let lower = rng.random_range(-1e6..1e6);
            let x = iv(lower, lower + rng.random_range(0.0..1e-6));
            assert!(!x.tan().is_empty(), "{x}");
        }
    }

    #[test]
    fn test_tan_encloses_samples() {
        assert_encloses(5, 10.0, 1.0, Interval::tan, f64::tan);
    }

    #[test]
    fn test_asin_and_acos() {
        assert_close(iv(-1.0, 1.0).asin(), iv(-FRAC_PI_2, FRAC_PI_2));
        assert_close(iv(-2.0, 0.5).asin(), iv(-FRAC_PI_2, 0.5_f64.asin()));
        assert!(iv(1.5, 2.0).asin().is_empty());

        assert_close(iv(-1.0, 1.0).acos(), iv(0.0, PI));
        assert_close(iv(0.0, 0.5).acos(), iv(0.5_f64.acos(), FRAC_PI_2));
        assert!(iv(-3.0, -2.0).acos().is_empty());
        assert!(Interval::EMPTY.acos().is_empty());
    }

    #[test]
    fn test_atan() {
        assert_eq!(iv(0.0, 1.0).atan(), iv(0.0, 1.0_f64.atan()));
        assert_eq!(Interval::WHOLE.atan(), iv(-FRAC_PI_2, FRAC_PI_2));
        assert!(Interval::EMPTY.atan().is_empty());
    }

    #[test]
    fn test_atan2_half_planes() {
        let upper = Interval::atan2(iv(1.0, 2.0), iv(-1.0, 1.0));
        assert_close(upper, iv(1.0_f64.atan2(1.0), 1.0_f64.atan2(-1.0)));

        let lower = Interval::atan2(iv(-2.0, -1.0), iv(-1.0, 1.0));
        assert_close(lower, iv((-1.0_f64).atan2(-1.0), (-1.0_f64).atan2(1.0)));

        let right = Interval::atan2(Interval::WHOLE, iv(1.0, 2.0));
        assert_close(right, iv(-FRAC_PI_2, FRAC_PI_2));
    }

    #[test]
    fn test_atan2_branch_cut_and_origin() {
        let full = iv(-PI, PI);
        assert_eq!(Interval::atan2(iv(-1.0, 1.0), iv(-2.0, -1.0)), full);
        assert_eq!(Interval::atan2(iv(-1.0, 1.0), iv(-1.0, 1.0)), full);
        assert_eq!(Interval::atan2(iv(-1.0, 0.0), iv(-2.0, -1.0)), full);
        assert!(Interval::atan2(Interval::EMPTY, Interval::UNIT).is_empty());
    }

    #[test]
    fn test_atan2_right_half_plane_touching_origin() {
        let angles = Interval::atan2(iv(-1.0, 1.0), iv(0.0, 1.0));
        assert_close(angles, iv(-FRAC_PI_2, FRAC_PI_2));
        assert!(angles.contains(0.0_f64.atan2(0.0)));

        let axis = Interval::atan2(iv(-1.0, 1.0), Interval::ZERO);
        assert_close(axis, iv(-FRAC_PI_2, FRAC_PI_2));

        let mirrored = Interval::atan2(iv(-1.0, 1.0), iv(-0.0, 1.0));
        assert_close(mirrored, iv(-FRAC_PI_2, FRAC_PI_2));
    }

    #[test]
    fn test_atan2_negative_zero_lower_bound() {
        let angles = Interval::atan2(iv(-0.0, 1.0), iv(-2.0, -1.0));
        assert!(angles.contains(PI));
        assert!(!angles.contains(-PI));
    }

    #[test]
    fn test_atan2_encloses_samples() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..300 {
            let (yl, xl) = (rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0));
            let y = iv(yl, yl + rng.random_range(0.0..2.0));
            let x = iv(xl, xl + rng.random_range(0.0..2.0));
            let angles = y.atan2(x);
            for _ in 0..20 {
                let angle = y
                    .random_value_with(&mut rng)
                    .atan2(x.random_value_with(&mut rng));
                assert!(angles.contains_with_tolerance(angle, EPS), "{y} {x}");
            }
        }
    }

    #[test]
    fn test_exp_and_ln() {
        assert_eq!(iv(0.0, 1.0).exp(), iv(1.0, 1.0_f64.exp()));
        assert_eq!(Interval::WHOLE.exp(), iv(0.0, f64::INFINITY));
        assert_eq!(iv(1.0, 1.0_f64.exp()).ln(), iv(0.0, 1.0_f64.exp().ln()));
        assert_eq!(iv(-1.0, 1.0).ln(), iv(f64::NEG_INFINITY, 0.0));
        assert_eq!(Interval::ZERO.ln(), Interval::singleton(f64::NEG_INFINITY));
        assert!(iv(-2.0, -1.0).ln().is_empty());
        assert!(Interval::EMPTY.exp().is_empty());
        assert!(Interval::EMPTY.ln().is_empty());
    }

    #[test]
    fn test_domain_policy_is_uniform() {
        let outside = iv(5.0, 6.0);
        assert!(outside.asin().is_empty());
        assert!(outside.acos().is_empty());
        let negative = iv(-6.0, -5.0);
        assert!(negative.sqrt().is_empty());
        assert!(negative.ln().is_empty());
    }

    #[test]
    fn test_ulp() {
        assert_eq!(iv(1.0, 3.0).ulp(), 2.0 * f64::EPSILON);
        assert_eq!(iv(-4.0, 1.0).ulp(), 4.0 * f64::EPSILON);
        assert_eq!(Interval::ZERO.ulp(), f64::from_bits(1));
        assert_eq!(Interval::WHOLE.ulp(), f64::INFINITY);
        assert_eq!(Interval::EMPTY.ulp(), f64::INFINITY);
        assert_eq!(Interval::ulp(Interval::singleton(1.0)), f64::EPSILON);
    }
}
