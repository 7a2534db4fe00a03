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

use crate::math::sign::Sign;
use rand::Rng;
use std::{
    num::ParseFloatError,
    ops::{
        Add, AddAssign, Bound, Div, DivAssign, Mul, MulAssign, Neg, RangeBounds, RangeInclusive,
        Sub, SubAssign,
    },
    str::FromStr,
};
use tracing::trace;

/// A closed interval `[lower, upper]` of real numbers.
///
/// An interval stands for a quantity known only up to some uncertainty. Every
/// operation returns an interval guaranteed to contain all values obtainable by
/// applying the corresponding scalar operation to any points of the operands.
///
/// Degenerate intervals use the same two-bound encoding:
///
/// - empty: `lower > upper`, canonically `[+inf, -inf]` ([`Interval::EMPTY`]),
/// - whole: `[-inf, +inf]` ([`Interval::WHOLE`]),
/// - singleton: `lower == upper`.
///
/// Intervals are immutable `Copy` values; all operations return new intervals.
///
/// # Invariants
///
/// A well-formed non-empty interval satisfies `lower <= upper`. Construction via
/// [`Interval::new`] does not check this; inverted bounds behave as empty.
#[derive(Clone, Copy)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

/// Product of two bounds where zero absorbs infinity.
///
/// Interval arithmetic takes `0 * inf = 0`, since the zero bound is an exact
/// point and the infinite bound is only a limit.
#[inline(always)]
fn product(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 { 0.0 } else { a * b }
}

impl Interval {
    /// The empty interval, `[+inf, -inf]`.
    pub const EMPTY: Self = Self::new(f64::INFINITY, f64::NEG_INFINITY);

    /// The interval of all real numbers, `[-inf, +inf]`.
    pub const WHOLE: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    /// The unit interval, `[0, 1]`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// The singleton interval containing only zero.
    pub const ZERO: Self = Self::singleton(0.0);

    /// Creates a new `Interval` from its bounds.
    ///
    /// The bounds are neither validated nor reordered. Passing
    /// `lower > upper` yields an interval that behaves as empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(2.0, 3.0);
    /// assert_eq!(iv.lower_bound(), 2.0);
    /// assert_eq!(iv.upper_bound(), 3.0);
    /// assert!(Interval::new(3.0, 2.0).is_empty());
    /// ```
    #[inline]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Creates a new `Interval` if the bounds are well formed.
    ///
    /// Returns `None` if either bound is NaN or `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0.0, 1.0).is_some());
    /// assert!(Interval::try_new(1.0, 0.0).is_none());
    /// assert!(Interval::try_new(f64::NAN, 0.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(lower: f64, upper: f64) -> Option<Self> {
        if lower <= upper {
            Some(Self::new(lower, upper))
        } else {
            None
        }
    }

    /// Creates the interval `[value, value]`.
    #[inline]
    pub const fn singleton(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Returns the smallest interval containing every value of `values`.
    ///
    /// An empty iterator yields [`Interval::EMPTY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let iv = Interval::hull_of([3.0, -1.0, 2.0]);
    /// assert_eq!(iv, Interval::new(-1.0, 3.0));
    /// assert!(Interval::hull_of(std::iter::empty()).is_empty());
    /// ```
    pub fn hull_of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .fold(Self::EMPTY, |hull, value| hull.hull_value(value))
    }

    #[inline]
    pub const fn lower_bound(&self) -> f64 {
        self.lower
    }

    #[inline]
    pub const fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Returns the interval itself, viewed as its own bounding range.
    #[inline]
    pub const fn bounds(&self) -> Self {
        *self
    }

    /// Returns `true` if the interval contains no values (`lower > upper`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert!(Interval::EMPTY.is_empty());
    /// assert!(!Interval::ZERO.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    /// Returns `true` if the interval is `[-inf, +inf]`.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }

    /// Returns `true` if both bounds are exactly equal.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns `upper - lower`.
    ///
    /// The width of [`Interval::WHOLE`] is `+inf`. The width of an empty
    /// interval is negative and is not clamped.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the value at parameter `t`, `lower + t * width`.
    ///
    /// `t = 0` gives the lower bound and `t = 1` the upper bound exactly. For
    /// `t` in `[0, 1]` the result never leaves the interval; outside that range
    /// the interval is extrapolated linearly. Finite bounds whose width
    /// overflows are blended as `(1 - t) * lower + t * upper` instead, so the
    /// result stays finite. Infinite bounds propagate NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(2.0, 4.0);
    /// assert_eq!(iv.interpolated(0.25), 2.5);
    /// assert_eq!(iv.interpolated(1.5), 5.0);
    /// ```
    pub fn interpolated(&self, t: f64) -> f64 {
        if t == 0.0 {
            return self.lower;
        }
        if t == 1.0 {
            return self.upper;
        }
        let width = self.width();
        let value = if width.is_infinite() && self.lower.is_finite() && self.upper.is_finite() {
            (1.0 - t) * self.lower + t * self.upper
        } else {
            self.lower + t * width
        };
        if (0.0..=1.0).contains(&t) && !value.is_nan() {
            // Rounding in `t * width` can overshoot a bound by an ulp.
            value.max(self.lower).min(self.upper)
        } else {
            value
        }
    }

    /// Returns the midpoint of the interval.
    ///
    /// This is the value interpolated at `0.5`, computed as
    /// `0.5 * lower + 0.5 * upper` so that it stays finite for finite bounds
    /// whose width overflows. The median of [`Interval::WHOLE`] is NaN.
    #[inline]
    pub fn median(&self) -> f64 {
        0.5 * self.lower + 0.5 * self.upper
    }

    /// Returns a value drawn uniformly from the interval using the thread
    /// local generator.
    ///
    /// Follows [`Interval::random_value_with`] for empty and unbounded
    /// intervals.
    #[inline]
    pub fn random_value(&self) -> f64 {
        self.random_value_with(&mut rand::rng())
    }

    /// Returns a value drawn uniformly from the interval using `rng`.
    ///
    /// Returns NaN for an empty interval and for [`Interval::WHOLE`]. An
    /// interval with a single infinite bound returns that bound, since no
    /// uniform distribution exists over a half line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let iv = Interval::new(-1.0, 1.0);
    /// assert!(iv.contains(iv.random_value_with(&mut rng)));
    /// ```
    pub fn random_value_with<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return f64::NAN;
        }
        if self.is_singleton() {
            return self.lower;
        }
        match (self.lower.is_finite(), self.upper.is_finite()) {
            (true, true) => self.interpolated(rng.random_range(0.0..=1.0)),
            (true, false) => self.upper,
            (false, true) => self.lower,
            (false, false) => f64::NAN,
        }
    }

    /// Splits the interval at its median into `(lower_half, upper_half)`.
    ///
    /// [`Interval::WHOLE`] splits at zero. An interval with exactly one
    /// infinite bound splits at its finite bound moved outwards by
    /// `max(|bound|, 1)`. An empty interval splits into two empty halves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let (lo, hi) = Interval::new(2.0, 4.0).bisected();
    /// assert_eq!(lo, Interval::new(2.0, 3.0));
    /// assert_eq!(hi, Interval::new(3.0, 4.0));
    ///
    /// let (lo, hi) = Interval::WHOLE.bisected();
    /// assert_eq!(lo, Interval::new(f64::NEG_INFINITY, 0.0));
    /// assert_eq!(hi, Interval::new(0.0, f64::INFINITY));
    /// ```
    pub fn bisected(&self) -> (Self, Self) {
        if self.is_empty() {
            return (Self::EMPTY, Self::EMPTY);
        }
        let split = self.split_point();
        (Self::new(self.lower, split), Self::new(split, self.upper))
    }

    #[inline]
    fn split_point(&self) -> f64 {
        if self.is_singleton() {
            return self.lower;
        }
        match (self.lower.is_finite(), self.upper.is_finite()) {
            (true, true) => self.median(),
            (true, false) => self.lower + self.lower.abs().max(1.0),
            (false, true) => self.upper - self.upper.abs().max(1.0),
            (false, false) => 0.0,
        }
    }

    /// Returns the smallest interval containing both `self` and `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(1.0, 3.0).hull_value(5.0), Interval::new(1.0, 5.0));
    /// assert_eq!(Interval::EMPTY.hull_value(5.0), Interval::singleton(5.0));
    /// ```
    #[inline]
    pub fn hull_value(&self, value: f64) -> Self {
        if self.is_empty() {
            return Self::singleton(value);
        }
        Self::new(self.lower.min(value), self.upper.max(value))
    }

    /// Returns the smallest interval containing both `self` and `other`.
    ///
    /// Empty operands do not contribute to the hull.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let a = Interval::new(2.0, 3.0);
    /// assert_eq!(a.hull(Interval::new(4.0, 5.0)), Interval::new(2.0, 5.0));
    /// assert_eq!(a.hull(Interval::EMPTY), a);
    /// ```
    #[inline]
    pub fn hull(&self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        Self::new(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    /// Returns the set of values contained in both intervals.
    ///
    /// Returns [`Interval::EMPTY`] when the intervals do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let a = Interval::new(1.0, 3.0);
    /// assert_eq!(a.intersection(Interval::new(2.0, 4.0)), Interval::new(2.0, 3.0));
    /// assert_eq!(a.intersection(Interval::new(4.0, 5.0)), Interval::EMPTY);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Self {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);
        if lower <= upper {
            Self::new(lower, upper)
        } else {
            Self::EMPTY
        }
    }

    /// Returns the bounds widened by a signed tolerance.
    ///
    /// A positive tolerance loosens every tolerant predicate, a negative one
    /// tightens it.
    #[inline(always)]
    fn expanded_by(&self, tolerance: f64) -> (f64, f64) {
        (self.lower - tolerance, self.upper + tolerance)
    }

    /// Returns `true` if `lower <= value <= upper`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.contains_with_tolerance(value, 0.0)
    }

    /// Returns `true` if `value` lies in `[lower - tolerance, upper + tolerance]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(1.0, 3.0);
    /// assert!(iv.contains_with_tolerance(3.0005, 1e-3));
    /// assert!(!iv.contains_with_tolerance(3.0, -1e-3));
    /// ```
    #[inline]
    pub fn contains_with_tolerance(&self, value: f64, tolerance: f64) -> bool {
        let (lower, upper) = self.expanded_by(tolerance);
        lower <= value && value <= upper
    }

    /// Returns `true` if every value of `other` is contained in `self`.
    ///
    /// The empty interval is contained in every interval.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.contains_interval_with_tolerance(other, 0.0)
    }

    /// Returns `true` if every value of `other` is contained in `self`
    /// widened by `tolerance`.
    #[inline]
    pub fn contains_interval_with_tolerance(&self, other: Self, tolerance: f64) -> bool {
        if other.is_empty() {
            return true;
        }
        let (lower, upper) = self.expanded_by(tolerance);
        lower <= other.lower && other.upper <= upper
    }

    /// Returns `true` if the intervals share at least one value.
    ///
    /// Touching bounds count as overlapping since both intervals are closed.
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.overlaps_with_tolerance(other, 0.0)
    }

    /// Returns `true` if `other` overlaps `self` widened by `tolerance`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let a = Interval::new(1.0, 2.0);
    /// let b = Interval::new(2.0005, 3.0);
    /// assert!(!a.overlaps(b));
    /// assert!(a.overlaps_with_tolerance(b, 1e-3));
    /// ```
    #[inline]
    pub fn overlaps_with_tolerance(&self, other: Self, tolerance: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (lower, upper) = self.expanded_by(tolerance);
        lower <= other.upper && other.lower <= upper
    }

    /// Returns `[-upper, -lower]`.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.upper, -self.lower)
    }

    #[inline]
    pub fn plus_value(&self, value: f64) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self::new(self.lower + value, self.upper + value)
    }

    /// Returns `[l1 + l2, u1 + u2]`.
    #[inline]
    pub fn plus(&self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        Self::new(self.lower + other.lower, self.upper + other.upper)
    }

    #[inline]
    pub fn minus_value(&self, value: f64) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self::new(self.lower - value, self.upper - value)
    }

    /// Returns `[l1 - u2, u1 - l2]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let a = Interval::new(1.0, 3.0);
    /// assert_eq!(a.minus(Interval::new(2.0, 4.0)), Interval::new(-3.0, 1.0));
    /// ```
    #[inline]
    pub fn minus(&self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        Self::new(self.lower - other.upper, self.upper - other.lower)
    }

    /// Scales the interval by a sign.
    ///
    /// `Sign::None` collapses a non-empty interval to [`Interval::ZERO`].
    #[inline]
    pub fn times_sign(&self, sign: Sign) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        match sign {
            Sign::Positive => *self,
            Sign::Negative => self.negated(),
            Sign::None => Self::ZERO,
        }
    }

    /// Scales the interval by `value`, swapping bounds when `value < 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(2.0, 3.0);
    /// assert_eq!(iv.times_value(-4.0), Interval::new(-12.0, -8.0));
    /// assert_eq!(Interval::WHOLE.times_value(0.0), Interval::ZERO);
    /// ```
    #[inline]
    pub fn times_value(&self, value: f64) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if value > 0.0 {
            Self::new(product(self.lower, value), product(self.upper, value))
        } else if value < 0.0 {
            Self::new(product(self.upper, value), product(self.lower, value))
        } else if value == 0.0 {
            Self::ZERO
        } else {
            Self::new(f64::NAN, f64::NAN)
        }
    }

    /// Returns the product of two intervals.
    ///
    /// The result spans the minimum and maximum of the four corner products,
    /// which handles operands on either side of zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let a = Interval::new(2.0, 3.0);
    /// assert_eq!(a.times(Interval::new(4.0, 5.0)), Interval::new(8.0, 15.0));
    /// assert_eq!(a.times(Interval::new(-1.0, 1.0)), Interval::new(-3.0, 3.0));
    /// ```
    pub fn times(&self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        Self::hull_of([
            product(self.lower, other.lower),
            product(self.lower, other.upper),
            product(self.upper, other.lower),
            product(self.upper, other.upper),
        ])
    }

    /// Returns `1 / self`.
    ///
    /// A divisor that is exactly zero or has zero strictly inside yields
    /// [`Interval::WHOLE`]. A divisor with zero as one bound yields a
    /// half-infinite interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(2.0, 4.0).reciprocal(), Interval::new(0.25, 0.5));
    /// assert_eq!(Interval::new(0.0, 2.0).reciprocal(), Interval::new(0.5, f64::INFINITY));
    /// assert_eq!(Interval::new(-1.0, 1.0).reciprocal(), Interval::WHOLE);
    /// ```
    pub fn reciprocal(&self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if self.lower > 0.0 || self.upper < 0.0 {
            return Self::new(1.0 / self.upper, 1.0 / self.lower);
        }
        if self.lower == 0.0 && self.upper > 0.0 {
            return Self::new(1.0 / self.upper, f64::INFINITY);
        }
        if self.upper == 0.0 && self.lower < 0.0 {
            return Self::new(f64::NEG_INFINITY, 1.0 / self.lower);
        }
        trace!(
            lower = self.lower,
            upper = self.upper,
            "divisor contains zero, reciprocal is unbounded"
        );
        Self::WHOLE
    }

    /// Divides the interval by `value`.
    ///
    /// Dividing a non-empty interval by zero yields [`Interval::WHOLE`].
    #[inline]
    pub fn divided_by_value(&self, value: f64) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if value == 0.0 {
            trace!(
                lower = self.lower,
                upper = self.upper,
                "division by zero, quotient is unbounded"
            );
            return Self::WHOLE;
        }
        self.times_value(value.recip())
    }

    /// Divides the interval by `other`.
    ///
    /// If `other` is exactly zero or straddles zero, the quotient is
    /// [`Interval::WHOLE`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// let q = Interval::new(4.0, 5.0).divided_by(Interval::new(2.0, 3.0));
    /// assert!((q.lower_bound() - 4.0 / 3.0).abs() < 1e-12);
    /// assert!((q.upper_bound() - 2.5).abs() < 1e-12);
    /// assert_eq!(Interval::UNIT.divided_by(Interval::new(-1.0, 1.0)), Interval::WHOLE);
    /// ```
    pub fn divided_by(&self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        let reciprocal = other.reciprocal();
        if reciprocal.is_whole() {
            return Self::WHOLE;
        }
        self.times(reciprocal)
    }

    /// Returns the interval of absolute values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(-3.0, -1.0).abs(), Interval::new(1.0, 3.0));
    /// assert_eq!(Interval::new(-3.0, 2.0).abs(), Interval::new(0.0, 3.0));
    /// ```
    pub fn abs(&self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        if self.lower >= 0.0 {
            *self
        } else if self.upper <= 0.0 {
            self.negated()
        } else {
            Self::new(0.0, (-self.lower).max(self.upper))
        }
    }

    /// Returns the interval of squares.
    ///
    /// Unlike `self.times(self)`, this treats both operands as the same
    /// variable, so `[-1, 1]` squares to `[0, 1]` rather than `[-1, 1]`.
    pub fn squared(&self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let lower_squared = self.lower * self.lower;
        let upper_squared = self.upper * self.upper;
        if self.lower >= 0.0 {
            Self::new(lower_squared, upper_squared)
        } else if self.upper <= 0.0 {
            Self::new(upper_squared, lower_squared)
        } else {
            Self::new(0.0, lower_squared.max(upper_squared))
        }
    }
}

impl Default for Interval {
    /// Returns [`Interval::EMPTY`], the identity of [`Interval::hull`].
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for Interval {
    /// Bounds are compared with float equality; all empty intervals are equal.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.lower == other.lower && self.upper == other.upper)
    }
}

impl From<f64> for Interval {
    #[inline]
    fn from(value: f64) -> Self {
        Self::singleton(value)
    }
}

impl From<RangeInclusive<f64>> for Interval {
    #[inline]
    fn from(range: RangeInclusive<f64>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::new(lower, upper)
    }
}

impl From<Interval> for RangeInclusive<f64> {
    #[inline]
    fn from(iv: Interval) -> Self {
        iv.lower..=iv.upper
    }
}

impl RangeBounds<f64> for Interval {
    fn start_bound(&self) -> Bound<&f64> {
        Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> Bound<&f64> {
        Bound::Included(&self.upper)
    }
}

impl Neg for Interval {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

macro_rules! impl_interval_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $interval_op:ident, $value_op:ident) => {
        impl $trait_name for Interval {
            type Output = Interval;

            #[inline]
            fn $method(self, rhs: Interval) -> Self::Output {
                self.$interval_op(rhs)
            }
        }

        impl $trait_name<f64> for Interval {
            type Output = Interval;

            #[inline]
            fn $method(self, rhs: f64) -> Self::Output {
                self.$value_op(rhs)
            }
        }

        impl $trait_name<Interval> for f64 {
            type Output = Interval;

            #[inline]
            fn $method(self, rhs: Interval) -> Self::Output {
                Interval::singleton(self).$interval_op(rhs)
            }
        }

        impl $assign_trait for Interval {
            #[inline]
            fn $assign_method(&mut self, rhs: Interval) {
                *self = self.$interval_op(rhs);
            }
        }

        impl $assign_trait<f64> for Interval {
            #[inline]
            fn $assign_method(&mut self, rhs: f64) {
                *self = self.$value_op(rhs);
            }
        }
    };
}

impl_interval_op!(Add, add, AddAssign, add_assign, plus, plus_value);
impl_interval_op!(Sub, sub, SubAssign, sub_assign, minus, minus_value);
impl_interval_op!(Mul, mul, MulAssign, mul_assign, times, times_value);
impl_interval_op!(Div, div, DivAssign, div_assign, divided_by, divided_by_value);

impl Mul<Sign> for Interval {
    type Output = Interval;

    #[inline]
    fn mul(self, rhs: Sign) -> Self::Output {
        self.times_sign(rhs)
    }
}

impl Mul<Interval> for Sign {
    type Output = Interval;

    #[inline]
    fn mul(self, rhs: Interval) -> Self::Output {
        rhs.times_sign(self)
    }
}

impl std::fmt::Debug for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.*}, {:.*}]", p, self.lower, p, self.upper),
            None => write!(f, "[{}, {}]", self.lower, self.upper),
        }
    }
}

/// The error type for parsing an [`Interval`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIntervalError {
    /// The input is neither a number nor of the form `[lower, upper]`.
    Malformed(String),
    /// A bound could not be parsed as `f64`.
    InvalidBound {
        /// The token that failed to parse.
        token: String,
        /// The underlying float parse error.
        source: ParseFloatError,
    },
}

impl std::fmt::Display for ParseIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(input) => {
                write!(f, "Expected '[lower, upper]' or a number, found '{}'", input)
            }
            Self::InvalidBound { token, source } => {
                write!(f, "Could not parse bound '{}': {}", token, source)
            }
        }
    }
}

impl std::error::Error for ParseIntervalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(_) => None,
            Self::InvalidBound { source, .. } => Some(source),
        }
    }
}

fn parse_bound(token: &str) -> Result<f64, ParseIntervalError> {
    let token = token.trim();
    token
        .parse::<f64>()
        .map_err(|source| ParseIntervalError::InvalidBound {
            token: token.to_string(),
            source,
        })
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    /// Parses `[lower, upper]` into an interval or a bare number into a
    /// singleton. Bounds are not validated, matching [`Interval::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            if trimmed.starts_with('[') || trimmed.ends_with(']') {
                return Err(ParseIntervalError::Malformed(trimmed.to_string()));
            }
            return parse_bound(trimmed).map(Self::singleton);
        };

        let mut parts = inner.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lower), Some(upper), None) => {
                Ok(Self::new(parse_bound(lower)?, parse_bound(upper)?))
            }
            _ => Err(ParseIntervalError::Malformed(trimmed.to_string())),
        }
    }
}
