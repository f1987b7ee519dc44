//! Rational intervals.
//!
//! Three flavours are used throughout the workspace:
//!
//! - [`Interval`]: a closed, possibly unbounded search interval `[a, b]`.
//! - [`IsolatingInterval`]: the open interval `(a, b)` of an isolated root,
//!   or the point `[r, r]` once the root is known exactly.
//! - [`BoundedInterval`]: a closed finite interval supporting interval
//!   arithmetic, used to enclose the value of a polynomial over a box.

use crate::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// Pick a rational strictly between `a` and `b`.
///
/// Prefers the integer closest to the midpoint when one lies strictly inside,
/// otherwise returns the midpoint. Requires `a < b`.
pub fn sample_between(a: &BigRational, b: &BigRational) -> BigRational {
    debug_assert!(a < b, "sample_between requires a < b");
    let mid = (a + b) / BigRational::from_integer(BigInt::from(2));
    let floor = mid.floor();
    let ceil = mid.ceil();
    let floor_inside = &floor > a && &floor < b;
    let ceil_inside = &ceil > a && &ceil < b;

    match (floor_inside, ceil_inside) {
        (true, true) => {
            if &mid - &floor <= &ceil - &mid {
                floor
            } else {
                ceil
            }
        }
        (true, false) => floor,
        (false, true) => ceil,
        (false, false) => mid,
    }
}

/// A closed rational interval whose ends may be unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Interval {
    /// Lower bound (inclusive), `None` for minus infinity.
    lower: Option<BigRational>,
    /// Upper bound (inclusive), `None` for plus infinity.
    upper: Option<BigRational>,
}

impl Interval {
    /// The whole real line.
    pub fn unbounded() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// The closed interval `[lower, upper]`.
    pub fn closed(lower: BigRational, upper: BigRational) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// The half line `[lower, oo)`.
    pub fn at_least(lower: BigRational) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// The half line `(-oo, upper]`.
    pub fn at_most(upper: BigRational) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// The point interval `[value, value]`.
    pub fn point(value: BigRational) -> Self {
        Self {
            lower: Some(value.clone()),
            upper: Some(value),
        }
    }

    /// Lower bound, if any.
    #[inline]
    pub fn lower(&self) -> Option<&BigRational> {
        self.lower.as_ref()
    }

    /// Upper bound, if any.
    #[inline]
    pub fn upper(&self) -> Option<&BigRational> {
        self.upper.as_ref()
    }

    /// Check whether both ends are finite.
    pub fn is_bounded(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }

    /// Check whether the interval contains no number at all.
    pub fn is_empty(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(l), Some(u)) => l > u,
            _ => false,
        }
    }

    /// Check if the interval contains a value.
    pub fn contains(&self, value: &BigRational) -> bool {
        self.lower.as_ref().map_or(true, |l| value >= l)
            && self.upper.as_ref().map_or(true, |u| value <= u)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(l) => write!(f, "[{}, ", l)?,
            None => write!(f, "(-oo, ")?,
        }
        match &self.upper {
            Some(u) => write!(f, "{}]", u),
            None => write!(f, "oo)"),
        }
    }
}

/// An isolating interval for a real root.
///
/// A non-point interval is open: the root lies strictly between `lower` and
/// `upper`. A point interval `[r, r]` states that the root is exactly `r`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsolatingInterval {
    /// Lower bound.
    lower: BigRational,
    /// Upper bound.
    upper: BigRational,
}

impl IsolatingInterval {
    /// Create an isolating interval, `None` if `lower > upper`.
    pub fn new(lower: BigRational, upper: BigRational) -> Option<Self> {
        if lower > upper {
            return None;
        }
        Some(Self { lower, upper })
    }

    /// The open interval `(lower, upper)`. Requires `lower < upper`.
    pub fn open(lower: BigRational, upper: BigRational) -> Self {
        debug_assert!(lower < upper, "open interval requires lower < upper");
        Self { lower, upper }
    }

    /// The point interval `[value, value]`.
    pub fn point(value: BigRational) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
        }
    }

    /// Lower bound.
    #[inline]
    pub fn lower(&self) -> &BigRational {
        &self.lower
    }

    /// Upper bound.
    #[inline]
    pub fn upper(&self) -> &BigRational {
        &self.upper
    }

    /// Check if the interval is a point (lower == upper).
    #[inline]
    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    /// Check if the interval contains a value (strictly, unless a point).
    pub fn contains(&self, value: &BigRational) -> bool {
        if self.is_point() {
            value == &self.lower
        } else {
            value > &self.lower && value < &self.upper
        }
    }

    /// Check if the closure of the interval contains a value.
    pub fn meets(&self, value: &BigRational) -> bool {
        value >= &self.lower && value <= &self.upper
    }

    /// Check if an integer lies inside the interval.
    pub fn contains_integer(&self) -> bool {
        if self.is_point() {
            return self.lower.is_integer();
        }
        let next = self.lower.floor() + BigRational::one();
        next < self.upper
    }

    /// Get the midpoint of the interval.
    pub fn midpoint(&self) -> BigRational {
        (&self.lower + &self.upper) / BigRational::from_integer(BigInt::from(2))
    }

    /// Get the width of the interval.
    pub fn width(&self) -> BigRational {
        &self.upper - &self.lower
    }

    /// A rational inside the interval, see [`sample_between`].
    pub fn sample(&self) -> BigRational {
        if self.is_point() {
            self.lower.clone()
        } else {
            sample_between(&self.lower, &self.upper)
        }
    }

    /// Move the lower bound.
    pub fn set_lower(&mut self, lower: BigRational) {
        debug_assert!(lower <= self.upper);
        self.lower = lower;
    }

    /// Move the upper bound.
    pub fn set_upper(&mut self, upper: BigRational) {
        debug_assert!(upper >= self.lower);
        self.upper = upper;
    }

    /// Collapse the interval to a single point.
    pub fn collapse_to(&mut self, value: BigRational) {
        self.lower = value.clone();
        self.upper = value;
    }

    /// The mirrored interval `(-upper, -lower)`.
    pub fn negated(&self) -> Self {
        Self {
            lower: -self.upper.clone(),
            upper: -self.lower.clone(),
        }
    }

    /// The closure as a bounded interval.
    pub fn to_bounded(&self) -> BoundedInterval {
        BoundedInterval {
            lower: self.lower.clone(),
            upper: self.upper.clone(),
        }
    }
}

impl fmt::Display for IsolatingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "[{}]", self.lower)
        } else {
            write!(f, "({}, {})", self.lower, self.upper)
        }
    }
}

/// A closed, bounded rational interval with interval arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedInterval {
    /// Lower bound (inclusive).
    lower: BigRational,
    /// Upper bound (inclusive).
    upper: BigRational,
}

impl BoundedInterval {
    /// Create `[lower, upper]`, `None` if `lower > upper`.
    pub fn new(lower: BigRational, upper: BigRational) -> Option<Self> {
        if lower > upper {
            return None;
        }
        Some(Self { lower, upper })
    }

    /// The point interval `[value, value]`.
    pub fn point(value: BigRational) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
        }
    }

    /// Lower bound.
    #[inline]
    pub fn lower(&self) -> &BigRational {
        &self.lower
    }

    /// Upper bound.
    #[inline]
    pub fn upper(&self) -> &BigRational {
        &self.upper
    }

    /// Check if the interval contains a value.
    pub fn contains(&self, value: &BigRational) -> bool {
        value >= &self.lower && value <= &self.upper
    }

    /// Check if the interval is a point.
    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    /// Get the width of the interval.
    pub fn width(&self) -> BigRational {
        &self.upper - &self.lower
    }

    /// The sign shared by every element, if there is one.
    pub fn sign(&self) -> Option<Sign> {
        if self.lower.is_positive() {
            Some(Sign::Positive)
        } else if self.upper.is_negative() {
            Some(Sign::Negative)
        } else if self.lower.is_zero() && self.upper.is_zero() {
            Some(Sign::Zero)
        } else {
            None
        }
    }

    /// Multiply by a scalar.
    pub fn scale(&self, c: &BigRational) -> BoundedInterval {
        let a = &self.lower * c;
        let b = &self.upper * c;
        if a <= b {
            BoundedInterval { lower: a, upper: b }
        } else {
            BoundedInterval { lower: b, upper: a }
        }
    }

    /// Raise to a non-negative power.
    ///
    /// Even powers of an interval straddling zero start at zero.
    pub fn pow(&self, k: u32) -> BoundedInterval {
        if k == 0 {
            return BoundedInterval::point(BigRational::one());
        }
        let exp = k as i32;
        let a = self.lower.pow(exp);
        let b = self.upper.pow(exp);
        if k % 2 == 1 {
            return BoundedInterval { lower: a, upper: b };
        }
        if self.lower.is_negative() && self.upper.is_positive() {
            let upper = if a >= b { a } else { b };
            BoundedInterval {
                lower: BigRational::zero(),
                upper,
            }
        } else {
            match a.cmp(&b) {
                Ordering::Greater => BoundedInterval { lower: b, upper: a },
                _ => BoundedInterval { lower: a, upper: b },
            }
        }
    }
}

impl Add for &BoundedInterval {
    type Output = BoundedInterval;

    fn add(self, rhs: &BoundedInterval) -> BoundedInterval {
        BoundedInterval {
            lower: &self.lower + &rhs.lower,
            upper: &self.upper + &rhs.upper,
        }
    }
}

impl Mul for &BoundedInterval {
    type Output = BoundedInterval;

    fn mul(self, rhs: &BoundedInterval) -> BoundedInterval {
        let products = [
            &self.lower * &rhs.lower,
            &self.lower * &rhs.upper,
            &self.upper * &rhs.lower,
            &self.upper * &rhs.upper,
        ];
        let mut lower = products[0].clone();
        let mut upper = products[0].clone();
        for p in &products[1..] {
            if p < &lower {
                lower = p.clone();
            }
            if p > &upper {
                upper = p.clone();
            }
        }
        BoundedInterval { lower, upper }
    }
}

impl Neg for &BoundedInterval {
    type Output = BoundedInterval;

    fn neg(self) -> BoundedInterval {
        BoundedInterval {
            lower: -self.upper.clone(),
            upper: -self.lower.clone(),
        }
    }
}

impl fmt::Display for BoundedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
