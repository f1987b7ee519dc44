//! Real algebraic numbers.
//!
//! ## Representation
//!
//! An [`AlgebraicNumber`] holds either an exact rational or an
//! [`IntervalRoot`]. Once refinement collapses an isolating interval to a
//! point the number switches to the rational form. Every query answers the
//! same way whichever form is active.
//!
//! Queries such as comparison refine the isolating interval in place, so the
//! content lives in a `RefCell`. A number is `Send` but not `Sync`: one
//! instance must not be used from several threads at once.

use crate::error::RanResult;
use crate::interval_root::IntervalRoot;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use ralg_math::interval::{BoundedInterval, Interval, IsolatingInterval};
use ralg_math::polynomial::univariate::UnivariatePolynomial;
use ralg_math::sign::Sign;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

#[derive(Debug, Clone)]
enum Content {
    Rational(BigRational),
    Interval(IntervalRoot),
}

/// A real algebraic number.
#[derive(Clone)]
pub struct AlgebraicNumber {
    content: RefCell<Content>,
}

impl AlgebraicNumber {
    /// Create a rational number.
    pub fn from_rational(r: BigRational) -> Self {
        Self {
            content: RefCell::new(Content::Rational(r)),
        }
    }

    /// Wrap an interval root.
    pub fn from_interval_root(root: IntervalRoot) -> Self {
        let number = Self {
            content: RefCell::new(Content::Interval(root)),
        };
        number.check_for_simplification();
        number
    }

    /// The root of `poly` isolated by `interval`.
    ///
    /// The polynomial is reduced to its normalized square-free part first.
    pub fn from_polynomial(
        poly: &UnivariatePolynomial,
        interval: IsolatingInterval,
    ) -> RanResult<Self> {
        IntervalRoot::new(poly, interval).map(Self::from_interval_root)
    }

    fn check_for_simplification(&self) {
        let mut content = self.content.borrow_mut();
        if let Content::Interval(root) = &*content {
            if let Some(value) = root.exact_value() {
                *content = Content::Rational(value.clone());
            }
        }
    }

    /// Check if the number is held as a rational.
    pub fn is_numeric(&self) -> bool {
        self.check_for_simplification();
        matches!(&*self.content.borrow(), Content::Rational(_))
    }

    /// Check if the number is held as an interval root.
    pub fn is_interval(&self) -> bool {
        !self.is_numeric()
    }

    /// The rational value.
    ///
    /// # Panics
    ///
    /// Panics if the number is not held as a rational; see
    /// [`AlgebraicNumber::to_rational`].
    pub fn value(&self) -> BigRational {
        match self.to_rational() {
            Some(r) => r,
            None => panic!("value() called on non-numeric algebraic number {}", self),
        }
    }

    /// The rational value, if the number is held as a rational.
    pub fn to_rational(&self) -> Option<BigRational> {
        self.check_for_simplification();
        match &*self.content.borrow() {
            Content::Rational(r) => Some(r.clone()),
            Content::Interval(_) => None,
        }
    }

    /// Sign of the number.
    pub fn sign(&self) -> Sign {
        match &*self.content.borrow() {
            Content::Rational(r) => Sign::of(r),
            Content::Interval(root) => root.sign(),
        }
    }

    /// Sign of `poly` evaluated at the number.
    pub fn sign_of(&self, poly: &UnivariatePolynomial) -> Sign {
        match &*self.content.borrow() {
            Content::Rational(r) => poly.sign_at(r),
            Content::Interval(root) => root.sign_of(poly),
        }
    }

    /// Check if the number is a root of `poly`.
    pub fn is_root_of(&self, poly: &UnivariatePolynomial) -> bool {
        self.sign_of(poly) == Sign::Zero
    }

    /// Check if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Check if the number is an integer.
    pub fn is_integral(&self) -> bool {
        self.refine_to_integrality();
        match &*self.content.borrow() {
            Content::Rational(r) => r.is_integer(),
            Content::Interval(_) => false,
        }
    }

    /// The largest integer not above the number.
    pub fn integer_below(&self) -> BigInt {
        let below = match &mut *self.content.borrow_mut() {
            Content::Rational(r) => r.floor().to_integer(),
            Content::Interval(root) => root.integer_below(),
        };
        self.check_for_simplification();
        below
    }

    /// Check whether the number lies in a closed (possibly unbounded) interval.
    pub fn contained_in(&self, interval: &Interval) -> bool {
        match &*self.content.borrow() {
            Content::Rational(r) => interval.contains(r),
            Content::Interval(root) => root.contained_in(interval),
        }
    }

    /// A rational suitable for splitting the real line at this number.
    pub fn branching_point(&self) -> BigRational {
        match &*self.content.borrow() {
            Content::Rational(r) => r.clone(),
            Content::Interval(root) => root.interval().sample(),
        }
    }

    /// The isolating interval; a point for rationals.
    pub fn interval(&self) -> IsolatingInterval {
        self.check_for_simplification();
        match &*self.content.borrow() {
            Content::Rational(r) => IsolatingInterval::point(r.clone()),
            Content::Interval(root) => root.interval().clone(),
        }
    }

    /// The closure of the isolating interval.
    pub fn enclosure(&self) -> BoundedInterval {
        self.interval().to_bounded()
    }

    /// A square-free polynomial vanishing at the number.
    pub fn defining_polynomial(&self) -> UnivariatePolynomial {
        match &*self.content.borrow() {
            Content::Rational(r) => UnivariatePolynomial::linear_root(r).normalized(),
            Content::Interval(root) => root.polynomial().clone(),
        }
    }

    /// The interval representation, if active.
    pub fn interval_root(&self) -> Option<IntervalRoot> {
        self.check_for_simplification();
        match &*self.content.borrow() {
            Content::Rational(_) => None,
            Content::Interval(root) => Some(root.clone()),
        }
    }

    /// Run `f` on the interval representation, if active.
    pub(crate) fn with_interval_root<R>(
        &self,
        f: impl FnOnce(&mut IntervalRoot) -> R,
    ) -> Option<R> {
        let result = match &mut *self.content.borrow_mut() {
            Content::Rational(_) => None,
            Content::Interval(root) => Some(f(root)),
        };
        self.check_for_simplification();
        result
    }

    /// Absolute value.
    pub fn abs(&self) -> AlgebraicNumber {
        match &*self.content.borrow() {
            Content::Rational(r) => Self::from_rational(r.abs()),
            Content::Interval(root) => Self::from_interval_root(root.abs()),
        }
    }

    /// Shrink the isolating interval.
    pub fn refine(&self) {
        self.with_interval_root(IntervalRoot::refine);
    }

    /// Refine until the isolating interval excludes `n`.
    ///
    /// Returns `true` iff the number equals `n`.
    pub fn refine_avoiding(&self, n: &BigRational) -> bool {
        match self.with_interval_root(|root| root.refine_avoiding(n)) {
            Some(hit) => hit,
            None => self.to_rational().as_ref() == Some(n),
        }
    }

    /// Refine until no integer lies strictly inside the isolating interval.
    pub fn refine_to_integrality(&self) {
        self.with_interval_root(IntervalRoot::refine_to_integrality);
    }

    /// Size of the representation in bits.
    pub fn size(&self) -> usize {
        match &*self.content.borrow() {
            Content::Rational(r) => (r.numer().bits() + r.denom().bits()) as usize,
            Content::Interval(root) => root.size(),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }
        let ordering = {
            let mut lhs = self.content.borrow_mut();
            let mut rhs = other.content.borrow_mut();
            match (&mut *lhs, &mut *rhs) {
                (Content::Rational(a), Content::Rational(b)) => (*a).cmp(&*b),
                (Content::Interval(a), Content::Rational(b)) => a.compare_rational(b),
                (Content::Rational(a), Content::Interval(b)) => b.compare_rational(a).reverse(),
                (Content::Interval(a), Content::Interval(b)) => a.compare(b),
            }
        };
        self.check_for_simplification();
        other.check_for_simplification();
        ordering
    }
}

impl From<BigRational> for AlgebraicNumber {
    fn from(r: BigRational) -> Self {
        Self::from_rational(r)
    }
}

impl From<BigInt> for AlgebraicNumber {
    fn from(n: BigInt) -> Self {
        Self::from_rational(BigRational::from_integer(n))
    }
}

impl From<i64> for AlgebraicNumber {
    fn from(n: i64) -> Self {
        Self::from(BigInt::from(n))
    }
}

impl From<IntervalRoot> for AlgebraicNumber {
    fn from(root: IntervalRoot) -> Self {
        Self::from_interval_root(root)
    }
}

impl PartialEq for AlgebraicNumber {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for AlgebraicNumber {}

impl PartialOrd for AlgebraicNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlgebraicNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for AlgebraicNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.integer_below().hash(state);
    }
}

impl Neg for &AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        match &*self.content.borrow() {
            Content::Rational(r) => AlgebraicNumber::from_rational(-r),
            Content::Interval(root) => AlgebraicNumber::from_interval_root(root.negated()),
        }
    }
}

impl Neg for AlgebraicNumber {
    type Output = AlgebraicNumber;

    fn neg(self) -> AlgebraicNumber {
        -&self
    }
}

impl fmt::Display for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.content.borrow() {
            Content::Rational(r) => write!(f, "{}", r),
            Content::Interval(root) => write!(f, "{}", root),
        }
    }
}

impl fmt::Debug for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlgebraicNumber({})", self)
    }
}
