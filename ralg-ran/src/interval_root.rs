//! Real roots represented by a defining polynomial and an isolating interval.
//!
//! ## Representation
//!
//! An [`IntervalRoot`] denotes the unique real root of a square-free polynomial
//! `p` inside an isolating interval:
//! - a non-point interval is open, `(l, u)`, and neither `l` nor `u` is a root
//!   of `p`
//! - a point interval `[r, r]` means the root is exactly `r`
//!
//! The Sturm sequence of `p` is computed once and shared between clones and
//! between all roots isolated from the same polynomial.
//!
//! ## Operations
//!
//! - Refinement: bisection at rational sample points, preferring integers
//! - Sign of another polynomial at the root: Tarski queries
//! - Comparison: GCD test for equality, refinement until disjoint otherwise

use crate::error::{RanError, RanResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use ralg_math::interval::{sample_between, BoundedInterval, Interval, IsolatingInterval};
use ralg_math::polynomial::univariate::{
    count_roots_open_with, tarski_query, UnivariatePolynomial,
};
use ralg_math::sign::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// A real algebraic number given by a square-free polynomial and an isolating interval.
#[derive(Debug, Clone)]
pub struct IntervalRoot {
    /// Square-free, integer-primitive, positive leading coefficient.
    polynomial: UnivariatePolynomial,
    /// Isolating interval of the denoted root.
    interval: IsolatingInterval,
    /// Sturm sequence of `polynomial`.
    sturm_sequence: Arc<[UnivariatePolynomial]>,
    /// Number of refinement steps taken so far.
    refinement_count: usize,
}

impl IntervalRoot {
    /// Create a root from a polynomial and an isolating interval.
    ///
    /// The polynomial is replaced by its normalized square-free part. A
    /// non-point interval is read as open and must contain exactly one root;
    /// a point interval must be a root. Endpoints that are roots are moved
    /// inward.
    pub fn new(polynomial: &UnivariatePolynomial, interval: IsolatingInterval) -> RanResult<Self> {
        let polynomial = polynomial.square_free().normalized();
        if polynomial.is_constant() {
            return Err(RanError::ZeroPolynomial);
        }
        let sturm_sequence: Arc<[UnivariatePolynomial]> = polynomial.sturm_sequence().into();

        if interval.is_point() {
            if !polynomial.is_root(interval.lower()) {
                return Err(RanError::NonIsolatingInterval { roots: 0 });
            }
        } else {
            let roots = count_roots_open_with(&sturm_sequence, interval.lower(), interval.upper());
            if roots != 1 {
                return Err(RanError::NonIsolatingInterval { roots });
            }
        }

        let mut root = Self {
            polynomial,
            interval,
            sturm_sequence,
            refinement_count: 0,
        };
        while !root.interval.is_point()
            && (root.polynomial.is_root(root.interval.lower())
                || root.polynomial.is_root(root.interval.upper()))
        {
            root.refine();
        }
        root.refinement_count = 0;
        Ok(root)
    }

    /// Create a root from a polynomial and interval bounds, see [`IntervalRoot::new`].
    pub fn from_bounds(
        polynomial: &UnivariatePolynomial,
        lower: BigRational,
        upper: BigRational,
    ) -> RanResult<Self> {
        let Some(interval) = IsolatingInterval::new(lower.clone(), upper.clone()) else {
            return Err(RanError::InvalidInterval { lower, upper });
        };
        Self::new(polynomial, interval)
    }

    /// Wrap an interval produced by a root isolator, reusing a Sturm sequence.
    ///
    /// The caller guarantees that `polynomial` is normalized and square-free,
    /// that `sturm_sequence` belongs to it, and that `interval` satisfies the
    /// isolating-interval invariant.
    pub fn with_sturm_sequence(
        polynomial: UnivariatePolynomial,
        interval: IsolatingInterval,
        sturm_sequence: Arc<[UnivariatePolynomial]>,
    ) -> Self {
        debug_assert!(
            interval.is_point() || !polynomial.is_root(interval.lower()),
            "isolating interval endpoint is a root"
        );
        Self {
            polynomial,
            interval,
            sturm_sequence,
            refinement_count: 0,
        }
    }

    /// The defining polynomial.
    #[inline]
    pub fn polynomial(&self) -> &UnivariatePolynomial {
        &self.polynomial
    }

    /// The isolating interval.
    #[inline]
    pub fn interval(&self) -> &IsolatingInterval {
        &self.interval
    }

    /// The Sturm sequence of the defining polynomial.
    #[inline]
    pub fn sturm_sequence(&self) -> &[UnivariatePolynomial] {
        &self.sturm_sequence
    }

    /// Number of refinement steps taken.
    #[inline]
    pub fn refinement_count(&self) -> usize {
        self.refinement_count
    }

    /// Lower bound of the isolating interval.
    #[inline]
    pub fn lower(&self) -> &BigRational {
        self.interval.lower()
    }

    /// Upper bound of the isolating interval.
    #[inline]
    pub fn upper(&self) -> &BigRational {
        self.interval.upper()
    }

    /// The exact value once the interval has collapsed to a point.
    pub fn exact_value(&self) -> Option<&BigRational> {
        self.interval.is_point().then(|| self.interval.lower())
    }

    /// Check if the root is known to be an integer.
    pub fn is_integral(&self) -> bool {
        self.interval.is_point() && self.interval.lower().is_integer()
    }

    /// The closure of the isolating interval.
    pub fn enclosure(&self) -> BoundedInterval {
        self.interval.to_bounded()
    }

    fn count_open(&self, a: &BigRational, b: &BigRational) -> usize {
        count_roots_open_with(&self.sturm_sequence, a, b)
    }

    /// Replace the defining polynomial by another one with the same root.
    ///
    /// The new polynomial is square-free normalized; nothing changes if it
    /// does not have exactly one root in the current interval.
    pub fn set_polynomial(&mut self, polynomial: &UnivariatePolynomial) -> RanResult<()> {
        let polynomial = polynomial.square_free().normalized();
        if polynomial.is_constant() {
            return Err(RanError::ZeroPolynomial);
        }
        let sturm_sequence: Arc<[UnivariatePolynomial]> = polynomial.sturm_sequence().into();
        if self.interval.is_point() {
            if !polynomial.is_root(self.interval.lower()) {
                return Err(RanError::NonIsolatingInterval { roots: 0 });
            }
        } else {
            let roots = count_roots_open_with(&sturm_sequence, self.lower(), self.upper());
            if roots != 1 {
                return Err(RanError::NonIsolatingInterval { roots });
            }
        }
        self.polynomial = polynomial;
        self.sturm_sequence = sturm_sequence;
        while !self.interval.is_point()
            && (self.polynomial.is_root(self.lower()) || self.polynomial.is_root(self.upper()))
        {
            self.refine();
        }
        Ok(())
    }

    /// Sign of the root.
    pub fn sign(&self) -> Sign {
        if self.interval.is_point() {
            return Sign::of(self.lower());
        }
        if !self.lower().is_negative() {
            return Sign::Positive;
        }
        if !self.upper().is_positive() {
            return Sign::Negative;
        }
        let zero = BigRational::zero();
        if self.polynomial.is_root(&zero) {
            Sign::Zero
        } else if self.count_open(self.lower(), &zero) == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Sign of `poly` evaluated at the root.
    pub fn sign_of(&self, poly: &UnivariatePolynomial) -> Sign {
        if poly.is_zero() {
            return Sign::Zero;
        }
        if self.interval.is_point() {
            return poly.sign_at(self.lower());
        }
        if poly.normalized() == self.polynomial {
            return Sign::Zero;
        }
        let variations = tarski_query(&self.polynomial, poly, self.lower(), self.upper());
        Sign::from_i64(variations as i64).unwrap_or_else(|| {
            warn!(
                variations,
                polynomial = %self.polynomial,
                interval = %self.interval,
                "unexpected Tarski query result, isolating interval is broken"
            );
            Sign::Zero
        })
    }

    /// Halve the isolating interval at a sample point.
    ///
    /// Collapses to a point if the sample is the root. No-op on a point.
    pub fn refine(&mut self) {
        if self.interval.is_point() {
            return;
        }
        let pivot = self.interval.sample();
        self.refinement_count += 1;
        if self.polynomial.is_root(&pivot) {
            self.interval.collapse_to(pivot);
        } else if self.count_open(self.lower(), &pivot) > 0 {
            self.interval.set_upper(pivot);
        } else {
            self.interval.set_lower(pivot);
        }
    }

    /// Refine until the closed interval no longer meets `n`.
    ///
    /// Returns `true` iff `n` is the root, in which case the interval
    /// collapses to `n`.
    pub fn refine_avoiding(&mut self, n: &BigRational) -> bool {
        if self.interval.is_point() {
            return self.lower() == n;
        }
        if self.interval.contains(n) {
            if self.polynomial.is_root(n) {
                self.interval.collapse_to(n.clone());
                return true;
            }
            if self.count_open(self.lower(), n) > 0 {
                self.interval.set_upper(n.clone());
            } else {
                self.interval.set_lower(n.clone());
            }
            self.refinement_count += 1;
        } else if self.lower() != n && self.upper() != n {
            return false;
        }

        let from_left = self.lower() == n;
        loop {
            let m = sample_between(self.lower(), self.upper());
            self.refinement_count += 1;
            if self.polynomial.is_root(&m) {
                self.interval.collapse_to(m);
                return false;
            }
            if from_left {
                if self.count_open(&m, self.upper()) == 1 {
                    self.interval.set_lower(m);
                    return false;
                }
                self.interval.set_upper(m);
            } else {
                if self.count_open(self.lower(), &m) == 1 {
                    self.interval.set_upper(m);
                    return false;
                }
                self.interval.set_lower(m);
            }
        }
    }

    /// Refine while the interval is not a point and an integer lies inside.
    ///
    /// Afterwards an integral root is exact and `floor` of the lower bound is
    /// the floor of the root.
    pub fn refine_to_integrality(&mut self) {
        while !self.interval.is_point() && self.interval.contains_integer() {
            self.refine();
        }
    }

    /// The largest integer not above the root.
    pub fn integer_below(&mut self) -> BigInt {
        self.refine_to_integrality();
        self.lower().floor().to_integer()
    }

    /// Check whether the root lies in a closed (possibly unbounded) interval.
    pub fn contained_in(&self, interval: &Interval) -> bool {
        if self.interval.is_point() {
            return interval.contains(self.lower());
        }
        let (lo, lo_closed) = match interval.lower() {
            Some(a) if a > self.lower() => (a, true),
            _ => (self.lower(), false),
        };
        let (hi, hi_closed) = match interval.upper() {
            Some(b) if b < self.upper() => (b, true),
            _ => (self.upper(), false),
        };
        match lo.cmp(hi) {
            Ordering::Greater => false,
            Ordering::Equal => lo_closed && hi_closed && self.polynomial.is_root(lo),
            Ordering::Less => {
                self.count_open(lo, hi) > 0
                    || (lo_closed && self.polynomial.is_root(lo))
                    || (hi_closed && self.polynomial.is_root(hi))
            }
        }
    }

    /// The root of `p(-x)` mirroring this one.
    pub fn negated(&self) -> IntervalRoot {
        let polynomial = self.polynomial.negate_variable().normalized();
        let sturm_sequence = polynomial.sturm_sequence().into();
        Self {
            polynomial,
            interval: self.interval.negated(),
            sturm_sequence,
            refinement_count: self.refinement_count,
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> IntervalRoot {
        match self.sign() {
            Sign::Negative => self.negated(),
            _ => self.clone(),
        }
    }

    /// Compare the root with a rational, refining as needed.
    pub fn compare_rational(&mut self, r: &BigRational) -> Ordering {
        if self.refine_avoiding(r) {
            return Ordering::Equal;
        }
        if self.interval.is_point() {
            self.lower().cmp(r)
        } else if r <= self.lower() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    /// Compare two roots, refining both as needed.
    pub fn compare(&mut self, other: &mut IntervalRoot) -> Ordering {
        if let Some(v) = other.exact_value().cloned() {
            return self.compare_rational(&v);
        }
        if let Some(v) = self.exact_value().cloned() {
            return other.compare_rational(&v).reverse();
        }
        if self.shares_root_with(other) {
            return Ordering::Equal;
        }
        loop {
            if self.upper() <= other.lower() {
                return Ordering::Less;
            }
            if other.upper() <= self.lower() {
                return Ordering::Greater;
            }
            self.refine();
            other.refine();
            if let Some(v) = other.exact_value().cloned() {
                return self.compare_rational(&v);
            }
            if let Some(v) = self.exact_value().cloned() {
                return other.compare_rational(&v).reverse();
            }
        }
    }

    /// Both roots are equal iff their polynomials have a common root in the
    /// intersection of the two open intervals.
    fn shares_root_with(&self, other: &IntervalRoot) -> bool {
        let lo = self.lower().max(other.lower());
        let hi = self.upper().min(other.upper());
        if lo >= hi {
            return false;
        }
        if self.polynomial == other.polynomial {
            return self.count_open(lo, hi) == 1;
        }
        let g = self.polynomial.gcd(&other.polynomial);
        !g.is_constant() && g.count_roots_open(lo, hi) > 0
    }

    /// Size of the representation in bits.
    pub fn size(&self) -> usize {
        let bits = |r: &BigRational| (r.numer().bits() + r.denom().bits()) as usize;
        self.polynomial.coeffs().iter().map(bits).sum::<usize>()
            + bits(self.lower())
            + bits(self.upper())
    }
}

impl fmt::Display for IntervalRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.polynomial, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn frac(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn sqrt2() -> IntervalRoot {
        let p = UnivariatePolynomial::from_coeffs_int(&[-2, 0, 1]);
        IntervalRoot::from_bounds(&p, rat(1), rat(2)).expect("sqrt(2) is isolated by (1, 2)")
    }

    #[test]
    fn test_new_normalizes() {
        // 2 (x^2 - 2)^2 has the same roots as x^2 - 2
        let sq = UnivariatePolynomial::from_coeffs_int(&[-2, 0, 1]);
        let p = (&sq * &sq).scale(&rat(2));
        let r = IntervalRoot::from_bounds(&p, rat(0), rat(2)).expect("valid");
        assert_eq!(r.polynomial(), &sq);
        assert_eq!(r.sign(), Sign::Positive);
    }

    #[test]
    fn test_new_rejects_bad_input() {
        let p = UnivariatePolynomial::from_coeffs_int(&[-2, 0, 1]);
        assert_eq!(
            IntervalRoot::from_bounds(&p, rat(-2), rat(2)).unwrap_err(),
            RanError::NonIsolatingInterval { roots: 2 }
        );
        assert!(matches!(
            IntervalRoot::from_bounds(&p, rat(2), rat(1)),
            Err(RanError::InvalidInterval { .. })
        ));
        assert_eq!(
            IntervalRoot::from_bounds(&UnivariatePolynomial::one(), rat(0), rat(1)).unwrap_err(),
            RanError::ZeroPolynomial
        );
    }

    #[test]
    fn test_new_moves_root_endpoints() {
        // (x - 1)(x - 2) with (1, 3): the root 1 is outside, 2 is inside
        let p = UnivariatePolynomial::from_coeffs_int(&[2, -3, 1]);
        let r = IntervalRoot::from_bounds(&p, rat(1), rat(3)).expect("valid");
        assert_eq!(r.exact_value(), Some(&rat(2)));
        assert!(r.is_integral());
    }

    #[test]
    fn test_refine_shrinks() {
        let mut r = sqrt2();
        let before = r.interval().width();
        r.refine();
        assert!(r.interval().width() < before);
        assert_eq!(r.refinement_count(), 1);
        assert_eq!(r.polynomial().count_roots_open(r.lower(), r.upper()), 1);
    }

    #[test]
    fn test_refine_point_is_noop() {
        let p = UnivariatePolynomial::from_coeffs_int(&[-3, 1]);
        let mut r = IntervalRoot::new(&p, IsolatingInterval::point(rat(3))).expect("valid");
        r.refine();
        assert_eq!(r.exact_value(), Some(&rat(3)));
        assert_eq!(r.refinement_count(), 0);
    }

    #[test]
    fn test_sign_of() {
        let r = sqrt2();
        // x - 1 > 0, x - 3/2 < 0, x^2 - 2 = 0
        assert_eq!(r.sign_of(&UnivariatePolynomial::from_coeffs_int(&[-1, 1])), Sign::Positive);
        assert_eq!(
            r.sign_of(&UnivariatePolynomial::new(vec![frac(-3, 2), rat(1)])),
            Sign::Negative
        );
        assert_eq!(r.sign_of(&UnivariatePolynomial::from_coeffs_int(&[-4, 0, 2])), Sign::Zero);
        // x^4 - 4 vanishes at sqrt(2) but is not the defining polynomial
        let quartic = UnivariatePolynomial::from_coeffs_int(&[-4, 0, 0, 0, 1]);
        assert_eq!(r.sign_of(&quartic), Sign::Zero);
    }

    #[test]
    fn test_sign_straddling_zero() {
        // x^3 - x has a root at 0 isolated by (-1/2, 1/2)
        let p = UnivariatePolynomial::from_coeffs_int(&[0, -1, 0, 1]);
        let r = IntervalRoot::from_bounds(&p, frac(-1, 2), frac(1, 2)).expect("valid");
        assert_eq!(r.sign(), Sign::Zero);
        // x^2 - 2 negative root isolated by (-2, 1)
        let q = UnivariatePolynomial::from_coeffs_int(&[-2, 0, 1]);
        let n = IntervalRoot::from_bounds(&q, rat(-2), rat(1)).expect("valid");
        assert_eq!(n.sign(), Sign::Negative);
    }

    #[test]
    fn test_refine_avoiding() {
        let mut r = sqrt2();
        assert!(!r.refine_avoiding(&frac(3, 2)));
        assert!(!r.interval().meets(&frac(3, 2)));
        assert_eq!(r.polynomial().count_roots_open(r.lower(), r.upper()), 1);

        let mut on_bound = sqrt2();
        assert!(!on_bound.refine_avoiding(&rat(1)));
        assert!(on_bound.lower() > &rat(1));

        let p = UnivariatePolynomial::from_coeffs_int(&[-6, 11, -6, 1]);
        let mut two = IntervalRoot::from_bounds(&p, frac(3, 2), frac(5, 2)).expect("valid");
        assert!(two.refine_avoiding(&rat(2)));
        assert_eq!(two.exact_value(), Some(&rat(2)));
    }

    #[test]
    fn test_refine_to_integrality() {
        // x^2 - 9 root 3 isolated by (1, 7)
        let p = UnivariatePolynomial::from_coeffs_int(&[-9, 0, 1]);
        let mut r = IntervalRoot::from_bounds(&p, rat(1), rat(7)).expect("valid");
        r.refine_to_integrality();
        assert!(r.is_integral());

        let mut s = sqrt2();
        assert_eq!(s.integer_below(), BigInt::from(1));
        assert!(!s.interval().contains_integer());
    }

    #[test]
    fn test_contained_in() {
        let r = sqrt2();
        assert!(r.contained_in(&Interval::closed(rat(1), rat(2))));
        assert!(r.contained_in(&Interval::closed(frac(7, 5), frac(3, 2))));
        assert!(!r.contained_in(&Interval::closed(frac(3, 2), rat(2))));
        assert!(!r.contained_in(&Interval::at_most(frac(7, 5))));
        assert!(r.contained_in(&Interval::unbounded()));
    }

    #[test]
    fn test_negated_and_abs() {
        let r = sqrt2();
        let n = r.negated();
        assert_eq!(n.sign(), Sign::Negative);
        assert_eq!(n.polynomial(), r.polynomial());
        let mut back = n.abs();
        let mut orig = r.clone();
        assert_eq!(back.compare(&mut orig), Ordering::Equal);
    }

    #[test]
    fn test_compare() {
        let mut a = sqrt2();
        // x^2 - 3 root in (1, 2)
        let q = UnivariatePolynomial::from_coeffs_int(&[-3, 0, 1]);
        let mut b = IntervalRoot::from_bounds(&q, rat(1), rat(2)).expect("valid");
        assert_eq!(a.compare(&mut b), Ordering::Less);
        assert_eq!(b.compare(&mut a), Ordering::Greater);

        // sqrt(2) as a root of x^4 - 4 on a different interval
        let p4 = UnivariatePolynomial::from_coeffs_int(&[-4, 0, 0, 0, 1]);
        let mut c = IntervalRoot::from_bounds(&p4, frac(13, 10), rat(3)).expect("valid");
        assert_eq!(a.compare(&mut c), Ordering::Equal);

        assert_eq!(a.compare_rational(&frac(7, 5)), Ordering::Greater);
        assert_eq!(a.compare_rational(&frac(3, 2)), Ordering::Less);
    }

    #[test]
    fn test_shared_sturm_sequence() {
        let r = sqrt2();
        let copy = r.clone();
        assert!(std::ptr::eq(r.sturm_sequence(), copy.sturm_sequence()));
        assert!(r.size() > 0);
        assert_eq!(r.to_string(), "(x^2 - 2, (1, 2))");
    }
}
