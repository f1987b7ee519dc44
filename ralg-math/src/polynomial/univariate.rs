//! Dense univariate polynomials over Q with exact real root counting.
//!
//! ## Algorithms
//!
//! - **Euclid**: exact division, monic GCD and square-free part
//! - **Sturm sequence**: number of distinct real roots in an interval
//! - **Tarski query**: sign of a second polynomial at the roots of the first
//!
//! Root counts are taken from a square-free polynomial `p` with Sturm
//! sequence `S`: the number of roots in `(a, b]` is `V(a) - V(b)`, where
//! `V(x)` counts sign changes of `S` at `x` after dropping zeros.
//!
//! ## References
//!
//! - "Algorithms in Real Algebraic Geometry" (Basu, Pollack, Roy, 2006)

use crate::interval::Interval;
use crate::sign::Sign;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A univariate polynomial over Q.
///
/// Coefficients are stored in increasing degree order without trailing
/// zeros, so the zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UnivariatePolynomial {
    coeffs: Vec<BigRational>,
}

impl UnivariatePolynomial {
    /// Create a polynomial from ascending coefficients.
    pub fn new(coeffs: Vec<BigRational>) -> Self {
        let mut poly = Self { coeffs };
        poly.trim();
        poly
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant one.
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// A constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::new(vec![BigRational::zero(), BigRational::one()])
    }

    /// The linear polynomial `x - root`.
    pub fn linear_root(root: &BigRational) -> Self {
        Self::new(vec![-root.clone(), BigRational::one()])
    }

    /// Create a polynomial from ascending integer coefficients.
    pub fn from_coeffs_int(coeffs: &[i64]) -> Self {
        Self::new(
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Check if the polynomial is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if the polynomial is constant (zero included).
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Degree, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Ascending coefficients.
    #[inline]
    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Coefficient of `x^k`.
    pub fn coeff(&self, k: usize) -> BigRational {
        self.coeffs.get(k).cloned().unwrap_or_else(BigRational::zero)
    }

    /// Leading coefficient, `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<&BigRational> {
        self.coeffs.last()
    }

    /// Evaluate at a point (Horner).
    pub fn eval(&self, x: &BigRational) -> BigRational {
        let mut result = BigRational::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x + c;
        }
        result
    }

    /// Sign of the value at a point.
    pub fn sign_at(&self, x: &BigRational) -> Sign {
        Sign::of(&self.eval(x))
    }

    /// Check whether `x` is a root.
    pub fn is_root(&self, x: &BigRational) -> bool {
        self.eval(x).is_zero()
    }

    /// Sign for arguments tending to plus infinity.
    pub fn sign_at_pos_inf(&self) -> Sign {
        self.leading_coeff().map_or(Sign::Zero, Sign::of)
    }

    /// Sign for arguments tending to minus infinity.
    pub fn sign_at_neg_inf(&self) -> Sign {
        match self.degree() {
            None => Sign::Zero,
            Some(d) if d % 2 == 0 => self.sign_at_pos_inf(),
            Some(_) => -self.sign_at_pos_inf(),
        }
    }

    /// Formal derivative.
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * BigRational::from_integer(BigInt::from(i)))
                .collect(),
        )
    }

    /// Multiply by a scalar.
    pub fn scale(&self, c: &BigRational) -> Self {
        Self::new(self.coeffs.iter().map(|a| a * c).collect())
    }

    /// Negate.
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let n = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..n).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Subtract two polynomials.
    pub fn sub(&self, other: &Self) -> Self {
        let n = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..n).map(|i| self.coeff(i) - other.coeff(i)).collect())
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self::new(coeffs)
    }

    /// Euclidean division, returns `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let (dd, dlc) = match (divisor.degree(), divisor.leading_coeff()) {
            (Some(d), Some(lc)) => (d, lc),
            _ => panic!("division by the zero polynomial"),
        };
        let mut rem = self.coeffs.clone();
        if rem.len() <= dd {
            return (Self::zero(), self.clone());
        }
        let mut quot = vec![BigRational::zero(); rem.len() - dd];
        for k in (0..quot.len()).rev() {
            let factor = &rem[k + dd] / dlc;
            if factor.is_zero() {
                continue;
            }
            for (i, c) in divisor.coeffs.iter().enumerate() {
                rem[k + i] -= &factor * c;
            }
            quot[k] = factor;
        }
        rem.truncate(dd);
        (Self::new(quot), Self::new(rem))
    }

    /// Remainder of Euclidean division.
    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Exact quotient, `None` if `divisor` does not divide `self`.
    pub fn exact_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        let (q, r) = self.div_rem(divisor);
        r.is_zero().then_some(q)
    }

    /// Divide by the leading coefficient.
    pub fn make_monic(&self) -> Self {
        match self.leading_coeff() {
            Some(lc) if !lc.is_one() => {
                let inv = lc.recip();
                self.scale(&inv)
            }
            _ => self.clone(),
        }
    }

    /// Monic greatest common divisor, zero only if both inputs are zero.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.make_monic()
    }

    /// Square-free part `p / gcd(p, p')`, made monic.
    pub fn square_free(&self) -> Self {
        if self.is_constant() {
            return self.clone();
        }
        let g = self.gcd(&self.derivative());
        self.exact_div(&g).unwrap_or_else(|| self.clone()).make_monic()
    }

    /// Rescale to integer coefficients with unit content and a positive
    /// leading coefficient.
    pub fn normalized(&self) -> Self {
        let Some(lc) = self.leading_coeff() else {
            return Self::zero();
        };
        let lcm = self
            .coeffs
            .iter()
            .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
        let ints: Vec<BigInt> = self
            .coeffs
            .iter()
            .map(|c| (c * BigRational::from_integer(lcm.clone())).to_integer())
            .collect();
        let mut content = ints.iter().fold(BigInt::zero(), |acc, c| acc.gcd(c));
        if lc.is_negative() {
            content = -content;
        }
        Self::new(
            ints.into_iter()
                .map(|c| BigRational::from_integer(c / &content))
                .collect(),
        )
    }

    /// The polynomial `p(-x)`.
    pub fn negate_variable(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| if i % 2 == 1 { -c } else { c.clone() })
                .collect(),
        )
    }

    /// Cauchy bound: every real root lies in `[-B, B]`.
    pub fn cauchy_bound(&self) -> BigRational {
        let Some(lc) = self.leading_coeff() else {
            return BigRational::zero();
        };
        let lc = lc.abs();
        let max = self.coeffs[..self.coeffs.len() - 1]
            .iter()
            .map(|c| c.abs() / &lc)
            .max()
            .unwrap_or_else(BigRational::zero);
        BigRational::one() + max
    }

    /// Sturm sequence of this polynomial.
    pub fn sturm_sequence(&self) -> Vec<Self> {
        signed_remainder_sequence(self, &self.derivative())
    }

    /// Number of distinct roots in the open interval `(a, b)`.
    pub fn count_roots_open(&self, a: &BigRational, b: &BigRational) -> usize {
        let p = self.square_free();
        count_roots_open_with(&p.sturm_sequence(), a, b)
    }

    /// Number of distinct roots in the half-open interval `(a, b]`.
    pub fn count_roots_half_open(&self, a: &BigRational, b: &BigRational) -> usize {
        if a >= b {
            return 0;
        }
        let seq = self.square_free().sturm_sequence();
        variations_at(&seq, a).saturating_sub(variations_at(&seq, b))
    }

    /// Number of distinct roots in the closed interval `[a, b]`.
    pub fn count_roots_closed(&self, a: &BigRational, b: &BigRational) -> usize {
        if a > b {
            return 0;
        }
        let at_a = usize::from(!self.is_zero() && self.is_root(a));
        self.count_roots_half_open(a, b) + at_a
    }

    /// Number of distinct roots in a (possibly unbounded) closed interval.
    ///
    /// The zero polynomial is reported as having no roots.
    pub fn count_roots_in(&self, interval: &Interval) -> usize {
        if self.is_zero() || interval.is_empty() {
            return 0;
        }
        let p = self.square_free();
        let seq = p.sturm_sequence();
        let (v_lo, at_lo) = match interval.lower() {
            Some(a) => (variations_at(&seq, a), usize::from(p.is_root(a))),
            None => (variations_at_neg_inf(&seq), 0),
        };
        let v_hi = match interval.upper() {
            Some(b) => variations_at(&seq, b),
            None => variations_at_pos_inf(&seq),
        };
        v_lo.saturating_sub(v_hi) + at_lo
    }

    /// Number of distinct real roots.
    pub fn count_real_roots(&self) -> usize {
        self.count_roots_in(&Interval::unbounded())
    }
}

/// Signed remainder sequence `a, b, -rem(a, b), ...` up to the last non-zero term.
pub fn signed_remainder_sequence(
    a: &UnivariatePolynomial,
    b: &UnivariatePolynomial,
) -> Vec<UnivariatePolynomial> {
    let mut seq = Vec::new();
    if a.is_zero() {
        return seq;
    }
    seq.push(a.clone());
    let mut prev = a.clone();
    let mut cur = b.clone();
    while !cur.is_zero() {
        let next = prev.rem(&cur).neg();
        seq.push(cur.clone());
        prev = cur;
        cur = next;
    }
    seq
}

fn count_variations(signs: impl Iterator<Item = Sign>) -> usize {
    let mut last = Sign::Zero;
    let mut count = 0;
    for s in signs.filter(|s| !s.is_zero()) {
        if !last.is_zero() && s != last {
            count += 1;
        }
        last = s;
    }
    count
}

/// Sign variations of a sequence at a point, zeros dropped.
pub fn variations_at(seq: &[UnivariatePolynomial], x: &BigRational) -> usize {
    count_variations(seq.iter().map(|p| p.sign_at(x)))
}

/// Sign variations of a sequence at minus infinity.
pub fn variations_at_neg_inf(seq: &[UnivariatePolynomial]) -> usize {
    count_variations(seq.iter().map(UnivariatePolynomial::sign_at_neg_inf))
}

/// Sign variations of a sequence at plus infinity.
pub fn variations_at_pos_inf(seq: &[UnivariatePolynomial]) -> usize {
    count_variations(seq.iter().map(UnivariatePolynomial::sign_at_pos_inf))
}

/// Number of roots of `seq[0]` in `(a, b)`, given its Sturm sequence.
///
/// `seq[0]` must be square-free.
pub fn count_roots_open_with(
    seq: &[UnivariatePolynomial],
    a: &BigRational,
    b: &BigRational,
) -> usize {
    let Some(p) = seq.first() else {
        return 0;
    };
    if a >= b {
        return 0;
    }
    let half_open = variations_at(seq, a).saturating_sub(variations_at(seq, b));
    half_open - usize::from(half_open > 0 && p.is_root(b))
}

/// Tarski query of `q` at the roots of `p` inside `(a, b)`.
///
/// Returns the number of roots of `p` in `(a, b)` where `q` is positive minus
/// the number where it is negative. Neither `a` nor `b` may be a root of `p`.
pub fn tarski_query(
    p: &UnivariatePolynomial,
    q: &UnivariatePolynomial,
    a: &BigRational,
    b: &BigRational,
) -> isize {
    if p.is_zero() || q.is_zero() {
        return 0;
    }
    let reduced = if p.is_constant() { q.clone() } else { q.rem(p) };
    let seq = signed_remainder_sequence(p, &p.derivative().mul(&reduced));
    variations_at(&seq, a) as isize - variations_at(&seq, b) as isize
}

impl fmt::Display for UnivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let abs = c.abs();
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;
            match (k, abs.is_one()) {
                (0, _) => write!(f, "{}", abs)?,
                (1, true) => write!(f, "x")?,
                (1, false) => write!(f, "{}*x", abs)?,
                (_, true) => write!(f, "x^{}", k)?,
                (_, false) => write!(f, "{}*x^{}", abs, k)?,
            }
        }
        Ok(())
    }
}

impl Neg for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn neg(self) -> UnivariatePolynomial {
        UnivariatePolynomial::neg(self)
    }
}

impl Add for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn add(self, rhs: &UnivariatePolynomial) -> UnivariatePolynomial {
        UnivariatePolynomial::add(self, rhs)
    }
}

impl Sub for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn sub(self, rhs: &UnivariatePolynomial) -> UnivariatePolynomial {
        UnivariatePolynomial::sub(self, rhs)
    }
}

impl Mul for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn mul(self, rhs: &UnivariatePolynomial) -> UnivariatePolynomial {
        UnivariatePolynomial::mul(self, rhs)
    }
}
