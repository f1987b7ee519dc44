//! Sparse multivariate polynomials over the rationals.
//!
//! A [`Polynomial`] is a sum of [`Term`]s kept in canonical form: like
//! monomials combined, zero coefficients dropped, terms sorted in decreasing
//! graded lexicographic order. Two canonical polynomials are equal iff their
//! term lists are equal.
//!
//! Dense univariate polynomials used for root counting live in
//! [`univariate`]; the norm used to eliminate algebraic variables lives in
//! [`norm`].

use crate::interval::BoundedInterval;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

pub mod norm;
pub mod root_isolation;
pub mod univariate;

use univariate::UnivariatePolynomial;

/// Variable identifier for polynomials.
pub type Var = u32;

/// Null variable constant (indicates no variable).
pub const NULL_VAR: Var = u32::MAX;

/// Power of a variable (variable, exponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarPower {
    /// The variable identifier.
    pub var: Var,
    /// The exponent of the variable.
    pub power: u32,
}

impl VarPower {
    /// Create a new variable power.
    #[inline]
    pub fn new(var: Var, power: u32) -> Self {
        Self { var, power }
    }
}

/// A product of variables with exponents.
///
/// Stored as (variable, power) pairs sorted by variable with no zero powers;
/// the unit monomial is the empty list.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
    vars: SmallVec<[VarPower; 4]>,
}

impl Monomial {
    /// The unit monomial (1).
    #[inline]
    pub fn unit() -> Self {
        Self {
            vars: SmallVec::new(),
        }
    }

    /// A single variable with a given power.
    pub fn from_var_power(var: Var, power: u32) -> Self {
        let mut vars = SmallVec::new();
        if power > 0 {
            vars.push(VarPower::new(var, power));
        }
        Self { vars }
    }

    /// Build a monomial from unsorted (variable, power) pairs.
    pub fn from_powers(powers: impl IntoIterator<Item = (Var, u32)>) -> Self {
        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        for (var, power) in powers {
            if power == 0 {
                continue;
            }
            match vars.binary_search_by_key(&var, |vp| vp.var) {
                Ok(i) => vars[i].power += power,
                Err(i) => vars.insert(i, VarPower::new(var, power)),
            }
        }
        Self { vars }
    }

    /// Returns true for the unit monomial.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.vars.is_empty()
    }

    /// Sum of all exponents.
    pub fn total_degree(&self) -> u32 {
        self.vars.iter().map(|vp| vp.power).sum()
    }

    /// The variable-power pairs.
    #[inline]
    pub fn vars(&self) -> &[VarPower] {
        &self.vars
    }

    /// Degree of a specific variable.
    pub fn degree(&self, var: Var) -> u32 {
        self.vars
            .binary_search_by_key(&var, |vp| vp.var)
            .map(|i| self.vars[i].power)
            .unwrap_or(0)
    }

    /// Largest variable, or [`NULL_VAR`] for the unit monomial.
    pub fn max_var(&self) -> Var {
        self.vars.last().map(|vp| vp.var).unwrap_or(NULL_VAR)
    }

    /// Multiply two monomials.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        if self.is_unit() {
            return other.clone();
        }
        if other.is_unit() {
            return self.clone();
        }

        let mut vars: SmallVec<[VarPower; 4]> = SmallVec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.vars.len() && j < other.vars.len() {
            let (a, b) = (self.vars[i], other.vars[j]);
            match a.var.cmp(&b.var) {
                Ordering::Less => {
                    vars.push(a);
                    i += 1;
                }
                Ordering::Greater => {
                    vars.push(b);
                    j += 1;
                }
                Ordering::Equal => {
                    vars.push(VarPower::new(a.var, a.power + b.power));
                    i += 1;
                    j += 1;
                }
            }
        }
        vars.extend_from_slice(&self.vars[i..]);
        vars.extend_from_slice(&other.vars[j..]);
        Monomial { vars }
    }

    /// This monomial with `var` removed.
    pub fn without(&self, var: Var) -> Monomial {
        Monomial {
            vars: self.vars.iter().copied().filter(|vp| vp.var != var).collect(),
        }
    }

    /// Lexicographic comparison, smaller variables weigh more.
    pub fn lex_cmp(&self, other: &Monomial) -> Ordering {
        for (a, b) in self.vars.iter().zip(other.vars.iter()) {
            match a.var.cmp(&b.var) {
                Ordering::Less => return Ordering::Greater,
                Ordering::Greater => return Ordering::Less,
                Ordering::Equal => match a.power.cmp(&b.power) {
                    Ordering::Equal => {}
                    ord => return ord,
                },
            }
        }
        self.vars.len().cmp(&other.vars.len())
    }

    /// Graded lexicographic comparison (total degree first, then lex).
    pub fn grlex_cmp(&self, other: &Monomial) -> Ordering {
        self.total_degree()
            .cmp(&other.total_degree())
            .then_with(|| self.lex_cmp(other))
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            return write!(f, "1");
        }
        for (i, vp) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if vp.power == 1 {
                write!(f, "x{}", vp.var)?;
            } else {
                write!(f, "x{}^{}", vp.var, vp.power)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A coefficient multiplied by a monomial.
#[derive(Clone, PartialEq, Eq)]
pub struct Term {
    /// The coefficient of the term.
    pub coeff: BigRational,
    /// The monomial part of the term.
    pub monomial: Monomial,
}

impl Term {
    /// Create a new term.
    #[inline]
    pub fn new(coeff: BigRational, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }

    /// Create a constant term.
    #[inline]
    pub fn constant(c: BigRational) -> Self {
        Self::new(c, Monomial::unit())
    }

    /// Check if this term is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_unit() {
            write!(f, "{}", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "{:?}", self.monomial)
        } else if self.coeff == -BigRational::one() {
            write!(f, "-{:?}", self.monomial)
        } else {
            write!(f, "{}*{:?}", self.coeff, self.monomial)
        }
    }
}

/// A multivariate polynomial over the rationals.
#[derive(Clone)]
pub struct Polynomial {
    /// Terms in decreasing graded lexicographic order.
    terms: Vec<Term>,
}

impl Polynomial {
    /// The zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// The one polynomial.
    #[inline]
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// A constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        Self::from_terms([Term::constant(c)])
    }

    /// The polynomial `var`.
    pub fn from_var(var: Var) -> Self {
        Self::from_var_power(var, 1)
    }

    /// The polynomial `var^power`.
    pub fn from_var_power(var: Var, power: u32) -> Self {
        Self {
            terms: vec![Term::new(
                BigRational::one(),
                Monomial::from_var_power(var, power),
            )],
        }
    }

    /// Build a canonical polynomial from arbitrary terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut poly = Self {
            terms: terms.into_iter().filter(|t| !t.is_zero()).collect(),
        };
        poly.normalize();
        poly
    }

    /// Build from integer coefficients and (variable, power) lists.
    pub fn from_coeffs_int(coeffs: &[(i64, &[(Var, u32)])]) -> Self {
        Self::from_terms(
            coeffs.iter().map(|(c, powers)| {
                Term::new(
                    BigRational::from_integer(BigInt::from(*c)),
                    Monomial::from_powers(powers.iter().copied()),
                )
            }),
        )
    }

    /// A univariate polynomial from ascending coefficients (`coeffs[i]` of `var^i`).
    pub fn univariate(var: Var, coeffs: &[BigRational]) -> Self {
        Self::from_terms(
            coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| Term::new(c.clone(), Monomial::from_var_power(var, i as u32))),
        )
    }

    /// Lift a dense univariate polynomial into `var`.
    pub fn from_univariate(var: Var, p: &UnivariatePolynomial) -> Self {
        Self::univariate(var, p.coeffs())
    }

    /// Check if the polynomial is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if the polynomial is a constant (zero included).
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|t| t.monomial.is_unit())
    }

    /// The constant value, zero if the polynomial is not constant.
    pub fn constant_value(&self) -> BigRational {
        if self.is_constant() {
            self.constant_term()
        } else {
            BigRational::zero()
        }
    }

    /// The terms in canonical order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Total degree.
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Degree with respect to `var`.
    pub fn degree(&self, var: Var) -> u32 {
        self.terms
            .iter()
            .map(|t| t.monomial.degree(var))
            .max()
            .unwrap_or(0)
    }

    /// Largest variable occurring, or [`NULL_VAR`] for constants.
    pub fn max_var(&self) -> Var {
        self.terms
            .iter()
            .map(|t| t.monomial.max_var())
            .filter(|&v| v != NULL_VAR)
            .max()
            .unwrap_or(NULL_VAR)
    }

    /// All variables occurring, sorted.
    pub fn vars(&self) -> Vec<Var> {
        let mut vars: Vec<Var> = self
            .terms
            .iter()
            .flat_map(|t| t.monomial.vars().iter().map(|vp| vp.var))
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Check whether `var` occurs.
    pub fn contains_var(&self, var: Var) -> bool {
        self.terms.iter().any(|t| t.monomial.degree(var) > 0)
    }

    /// Check whether no variable other than `var` occurs.
    pub fn is_univariate_in(&self, var: Var) -> bool {
        self.terms
            .iter()
            .all(|t| t.monomial.vars().iter().all(|vp| vp.var == var))
    }

    /// The constant term.
    pub fn constant_term(&self) -> BigRational {
        self.terms
            .iter()
            .find(|t| t.monomial.is_unit())
            .map(|t| t.coeff.clone())
            .unwrap_or_else(BigRational::zero)
    }

    /// Coefficient of `var^k`, as a polynomial in the other variables.
    pub fn coeff(&self, var: Var, k: u32) -> Polynomial {
        Polynomial::from_terms(
            self.terms
                .iter()
                .filter(|t| t.monomial.degree(var) == k)
                .map(|t| Term::new(t.coeff.clone(), t.monomial.without(var))),
        )
    }

    /// All coefficients with respect to `var`, ascending by power.
    ///
    /// The zero polynomial yields an empty list.
    pub fn coefficients(&self, var: Var) -> Vec<Polynomial> {
        if self.is_zero() {
            return Vec::new();
        }
        let d = self.degree(var) as usize;
        let mut buckets: Vec<Vec<Term>> = vec![Vec::new(); d + 1];
        for t in &self.terms {
            buckets[t.monomial.degree(var) as usize]
                .push(Term::new(t.coeff.clone(), t.monomial.without(var)));
        }
        buckets
            .into_iter()
            .map(Polynomial::from_terms)
            .collect()
    }

    /// Convert to a dense univariate polynomial in `var`.
    ///
    /// Returns `None` if another variable occurs.
    pub fn to_univariate(&self, var: Var) -> Option<UnivariatePolynomial> {
        if !self.is_univariate_in(var) {
            return None;
        }
        let mut coeffs = vec![BigRational::zero(); self.degree(var) as usize + 1];
        for t in &self.terms {
            coeffs[t.monomial.degree(var) as usize] += &t.coeff;
        }
        Some(UnivariatePolynomial::new(coeffs))
    }

    /// Sort terms and combine like monomials.
    fn normalize(&mut self) {
        let mut combined: FxHashMap<Monomial, BigRational> = FxHashMap::default();
        for term in self.terms.drain(..) {
            *combined.entry(term.monomial).or_insert_with(BigRational::zero) += term.coeff;
        }
        let mut terms: Vec<Term> = combined
            .into_iter()
            .filter(|(_, c)| !c.is_zero())
            .map(|(m, c)| Term::new(c, m))
            .collect();
        terms.sort_by(|a, b| b.monomial.grlex_cmp(&a.monomial));
        self.terms = terms;
    }

    /// Negate the polynomial.
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-t.coeff.clone(), t.monomial.clone()))
                .collect(),
        }
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    /// Subtract two polynomials.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    /// Multiply by a scalar.
    pub fn scale(&self, c: &BigRational) -> Polynomial {
        if c.is_zero() {
            return Polynomial::zero();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(&t.coeff * c, t.monomial.clone()))
                .collect(),
        }
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                terms.push(Term::new(&a.coeff * &b.coeff, a.monomial.mul(&b.monomial)));
            }
        }
        Polynomial::from_terms(terms)
    }

    /// Compute `p^k` by repeated squaring.
    pub fn pow(&self, k: u32) -> Polynomial {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut exp = k;
        while exp > 0 {
            if exp & 1 == 1 {
                result = Polynomial::mul(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = Polynomial::mul(&base, &base);
            }
        }
        result
    }

    /// Partial derivative with respect to `var`.
    pub fn derivative(&self, var: Var) -> Polynomial {
        Polynomial::from_terms(
            self.terms.iter().filter_map(|t| {
                let d = t.monomial.degree(var);
                if d == 0 {
                    return None;
                }
                let powers = t.monomial.vars().iter().map(|vp| {
                    if vp.var == var {
                        (vp.var, vp.power - 1)
                    } else {
                        (vp.var, vp.power)
                    }
                });
                Some(Term::new(
                    &t.coeff * BigRational::from_integer(BigInt::from(d)),
                    Monomial::from_powers(powers),
                ))
            }),
        )
    }

    /// Substitute a rational value for `var`.
    pub fn eval_at(&self, var: Var, value: &BigRational) -> Polynomial {
        Polynomial::from_terms(
            self.terms.iter().map(|t| {
                let d = t.monomial.degree(var);
                if d == 0 {
                    t.clone()
                } else {
                    Term::new(&t.coeff * value.pow(d as i32), t.monomial.without(var))
                }
            }),
        )
    }

    /// Evaluate with every variable assigned.
    ///
    /// Returns `None` if some variable is missing from `assignment`.
    pub fn eval(&self, assignment: &FxHashMap<Var, BigRational>) -> Option<BigRational> {
        let mut result = BigRational::zero();
        for term in &self.terms {
            let mut val = term.coeff.clone();
            for vp in term.monomial.vars() {
                val *= assignment.get(&vp.var)?.pow(vp.power as i32);
            }
            result += val;
        }
        Some(result)
    }

    /// Enclose the range of the polynomial over a box of closed intervals.
    ///
    /// Returns `None` if some variable has no interval.
    pub fn eval_interval(
        &self,
        boxes: &FxHashMap<Var, BoundedInterval>,
    ) -> Option<BoundedInterval> {
        let mut acc = BoundedInterval::point(BigRational::zero());
        for term in &self.terms {
            let mut val = BoundedInterval::point(term.coeff.clone());
            for vp in term.monomial.vars() {
                val = &val * &boxes.get(&vp.var)?.pow(vp.power);
            }
            acc = &acc + &val;
        }
        Some(acc)
    }

    /// Substitute a polynomial for `var`.
    pub fn substitute(&self, var: Var, replacement: &Polynomial) -> Polynomial {
        let mut powers: FxHashMap<u32, Polynomial> = FxHashMap::default();
        let mut result = Polynomial::zero();
        for term in &self.terms {
            let d = term.monomial.degree(var);
            let rest = Polynomial {
                terms: vec![Term::new(term.coeff.clone(), term.monomial.without(var))],
            };
            if d == 0 {
                result = Polynomial::add(&result, &rest);
                continue;
            }
            let rep = powers
                .entry(d)
                .or_insert_with(|| replacement.pow(d));
            result = Polynomial::add(&result, &Polynomial::mul(&rest, rep));
        }
        result
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for Polynomial {}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 {
                write!(f, "{:?}", term)?;
            } else if term.coeff.is_negative() {
                write!(
                    f,
                    " - {:?}",
                    Term::new(-term.coeff.clone(), term.monomial.clone())
                )?;
            } else {
                write!(f, " + {:?}", term)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    #[test]
    fn test_monomial_from_powers_merges() {
        let m = Monomial::from_powers([(2, 1), (0, 2), (2, 3)]);
        assert_eq!(m.degree(0), 2);
        assert_eq!(m.degree(2), 4);
        assert_eq!(m.total_degree(), 6);
        assert_eq!(m.max_var(), 2);
        assert_eq!(m.without(2), Monomial::from_var_power(0, 2));
    }

    #[test]
    fn test_canonical_form() {
        // x0 + x1 - x0 == x1
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[(1, 1)]), (-1, &[(0, 1)])]);
        assert_eq!(p, Polynomial::from_var(1));
        assert!(Polynomial::constant(rat(0)).is_zero());
    }

    #[test]
    fn test_mul_and_pow() {
        // (x0 + 1)^2 = x0^2 + 2 x0 + 1
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[])]);
        let sq = p.pow(2);
        assert_eq!(sq, &p * &p);
        assert_eq!(sq.coeff(0, 1).constant_value(), rat(2));
        assert_eq!(sq.total_degree(), 2);
    }

    #[test]
    fn test_coefficients_in_var() {
        // x1 * x0^2 + 3 x0 - x1
        let p = Polynomial::from_coeffs_int(&[
            (1, &[(1, 1), (0, 2)]),
            (3, &[(0, 1)]),
            (-1, &[(1, 1)]),
        ]);
        let cs = p.coefficients(0);
        assert_eq!(cs.len(), 3);
        assert_eq!(cs[0], Polynomial::from_var(1).neg());
        assert_eq!(cs[1], Polynomial::constant(rat(3)));
        assert_eq!(cs[2], Polynomial::from_var(1));
        assert!(p.to_univariate(0).is_none());
    }

    #[test]
    fn test_to_univariate() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(3, 2)]), (-2, &[])]);
        let u = p.to_univariate(3).expect("univariate in x3");
        assert_eq!(u.degree(), Some(2));
        assert_eq!(Polynomial::from_univariate(3, &u), p);
    }

    #[test]
    fn test_eval_and_substitute() {
        // x0 * x1 + 1
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1), (1, 1)]), (1, &[])]);
        let mut a = FxHashMap::default();
        a.insert(0, rat(2));
        assert!(p.eval(&a).is_none());
        a.insert(1, rat(3));
        assert_eq!(p.eval(&a), Some(rat(7)));

        let partial = p.eval_at(0, &rat(2));
        assert_eq!(partial, Polynomial::from_coeffs_int(&[(2, &[(1, 1)]), (1, &[])]));

        // x1 := x0 + 1 gives x0^2 + x0 + 1
        let rep = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (1, &[])]);
        let s = p.substitute(1, &rep);
        assert_eq!(
            s,
            Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (1, &[(0, 1)]), (1, &[])])
        );
    }

    #[test]
    fn test_derivative() {
        // d/dx0 (x0^3 x1 + x1) = 3 x0^2 x1
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 3), (1, 1)]), (1, &[(1, 1)])]);
        assert_eq!(
            p.derivative(0),
            Polynomial::from_coeffs_int(&[(3, &[(0, 2), (1, 1)])])
        );
    }

    #[test]
    fn test_eval_interval_encloses() {
        // x0^2 - x1 over x0 in [1, 2], x1 in [0, 1]
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-1, &[(1, 1)])]);
        let mut boxes = FxHashMap::default();
        boxes.insert(0, BoundedInterval::new(rat(1), rat(2)).expect("valid interval"));
        boxes.insert(1, BoundedInterval::new(rat(0), rat(1)).expect("valid interval"));
        let r = p.eval_interval(&boxes).expect("all vars boxed");
        assert_eq!(r.lower(), &rat(0));
        assert_eq!(r.upper(), &rat(4));
    }

    #[test]
    fn test_display() {
        let p = Polynomial::from_coeffs_int(&[(1, &[(0, 2)]), (-2, &[])]);
        assert_eq!(format!("{}", p), "x0^2 - 2");
    }
}
