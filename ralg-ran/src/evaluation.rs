//! Signs of polynomials and truth of constraints at algebraic points.
//!
//! [`ConstraintEvaluator`] is the seam through which the root resolver checks
//! candidate roots. [`SturmEvaluator`] is the native back-end:
//! - rational coordinates are substituted directly
//! - a single algebraic coordinate is handled by a Tarski query on its
//!   isolating interval
//! - several algebraic coordinates are eliminated by norms, giving a
//!   univariate polynomial `Q(z)` with `p(alpha)` among its roots, which is
//!   then separated from zero by interval arithmetic

use crate::assignment::{Assignment, VarPool};
use crate::constraint::Constraint;
use crate::number::AlgebraicNumber;
use num_rational::BigRational;
use num_traits::Zero;
use ralg_math::interval::{BoundedInterval, Interval};
use ralg_math::polynomial::norm::norm;
use ralg_math::polynomial::root_isolation::{RootIsolator, SturmIsolator};
use ralg_math::polynomial::univariate::UnivariatePolynomial;
use ralg_math::polynomial::{Polynomial, Var};
use ralg_math::sign::Sign;
use rustc_hash::FxHashMap;
use tracing::{trace, warn};

/// Decides signs and constraints at points given by an assignment.
pub trait ConstraintEvaluator {
    /// Sign of `poly` at `assignment`, `None` if a variable is unassigned.
    fn sign(&self, poly: &Polynomial, assignment: &Assignment) -> Option<Sign>;

    /// Truth of `constraint` at `assignment`, `None` if a variable is unassigned.
    fn evaluate(&self, constraint: &Constraint, assignment: &Assignment) -> Option<bool> {
        self.sign(constraint.lhs(), assignment)
            .map(|sign| constraint.relation().holds_for(sign))
    }
}

/// Evaluator based on Sturm sequences, Tarski queries and norms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SturmEvaluator;

impl SturmEvaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        Self
    }
}

/// A polynomial with rational coordinates substituted, and the algebraic
/// coordinates it still mentions.
struct Reduced<'a> {
    poly: Polynomial,
    algebraic: Vec<(Var, &'a AlgebraicNumber)>,
}

impl<'a> Reduced<'a> {
    fn new(poly: &Polynomial, assignment: &'a Assignment) -> Option<Self> {
        let mut reduced = poly.clone();
        let mut algebraic = Vec::new();
        for var in poly.vars() {
            let value = assignment.get(&var)?;
            match value.to_rational() {
                Some(r) => reduced = reduced.eval_at(var, &r),
                None => algebraic.push((var, value)),
            }
        }
        algebraic.retain(|(var, _)| reduced.contains_var(*var));
        Some(Self {
            poly: reduced,
            algebraic,
        })
    }

    /// Univariate `Q(z)` whose roots include `p(alpha)`.
    fn elimination_polynomial(&self) -> Option<UnivariatePolynomial> {
        let mut pool = VarPool::above(
            self.poly
                .vars()
                .into_iter()
                .chain(self.algebraic.iter().map(|(var, _)| *var)),
        );
        let z = pool.fresh();
        let mut q = Polynomial::from_var(z).sub(&self.poly);
        for (var, value) in &self.algebraic {
            q = norm(&q, *var, &value.defining_polynomial());
        }
        trace!(eliminated = self.algebraic.len(), degree = q.degree(z), "norm computed");
        q.to_univariate(z)
            .filter(|u| !u.is_zero())
            .map(|u| u.square_free())
    }

    fn enclosure(&self) -> Option<BoundedInterval> {
        let boxes: FxHashMap<Var, BoundedInterval> = self
            .algebraic
            .iter()
            .map(|(var, value)| (*var, value.enclosure()))
            .collect();
        self.poly.eval_interval(&boxes)
    }

    fn refine(&self) {
        for (_, value) in &self.algebraic {
            value.refine();
        }
    }
}

impl ConstraintEvaluator for SturmEvaluator {
    fn sign(&self, poly: &Polynomial, assignment: &Assignment) -> Option<Sign> {
        let reduced = Reduced::new(poly, assignment)?;
        if reduced.poly.is_constant() {
            return Some(Sign::of(&reduced.poly.constant_value()));
        }
        if let [(var, value)] = reduced.algebraic.as_slice() {
            let univariate = reduced.poly.to_univariate(*var)?;
            return Some(value.sign_of(&univariate));
        }
        Some(sign_by_elimination(&reduced))
    }
}

fn sign_by_elimination(reduced: &Reduced<'_>) -> Sign {
    let Some(q) = reduced.elimination_polynomial() else {
        warn!(poly = %reduced.poly, "elimination polynomial vanished");
        return Sign::Zero;
    };
    let zero = BigRational::zero();
    let zero_is_candidate = q.is_root(&zero);
    loop {
        let Some(enclosure) = reduced.enclosure() else {
            warn!(poly = %reduced.poly, "no enclosure for algebraic point");
            return Sign::Zero;
        };
        if let Some(sign) = enclosure.sign() {
            return sign;
        }
        if zero_is_candidate
            && q.count_roots_closed(enclosure.lower(), enclosure.upper()) == 1
        {
            return Sign::Zero;
        }
        reduced.refine();
    }
}

/// The value of `poly` at `assignment` as an algebraic number.
///
/// Returns `None` if a variable of `poly` is unassigned.
pub fn evaluate_polynomial(poly: &Polynomial, assignment: &Assignment) -> Option<AlgebraicNumber> {
    let reduced = Reduced::new(poly, assignment)?;
    if reduced.poly.is_constant() {
        return Some(AlgebraicNumber::from_rational(reduced.poly.constant_value()));
    }
    let Some(q) = reduced.elimination_polynomial() else {
        warn!(poly = %reduced.poly, "elimination polynomial vanished");
        return None;
    };
    let isolator = SturmIsolator::new();
    loop {
        let enclosure = reduced.enclosure()?;
        if q.count_roots_closed(enclosure.lower(), enclosure.upper()) == 1 {
            let window = Interval::closed(enclosure.lower().clone(), enclosure.upper().clone());
            let interval = isolator.isolate(&q, &window).into_iter().next()?;
            return AlgebraicNumber::from_polynomial(&q, interval).ok();
        }
        reduced.refine();
    }
}
