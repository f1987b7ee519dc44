//! Real roots of polynomials over algebraic points.
//!
//! ## Algorithm
//!
//! Given `p(x_1, ..., x_n, y)`, a main variable `y` and values for the
//! `x_i`:
//! 1. Substitute the rational values.
//! 2. Eliminate the remaining algebraic values one at a time by taking the
//!    norm over their defining polynomials. The result is univariate in `y`
//!    and vanishes at every real root of `p(alpha, y)`.
//! 3. Isolate the roots of the eliminated polynomial.
//! 4. Drop the spurious roots, those coming from conjugates of `alpha`
//!    rather than `alpha` itself, by evaluating `p = 0` at each candidate.

use crate::assignment::{Assignment, OrderedAssignment};
use crate::constraint::Constraint;
use crate::evaluation::{ConstraintEvaluator, SturmEvaluator};
use crate::interval_root::IntervalRoot;
use crate::number::AlgebraicNumber;
use ralg_math::interval::Interval;
use ralg_math::polynomial::norm::norm;
use ralg_math::polynomial::root_isolation::{RootIsolator, SturmIsolator};
use ralg_math::polynomial::univariate::UnivariatePolynomial;
use ralg_math::polynomial::{Polynomial, Var};
use ralg_math::sign::Sign;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Outcome of a real root computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RealRootsResult {
    /// The polynomial vanishes identically at the given point.
    Nullified,
    /// The polynomial is a nonzero constant.
    NoRoots,
    /// The polynomial could not be made univariate in the main variable.
    NonUnivariate,
    /// The real roots in ascending order, possibly none.
    Roots(Vec<AlgebraicNumber>),
}

impl RealRootsResult {
    /// Check if the polynomial vanished identically.
    pub fn is_nullified(&self) -> bool {
        matches!(self, RealRootsResult::Nullified)
    }

    /// Check if the polynomial became univariate.
    pub fn is_univariate(&self) -> bool {
        !matches!(self, RealRootsResult::NonUnivariate)
    }

    /// The roots found; empty unless the result is [`RealRootsResult::Roots`].
    pub fn roots(&self) -> &[AlgebraicNumber] {
        match self {
            RealRootsResult::Roots(roots) => roots,
            _ => &[],
        }
    }

    /// Take the roots found.
    pub fn into_roots(self) -> Vec<AlgebraicNumber> {
        match self {
            RealRootsResult::Roots(roots) => roots,
            _ => Vec::new(),
        }
    }
}

/// Order in which algebraic values are eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubstitutionOrder {
    /// Highest defining-polynomial degree first.
    #[default]
    DescendingDegree,
    /// Lowest defining-polynomial degree first.
    AscendingDegree,
    /// By variable index.
    VariableIndex,
}

/// Configuration for real root resolution.
#[derive(Debug, Clone, Default)]
pub struct RealRootsConfig {
    /// Elimination order of algebraic values.
    pub substitution_order: SubstitutionOrder,
}

/// Statistics for real root resolution.
#[derive(Debug, Clone, Default)]
pub struct RealRootsStats {
    /// Univariate root isolations performed.
    pub univariate_isolations: u64,
    /// Algebraic values eliminated by norms.
    pub algebraic_substitutions: u64,
    /// Candidate roots produced by isolation after elimination.
    pub candidate_roots: u64,
    /// Candidates discarded as spurious.
    pub spurious_roots_purged: u64,
    /// Calls answered with `Nullified`.
    pub nullified: u64,
    /// Calls answered with `NonUnivariate`.
    pub non_univariate: u64,
}

/// Computes real roots of polynomials whose other variables are assigned
/// algebraic values.
#[derive(Debug, Clone)]
pub struct RealRootResolver<I = SturmIsolator, E = SturmEvaluator> {
    config: RealRootsConfig,
    stats: RealRootsStats,
    isolator: I,
    evaluator: E,
}

impl RealRootResolver {
    /// Create a resolver with the native back-ends.
    pub fn new(config: RealRootsConfig) -> Self {
        Self::with_backends(config, SturmIsolator::new(), SturmEvaluator::new())
    }

    /// Create with default configuration.
    pub fn default_config() -> Self {
        Self::new(RealRootsConfig::default())
    }
}

impl Default for RealRootResolver {
    fn default() -> Self {
        Self::default_config()
    }
}

impl<I: RootIsolator, E: ConstraintEvaluator> RealRootResolver<I, E> {
    /// Create a resolver with custom isolation and evaluation back-ends.
    pub fn with_backends(config: RealRootsConfig, isolator: I, evaluator: E) -> Self {
        Self {
            config,
            stats: RealRootsStats::default(),
            isolator,
            evaluator,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RealRootsConfig {
        &self.config
    }

    /// Get statistics.
    pub fn stats(&self) -> &RealRootsStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = RealRootsStats::default();
    }

    /// Real roots of a univariate polynomial inside `interval`.
    pub fn real_roots_univariate(
        &mut self,
        poly: &UnivariatePolynomial,
        interval: &Interval,
    ) -> RealRootsResult {
        if poly.is_zero() {
            self.stats.nullified += 1;
            return RealRootsResult::Nullified;
        }
        if poly.is_constant() {
            return RealRootsResult::NoRoots;
        }
        RealRootsResult::Roots(self.isolate(poly, interval))
    }

    /// Real roots in `main_var` of `poly` at the point given by `assignment`.
    ///
    /// Every variable of `poly` other than `main_var` must be assigned,
    /// otherwise the result is [`RealRootsResult::NonUnivariate`]. Algebraic
    /// values are eliminated in the configured [`SubstitutionOrder`].
    pub fn real_roots(
        &mut self,
        poly: &Polynomial,
        main_var: Var,
        assignment: &Assignment,
        interval: &Interval,
    ) -> RealRootsResult {
        debug_assert!(
            !assignment.contains_key(&main_var),
            "main variable x{} is assigned",
            main_var
        );
        let mut values = Vec::new();
        for var in poly.vars() {
            if var == main_var {
                continue;
            }
            match assignment.get(&var) {
                Some(value) => values.push((var, value)),
                None => return self.unassigned(var),
            }
        }
        self.resolve(poly, main_var, values, true, interval)
    }

    /// Like [`RealRootResolver::real_roots`], eliminating algebraic values in
    /// the order of `assignment`.
    pub fn real_roots_ordered(
        &mut self,
        poly: &Polynomial,
        main_var: Var,
        assignment: &OrderedAssignment,
        interval: &Interval,
    ) -> RealRootsResult {
        debug_assert!(
            assignment.iter().all(|(var, _)| *var != main_var),
            "main variable x{} is assigned",
            main_var
        );
        for var in poly.vars() {
            if var != main_var && assignment.iter().all(|(v, _)| *v != var) {
                return self.unassigned(var);
            }
        }
        let values = assignment
            .iter()
            .filter(|(var, _)| poly.contains_var(*var))
            .map(|(var, value)| (*var, value))
            .collect();
        self.resolve(poly, main_var, values, false, interval)
    }

    fn unassigned(&mut self, var: Var) -> RealRootsResult {
        trace!(var, "variable has no value");
        self.stats.non_univariate += 1;
        RealRootsResult::NonUnivariate
    }

    fn resolve(
        &mut self,
        poly: &Polynomial,
        main_var: Var,
        values: Vec<(Var, &AlgebraicNumber)>,
        apply_order: bool,
        interval: &Interval,
    ) -> RealRootsResult {
        debug!(%poly, main_var, assigned = values.len(), "resolving real roots");
        if poly.is_zero() {
            self.stats.nullified += 1;
            return RealRootsResult::Nullified;
        }
        if poly.is_constant() {
            return RealRootsResult::NoRoots;
        }

        let mut substituted = poly.clone();
        let mut residual = Vec::new();
        for (var, value) in values {
            match value.to_rational() {
                Some(r) => {
                    trace!(var, value = %r, "substituting rational value");
                    substituted = substituted.eval_at(var, &r);
                }
                None => residual.push((var, value.clone())),
            }
        }
        if substituted.is_zero() {
            self.stats.nullified += 1;
            return RealRootsResult::Nullified;
        }
        residual.retain(|(var, _)| substituted.contains_var(*var));

        if residual.is_empty() {
            let Some(univariate) = substituted.to_univariate(main_var) else {
                self.stats.non_univariate += 1;
                return RealRootsResult::NonUnivariate;
            };
            let roots = self.isolate(&univariate, interval);
            debug!(roots = roots.len(), "resolved without algebraic values");
            return RealRootsResult::Roots(roots);
        }

        if apply_order {
            self.order(&mut residual);
        }
        trace!(
            order = ?residual.iter().map(|(var, _)| *var).collect::<Vec<_>>(),
            "eliminating algebraic values"
        );

        let mut eliminated = self.eliminate(&substituted, &residual);
        if eliminated.is_zero() {
            let point: Assignment = residual.iter().cloned().collect();
            if self.coefficients_vanish(&substituted, main_var, &point) {
                self.stats.nullified += 1;
                return RealRootsResult::Nullified;
            }
            tighten(&substituted, main_var, &residual);
            eliminated = self.eliminate(&substituted, &residual);
            if eliminated.is_zero() {
                warn!(%substituted, "elimination polynomial vanished after tightening");
                self.stats.non_univariate += 1;
                return RealRootsResult::NonUnivariate;
            }
        }
        let Some(univariate) = eliminated.to_univariate(main_var) else {
            self.stats.non_univariate += 1;
            return RealRootsResult::NonUnivariate;
        };

        let candidates = self.isolate(&univariate, interval);
        self.stats.candidate_roots += candidates.len() as u64;

        let constraint = Constraint::equation(substituted);
        let mut point: Assignment = residual.into_iter().collect();
        let mut roots = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            point.insert(main_var, candidate.clone());
            let holds = self.evaluator.evaluate(&constraint, &point);
            if holds == Some(false) {
                trace!(root = %candidate, "purging spurious root");
                self.stats.spurious_roots_purged += 1;
            } else {
                roots.push(candidate);
            }
        }
        debug!(roots = roots.len(), "resolved real roots");
        RealRootsResult::Roots(roots)
    }

    fn order(&self, residual: &mut [(Var, AlgebraicNumber)]) {
        match self.config.substitution_order {
            SubstitutionOrder::DescendingDegree => residual
                .sort_by_cached_key(|(_, value)| Reverse(value.defining_polynomial().degree())),
            SubstitutionOrder::AscendingDegree => {
                residual.sort_by_cached_key(|(_, value)| value.defining_polynomial().degree())
            }
            SubstitutionOrder::VariableIndex => residual.sort_by_key(|(var, _)| *var),
        }
    }

    fn eliminate(&mut self, poly: &Polynomial, residual: &[(Var, AlgebraicNumber)]) -> Polynomial {
        let mut eliminated = poly.clone();
        for (var, value) in residual {
            eliminated = norm(&eliminated, *var, &value.defining_polynomial());
            self.stats.algebraic_substitutions += 1;
            if eliminated.is_zero() {
                break;
            }
        }
        eliminated
    }

    fn coefficients_vanish(&self, poly: &Polynomial, main_var: Var, point: &Assignment) -> bool {
        poly.coefficients(main_var)
            .iter()
            .all(|c| self.evaluator.sign(c, point) == Some(Sign::Zero))
    }

    fn isolate(
        &mut self,
        poly: &UnivariatePolynomial,
        interval: &Interval,
    ) -> Vec<AlgebraicNumber> {
        self.stats.univariate_isolations += 1;
        if poly.is_constant() {
            return Vec::new();
        }
        let defining = poly.square_free().normalized();
        let sturm_sequence: Arc<[UnivariatePolynomial]> = defining.sturm_sequence().into();
        self.isolator
            .isolate(poly, interval)
            .into_iter()
            .map(|iv| {
                let root = IntervalRoot::with_sturm_sequence(
                    defining.clone(),
                    iv,
                    Arc::clone(&sturm_sequence),
                );
                AlgebraicNumber::from_interval_root(root)
            })
            .collect()
    }
}

/// Remove from each defining polynomial the conjugates at which a
/// coefficient of `poly` vanishes while it does not vanish at the value
/// itself. A conjugate at which `poly` is identically zero is such a root.
fn tighten(poly: &Polynomial, main_var: Var, residual: &[(Var, AlgebraicNumber)]) {
    let coefficients = poly.coefficients(main_var);
    for (var, value) in residual {
        for c in &coefficients {
            let Some(u) = c.to_univariate(*var) else {
                continue;
            };
            if u.is_constant() || value.sign_of(&u) == Sign::Zero {
                continue;
            }
            let defining = value.defining_polynomial();
            let g = defining.gcd(&u);
            if g.is_constant() {
                continue;
            }
            let Some(reduced) = defining.exact_div(&g) else {
                continue;
            };
            trace!(var, from = %defining, to = %reduced, "tightening defining polynomial");
            if let Some(Err(err)) = value.with_interval_root(|root| root.set_polynomial(&reduced)) {
                warn!(var, %err, "could not tighten defining polynomial");
            }
        }
    }
}
