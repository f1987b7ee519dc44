//! Ralg RAN - exact real algebraic numbers
//!
//! A real algebraic number is a real root of a nonzero polynomial with
//! rational coefficients. This crate represents such a number either as an
//! exact rational or as a square-free defining polynomial together with an
//! isolating interval, refined on demand:
//! - [`IntervalRoot`]: isolating interval, Sturm sequence, refinement and
//!   sign determination
//! - [`AlgebraicNumber`]: value type switching transparently between the two
//!   representations, totally ordered like the reals
//! - [`RealRootResolver`]: real roots of a polynomial whose coefficients
//!   mention already-resolved algebraic numbers, with spurious roots removed
//! - [`SturmEvaluator`]: signs of polynomials and truth of constraints at
//!   algebraic points
//!
//! # Examples
//!
//! ```
//! use num_rational::BigRational;
//! use ralg_math::interval::Interval;
//! use ralg_math::polynomial::Polynomial;
//! use ralg_ran::{AlgebraicNumber, Assignment, RealRootResolver, RealRootsResult};
//!
//! // y = sqrt(2)
//! let y_poly = Polynomial::from_coeffs_int(&[(1, &[(1, 2)]), (-2, &[])]);
//! let y_roots = RealRootResolver::default_config().real_roots_univariate(
//!     &y_poly.to_univariate(1).expect("univariate"),
//!     &Interval::at_least(BigRational::from_integer(0.into())),
//! );
//! let sqrt2 = y_roots.into_roots().remove(0);
//!
//! // x - y = 0 under y = sqrt(2)
//! let p = Polynomial::from_coeffs_int(&[(1, &[(0, 1)]), (-1, &[(1, 1)])]);
//! let mut assignment = Assignment::default();
//! assignment.insert(1, sqrt2.clone());
//!
//! let mut resolver = RealRootResolver::default_config();
//! match resolver.real_roots(&p, 0, &assignment, &Interval::unbounded()) {
//!     RealRootsResult::Roots(roots) => assert_eq!(roots, vec![sqrt2]),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assignment;
pub mod constraint;
pub mod error;
pub mod evaluation;
pub mod interval_root;
pub mod number;
pub mod real_roots;
pub mod sample;

pub use assignment::{Assignment, OrderedAssignment, VarPool};
pub use constraint::{Constraint, Relation};
pub use error::{RanError, RanResult};
pub use evaluation::{evaluate_polynomial, ConstraintEvaluator, SturmEvaluator};
pub use interval_root::IntervalRoot;
pub use number::AlgebraicNumber;
pub use real_roots::{
    RealRootResolver, RealRootsConfig, RealRootsResult, RealRootsStats, SubstitutionOrder,
};
pub use sample::{sample_above, sample_below, sample_between, SampleHeuristic};
