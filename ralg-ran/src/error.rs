//! Error types for real algebraic number construction.

use num_rational::BigRational;
use thiserror::Error;

/// Errors raised when building an algebraic number from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RanError {
    /// The defining polynomial is zero or a nonzero constant.
    #[error("defining polynomial has no isolated roots (zero or constant)")]
    ZeroPolynomial,
    /// The interval bounds are reversed.
    #[error("invalid interval: lower bound {lower} exceeds upper bound {upper}")]
    InvalidInterval {
        /// Lower bound.
        lower: BigRational,
        /// Upper bound.
        upper: BigRational,
    },
    /// The interval does not contain exactly one root of the polynomial.
    #[error("interval does not isolate a root: it contains {roots} roots")]
    NonIsolatingInterval {
        /// Number of distinct roots found in the interval.
        roots: usize,
    },
}

/// Result type for real algebraic number construction.
pub type RanResult<T> = Result<T, RanError>;
