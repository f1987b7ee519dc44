//! Ralg Math - exact polynomial algebra over the rationals
//!
//! This crate provides the algebraic primitives the real algebraic number
//! kernel (`ralg-ran`) is built on:
//! - Sparse multivariate polynomials over [`BigRational`](num_rational::BigRational)
//! - Dense univariate polynomials with Sturm and Tarski root counting
//! - Square-free decomposition and univariate GCD
//! - Norms (elimination of an algebraic variable via its defining polynomial)
//! - Rational intervals, isolating intervals and interval arithmetic
//! - Real root isolation (the [`RootIsolator`](polynomial::root_isolation::RootIsolator) oracle)
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//! use ralg_math::interval::Interval;
//! use ralg_math::polynomial::root_isolation::{RootIsolator, SturmIsolator};
//! use ralg_math::polynomial::univariate::UnivariatePolynomial;
//!
//! // x^2 - 2
//! let p = UnivariatePolynomial::from_coeffs_int(&[-2, 0, 1]);
//! let roots = SturmIsolator::new().isolate(&p, &Interval::unbounded());
//! assert_eq!(roots.len(), 2);
//!
//! let two = BigRational::from_integer(BigInt::from(2));
//! assert!(roots[1].lower() < &two);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod interval;
pub mod polynomial;
pub mod sign;

pub use interval::{BoundedInterval, Interval, IsolatingInterval};
pub use polynomial::univariate::UnivariatePolynomial;
pub use polynomial::{Monomial, Polynomial, Term, Var, NULL_VAR};
pub use sign::Sign;
