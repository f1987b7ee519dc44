//! Property-based tests for ralg-math
//!
//! This module contains property tests for:
//! - Multivariate and univariate polynomial arithmetic
//! - Sturm root counting and root isolation
//! - Norms over quadratic extensions

mod norm_properties;
mod polynomial_properties;
mod root_properties;
