//! Property-based tests for ralg-ran
//!
//! This module contains property tests for:
//! - Refinement and comparison of algebraic numbers
//! - Real root resolution over rational and algebraic points

mod number_properties;
mod resolver_properties;
