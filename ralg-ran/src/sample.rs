//! Rational sample points around and between algebraic numbers.

use crate::number::AlgebraicNumber;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// Strategy for choosing a sample strictly between two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleHeuristic {
    /// Midpoint of the gap.
    Center,
    /// Integer closest to the midpoint.
    CenterInt,
    /// Smallest integer in the gap.
    LeftInt,
    /// Largest integer in the gap.
    #[default]
    RightInt,
    /// Integer in the gap closest to zero.
    ZeroInt,
    /// Integer in the gap farthest from zero.
    InftyInt,
}

impl fmt::Display for SampleHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SampleHeuristic::Center => "Center",
            SampleHeuristic::CenterInt => "CenterInt",
            SampleHeuristic::LeftInt => "LeftInt",
            SampleHeuristic::RightInt => "RightInt",
            SampleHeuristic::ZeroInt => "ZeroInt",
            SampleHeuristic::InftyInt => "InftyInt",
        };
        f.write_str(s)
    }
}

/// An integer strictly below `x`.
pub fn sample_below(x: &AlgebraicNumber) -> AlgebraicNumber {
    let lower = x.interval().lower().floor();
    AlgebraicNumber::from_rational(lower - BigRational::one())
}

/// An integer strictly above `x`.
pub fn sample_above(x: &AlgebraicNumber) -> AlgebraicNumber {
    let upper = x.interval().upper().ceil();
    AlgebraicNumber::from_rational(upper + BigRational::one())
}

/// Open or closed end of the gap between two numbers.
struct Gap {
    lower: BigRational,
    lower_open: bool,
    upper: BigRational,
    upper_open: bool,
}

impl Gap {
    /// Refine both numbers until their isolating intervals are separated.
    ///
    /// An interval bound is never the number itself, so it may be sampled;
    /// an exact value may not.
    fn between(lower: &AlgebraicNumber, upper: &AlgebraicNumber) -> Gap {
        loop {
            let a = lower.interval();
            let b = upper.interval();
            let lower_open = a.is_point();
            let upper_open = b.is_point();
            let separated = if lower_open || upper_open {
                a.upper() < b.lower()
            } else {
                a.upper() <= b.lower()
            };
            if separated {
                return Gap {
                    lower: a.upper().clone(),
                    lower_open,
                    upper: b.lower().clone(),
                    upper_open,
                };
            }
            lower.refine();
            upper.refine();
        }
    }

    fn midpoint(&self) -> BigRational {
        (&self.lower + &self.upper) / BigRational::from_integer(BigInt::from(2))
    }

    /// Smallest and largest admissible integers, if any.
    fn integer_range(&self) -> Option<(BigRational, BigRational)> {
        let smallest = if self.lower_open {
            self.lower.floor() + BigRational::one()
        } else {
            self.lower.ceil()
        };
        let largest = if self.upper_open {
            self.upper.ceil() - BigRational::one()
        } else {
            self.upper.floor()
        };
        (smallest <= largest).then_some((smallest, largest))
    }

    fn sample(&self, heuristic: SampleHeuristic) -> BigRational {
        let mid = self.midpoint();
        let Some((smallest, largest)) = self.integer_range() else {
            return mid;
        };
        match heuristic {
            SampleHeuristic::Center => mid,
            SampleHeuristic::CenterInt => {
                let below = mid.floor().clamp(smallest.clone(), largest.clone());
                let above = mid.ceil().clamp(smallest, largest);
                if (&mid - &below).abs() <= (&above - &mid).abs() {
                    below
                } else {
                    above
                }
            }
            SampleHeuristic::LeftInt => smallest,
            SampleHeuristic::RightInt => largest,
            SampleHeuristic::ZeroInt => {
                if largest.is_negative() {
                    largest
                } else if smallest.is_positive() {
                    smallest
                } else {
                    BigRational::zero()
                }
            }
            SampleHeuristic::InftyInt => {
                if smallest.abs() > largest.abs() {
                    smallest
                } else {
                    largest
                }
            }
        }
    }
}

/// A rational strictly between `lower` and `upper`.
///
/// # Panics
///
/// Panics unless `lower < upper`.
pub fn sample_between(
    lower: &AlgebraicNumber,
    upper: &AlgebraicNumber,
    heuristic: SampleHeuristic,
) -> AlgebraicNumber {
    assert!(lower < upper, "sample_between requires lower < upper");
    let gap = Gap::between(lower, upper);
    AlgebraicNumber::from_rational(gap.sample(heuristic))
}
