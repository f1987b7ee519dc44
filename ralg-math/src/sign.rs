//! Signs of exact quantities.

use num_traits::Signed;
use std::fmt;
use std::ops::{Mul, Neg};

/// The sign of an exact real quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly above zero.
    Positive,
}

impl Sign {
    /// Sign of a signed number.
    pub fn of<T: Signed>(value: &T) -> Self {
        if value.is_positive() {
            Sign::Positive
        } else if value.is_negative() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Map `-1`, `0`, `1` to a sign.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Sign::Negative),
            0 => Some(Sign::Zero),
            1 => Some(Sign::Positive),
            _ => None,
        }
    }

    /// The sign as `-1`, `0` or `1`.
    #[inline]
    pub fn to_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Returns true for [`Sign::Zero`].
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Negative => write!(f, "-"),
            Sign::Zero => write!(f, "0"),
            Sign::Positive => write!(f, "+"),
        }
    }
}
