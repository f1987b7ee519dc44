//! Polynomial sign constraints `p ~ 0`.

use ralg_math::polynomial::Polynomial;
use ralg_math::sign::Sign;
use std::fmt;

/// Comparison of a polynomial against zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Equal to zero.
    Eq,
    /// Not equal to zero.
    Neq,
    /// Less than zero.
    Less,
    /// Less than or equal to zero.
    Leq,
    /// Greater than zero.
    Greater,
    /// Greater than or equal to zero.
    Geq,
}

impl Relation {
    /// The negated relation.
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Eq => Relation::Neq,
            Relation::Neq => Relation::Eq,
            Relation::Less => Relation::Geq,
            Relation::Geq => Relation::Less,
            Relation::Leq => Relation::Greater,
            Relation::Greater => Relation::Leq,
        }
    }

    /// Check if the relation excludes equality.
    pub fn is_strict(self) -> bool {
        matches!(self, Relation::Less | Relation::Greater | Relation::Neq)
    }

    /// Check if a value with the given sign satisfies `value ~ 0`.
    pub fn holds_for(self, sign: Sign) -> bool {
        match self {
            Relation::Eq => sign == Sign::Zero,
            Relation::Neq => sign != Sign::Zero,
            Relation::Less => sign == Sign::Negative,
            Relation::Leq => sign != Sign::Positive,
            Relation::Greater => sign == Sign::Positive,
            Relation::Geq => sign != Sign::Negative,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relation::Eq => "=",
            Relation::Neq => "!=",
            Relation::Less => "<",
            Relation::Leq => "<=",
            Relation::Greater => ">",
            Relation::Geq => ">=",
        };
        f.write_str(s)
    }
}

/// A constraint `lhs ~ 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    lhs: Polynomial,
    relation: Relation,
}

impl Constraint {
    /// Create a constraint.
    pub fn new(lhs: Polynomial, relation: Relation) -> Self {
        Self { lhs, relation }
    }

    /// The constraint `lhs = 0`.
    pub fn equation(lhs: Polynomial) -> Self {
        Self::new(lhs, Relation::Eq)
    }

    /// Left-hand side.
    #[inline]
    pub fn lhs(&self) -> &Polynomial {
        &self.lhs
    }

    /// Relation to zero.
    #[inline]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// The negated constraint.
    pub fn negated(&self) -> Constraint {
        Self::new(self.lhs.clone(), self.relation.inverse())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} 0", self.lhs, self.relation)
    }
}
