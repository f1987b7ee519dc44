//! Variable assignments and fresh-variable allocation.

use crate::number::AlgebraicNumber;
use ralg_math::polynomial::{Var, NULL_VAR};
use rustc_hash::FxHashMap;

/// Values of already-resolved variables.
pub type Assignment = FxHashMap<Var, AlgebraicNumber>;

/// Assignment in a fixed substitution order.
pub type OrderedAssignment = Vec<(Var, AlgebraicNumber)>;

/// Hands out variables not used by any polynomial in the current context.
///
/// Replaces a process-wide auxiliary variable: every computation that needs
/// a temporary variable draws it from a pool built above the variables it
/// already mentions.
#[derive(Debug, Clone, Default)]
pub struct VarPool {
    next: Var,
}

impl VarPool {
    /// Create a pool starting at variable `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool whose variables are all above `vars`.
    ///
    /// [`NULL_VAR`] is ignored; it is never allocated.
    pub fn above(vars: impl IntoIterator<Item = Var>) -> Self {
        let next = vars
            .into_iter()
            .filter(|&v| v != NULL_VAR)
            .max()
            .map_or(0, |v| v + 1);
        Self { next }
    }

    /// Allocate a fresh variable.
    ///
    /// # Panics
    ///
    /// Panics once every variable below [`NULL_VAR`] has been handed out.
    pub fn fresh(&mut self) -> Var {
        let var = self.next;
        assert!(var != NULL_VAR, "variable pool exhausted");
        self.next += 1;
        var
    }
}
