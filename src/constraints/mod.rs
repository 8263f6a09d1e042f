//! The constraint registrations which can be recorded in a
//! [`ProblemDescription`](crate::model::ProblemDescription).
//!
//! A registration only names a constraint kind and its operands; mapping the
//! kind to a concrete propagator is the responsibility of the external
//! solving engine.

use clap::ValueEnum;

use crate::basic_types::Operand;

/// The kinds of all-different constraint supported by the modeling core.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum AllDifferentKind {
    /// Pairwise distinctness over the raw values of variables.
    Values,
    /// Pairwise distinctness over the resolved values of offset terms.
    Terms,
}

/// A registered global constraint: a kind together with its ordered operands.
///
/// Operand order does not affect the constraint's semantics, but it is
/// preserved so the hand-off to the engine is reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintRegistration {
    kind: AllDifferentKind,
    operands: Vec<Operand>,
}

impl ConstraintRegistration {
    pub(crate) fn new(kind: AllDifferentKind, operands: Vec<Operand>) -> ConstraintRegistration {
        ConstraintRegistration { kind, operands }
    }

    pub fn kind(&self) -> AllDifferentKind {
        self.kind
    }

    /// The operands, in the order they were registered.
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}
