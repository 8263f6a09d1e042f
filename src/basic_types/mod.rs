use thiserror::Error;

use crate::constraints::AllDifferentKind;

/// A stable reference to a [`Variable`](crate::model::Variable).
///
/// References are indices assigned in declaration order and are only
/// meaningful for the model they were issued by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariableRef(pub(crate) usize);

impl VariableRef {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A stable reference to a [`Term`](crate::model::Term).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermRef(pub(crate) usize);

impl TermRef {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An operand of a constraint registration: either a raw variable or an
/// offset term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Variable(VariableRef),
    Term(TermRef),
}

impl From<VariableRef> for Operand {
    fn from(variable: VariableRef) -> Operand {
        Operand::Variable(variable)
    }
}

impl From<TermRef> for Operand {
    fn from(term: TermRef) -> Operand {
        Operand::Term(term)
    }
}

/// The errors raised by model-construction operations.
///
/// All of these are recoverable: a failing operation leaves the problem
/// description exactly as it was, so the caller can correct the call and
/// continue building.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The lower bound of a domain exceeds its upper bound.
    #[error("invalid domain: lower bound {lower_bound} exceeds upper bound {upper_bound}")]
    InvalidDomain { lower_bound: i32, upper_bound: i32 },

    /// A variable with this name has already been declared in this model.
    #[error("a variable named {0:?} already exists in this model")]
    DuplicateName(String),

    /// The referenced variable was not declared in this model.
    #[error("variable {0:?} does not belong to this model")]
    UnknownVariable(VariableRef),

    /// The referenced operand was not declared in this model.
    #[error("operand {0:?} does not belong to this model")]
    UnknownOperand(Operand),

    /// A constraint or branching registration was given no operands.
    #[error("the operand list must not be empty")]
    EmptyOperandList,

    /// An operand's entity type does not match the constraint kind.
    #[error("operand {operand:?} cannot appear in an all-different over {kind:?}")]
    KindMismatch {
        kind: AllDifferentKind,
        operand: Operand,
    },

    /// A mutating operation was attempted after the model was finalized.
    #[error("the model has already been finalized")]
    AlreadyFinalized,
}
