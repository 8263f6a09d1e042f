//! A modeling core for finite-domain constraint problems.
//!
//! The crate builds a [`ProblemDescription`](model::ProblemDescription): an
//! ordered collection of variable declarations, constraint registrations and
//! branching directives which is handed off to an external solving engine.
//! Only the *intent* of a model is recorded (which constraint kind applies to
//! which operands); propagation, search and solution extraction are the
//! engine's concern and are not implemented here.
//!
//! Construction goes through a [`ModelBuilder`](model::ModelBuilder), the only
//! mutation surface. Once [`finalize`](model::ModelBuilder::finalize) has been
//! called the description is an immutable, freely shareable value.

mod basic_types;
pub mod branching;
pub mod constraints;
pub mod model;

pub use basic_types::ModelError;
pub use basic_types::Operand;
pub use basic_types::TermRef;
pub use basic_types::VariableRef;

#[cfg(test)]
pub(crate) mod tests;
