use std::fmt::Display;
use std::mem;

use fnv::FnvHashMap;
use log::warn;

use crate::basic_types::ModelError;
use crate::basic_types::Operand;
use crate::basic_types::TermRef;
use crate::basic_types::VariableRef;
use crate::branching::BranchingDirective;
use crate::branching::ValueSelectionRule;
use crate::branching::VariableSelectionRule;
use crate::constraints::AllDifferentKind;
use crate::constraints::ConstraintRegistration;

/// A finite-domain decision variable with an inclusive integer domain.
///
/// Variables are immutable after declaration and owned by the
/// [`ProblemDescription`] that contains them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: String,
    lower_bound: i32,
    upper_bound: i32,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }
}

/// A variable shifted by a fixed integer offset.
///
/// Terms express constraints such as "all values pairwise distinct after
/// adding a per-position offset", e.g. diagonal distinctness on a board. The
/// term does not own its variable; both live in the same
/// [`ProblemDescription`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    variable: VariableRef,
    offset: i32,
}

impl Term {
    pub fn variable(&self) -> VariableRef {
        self.variable
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The value of the term when `value` is assigned to its variable.
    ///
    /// Overflow of `value + offset` is not guarded here; keeping the shifted
    /// value representable is part of the engine's numeric contract.
    pub fn resolve(&self, value: i32) -> i32 {
        value + self.offset
    }
}

/// The description of a problem instance: the ordered variables, terms,
/// constraint registrations and branching directives of one model.
///
/// A description is populated exclusively through a [`ModelBuilder`] and is
/// immutable once [`ModelBuilder::finalize`] has returned it. Declaration
/// order is preserved everywhere so the hand-off to the engine is
/// reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemDescription {
    variables: Vec<Variable>,
    terms: Vec<Term>,
    constraints: Vec<ConstraintRegistration>,
    branching: Vec<BranchingDirective>,
}

impl ProblemDescription {
    /// The variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The terms in declaration order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The constraint registrations in registration order.
    pub fn constraints(&self) -> &[ConstraintRegistration] {
        &self.constraints
    }

    /// The branching directives in registration order.
    pub fn branching_directives(&self) -> &[BranchingDirective] {
        &self.branching
    }

    /// Resolve a reference issued by the builder of this description.
    pub fn variable(&self, variable: VariableRef) -> &Variable {
        &self.variables[variable.index()]
    }

    pub fn term(&self, term: TermRef) -> Term {
        self.terms[term.index()]
    }

    /// A human-readable name for an operand, for diagnostics and logging.
    ///
    /// Terms are rendered against their variable's name, e.g. `q3 + 2` or
    /// `q3 - 2`; a zero-offset term renders as the bare variable name.
    pub fn operand_name(&self, operand: Operand) -> String {
        match operand {
            Operand::Variable(variable) => self.variables[variable.index()].name.clone(),
            Operand::Term(term) => {
                let term = self.terms[term.index()];
                let mut name = self.variables[term.variable.index()].name.clone();

                if term.offset < 0 {
                    name = format!("{} - {}", name, -term.offset);
                }

                if term.offset > 0 {
                    name = format!("{} + {}", name, term.offset);
                }

                name
            }
        }
    }
}

/// Builds up a [`ProblemDescription`], the only mutation surface for one.
///
/// Construction is sequential and single-threaded: an entity must be declared
/// before it can be referenced, and every operation either fully commits its
/// side effect or fails without touching the description. Builders are
/// independent of each other, so models can be constructed in parallel as
/// long as each thread owns its builder.
///
/// It is important to only use references with the builder that issued them;
/// foreign references are rejected with [`ModelError::UnknownVariable`] or
/// [`ModelError::UnknownOperand`] based on the index range alone.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    description: ProblemDescription,
    /// Name-to-index map of the declared variables.
    names: FnvHashMap<String, usize>,
    finalized: bool,
}

impl ModelBuilder {
    pub fn new() -> ModelBuilder {
        ModelBuilder::default()
    }

    /// Declare a new variable with the inclusive domain
    /// `[lower_bound, upper_bound]`.
    ///
    /// Fails with [`ModelError::InvalidDomain`] when the bounds are crossed
    /// and with [`ModelError::DuplicateName`] when the name has been used
    /// before in this model.
    pub fn new_variable(
        &mut self,
        name: impl Display,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<VariableRef, ModelError> {
        self.ensure_mutable()?;

        if lower_bound > upper_bound {
            return Err(ModelError::InvalidDomain {
                lower_bound,
                upper_bound,
            });
        }

        let name = name.to_string();
        if self.names.contains_key(&name) {
            return Err(ModelError::DuplicateName(name));
        }

        let id = self.description.variables.len();
        let _ = self.names.insert(name.clone(), id);

        self.description.variables.push(Variable {
            name,
            lower_bound,
            upper_bound,
        });

        Ok(VariableRef(id))
    }

    /// Declare a new term denoting `variable + offset`.
    pub fn new_offset_term(
        &mut self,
        variable: VariableRef,
        offset: i32,
    ) -> Result<TermRef, ModelError> {
        self.ensure_mutable()?;

        if variable.index() >= self.description.variables.len() {
            return Err(ModelError::UnknownVariable(variable));
        }

        let id = self.description.terms.len();
        self.description.terms.push(Term { variable, offset });

        Ok(TermRef(id))
    }

    /// Register an all-different constraint over the given operands.
    ///
    /// The operand entity types must match `kind`: variables for
    /// [`AllDifferentKind::Values`], terms for [`AllDifferentKind::Terms`].
    /// The operand list is validated in order, so a malformed list fails
    /// deterministically on its first offending entry.
    pub fn add_all_different(
        &mut self,
        kind: AllDifferentKind,
        operands: impl IntoIterator<Item = Operand>,
    ) -> Result<(), ModelError> {
        self.ensure_mutable()?;

        let operands: Vec<Operand> = operands.into_iter().collect();
        if operands.is_empty() {
            return Err(ModelError::EmptyOperandList);
        }

        for &operand in &operands {
            match (kind, operand) {
                (AllDifferentKind::Values, Operand::Variable(variable)) => {
                    if variable.index() >= self.description.variables.len() {
                        return Err(ModelError::UnknownOperand(operand));
                    }
                }
                (AllDifferentKind::Terms, Operand::Term(term)) => {
                    if term.index() >= self.description.terms.len() {
                        return Err(ModelError::UnknownOperand(operand));
                    }
                }
                _ => return Err(ModelError::KindMismatch { kind, operand }),
            }
        }

        self.description
            .constraints
            .push(ConstraintRegistration::new(kind, operands));

        Ok(())
    }

    /// Register a branching directive over the given variables.
    pub fn set_branching(
        &mut self,
        variable_selection: VariableSelectionRule,
        value_selection: ValueSelectionRule,
        variables: impl IntoIterator<Item = VariableRef>,
    ) -> Result<(), ModelError> {
        self.ensure_mutable()?;

        let variables: Vec<VariableRef> = variables.into_iter().collect();
        if variables.is_empty() {
            return Err(ModelError::EmptyOperandList);
        }

        for &variable in &variables {
            if variable.index() >= self.description.variables.len() {
                return Err(ModelError::UnknownOperand(Operand::Variable(variable)));
            }
        }

        self.description.branching.push(BranchingDirective::new(
            variable_selection,
            value_selection,
            variables,
        ));

        Ok(())
    }

    /// Complete construction and hand the description off.
    ///
    /// The builder is spent afterwards: every further mutating call fails
    /// with [`ModelError::AlreadyFinalized`]. Finalizing a spent builder
    /// yields an empty description and logs a warning, since that is almost
    /// certainly a mistake in the calling code.
    pub fn finalize(&mut self) -> ProblemDescription {
        if self.finalized {
            warn!("A model builder is finalized twice, this is likely a mistake.");
        }

        self.finalized = true;
        self.names.clear();

        mem::take(&mut self.description)
    }

    fn ensure_mutable(&self) -> Result<(), ModelError> {
        if self.finalized {
            Err(ModelError::AlreadyFinalized)
        } else {
            Ok(())
        }
    }
}
