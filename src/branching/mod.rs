//! Declarative branching policies.
//!
//! A [`BranchingDirective`] tells the external engine how to order variable
//! selection and value assignment during search. The core only records the
//! directive, it never executes it; when several directives are registered,
//! their combination semantics are left to the engine.

use clap::ValueEnum;

use crate::basic_types::VariableRef;

/// How the engine should pick the next variable to branch on.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum VariableSelectionRule {
    /// Pick the unfixed variable with the fewest remaining values
    /// ("first-fail").
    #[default]
    SmallestDomainFirst,
}

/// How the engine should pick the value to assign to the selected variable.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum ValueSelectionRule {
    /// Try the smallest value in the domain first.
    #[default]
    SmallestValueFirst,
}

/// A branching policy over an ordered group of decision variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchingDirective {
    variable_selection: VariableSelectionRule,
    value_selection: ValueSelectionRule,
    variables: Vec<VariableRef>,
}

impl BranchingDirective {
    pub(crate) fn new(
        variable_selection: VariableSelectionRule,
        value_selection: ValueSelectionRule,
        variables: Vec<VariableRef>,
    ) -> BranchingDirective {
        BranchingDirective {
            variable_selection,
            value_selection,
            variables,
        }
    }

    pub fn variable_selection(&self) -> VariableSelectionRule {
        self.variable_selection
    }

    pub fn value_selection(&self) -> ValueSelectionRule {
        self.value_selection
    }

    /// The variables the directive applies to, in registration order.
    pub fn variables(&self) -> &[VariableRef] {
        &self.variables
    }
}
