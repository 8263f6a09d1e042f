use crate::branching::ValueSelectionRule;
use crate::branching::VariableSelectionRule;
use crate::constraints::AllDifferentKind;
use crate::model::ModelBuilder;
use crate::model::ProblemDescription;
use crate::ModelError;
use crate::Operand;

/// Build the n-queens model: one variable per column with domain
/// `[0, n - 1]`, the two diagonal term families, three all-different
/// constraints and a first-fail/smallest-value branching directive.
fn build_nqueens(n: i32) -> Result<ProblemDescription, ModelError> {
    let mut model = ModelBuilder::new();

    let variables = (0..n)
        .map(|i| model.new_variable(format!("q{i}"), 0, n - 1))
        .collect::<Result<Vec<_>, _>>()?;

    let diag1 = variables
        .iter()
        .enumerate()
        .map(|(i, &variable)| model.new_offset_term(variable, i as i32))
        .collect::<Result<Vec<_>, _>>()?;

    let diag2 = variables
        .iter()
        .enumerate()
        .map(|(i, &variable)| model.new_offset_term(variable, -(i as i32)))
        .collect::<Result<Vec<_>, _>>()?;

    model.add_all_different(
        AllDifferentKind::Values,
        variables.iter().copied().map(Operand::from),
    )?;
    model.add_all_different(
        AllDifferentKind::Terms,
        diag1.into_iter().map(Operand::from),
    )?;
    model.add_all_different(
        AllDifferentKind::Terms,
        diag2.into_iter().map(Operand::from),
    )?;

    model.set_branching(
        VariableSelectionRule::SmallestDomainFirst,
        ValueSelectionRule::SmallestValueFirst,
        variables.iter().copied(),
    )?;

    Ok(model.finalize())
}

#[test]
fn four_queens_description_has_the_expected_shape() {
    let description = build_nqueens(4).expect("construction succeeds");

    assert_eq!(description.variables().len(), 4);
    assert_eq!(description.terms().len(), 8);
    assert_eq!(description.constraints().len(), 3);
    assert_eq!(description.branching_directives().len(), 1);

    for (i, variable) in description.variables().iter().enumerate() {
        assert_eq!(variable.name(), format!("q{i}"));
        assert_eq!(variable.lower_bound(), 0);
        assert_eq!(variable.upper_bound(), 3);
    }

    let constraints = description.constraints();
    assert_eq!(constraints[0].kind(), AllDifferentKind::Values);
    assert_eq!(constraints[1].kind(), AllDifferentKind::Terms);
    assert_eq!(constraints[2].kind(), AllDifferentKind::Terms);
    assert!(constraints
        .iter()
        .all(|constraint| constraint.operands().len() == 4));

    let directive = &description.branching_directives()[0];
    assert_eq!(
        directive.variable_selection(),
        VariableSelectionRule::SmallestDomainFirst
    );
    assert_eq!(
        directive.value_selection(),
        ValueSelectionRule::SmallestValueFirst
    );
    assert_eq!(directive.variables().len(), 4);
}

#[test]
fn diagonal_terms_carry_the_per_column_offsets() {
    let description = build_nqueens(4).expect("construction succeeds");

    // The first family holds offsets +i, the second -i, both in column
    // order.
    for i in 0..4 {
        let up = description.terms()[i];
        let down = description.terms()[i + 4];

        assert_eq!(up.offset(), i as i32);
        assert_eq!(down.offset(), -(i as i32));
        assert_eq!(up.variable().index(), i);
        assert_eq!(down.variable().index(), i);
    }

    // Two queens on the same diagonal resolve to the same term value.
    let q0_up = description.terms()[0];
    let q2_up = description.terms()[2];
    assert_eq!(q0_up.resolve(3), q2_up.resolve(1));
}

#[test]
fn diagonal_operand_names_follow_the_column_index() {
    let description = build_nqueens(4).expect("construction succeeds");

    let upward = description.constraints()[1]
        .operands()
        .iter()
        .map(|&operand| description.operand_name(operand))
        .collect::<Vec<_>>();
    assert_eq!(upward, ["q0", "q1 + 1", "q2 + 2", "q3 + 3"]);

    let downward = description.constraints()[2]
        .operands()
        .iter()
        .map(|&operand| description.operand_name(operand))
        .collect::<Vec<_>>();
    assert_eq!(downward, ["q0", "q1 - 1", "q2 - 2", "q3 - 3"]);
}

#[test]
fn zero_queens_is_an_empty_but_valid_variable_set() {
    let mut model = ModelBuilder::new();

    let variables = (0..0)
        .map(|i| model.new_variable(format!("q{i}"), 0, -1))
        .collect::<Result<Vec<_>, _>>()
        .expect("no declarations, no errors");
    assert!(variables.is_empty());

    let description = model.finalize();
    assert_eq!(description.variables().len(), 0);
}
