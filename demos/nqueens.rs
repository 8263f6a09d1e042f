use clap::Parser;
use conscript::branching::ValueSelectionRule;
use conscript::branching::VariableSelectionRule;
use conscript::constraints::AllDifferentKind;
use conscript::model::ModelBuilder;
use conscript::ModelError;
use conscript::Operand;

#[derive(Debug, Parser)]
struct Cli {
    /// The size of the puzzle. Should be an integer greater than 1.
    #[arg(value_parser = clap::value_parser!(i32).range(2..))]
    n: i32,
}

fn main() -> Result<(), ModelError> {
    env_logger::init();

    let Cli { n } = Cli::parse();

    let mut model = ModelBuilder::new();

    // The q_i variables
    let variables = (0..n)
        .map(|i| model.new_variable(format!("q{i}"), 0, n - 1))
        .collect::<Result<Vec<_>, _>>()?;

    // The [q_i + i | 0 <= i < n] terms
    let diag1 = variables
        .iter()
        .enumerate()
        .map(|(i, &variable)| model.new_offset_term(variable, i as i32))
        .collect::<Result<Vec<_>, _>>()?;

    // The [q_i - i | 0 <= i < n] terms
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

    let description = model.finalize();

    println!("{n}-queens problem description:");

    for variable in description.variables() {
        println!(
            "  var {} in [{}, {}]",
            variable.name(),
            variable.lower_bound(),
            variable.upper_bound()
        );
    }

    for constraint in description.constraints() {
        let operands = constraint
            .operands()
            .iter()
            .map(|&operand| description.operand_name(operand))
            .collect::<Vec<_>>()
            .join(", ");

        println!("  all_different({:?}; {operands})", constraint.kind());
    }

    for directive in description.branching_directives() {
        let variables = directive
            .variables()
            .iter()
            .map(|&variable| description.variable(variable).name().to_owned())
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "  branch({:?}, {:?}; {variables})",
            directive.variable_selection(),
            directive.value_selection()
        );
    }

    Ok(())
}
