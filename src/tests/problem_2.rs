//! Small problems that exercise phase 1, the sign restrictions and the terminal states.
//!
//! Each fixture is small enough to check by hand; the expected optima are derived in the doc
//! comment of the fixture that produces them.
use crate::algorithm::two_phase::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::{PhaseResult, primal, solve};
use crate::algorithm::{SolveOptions, SolveResult};
use crate::data::linear_program::elements::{ConstraintType, Objective, VariableSign};
use crate::data::linear_program::general_form::{Constraint, GeneralForm};
use crate::data::linear_program::standard_form::VariableMapping;
use crate::tests::assert_feasible;

fn constraint(coefficients: Vec<f64>, constraint_type: ConstraintType, rhs: f64) -> Constraint<f64> {
    Constraint { coefficients, constraint_type, rhs }
}

/// Maximize x1 + 2x2 subject to 2x1 + x2 = 6 and 3x1 + 2x2 <= 12.
///
/// The equality pins x2 = 6 - 2x1, so the objective equals 12 - 3x1 and the second row reduces
/// to x1 >= 0. The optimum is 12 at (0, 6). The equality row needs an artificial variable, so
/// this problem only solves when phase 1 does its job.
fn equality_form() -> GeneralForm<f64> {
    GeneralForm::new(
        Objective::Maximize,
        vec![1_f64, 2_f64],
        vec![
            constraint(vec![2_f64, 1_f64], ConstraintType::Equal, 6_f64),
            constraint(vec![3_f64, 2_f64], ConstraintType::Less, 12_f64),
        ],
        vec![VariableSign::NonNegative; 2],
    )
    .unwrap()
}

/// Maximize 2x1 + x2 subject to x1 + x2 <= 4 and x1 <= 3, with x2 free.
///
/// The optimum is 7 at (3, 1): x1 is pushed to its bound first, then x2 fills the first row.
fn free_variable_form() -> GeneralForm<f64> {
    GeneralForm::new(
        Objective::Maximize,
        vec![2_f64, 1_f64],
        vec![
            constraint(vec![1_f64, 1_f64], ConstraintType::Less, 4_f64),
            constraint(vec![1_f64, 0_f64], ConstraintType::Less, 3_f64),
        ],
        vec![VariableSign::NonNegative, VariableSign::Free],
    )
    .unwrap()
}

#[test]
fn equality_row_is_solved_through_phase_1() {
    let general = equality_form();
    let result = solve(&general, &SolveOptions::default());

    let SolveResult::Optimal(solution) = result else {
        panic!("expected an optimum, got {:?}", result);
    };
    assert!((solution.objective_value() - 12_f64).abs() < 1e-6);
    assert!(solution.value(0).abs() < 1e-6);
    assert!((solution.value(1) - 6_f64).abs() < 1e-6);

    assert_feasible(&general, solution.variable_values(), 1e-6);
}

#[test]
fn free_variable_reaches_the_optimum() {
    let general = free_variable_form();
    let result = solve(&general, &SolveOptions::default());

    let SolveResult::Optimal(solution) = result else {
        panic!("expected an optimum, got {:?}", result);
    };
    assert!((solution.objective_value() - 7_f64).abs() < 1e-6);
    assert!((solution.value(0) - 3_f64).abs() < 1e-6);
    assert!((solution.value(1) - 1_f64).abs() < 1e-6);

    assert_feasible(&general, solution.variable_values(), 1e-6);
}

#[test]
fn split_pair_is_complementary_in_the_basis() {
    let standard = free_variable_form().standard_form();
    assert_eq!(
        standard.mapping(),
        &[VariableMapping::Direct(0), VariableMapping::Split { positive: 1, negative: 2 }],
    );

    // Both rows are upper bounds, so the slack basis is feasible and phase 1 is a no-op.
    let mut tableau = Tableau::new(&standard, 1e-9);
    tableau.install_objective(standard.cost());
    let mut rule = MostNegative::new();
    let mut iterations = 0;
    assert_eq!(primal(&mut tableau, &mut rule, &mut iterations, 100), PhaseResult::Optimal);

    // At most one half of the split pair carries a nonzero value.
    let column_values = tableau.basic_feasible_solution();
    assert!(column_values[1] * column_values[2] < 1e-12);
    assert!((column_values[1] - column_values[2] - 1_f64).abs() < 1e-6);
}

#[test]
fn minimization_of_a_free_variable() {
    // Minimize x1 subject to x1 >= -5, x1 free. The bound is the optimum.
    let general = GeneralForm::new(
        Objective::Minimize,
        vec![1_f64],
        vec![constraint(vec![1_f64], ConstraintType::Greater, -5_f64)],
        vec![VariableSign::Free],
    )
    .unwrap();
    let result = solve(&general, &SolveOptions::default());

    let SolveResult::Optimal(solution) = result else {
        panic!("expected an optimum, got {:?}", result);
    };
    assert!((solution.objective_value() + 5_f64).abs() < 1e-6);
    assert!((solution.value(0) + 5_f64).abs() < 1e-6);
}

#[test]
fn nonpositive_variable_is_negated_transparently() {
    // Maximize -x1 subject to x1 >= -3, x1 <= 0. The optimum is 3 at x1 = -3.
    let general = GeneralForm::new(
        Objective::Maximize,
        vec![-1_f64],
        vec![constraint(vec![1_f64], ConstraintType::Greater, -3_f64)],
        vec![VariableSign::NonPositive],
    )
    .unwrap();
    let result = solve(&general, &SolveOptions::default());

    let SolveResult::Optimal(solution) = result else {
        panic!("expected an optimum, got {:?}", result);
    };
    assert!((solution.objective_value() - 3_f64).abs() < 1e-6);
    assert!((solution.value(0) + 3_f64).abs() < 1e-6);
}

#[test]
fn contradictory_bounds_are_infeasible() {
    // x1 <= 1 and x1 >= 2 admit no point; phase 1 ends with artificial cost left over.
    let general = GeneralForm::new(
        Objective::Maximize,
        vec![1_f64],
        vec![
            constraint(vec![1_f64], ConstraintType::Less, 1_f64),
            constraint(vec![1_f64], ConstraintType::Greater, 2_f64),
        ],
        vec![VariableSign::NonNegative],
    )
    .unwrap();

    assert_eq!(solve(&general, &SolveOptions::default()), SolveResult::Infeasible);
}

#[test]
fn missing_upper_bound_is_unbounded() {
    // Maximize x1 with only a lower bound: the surplus column has no blocking row in phase 2.
    let general = GeneralForm::new(
        Objective::Maximize,
        vec![1_f64],
        vec![constraint(vec![1_f64], ConstraintType::Greater, 0_f64)],
        vec![VariableSign::NonNegative],
    )
    .unwrap();

    assert_eq!(solve(&general, &SolveOptions::default()), SolveResult::Unbounded);
}

#[test]
fn binding_equality_at_level_zero_is_kept() {
    // Maximize x1 subject to -x1 - x2 = 0 and x1 <= 5. The equality pins both variables to the
    // origin, so the optimum is 0. Phase 1 is optimal immediately with the artificial variable
    // still basic, and every nonzero entry of its row carries a nonzero phase-1 reduced cost;
    // the row is binding and must be exchanged, not dropped as redundant.
    let general = GeneralForm::new(
        Objective::Maximize,
        vec![1_f64, 0_f64],
        vec![
            constraint(vec![-1_f64, -1_f64], ConstraintType::Equal, 0_f64),
            constraint(vec![1_f64, 0_f64], ConstraintType::Less, 5_f64),
        ],
        vec![VariableSign::NonNegative; 2],
    )
    .unwrap();
    let result = solve(&general, &SolveOptions::default());

    let SolveResult::Optimal(solution) = result else {
        panic!("expected an optimum, got {:?}", result);
    };
    assert!(solution.objective_value().abs() < 1e-6);
    assert!(solution.value(0).abs() < 1e-6);
    assert!(solution.value(1).abs() < 1e-6);

    assert_feasible(&general, solution.variable_values(), 1e-6);
}

#[test]
fn duplicate_equality_leaves_a_redundant_row() {
    // The same equality twice: one artificial variable stays basic at level zero after phase 1
    // and its row is dropped before phase 2.
    let general = GeneralForm::new(
        Objective::Maximize,
        vec![1_f64],
        vec![
            constraint(vec![1_f64], ConstraintType::Equal, 2_f64),
            constraint(vec![1_f64], ConstraintType::Equal, 2_f64),
        ],
        vec![VariableSign::NonNegative],
    )
    .unwrap();
    let result = solve(&general, &SolveOptions::default());

    let SolveResult::Optimal(solution) = result else {
        panic!("expected an optimum, got {:?}", result);
    };
    assert!((solution.objective_value() - 2_f64).abs() < 1e-6);
    assert!((solution.value(0) - 2_f64).abs() < 1e-6);
}
