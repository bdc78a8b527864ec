//! # The two-phase simplex method
//!
//! Phase 1 drives an auxiliary objective, minus the sum of the artificial variables, to zero; if
//! that succeeds the artificials are shed, the real objective is installed and phase 2 optimizes
//! it from the feasible basis phase 1 found. Both phases run the same pivot loop and share one
//! iteration budget.
//!
//! Each pivot is reported through the `log` facade: a `debug!` line with the entering and leaving
//! columns and the objective value, and the full tableau at `trace!` level. This is one-way
//! diagnostic output; nothing is read back.
use log::{debug, trace, warn};

use crate::algorithm::{SolveOptions, SolveResult};
use crate::algorithm::two_phase::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::SimplexNumber;

pub mod strategy;
pub mod tableau;

/// Solve a linear program with the two-phase simplex method.
///
/// # Arguments
///
/// * `general`: The problem to solve. Validation already happened at its construction; this
///   function cannot fail on malformed input.
/// * `options`: Tolerance and the pivot cap shared by both phases.
///
/// # Return value
///
/// A `SolveResult`: the optimum with its solution, or the proof-like terminal states
/// `Infeasible` and `Unbounded`, or `IterationLimitReached` when the cap ran out first.
pub fn solve<F: SimplexNumber>(
    general: &GeneralForm<F>,
    options: &SolveOptions<F>,
) -> SolveResult<F> {
    let standard = general.standard_form();
    let mut tableau = Tableau::new(&standard, options.epsilon);
    let mut rule = MostNegative::new();
    let mut iterations = 0;

    match primal(&mut tableau, &mut rule, &mut iterations, options.max_iterations) {
        PhaseResult::Optimal => {},
        PhaseResult::Unbounded => {
            // The phase-1 objective is bounded above by zero in a well-formed tableau, so an
            // unbounded claim means the tableau never was feasible to begin with.
            warn!("phase 1 reported an unbounded artificial objective");
            return SolveResult::Infeasible;
        },
        PhaseResult::IterationLimitReached => return SolveResult::IterationLimitReached,
    }
    if tableau.objective_function_value().abs() > options.epsilon {
        debug!(
            "infeasible: artificial cost {} remains after phase 1",
            -tableau.objective_function_value(),
        );
        return SolveResult::Infeasible;
    }

    let redundant_rows = tableau.pivot_out_artificials();
    if !redundant_rows.is_empty() {
        debug!("dropping {} redundant row(s) after phase 1", redundant_rows.len());
    }
    let mut tableau = tableau.remove_artificials(&redundant_rows);
    debug_assert!(!tableau.has_artificial_in_basis());
    tableau.install_objective(standard.cost());

    match primal(&mut tableau, &mut rule, &mut iterations, options.max_iterations) {
        PhaseResult::Optimal => {
            let column_values = tableau.basic_feasible_solution();
            let variable_values = standard.original_solution(&column_values);
            let objective_value = match general.objective() {
                Objective::Maximize => tableau.objective_function_value(),
                Objective::Minimize => -tableau.objective_function_value(),
            };
            SolveResult::Optimal(Solution::new(objective_value, variable_values))
        },
        PhaseResult::Unbounded => SolveResult::Unbounded,
        PhaseResult::IterationLimitReached => SolveResult::IterationLimitReached,
    }
}

/// How a single phase's pivot loop ended.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum PhaseResult {
    /// No candidate column is profitable.
    Optimal,
    /// A profitable column has no blocking row.
    Unbounded,
    /// The shared pivot budget ran out.
    IterationLimitReached,
}

/// Reduce the cost of the current basic feasible solution as far as the pivot budget allows.
///
/// # Arguments
///
/// * `tableau`: Tableau in basic feasible solution state; mutated in place by every pivot.
/// * `rule`: Decides the entering column.
/// * `iterations`: Running pivot count, shared between phases.
/// * `max_iterations`: Cap on `iterations`.
pub(crate) fn primal<F: SimplexNumber, PR: PivotRule>(
    tableau: &mut Tableau<F>,
    rule: &mut PR,
    iterations: &mut usize,
    max_iterations: usize,
) -> PhaseResult {
    loop {
        debug_assert!(tableau.is_in_basic_feasible_solution_state());

        let Some((column, cost)) = rule.select_pivot_column(tableau) else {
            break PhaseResult::Optimal;
        };
        if *iterations == max_iterations {
            break PhaseResult::IterationLimitReached;
        }
        match tableau.select_pivot_row(column) {
            Some(row) => {
                let leaving = tableau.basis_column(row);
                tableau.bring_into_basis(column, row);
                *iterations += 1;
                debug!(
                    "pivot {}: {} enters (reduced cost {}), {} leaves, objective {}",
                    iterations,
                    tableau.column_name(column),
                    cost,
                    tableau.column_name(leaving),
                    tableau.objective_function_value(),
                );
                trace!("tableau after pivot {}:\n{}", iterations, tableau);
            },
            None => break PhaseResult::Unbounded,
        }
    }
}
