//! # Tableau
//!
//! The dense augmented matrix the simplex method pivots on: one row per constraint, an objective
//! row holding reduced costs, and the right-hand side as the last column. The tableau is built
//! once from a `StandardForm`, mutated in place by every pivot, and owned exclusively by the
//! active solve.
//!
//! The objective row is oriented so that a solution is optimal exactly when every reduced cost is
//! at least minus the tolerance; the right-hand side entry of the objective row is the current
//! objective value.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Range;

use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};
use itertools::repeat_n;

use crate::algorithm::utilities::remove_indices;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::SimplexNumber;

/// The role of a tableau column.
///
/// Columns are grouped by kind, in this order, with the right-hand side after the last group.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnKind {
    /// A column of the standardized problem itself.
    Original,
    /// Slack of a `<=` row, coefficient +1, initially basic.
    Slack,
    /// Surplus of a `>=` row, coefficient -1, never initially basic.
    Surplus,
    /// Seeds the initial basis of a `>=` or `=` row; driven out during phase 1.
    Artificial,
}

/// Dense simplex tableau with explicit basis bookkeeping.
///
/// Structural invariant, restored by every pivot: for each row, the column `basis[row]` is an
/// identity column (one in that row, zero in every other row and in the objective row), and every
/// right-hand side entry of a constraint row stays nonnegative up to the tolerance.
#[derive(Debug)]
pub struct Tableau<F> {
    /// Constraint rows; each holds `nr_columns() + 1` values, the right-hand side last.
    rows: Vec<Vec<F>>,
    /// Reduced costs, same width as the constraint rows.
    objective: Vec<F>,
    /// Which column is basic in each row.
    basis: Vec<usize>,
    /// Role of each column.
    column_kinds: Vec<ColumnKind>,
    /// Diagnostic names, used by `Display` and the pivot log only.
    column_names: Vec<String>,
    /// End (exclusive) of each column group.
    column_group_end: EnumMap<ColumnKind, usize>,
    /// Tolerance for comparisons against zero, fixed for the lifetime of the tableau.
    epsilon: F,
}

impl<F: SimplexNumber> Tableau<F> {
    /// Build the phase-1 tableau for a standardized problem.
    ///
    /// Per row, following its comparator: a `<=` row gets a slack (initially basic), a `>=` row a
    /// surplus and an artificial (the artificial basic), an `=` row an artificial (basic). The
    /// objective row is set up for phase 1: it prices exactly the artificial columns, made
    /// consistent with the initial basis so that every basic column has reduced cost zero.
    pub fn new(standard: &StandardForm<F>, epsilon: F) -> Self {
        let constraint_types = standard.constraint_types();
        let nr_original = standard.nr_columns();
        let nr_slack = constraint_types
            .iter()
            .filter(|&&constraint_type| constraint_type == ConstraintType::Less)
            .count();
        let nr_surplus = constraint_types
            .iter()
            .filter(|&&constraint_type| constraint_type == ConstraintType::Greater)
            .count();
        let nr_artificial = constraint_types.len() - nr_slack;

        let cumulative = cumsum_array_owned([nr_original, nr_slack, nr_surplus, nr_artificial]);
        let column_group_end = enum_map! {
            ColumnKind::Original => cumulative[0],
            ColumnKind::Slack => cumulative[1],
            ColumnKind::Surplus => cumulative[2],
            ColumnKind::Artificial => cumulative[3],
        };
        let nr_columns = cumulative[3];

        let column_kinds = repeat_n(ColumnKind::Original, nr_original)
            .chain(repeat_n(ColumnKind::Slack, nr_slack))
            .chain(repeat_n(ColumnKind::Surplus, nr_surplus))
            .chain(repeat_n(ColumnKind::Artificial, nr_artificial))
            .collect();
        let mut column_names = standard.column_names().to_vec();
        column_names.extend((0..nr_slack).map(|i| format!("s{}", i + 1)));
        column_names.extend((0..nr_surplus).map(|i| format!("e{}", i + 1)));
        column_names.extend((0..nr_artificial).map(|i| format!("a{}", i + 1)));

        let mut rows = Vec::with_capacity(standard.nr_constraints());
        let mut basis = Vec::with_capacity(standard.nr_constraints());
        let mut next_slack = cumulative[0];
        let mut next_surplus = cumulative[1];
        let mut next_artificial = cumulative[2];
        for (index, coefficients) in standard.rows().iter().enumerate() {
            let mut row = vec![F::zero(); nr_columns + 1];
            row[..nr_original].copy_from_slice(coefficients);
            row[nr_columns] = standard.rhs()[index];

            match constraint_types[index] {
                ConstraintType::Less => {
                    row[next_slack] = F::one();
                    basis.push(next_slack);
                    next_slack += 1;
                },
                ConstraintType::Greater => {
                    row[next_surplus] = -F::one();
                    next_surplus += 1;
                    row[next_artificial] = F::one();
                    basis.push(next_artificial);
                    next_artificial += 1;
                },
                ConstraintType::Equal => {
                    row[next_artificial] = F::one();
                    basis.push(next_artificial);
                    next_artificial += 1;
                },
            }
            rows.push(row);
        }

        // Phase 1 maximizes minus the sum of the artificials, so each artificial column prices at
        // one. Basic columns must have reduced cost zero: subtract every artificial-basic row.
        let mut objective = vec![F::zero(); nr_columns + 1];
        for column in cumulative[2]..cumulative[3] {
            objective[column] = F::one();
        }
        for (index, &column) in basis.iter().enumerate() {
            if column >= cumulative[2] {
                for position in 0..=nr_columns {
                    objective[position] -= rows[index][position];
                }
            }
        }

        Self {
            rows,
            objective,
            basis,
            column_kinds,
            column_names,
            column_group_end,
            epsilon,
        }
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.column_kinds.len()
    }

    /// Tolerance used for all comparisons against zero.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Reduced cost of a column.
    pub fn relative_cost(&self, column: usize) -> F {
        self.objective[column]
    }

    /// Current value of the objective the tableau is set up for.
    pub fn objective_function_value(&self) -> F {
        self.objective[self.nr_columns()]
    }

    /// Right-hand side of a constraint row; the value of that row's basic variable.
    pub fn rhs(&self, row: usize) -> F {
        self.rows[row][self.nr_columns()]
    }

    /// Which column is basic in a row.
    pub fn basis_column(&self, row: usize) -> usize {
        self.basis[row]
    }

    /// Whether a column is currently in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis.contains(&column)
    }

    /// Role of a column.
    pub(crate) fn column_kind(&self, column: usize) -> ColumnKind {
        self.column_kinds[column]
    }

    /// Diagnostic name of a column.
    pub fn column_name(&self, column: usize) -> &str {
        &self.column_names[column]
    }

    /// Columns eligible to enter the basis.
    ///
    /// Artificial columns never re-enter once phase 1 starts driving them out, so the candidate
    /// range stops where the artificial group begins.
    pub fn candidate_columns(&self) -> Range<usize> {
        0..self.column_group_end[ColumnKind::Surplus]
    }

    /// Whether any artificial column is still basic.
    pub fn has_artificial_in_basis(&self) -> bool {
        let artificial_start = self.column_group_end[ColumnKind::Surplus];
        self.basis.iter().any(|&column| column >= artificial_start)
    }

    /// Select the row leaving the basis when `column` enters: the ratio test.
    ///
    /// Among rows with a coefficient above the tolerance in the entering column, the one with the
    /// smallest ratio of right-hand side to coefficient; the lowest row index wins ties. `None`
    /// means no row blocks the entering column and the objective is unbounded.
    pub fn select_pivot_row(&self, column: usize) -> Option<usize> {
        let rhs_index = self.nr_columns();

        let mut best: Option<(usize, F)> = None;
        for (row, values) in self.rows.iter().enumerate() {
            let coefficient = values[column];
            if coefficient > self.epsilon {
                let ratio = values[rhs_index] / coefficient;
                match best {
                    Some((_, lowest)) if ratio >= lowest => {},
                    _ => best = Some((row, ratio)),
                }
            }
        }

        best.map(|(row, _)| row)
    }

    /// Exchange the basis: `column` becomes basic in `row`.
    ///
    /// Gauss-Jordan elimination: the pivot row is normalized to a unit pivot, then the entering
    /// column is eliminated from every other row and from the objective row. Eliminated entries
    /// are written as exact zeros to keep drift out of later comparisons.
    pub fn bring_into_basis(&mut self, column: usize, row: usize) {
        debug_assert!(column < self.nr_columns());
        debug_assert!(row < self.nr_rows());

        let width = self.nr_columns() + 1;
        let pivot = self.rows[row][column];
        debug_assert!(pivot.abs() > self.epsilon);

        for value in &mut self.rows[row] {
            *value /= pivot;
        }
        self.rows[row][column] = F::one();
        let pivot_row = self.rows[row].clone();

        for other in 0..self.rows.len() {
            if other == row {
                continue;
            }
            let factor = self.rows[other][column];
            if factor != F::zero() {
                for position in 0..width {
                    self.rows[other][position] -= factor * pivot_row[position];
                }
                self.rows[other][column] = F::zero();
            }
        }
        let factor = self.objective[column];
        if factor != F::zero() {
            for position in 0..width {
                self.objective[position] -= factor * pivot_row[position];
            }
            self.objective[column] = F::zero();
        }

        self.basis[row] = column;
    }

    /// Drive artificial columns that are still basic at the end of phase 1 out of the basis.
    ///
    /// Each such row has a right-hand side of zero, so exchanging its basic column for any
    /// non-basic column with a nonzero coefficient in that row changes no variable values. The
    /// exchange may disturb the phase-1 pricing row, which is fine: `install_objective` replaces
    /// it wholesale before phase 2. Rows whose every candidate entry is within the tolerance of
    /// zero read 0 = 0 and are linearly dependent on the others; their indices are returned,
    /// sorted, so the caller can drop them.
    pub fn pivot_out_artificials(&mut self) -> Vec<usize> {
        let artificial_start = self.column_group_end[ColumnKind::Surplus];
        let mut redundant_rows = Vec::new();

        for row in 0..self.nr_rows() {
            if self.basis[row] < artificial_start {
                continue;
            }
            let replacement = self
                .candidate_columns()
                .filter(|&column| !self.is_in_basis(column))
                .find(|&column| self.rows[row][column].abs() > self.epsilon);
            match replacement {
                Some(column) => self.bring_into_basis(column, row),
                None => redundant_rows.push(row),
            }
        }

        debug_assert!(redundant_rows.is_sorted());
        redundant_rows
    }

    /// Shed the artificial columns (and any redundant rows) after a successful phase 1.
    ///
    /// The surviving columns are copied into a fresh, smaller matrix rather than shifted in
    /// place; the artificial group sits at the end, so each new row is the old row's leading
    /// columns plus its right-hand side. Must only be called once `pivot_out_artificials` has
    /// cleared the basis of artificials.
    pub fn remove_artificials(mut self, redundant_rows: &[usize]) -> Self {
        let nr_kept = self.column_group_end[ColumnKind::Surplus];

        remove_indices(&mut self.rows, redundant_rows);
        remove_indices(&mut self.basis, redundant_rows);
        debug_assert!(self.basis.iter().all(|&column| column < nr_kept));

        let rhs_index = self.nr_columns();
        let copy_surviving = |values: &Vec<F>| {
            let mut fresh = Vec::with_capacity(nr_kept + 1);
            fresh.extend_from_slice(&values[..nr_kept]);
            fresh.push(values[rhs_index]);
            fresh
        };
        let rows = self.rows.iter().map(copy_surviving).collect();
        self.objective = copy_surviving(&self.objective);
        self.rows = rows;

        self.column_kinds.truncate(nr_kept);
        self.column_names.truncate(nr_kept);
        self.column_group_end[ColumnKind::Artificial] = nr_kept;

        self
    }

    /// Replace the objective row with reduced costs for the real objective: phase 2 set-up.
    ///
    /// The row starts as the negated cost vector and is then corrected for the incoming basis by
    /// eliminating each basic column, the same consistency rule the constructor applies for
    /// phase 1. Basic columns are identity columns in each other's rows, so one pass suffices.
    pub fn install_objective(&mut self, cost: &[F]) {
        debug_assert_eq!(cost.len(), self.column_group_end[ColumnKind::Original]);

        let width = self.nr_columns() + 1;
        let mut objective = vec![F::zero(); width];
        for (column, &value) in cost.iter().enumerate() {
            objective[column] = -value;
        }
        self.objective = objective;

        for row in 0..self.nr_rows() {
            let column = self.basis[row];
            let factor = self.objective[column];
            if factor != F::zero() {
                for position in 0..width {
                    self.objective[position] -= factor * self.rows[row][position];
                }
                self.objective[column] = F::zero();
            }
        }
    }

    /// Values of all columns at the current basis.
    ///
    /// Basic columns take their row's right-hand side (negatives within the tolerance are clamped
    /// to zero), non-basic columns are zero.
    pub fn basic_feasible_solution(&self) -> Vec<F> {
        debug_assert!(self.is_in_basic_feasible_solution_state());

        let mut values = vec![F::zero(); self.nr_columns()];
        for (row, &column) in self.basis.iter().enumerate() {
            values[column] = self.rhs(row).max(F::zero());
        }
        values
    }

    /// Whether the structural invariant holds: every basic column is an identity column with a
    /// zero reduced cost, and no constraint row has a meaningfully negative right-hand side.
    pub(crate) fn is_in_basic_feasible_solution_state(&self) -> bool {
        // Row operations accumulate error; checked more loosely than the pivot tolerance.
        let tolerance = self.epsilon.sqrt();
        let rhs_index = self.nr_columns();

        let rhs_feasible = self.rows.iter().all(|row| row[rhs_index] >= -tolerance);
        let basis_identity = self.basis.iter().enumerate().all(|(row, &column)| {
            (self.rows[row][column] - F::one()).abs() <= tolerance
                && self
                    .rows
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != row)
                    .all(|(_, values)| values[column].abs() <= tolerance)
                && self.objective[column].abs() <= tolerance
        });

        rhs_feasible && basis_identity
    }
}

impl<F: SimplexNumber> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name_width = 8;
        let column_width = 10;

        write!(f, "{:>name_width$} |", "basis")?;
        for name in &self.column_names {
            write!(f, "{:>column_width$}", name)?;
        }
        writeln!(f, "{:>column_width$}", "b")?;

        let total = name_width + 2 + (self.nr_columns() + 1) * column_width;
        writeln!(f, "{}", repeat_n('-', total).collect::<String>())?;

        for (row, values) in self.rows.iter().enumerate() {
            write!(f, "{:>name_width$} |", self.column_names[self.basis[row]])?;
            for value in values {
                write!(f, "{:>column_width$.3}", value)?;
            }
            writeln!(f)?;
        }

        write!(f, "{:>name_width$} |", "z")?;
        for value in &self.objective {
            write!(f, "{:>column_width$.3}", value)?;
        }
        writeln!(f)
    }
}
