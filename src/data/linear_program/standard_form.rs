//! # Standard form
//!
//! The shape the simplex method works on: every variable is nonnegative, the internal objective
//! sense is always maximization and every right-hand side is nonnegative. Nonpositive variables
//! are substituted (x = -x'), free variables are split (x = x⁺ - x⁻), a minimization objective is
//! negated and rows with a negative right-hand side are negated with their comparator flipped.
//! The mapping back to the original variables is kept so a solution can be restated in the
//! caller's terms.
use crate::data::linear_program::elements::{ConstraintType, Objective, VariableSign};
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::number_types::SimplexNumber;

/// How an original variable is represented among the standardized columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VariableMapping {
    /// A nonnegative variable, represented by a single column with unchanged coefficients.
    Direct(usize),
    /// A nonpositive variable, represented by a single column with negated coefficients.
    Negated(usize),
    /// A free variable, represented by a nonnegative pair through x = x⁺ - x⁻.
    Split {
        /// Column holding x⁺.
        positive: usize,
        /// Column holding x⁻.
        negative: usize,
    },
}

/// A linear program over nonnegative variables only.
///
/// Derived once from a `GeneralForm` and immutable afterwards. The cost vector is oriented for
/// maximization regardless of the original objective direction; the caller of the solver is
/// responsible for negating the optimal value back when the original sense was minimization.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    cost: Vec<F>,
    rows: Vec<Vec<F>>,
    constraint_types: Vec<ConstraintType>,
    rhs: Vec<F>,
    mapping: Vec<VariableMapping>,
    column_names: Vec<String>,
}

impl<F: SimplexNumber> GeneralForm<F> {
    /// Rewrite this problem over nonnegative variables only.
    pub fn standard_form(&self) -> StandardForm<F> {
        let (mapping, column_names, nr_columns) = expansion_mapping(self.signs());

        let mut cost = expand_row(&mapping, self.cost(), nr_columns);
        if self.objective() == Objective::Minimize {
            for value in &mut cost {
                *value = -*value;
            }
        }

        let mut rows = Vec::with_capacity(self.nr_constraints());
        let mut constraint_types = Vec::with_capacity(self.nr_constraints());
        let mut rhs = Vec::with_capacity(self.nr_constraints());
        for constraint in self.constraints() {
            let mut row = expand_row(&mapping, &constraint.coefficients, nr_columns);
            let mut constraint_type = constraint.constraint_type;
            let mut b = constraint.rhs;
            if b < F::zero() {
                for value in &mut row {
                    *value = -*value;
                }
                b = -b;
                constraint_type = match constraint_type {
                    ConstraintType::Less => ConstraintType::Greater,
                    ConstraintType::Greater => ConstraintType::Less,
                    ConstraintType::Equal => ConstraintType::Equal,
                };
            }
            rows.push(row);
            constraint_types.push(constraint_type);
            rhs.push(b);
        }

        StandardForm {
            cost,
            rows,
            constraint_types,
            rhs,
            mapping,
            column_names,
        }
    }
}

/// Decide which columns each original variable occupies.
fn expansion_mapping(signs: &[VariableSign]) -> (Vec<VariableMapping>, Vec<String>, usize) {
    let mut mapping = Vec::with_capacity(signs.len());
    let mut column_names = Vec::with_capacity(signs.len());
    let mut nr_columns = 0;

    for (variable, sign) in signs.iter().enumerate() {
        match sign {
            VariableSign::NonNegative => {
                mapping.push(VariableMapping::Direct(nr_columns));
                column_names.push(format!("x{}", variable + 1));
                nr_columns += 1;
            },
            VariableSign::NonPositive => {
                mapping.push(VariableMapping::Negated(nr_columns));
                column_names.push(format!("x{}_neg", variable + 1));
                nr_columns += 1;
            },
            VariableSign::Free => {
                mapping.push(VariableMapping::Split {
                    positive: nr_columns,
                    negative: nr_columns + 1,
                });
                column_names.push(format!("x{}_pos", variable + 1));
                column_names.push(format!("x{}_neg", variable + 1));
                nr_columns += 2;
            },
        }
    }

    (mapping, column_names, nr_columns)
}

/// Restate a coefficient row over the standardized columns.
fn expand_row<F: SimplexNumber>(
    mapping: &[VariableMapping],
    row: &[F],
    nr_columns: usize,
) -> Vec<F> {
    debug_assert_eq!(mapping.len(), row.len());

    let mut expanded = vec![F::zero(); nr_columns];
    for (variable, target) in mapping.iter().enumerate() {
        match *target {
            VariableMapping::Direct(column) => expanded[column] = row[variable],
            VariableMapping::Negated(column) => expanded[column] = -row[variable],
            VariableMapping::Split { positive, negative } => {
                expanded[positive] = row[variable];
                expanded[negative] = -row[variable];
            },
        }
    }
    expanded
}

impl<F: SimplexNumber> StandardForm<F> {
    /// Cost coefficients over the standardized columns, oriented for maximization.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint rows over the standardized columns.
    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Comparator per constraint row.
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Right-hand sides, all nonnegative.
    pub fn rhs(&self) -> &[F] {
        &self.rhs
    }

    /// Representation of each original variable among the standardized columns.
    pub fn mapping(&self) -> &[VariableMapping] {
        &self.mapping
    }

    /// Diagnostic names of the standardized columns.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of standardized columns.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.rows.len()
    }

    /// Restate values of the standardized columns in terms of the original variables.
    ///
    /// # Arguments
    ///
    /// * `column_values`: One value per standardized column (trailing slack values, if any, are
    ///   ignored).
    pub fn original_solution(&self, column_values: &[F]) -> Vec<F> {
        debug_assert!(column_values.len() >= self.nr_columns());

        self.mapping
            .iter()
            .map(|target| match *target {
                VariableMapping::Direct(column) => column_values[column],
                VariableMapping::Negated(column) => -column_values[column],
                VariableMapping::Split { positive, negative } => {
                    column_values[positive] - column_values[negative]
                },
            })
            .collect()
    }
}
