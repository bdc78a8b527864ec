//! # Representation of an optimal solution
//!
//! Once a linear program is fully solved, a solution is derived. It is stated in terms of the
//! original variables: any splitting or negation applied during standardization has already been
//! undone, and the objective value carries the sign of the original objective direction.
use crate::data::number_types::SimplexNumber;

/// An optimal solution to a linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function at this solution.
    objective_value: F,
    /// One value per variable of the original problem, in their original order.
    variable_values: Vec<F>,
}

impl<F: SimplexNumber> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, variable_values: Vec<F>) -> Self {
        Self {
            objective_value,
            variable_values,
        }
    }

    /// Value of the objective function at this solution.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Values of the original variables, in their original order.
    pub fn variable_values(&self) -> &[F] {
        &self.variable_values
    }

    /// Value of a single original variable.
    pub fn value(&self, variable: usize) -> F {
        self.variable_values[variable]
    }
}
