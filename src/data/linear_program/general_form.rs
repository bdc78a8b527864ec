//! # General form
//!
//! A linear program as the caller states it: an objective direction, a cost vector, a list of
//! constraint rows with arbitrary (in)equality directions and right-hand sides, and a sign
//! restriction per variable. Instances are validated once at construction and immutable
//! afterwards; a malformed model is rejected here, before any pivot runs.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::data::linear_program::elements::{ConstraintType, Objective, VariableSign};
use crate::data::number_types::SimplexNumber;

/// A single row of the constraint system.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    /// Coefficients, one per decision variable.
    pub coefficients: Vec<F>,
    /// How the row relates to its right-hand side.
    pub constraint_type: ConstraintType,
    /// Right-hand side value.
    pub rhs: F,
}

/// A validated linear program.
///
/// Invariants, checked by `new`:
/// - at least one variable,
/// - every constraint row has exactly as many coefficients as there are variables,
/// - exactly one sign restriction per variable,
/// - all values are finite.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralForm<F> {
    objective: Objective,
    cost: Vec<F>,
    constraints: Vec<Constraint<F>>,
    signs: Vec<VariableSign>,
}

impl<F: SimplexNumber> GeneralForm<F> {
    /// Create a new `GeneralForm`, validating the model invariants.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether the cost function should be maximized or minimized.
    /// * `cost`: Cost coefficients, one per variable.
    /// * `constraints`: Constraint rows over those same variables.
    /// * `signs`: Sign restriction per variable.
    ///
    /// # Errors
    ///
    /// A `ModelError` describing the first violated invariant.
    pub fn new(
        objective: Objective,
        cost: Vec<F>,
        constraints: Vec<Constraint<F>>,
        signs: Vec<VariableSign>,
    ) -> Result<Self, ModelError> {
        let nr_variables = cost.len();
        if nr_variables == 0 {
            return Err(ModelError::NoVariables);
        }
        if signs.len() != nr_variables {
            return Err(ModelError::SignDimension {
                expected: nr_variables,
                actual: signs.len(),
            });
        }
        if cost.iter().any(|value| !value.is_finite()) {
            return Err(ModelError::NonFiniteCost);
        }
        for (row, constraint) in constraints.iter().enumerate() {
            if constraint.coefficients.len() != nr_variables {
                return Err(ModelError::RowDimension {
                    row,
                    expected: nr_variables,
                    actual: constraint.coefficients.len(),
                });
            }
            let finite = constraint.rhs.is_finite()
                && constraint.coefficients.iter().all(|value| value.is_finite());
            if !finite {
                return Err(ModelError::NonFiniteRow { row });
            }
        }

        Ok(Self {
            objective,
            cost,
            constraints,
            signs,
        })
    }

    /// Whether the cost function is maximized or minimized.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost coefficients, one per variable.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// All constraint rows.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Sign restriction per variable.
    pub fn signs(&self) -> &[VariableSign] {
        &self.signs
    }

    /// Number of decision variables in the original statement of the problem.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// A model violated one of the `GeneralForm` invariants.
///
/// These are caller mistakes, not solver outcomes; infeasibility and unboundedness are reported
/// through the solve result instead.
#[derive(Debug, Eq, PartialEq)]
pub enum ModelError {
    /// The cost vector was empty.
    NoVariables,
    /// The number of sign restrictions differs from the number of variables.
    SignDimension {
        /// Number of variables.
        expected: usize,
        /// Number of sign restrictions provided.
        actual: usize,
    },
    /// A constraint row has the wrong number of coefficients.
    RowDimension {
        /// Index of the offending constraint.
        row: usize,
        /// Number of variables.
        expected: usize,
        /// Number of coefficients provided.
        actual: usize,
    },
    /// The cost vector contains a NaN or infinite value.
    NonFiniteCost,
    /// A constraint row or its right-hand side contains a NaN or infinite value.
    NonFiniteRow {
        /// Index of the offending constraint.
        row: usize,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::NoVariables => write!(f, "the model has no variables"),
            ModelError::SignDimension { expected, actual } => write!(
                f,
                "expected {} sign restrictions, got {}",
                expected, actual,
            ),
            ModelError::RowDimension {
                row,
                expected,
                actual,
            } => write!(
                f,
                "constraint {} has {} coefficients, expected {}",
                row, actual, expected,
            ),
            ModelError::NonFiniteCost => write!(f, "the cost vector contains a non finite value"),
            ModelError::NonFiniteRow { row } => {
                write!(f, "constraint {} contains a non finite value", row)
            },
        }
    }
}

impl Error for ModelError {
}
