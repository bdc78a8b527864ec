//! # End-to-end problems
//!
//! Fixtures shared between unit tests and full runs of the solve pipeline, plus a feasibility
//! check for returned assignments.
pub(crate) mod problem_2;

use crate::data::linear_program::elements::{ConstraintType, VariableSign};
use crate::data::linear_program::general_form::GeneralForm;

/// Assert that `values` satisfies every constraint and sign restriction of `general`.
pub(crate) fn assert_feasible(general: &GeneralForm<f64>, values: &[f64], tolerance: f64) {
    assert_eq!(values.len(), general.nr_variables());

    for (variable, sign) in general.signs().iter().enumerate() {
        let value = values[variable];
        match sign {
            VariableSign::NonNegative => {
                assert!(value >= -tolerance, "x{} = {} is negative", variable + 1, value);
            },
            VariableSign::NonPositive => {
                assert!(value <= tolerance, "x{} = {} is positive", variable + 1, value);
            },
            VariableSign::Free => {},
        }
    }

    for (row, constraint) in general.constraints().iter().enumerate() {
        let activity: f64 = constraint
            .coefficients
            .iter()
            .zip(values)
            .map(|(&coefficient, &value)| coefficient * value)
            .sum();
        match constraint.constraint_type {
            ConstraintType::Less => assert!(
                activity <= constraint.rhs + tolerance,
                "row {}: {} > {}",
                row,
                activity,
                constraint.rhs,
            ),
            ConstraintType::Greater => assert!(
                activity >= constraint.rhs - tolerance,
                "row {}: {} < {}",
                row,
                activity,
                constraint.rhs,
            ),
            ConstraintType::Equal => assert!(
                (activity - constraint.rhs).abs() <= tolerance,
                "row {}: {} != {}",
                row,
                activity,
                constraint.rhs,
            ),
        }
    }
}
