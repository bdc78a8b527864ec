//! # Building blocks to describe linear programs.

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

/// Sign restriction on a decision variable.
///
/// Variables without an explicit restriction are treated as nonnegative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VariableSign {
    /// x >= 0.
    #[default]
    NonNegative,
    /// x <= 0. Solved through the substitution x = -x', x' >= 0.
    NonPositive,
    /// No sign restriction. Solved through the substitution x = x⁺ - x⁻ with x⁺, x⁻ >= 0.
    Free,
}
