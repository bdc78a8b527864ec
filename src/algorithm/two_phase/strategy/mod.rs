//! # Strategies
//!
//! Decisions the simplex method leaves open, such as which profitable column enters the basis.
pub mod pivot_rule;
