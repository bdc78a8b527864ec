//! # Data structures
//!
//! Representations of linear programs in the different shapes they take on their way through the
//! solver, and the number abstraction the solver pivots with.
pub mod linear_program;
pub mod number_types;
