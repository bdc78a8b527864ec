//! # Linear programs
//!
//! A problem enters as a `GeneralForm`, is rewritten into a `StandardForm` over nonnegative
//! variables only, and leaves as a `Solution` stated in terms of the original variables.
pub mod elements;
pub mod general_form;
pub mod solution;
pub mod standard_form;
