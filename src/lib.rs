//! # A linear program solver
//!
//! Linear programs are solved using the two-phase Simplex method on a dense tableau. Arithmetic is
//! floating point; all comparisons against zero are made relative to a configurable tolerance.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
