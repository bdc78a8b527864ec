//! # Algorithms
//!
//! The two-phase simplex method and the small helpers it is built from.
use crate::data::linear_program::solution::Solution;

pub mod two_phase;
pub(crate) mod utilities;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// Terminal algorithmic outcomes are values of this enum, never errors: callers branch on the
/// variant before reading a solution. `IterationLimitReached` is kept separate from the proven
/// outcomes so that "gave up" can be distinguished from "decided".
#[derive(Clone, Debug, PartialEq)]
pub enum SolveResult<F> {
    /// A finite optimum was found.
    Optimal(Solution<F>),
    /// No assignment satisfies all constraints.
    Infeasible,
    /// The objective can be improved without bound.
    Unbounded,
    /// The pivot cap was hit before any of the above could be decided.
    IterationLimitReached,
}

/// Configuration of a single solve.
///
/// The tolerance is fixed for the duration of a solve; it is configuration, not shared state.
#[derive(Clone, Copy, Debug)]
pub struct SolveOptions<F> {
    /// Hard cap on the number of pivots, shared by both phases.
    pub max_iterations: usize,
    /// Tolerance used uniformly for all comparisons against zero.
    pub epsilon: F,
}

impl Default for SolveOptions<f64> {
    fn default() -> Self {
        Self {
            max_iterations: 1_000,
            epsilon: 1e-9,
        }
    }
}
