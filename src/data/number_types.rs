//! # Number types
//!
//! The solver is generic over the scalar it pivots with. Exact arithmetic is out of scope; the
//! number model is floating point together with a tolerance, so the bound is `num_traits::Float`
//! extended with the assignment operators and formatting the tableau needs.
use std::fmt::{Debug, Display};

use num_traits::{Float, NumAssign};

/// Scalar type the simplex method can pivot with.
///
/// Implemented by `f64` and `f32` through the blanket implementation. Comparisons against zero are
/// never exact; they happen relative to the tolerance configured per solve.
pub trait SimplexNumber: Float + NumAssign + Debug + Display {}

impl<F: Float + NumAssign + Debug + Display> SimplexNumber for F {}
