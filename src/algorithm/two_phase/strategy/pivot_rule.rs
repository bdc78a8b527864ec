//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis. A column is profitable when its
//! reduced cost lies below minus the tolerance; when no candidate column is profitable, the
//! current basis is optimal. Candidates are the non-artificial, non-basic columns.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::SimplexNumber;

/// Deciding which column enters the basis on the next pivot.
///
/// Rules may keep state between pivots of one solve; a fresh instance is created per solve.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Select a profitable column, together with its reduced cost.
    ///
    /// `None` when no candidate column is profitable, which proves the current basis optimal.
    fn select_pivot_column<F: SimplexNumber>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)>;
}

/// Pivot on the column with the most negative reduced cost; the lowest column index wins ties.
///
/// The classic steepest-cost-coefficient rule. It can cycle on degenerate problems in theory,
/// which is why the solve carries an iteration cap.
pub struct MostNegative;

impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column<F: SimplexNumber>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let mut best: Option<(usize, F)> = None;
        for column in tableau.candidate_columns() {
            if tableau.is_in_basis(column) {
                continue;
            }
            let cost = tableau.relative_cost(column);
            if cost < -tableau.epsilon() {
                match best {
                    Some((_, lowest)) if cost >= lowest => {},
                    _ => best = Some((column, cost)),
                }
            }
        }
        best
    }
}

/// Simply pivot on the first profitable column: Bland's rule, which never cycles.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column<F: SimplexNumber>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        tableau
            .candidate_columns()
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < -tableau.epsilon())
    }
}
