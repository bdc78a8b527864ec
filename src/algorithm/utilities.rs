//! # Utilities
//!
//! Helper functions for algorithms.

/// Reduce the size of a vector by removing the values at the given indices.
///
/// # Arguments
///
/// * `vector`: `Vec` to remove values from.
/// * `indices`: Indices to remove, sorted and without duplicates.
pub(crate) fn remove_indices<T>(vector: &mut Vec<T>, indices: &[usize]) {
    debug_assert!(indices.len() <= vector.len());
    debug_assert!(indices.is_sorted());
    debug_assert!(indices.windows(2).all(|pair| pair[0] != pair[1]));
    debug_assert!(indices.iter().all(|&index| index < vector.len()));

    let mut to_remove = indices.iter().copied().peekable();
    let mut position = 0;
    vector.retain(|_| {
        let remove = to_remove.peek() == Some(&position);
        if remove {
            to_remove.next();
        }
        position += 1;
        !remove
    });
}
