//! Canonical enumeration order of harmonic indices: `0, 1, -1, 2, -2, ...`.
//!
//! Coefficients are stored in an unordered map; every place that walks them
//! (reporting, partial sums) goes through this module instead.

use std::cmp::Ordering;

/// `B = ⌊(K − 1) / 2⌋` for a requested coefficient count `K` (0 counts as 1).
#[must_use]
pub fn harmonic_bound(requested: usize) -> usize {
    (requested.max(1) - 1) / 2
}

/// Smaller magnitude first; on a tie the positive index wins.
#[must_use]
pub fn canonical_cmp(lhs: i64, rhs: i64) -> Ordering {
    lhs.unsigned_abs()
        .cmp(&rhs.unsigned_abs())
        .then_with(|| rhs.cmp(&lhs))
}

/// The full window `[-bound, bound]` in canonical order.
#[must_use]
pub fn canonical_order(bound: usize) -> Vec<i64> {
    let bound = bound as i64;
    let mut order = Vec::with_capacity(2 * bound as usize + 1);
    order.push(0);
    for n in 1..=bound {
        order.push(n);
        order.push(-n);
    }
    order
}

/// Sorts an arbitrary index set into canonical order.
#[must_use]
pub fn canonical_sort(indices: impl IntoIterator<Item = i64>) -> Vec<i64> {
    let mut sorted = indices.into_iter().collect::<Vec<_>>();
    sorted.sort_unstable_by(|&lhs, &rhs| canonical_cmp(lhs, rhs));
    sorted
}
