//! Elitism: moving the best entities to the front of the population so that
//! selection, crossbreeding and mutation leave them alone.

use crate::search_space::Goal;

/// Partial selection sort: fills slots `[0, count)` with the `count` best items
/// in descending order. Each step finds the best of the remainder (first
/// occurrence on ties) and swaps it into the next front slot; items behind the
/// front are only moved by those swaps.
pub(crate) fn preserve_best<T>(items: &mut [T], scores: &mut [f64], goal: Goal, count: usize) {
    debug_assert_eq!(items.len(), scores.len());
    for slot in 0..count.min(items.len()) {
        let mut best = slot;
        for candidate in slot + 1..items.len() {
            if goal.is_better(scores[candidate], scores[best]) {
                best = candidate;
            }
        }
        items.swap(slot, best);
        scores.swap(slot, best);
    }
}
