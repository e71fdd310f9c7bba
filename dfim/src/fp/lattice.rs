use tracing::trace;

use super::storage::ItemsetStorage;
use super::support::disjunctive_support;
use super::tree::FPTree;

/// Walks the itemset lattice top-down from `items` and collects every
/// itemset with disjunctive support of at least `min_support`.
///
/// Candidates are formed by removing one item at a time, right to left, and
/// a qualifying candidate is expanded by further removals strictly to the
/// left of the removed position. `items` itself is not reported and no
/// candidate shrinks below one item. A failing candidate is not expanded:
/// removing items never raises OR-support.
pub fn enumerate_itemsets(tree: &FPTree, items: &[usize], min_support: usize) -> ItemsetStorage {
    let mut result = ItemsetStorage::new();
    let mut current = items.to_vec();

    if let Some(start) = current.len().checked_sub(1) {
        generate_recursive(tree, &mut current, start, min_support, &mut result);
    }

    result
}

// `current` is edited in place and restored before returning.
fn generate_recursive(
    tree: &FPTree,
    current: &mut Vec<usize>,
    start: usize,
    min_support: usize,
    result: &mut ItemsetStorage,
) {
    if current.len() <= 1 {
        return;
    }

    for i in (0..=start).rev() {
        let removed = current.remove(i);
        let support = disjunctive_support(tree, current);

        if support >= min_support {
            trace!(itemset = ?current, support, "frequent itemset");
            result.add_itemset_with_support(current, support);
            if i > 0 {
                generate_recursive(tree, current, i - 1, min_support, result);
            }
        }

        current.insert(i, removed);
    }
}
