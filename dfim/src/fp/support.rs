use std::collections::VecDeque;

use super::error::MiningError;
use super::tree::{FPTree, NodeId};

/// Number of transactions containing at least one item of `itemset`.
///
/// `itemset` holds canonical ranks in strictly ascending order. Each
/// transaction is attributed to the earliest itemset item on its path, so an
/// occurrence node only contributes when none of the earlier itemset items is
/// among its ancestors.
pub fn disjunctive_support(tree: &FPTree, itemset: &[usize]) -> usize {
    itemset
        .iter()
        .enumerate()
        .map(|(k, &item)| {
            let earlier = &itemset[..k];
            tree.occurrences(item)
                .filter(|&node| !path_contains_any(tree, node, earlier))
                .map(|node| tree.node(node).count())
                .sum::<usize>()
        })
        .sum()
}

/// Same as [`disjunctive_support`] but rejects itemsets that are not strictly
/// ascending.
pub fn checked_support(tree: &FPTree, itemset: &[usize]) -> Result<usize, MiningError> {
    if let Some(pair) = itemset.windows(2).find(|w| w[0] >= w[1]) {
        return Err(MiningError::UnorderedItemset {
            previous: pair[0],
            next: pair[1],
        });
    }
    Ok(disjunctive_support(tree, itemset))
}

fn path_contains_any(tree: &FPTree, node: NodeId, earlier: &[usize]) -> bool {
    earlier
        .iter()
        .rev()
        .any(|&target| path_contains(tree, node, target))
}

// Ancestor ranks strictly decrease toward the root, so the walk can stop as
// soon as it passes below `target`.
fn path_contains(tree: &FPTree, node: NodeId, target: usize) -> bool {
    for ancestor in tree.ancestors(node) {
        match tree.node(ancestor).item() {
            Some(item) if item == target => return true,
            Some(item) if item < target => return false,
            _ => {}
        }
    }
    false
}

/// Breadth-first reference calculator.
///
/// Visits the tree from the root and adds the count of every node whose item
/// belongs to `itemset` without expanding below it. Only used to cross-check
/// [`disjunctive_support`].
pub fn bfs_support(tree: &FPTree, itemset: &[usize]) -> usize {
    let mut support = 0;
    let mut visited = vec![false; tree.node_count() + 1];
    let mut queue = VecDeque::new();

    visited[FPTree::ROOT] = true;
    queue.push_back(FPTree::ROOT);

    while let Some(src) = queue.pop_front() {
        for child in tree.node(src).children() {
            if visited[child] {
                continue;
            }
            let node = tree.node(child);
            if node.item().is_some_and(|item| itemset.contains(&item)) {
                support += node.count();
                continue;
            }
            visited[child] = true;
            queue.push_back(child);
        }
    }

    support
}
