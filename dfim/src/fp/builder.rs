use std::hash::Hash;

use ndarray::ArrayView2;
use tracing::debug;

use super::order::ItemOrder;
use super::tree::FPTree;

/// Derives the canonical order and inserts every transaction in it.
pub fn build_fp_tree<T>(transactions: &[Vec<T>]) -> (ItemOrder<T>, FPTree)
where
    T: Eq + Hash + Ord + Clone,
{
    let order = ItemOrder::from_transactions(transactions);
    let mut fp_tree = FPTree::new();

    for tx_items in order.canonicalize(transactions) {
        if !tx_items.is_empty() {
            fp_tree.insert_transaction(&tx_items);
        }
    }

    debug!(
        transactions = transactions.len(),
        items = order.len(),
        nodes = fp_tree.node_count(),
        "built fp-tree"
    );

    (order, fp_tree)
}

/// Convert binary transaction matrix to list of item sets
pub fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}

/// Rows are transactions, columns are items `0..m`, nonzero marks presence.
pub fn build_from_matrix(transactions: ArrayView2<i32>) -> (ItemOrder<usize>, FPTree) {
    build_fp_tree(&matrix_to_transactions(transactions))
}
