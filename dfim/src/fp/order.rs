use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Canonical item order of one mining run.
///
/// Items are ranked by descending frequency, ties broken by ascending item
/// value. Rank 0 is the most frequent item. Everything downstream of the
/// order (tree, support, enumeration) works on ranks.
#[derive(Debug, Clone)]
pub struct ItemOrder<T> {
    items: Vec<T>,
    frequencies: Vec<usize>,
    ranks: HashMap<T, usize>,
}

impl<T> ItemOrder<T>
where
    T: Eq + Hash + Ord + Clone,
{
    /// Counts, for every item, the transactions it appears in. A repeated
    /// item counts once per transaction.
    pub fn from_transactions(transactions: &[Vec<T>]) -> Self {
        let mut item_counts: HashMap<&T, usize> = HashMap::new();
        for transaction in transactions {
            let distinct: HashSet<&T> = transaction.iter().collect();
            for item in distinct {
                *item_counts.entry(item).or_insert(0) += 1;
            }
        }

        let mut ordered: Vec<(&T, usize)> = item_counts.into_iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let items: Vec<T> = ordered.iter().map(|&(item, _)| item.clone()).collect();
        let frequencies = ordered.iter().map(|&(_, count)| count).collect();
        let ranks = items
            .iter()
            .enumerate()
            .map(|(rank, item)| (item.clone(), rank))
            .collect();

        Self {
            items,
            frequencies,
            ranks,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in canonical order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn rank(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn item(&self, rank: usize) -> Option<&T> {
        self.items.get(rank)
    }

    /// Number of appearances of the item at `rank`.
    pub fn frequency(&self, rank: usize) -> Option<usize> {
        self.frequencies.get(rank).copied()
    }

    /// Maps a transaction to strictly ascending ranks, dropping items outside
    /// the order and repeats.
    pub fn encode(&self, transaction: &[T]) -> Vec<usize> {
        let mut ranks: Vec<usize> = transaction
            .iter()
            .filter_map(|item| self.rank(item))
            .collect();
        ranks.sort_unstable();
        ranks.dedup();
        ranks
    }

    pub fn canonicalize(&self, transactions: &[Vec<T>]) -> Vec<Vec<usize>> {
        transactions
            .iter()
            .map(|transaction| self.encode(transaction))
            .collect()
    }

    /// Ranks outside the order are skipped.
    pub fn decode(&self, ranks: &[usize]) -> Vec<T> {
        ranks
            .iter()
            .filter_map(|&rank| self.item(rank).cloned())
            .collect()
    }
}
