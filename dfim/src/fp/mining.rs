use std::hash::Hash;

use tracing::info;

use super::builder::build_fp_tree;
use super::error::MiningError;
use super::lattice::enumerate_itemsets;
use super::order::ItemOrder;
use super::storage::ItemsetStorage;
use super::support::{checked_support, disjunctive_support};
use super::tree::FPTree;

pub const DEFAULT_MIN_SUPPORT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningConfig {
    /// Minimum number of transactions an itemset must touch.
    pub min_support: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: usize) -> Result<Self, MiningError> {
        let config = Self { min_support };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        if self.min_support == 0 {
            return Err(MiningError::InvalidMinSupport {
                value: self.min_support,
            });
        }
        Ok(())
    }
}

/// A dataset compiled into its canonical order and FP-tree, ready for
/// repeated support queries and lattice enumeration.
#[derive(Debug, Clone)]
pub struct DisjunctiveMiner<T> {
    order: ItemOrder<T>,
    tree: FPTree,
}

impl<T> DisjunctiveMiner<T>
where
    T: Eq + Hash + Ord + Clone,
{
    pub fn new(transactions: &[Vec<T>]) -> Self {
        let (order, tree) = build_fp_tree(transactions);
        Self { order, tree }
    }

    pub fn from_parts(order: ItemOrder<T>, tree: FPTree) -> Self {
        Self { order, tree }
    }

    pub fn order(&self) -> &ItemOrder<T> {
        &self.order
    }

    pub fn tree(&self) -> &FPTree {
        &self.tree
    }

    /// Disjunctive support of `items`, given in any order. Items never seen
    /// in the dataset contribute nothing.
    pub fn support(&self, items: &[T]) -> usize {
        disjunctive_support(&self.tree, &self.order.encode(items))
    }

    /// Disjunctive support of an itemset already expressed as ascending ranks.
    pub fn rank_support(&self, ranks: &[usize]) -> Result<usize, MiningError> {
        checked_support(&self.tree, ranks)
    }

    pub fn mine(&self, config: &MiningConfig) -> Result<MiningResult<T>, MiningError> {
        config.validate()?;

        let all_items: Vec<usize> = (0..self.order.len()).collect();
        let storage = enumerate_itemsets(&self.tree, &all_items, config.min_support);

        info!(
            min_support = config.min_support,
            found = storage.len(),
            "frequent ORed itemsets found"
        );

        Ok(MiningResult {
            storage,
            order: self.order.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MiningResult<T> {
    storage: ItemsetStorage,
    order: ItemOrder<T>,
}

impl<T> MiningResult<T>
where
    T: Eq + Hash + Ord + Clone,
{
    /// Itemsets in rank form, in enumeration order.
    pub fn storage(&self) -> &ItemsetStorage {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Itemsets mapped back to their items, in canonical order within each
    /// itemset.
    pub fn itemsets(&self) -> Vec<(Vec<T>, usize)> {
        self.storage
            .iter()
            .map(|(ranks, support)| (self.order.decode(ranks), support))
            .collect()
    }
}
