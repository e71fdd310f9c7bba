pub mod builder;
pub mod error;
pub mod lattice;
pub mod mining;
pub mod order;
pub mod storage;
pub mod support;
pub mod tree;


pub use builder::{build_fp_tree, build_from_matrix};
pub use error::MiningError;
pub use lattice::enumerate_itemsets;
pub use mining::{DEFAULT_MIN_SUPPORT, DisjunctiveMiner, MiningConfig, MiningResult};
pub use order::ItemOrder;
pub use storage::ItemsetStorage;
pub use support::{bfs_support, checked_support, disjunctive_support};
pub use tree::{FPNode, FPTree, Header, NodeId};
