// Tree module - arena FP-tree with same-item occurrence chains

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, Header, NodeId};
pub use tree_ops::{Ancestors, Occurrences};
