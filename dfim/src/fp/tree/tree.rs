use std::collections::{BTreeMap, HashMap};

/// Index of a node inside its tree's arena. Index 0 is always the root.
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct FPNode {
    /// Canonical rank of the item, `None` only for the root.
    pub(super) item: Option<usize>,
    pub(super) count: usize,
    pub(super) parent: Option<NodeId>,
    pub(super) children: BTreeMap<usize, NodeId>,
    /// Next node carrying the same item, in creation order.
    pub(super) neighbour: Option<NodeId>,
}

/// First and last created occurrence of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub head: NodeId,
    pub tail: NodeId,
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub(super) nodes: Vec<FPNode>,
    pub(super) header_table: HashMap<usize, Header>,
}

impl FPNode {
    pub(super) fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: BTreeMap::new(),
            neighbour: None,
        }
    }

    pub(super) fn new_item(item: usize, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count: 1,
            parent: Some(parent),
            children: BTreeMap::new(),
            neighbour: None,
        }
    }

    pub fn item(&self) -> Option<usize> {
        self.item
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn neighbour(&self) -> Option<NodeId> {
        self.neighbour
    }

    pub fn child(&self, item: usize) -> Option<NodeId> {
        self.children.get(&item).copied()
    }

    /// Children in ascending item order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
        }
    }

    pub fn root(&self) -> &FPNode {
        &self.nodes[Self::ROOT]
    }

    /// Panics if `id` was not handed out by this tree.
    pub fn node(&self, id: NodeId) -> &FPNode {
        &self.nodes[id]
    }

    /// Number of item-carrying nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn header(&self, item: usize) -> Option<Header> {
        self.header_table.get(&item).copied()
    }

    /// Number of distinct items present in the tree.
    pub fn item_count(&self) -> usize {
        self.header_table.len()
    }

    /// Non-empty transactions inserted so far, i.e. the sum of the root's
    /// child counts.
    pub fn transaction_count(&self) -> usize {
        self.root().children().map(|idx| self.nodes[idx].count).sum()
    }
}
