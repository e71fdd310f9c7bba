use std::fmt;

use super::tree::{FPNode, FPTree, Header, NodeId};

impl FPTree {
    /// Inserts one transaction whose items are canonical ranks in strictly
    /// ascending order, as produced by `ItemOrder::encode`.
    pub fn insert_transaction(&mut self, transaction: &[usize]) {
        debug_assert!(
            transaction.windows(2).all(|w| w[0] < w[1]),
            "transaction items must be strictly ascending ranks"
        );

        let mut current_index = Self::ROOT;

        for &item in transaction {
            if let Some(child_index) = self.nodes[current_index].child(item) {
                self.nodes[child_index].count += 1;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.link_occurrence(item, new_index);
                current_index = new_index;
            }
        }
    }

    fn link_occurrence(&mut self, item: usize, node: NodeId) {
        match self.header_table.get_mut(&item) {
            Some(header) => {
                self.nodes[header.tail].neighbour = Some(node);
                header.tail = node;
            }
            None => {
                self.header_table.insert(item, Header { head: node, tail: node });
            }
        }
    }

    /// Every node carrying `item`, in creation order.
    pub fn occurrences(&self, item: usize) -> Occurrences<'_> {
        Occurrences {
            tree: self,
            next: self.header_table.get(&item).map(|header| header.head),
        }
    }

    /// Ancestors of `node` from its parent upward, root excluded.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.nodes[node].parent,
        }
    }

    /// Prefix leading to `node` in root-to-node order, root and `node`
    /// excluded.
    pub fn ancestor_path(&self, node: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.ancestors(node).collect();
        path.reverse();
        path
    }

    /// Item paths preceding each occurrence of `item`, paired with the
    /// occurrence count. Occurrences directly under the root are skipped.
    pub fn prefix_paths(&self, item: usize) -> Vec<(Vec<usize>, usize)> {
        self.occurrences(item)
            .filter_map(|idx| {
                let path: Vec<usize> = self
                    .ancestor_path(idx)
                    .into_iter()
                    .filter_map(|ancestor| self.nodes[ancestor].item)
                    .collect();
                (!path.is_empty()).then_some((path, self.nodes[idx].count))
            })
            .collect()
    }

    /// Conventional support of a single item: sum of its occurrence counts.
    pub fn item_support(&self, item: usize) -> usize {
        self.occurrences(item).map(|idx| self.nodes[idx].count).sum()
    }

    /// Items present in the tree, in ascending rank order.
    pub fn items(&self) -> Vec<usize> {
        let mut items: Vec<usize> = self.header_table.keys().copied().collect();
        items.sort_unstable();
        items
    }

    /// Indented dump of the tree followed by every occurrence chain.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, idx: NodeId, depth: usize) -> fmt::Result {
        let node = &self.nodes[idx];
        match node.item {
            None => writeln!(f, "{}<FPNode (root)>", "  ".repeat(depth))?,
            Some(item) => writeln!(
                f,
                "{}<FPNode {} ({})>",
                "  ".repeat(depth),
                item,
                node.count
            )?,
        }
        for child in node.children() {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for FPTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FPTree")?;
        self.fmt_node(f, Self::ROOT, 1)?;
        writeln!(f, "Routes")?;
        for item in self.items() {
            writeln!(f, "     {}", item)?;
            for idx in self.occurrences(item) {
                writeln!(f, "     <FPNode {} ({})>", item, self.nodes[idx].count)?;
            }
        }
        Ok(())
    }
}

/// Walks an occurrence chain head to tail through neighbour links.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    tree: &'a FPTree,
    next: Option<NodeId>,
}

impl Iterator for Occurrences<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.nodes[current].neighbour;
        Some(current)
    }
}

/// Walks parent links upward, stopping before the root.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a FPTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        let node = &self.tree.nodes[current];
        if node.is_root() {
            self.next = None;
            return None;
        }
        self.next = node.parent;
        Some(current)
    }
}
