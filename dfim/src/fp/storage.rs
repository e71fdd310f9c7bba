/// Frequent itemsets with their supports, kept in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsetStorage {
    pub items: Vec<usize>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<usize>,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_itemset_with_support(&mut self, items: &[usize], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> + '_ {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.supports[idx]))
    }
}
