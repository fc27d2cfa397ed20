use std::cmp::Ordering;

/// Disjoint-set forest over elements `0..len`
///
/// Union by rank with path compression. After any sequence of unions the
/// partition equals the set of regions joined so far.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Create `len` singleton sets
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Number of elements
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Test if the structure holds no elements
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `element`
    ///
    /// Elements outside `0..len` are their own representative.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = element;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            current = std::mem::replace(slot, root);
        }

        root
    }

    /// Merge the sets containing `a` and `b`
    ///
    /// Returns `true` if two distinct sets were joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }

        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(root_b).copied().unwrap_or(0);

        let (child, parent) = match rank_a.cmp(&rank_b) {
            Ordering::Less => (root_a, root_b),
            Ordering::Greater => (root_b, root_a),
            Ordering::Equal => {
                if let Some(rank) = self.rank.get_mut(root_a) {
                    *rank = rank.saturating_add(1);
                }
                (root_b, root_a)
            }
        };

        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` belong to the same set
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
