//! Union-Find data structure with path compression and union by rank
//!
//! Keyed by `NodeId` so callers can use the identifiers straight from the
//! graph without re-indexing. Amortized cost per operation is O(α(n)).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::algorithm::traits::NodeId;

/// Disjoint-set forest over node identifiers
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    /// Parent pointers for each element
    parent: HashMap<NodeId, NodeId>,
    /// Rank (upper bound on tree height) of each root
    rank: HashMap<NodeId, usize>,
    /// Number of disjoint sets
    num_components: usize,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structure with one singleton set per identifier
    pub fn from_ids(ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut uf = Self::new();
        for id in ids {
            uf.make_set(id);
        }
        uf
    }

    /// Creates a singleton set for `id`. No-op if `id` is already present.
    pub fn make_set(&mut self, id: NodeId) {
        if self.parent.contains_key(&id) {
            return;
        }
        self.parent.insert(id, id);
        self.rank.insert(id, 0);
        self.num_components += 1;
    }

    /// Representative of the set containing `id`
    ///
    /// Every node on the walked path is re-pointed directly at the root.
    /// An unregistered `id` is registered as a singleton first.
    pub fn find(&mut self, id: NodeId) -> NodeId {
        self.make_set(id);

        let mut root = id;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut node = id;
        while node != root {
            let next = self.parent[&node];
            self.parent.insert(node, root);
            node = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`
    ///
    /// Returns `false` when both are already in the same set, which signals
    /// that an edge between them would close a cycle.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];

        match rank_a.cmp(&rank_b) {
            Ordering::Less => {
                self.parent.insert(root_a, root_b);
            }
            Ordering::Greater => {
                self.parent.insert(root_b, root_a);
            }
            Ordering::Equal => {
                self.parent.insert(root_b, root_a);
                self.rank.insert(root_a, rank_a + 1);
            }
        }

        self.num_components -= 1;
        true
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets
    pub fn component_count(&self) -> usize {
        self.num_components
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
