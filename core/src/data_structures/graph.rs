//! Weighted graph data structure consumed by every solver
//!
//! A `Graph` is built once per analysis from caller-supplied nodes and edges
//! and is read-only afterwards. Construction validates the whole input up
//! front so solvers can rely on the invariants below without re-checking.
//!
//! # Invariants
//! - Node identifiers are unique
//! - Every edge endpoint references an existing node
//! - Every weight is finite and non-negative
//!
//! Parallel edges are kept as independent candidates; no solver assumes a
//! simple graph.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId};

/// 2D canvas position. Opaque to the solvers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            position: Position::default(),
        }
    }

    pub fn at(id: NodeId, position: Position) -> Self {
        Self { id, position }
    }
}

/// Weighted edge between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    #[inline]
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Endpoint opposite to `node`, if `node` touches this edge
    #[inline]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }

    /// Direction-agnostic endpoint match
    #[inline]
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Immutable weighted graph, directed or undirected
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    /// Node id -> position in `nodes`
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    /// Edges leaving each node in insertion order (indices into `edges`)
    outgoing: Vec<Vec<usize>>,
    /// Edges touching each node in insertion order, either direction
    incident: Vec<Vec<usize>>,
    directed: bool,
}

impl Graph {
    /// Validates and builds a graph
    ///
    /// Fails with `DuplicateNode`, `InvalidEdge` (unknown endpoint) or
    /// `InvalidWeight` (negative, NaN or infinite). Nothing is coerced.
    pub fn build(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
        directed: bool,
    ) -> Result<Self, AlgorithmError> {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        let mut index = HashMap::with_capacity(nodes.len());

        for (slot, node) in nodes.iter().enumerate() {
            if index.insert(node.id, slot).is_some() {
                return Err(AlgorithmError::DuplicateNode(node.id));
            }
        }

        let edges: Vec<Edge> = edges.into_iter().collect();
        let mut outgoing = vec![Vec::new(); nodes.len()];
        let mut incident = vec![Vec::new(); nodes.len()];

        for (edge_index, edge) in edges.iter().enumerate() {
            let from_slot = *index.get(&edge.from).ok_or(AlgorithmError::InvalidEdge {
                from: edge.from,
                to: edge.to,
                missing: edge.from,
            })?;
            let to_slot = *index.get(&edge.to).ok_or(AlgorithmError::InvalidEdge {
                from: edge.from,
                to: edge.to,
                missing: edge.to,
            })?;

            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(AlgorithmError::InvalidWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }

            outgoing[from_slot].push(edge_index);
            incident[from_slot].push(edge_index);
            if to_slot != from_slot {
                incident[to_slot].push(edge_index);
            }
        }

        log::trace!(
            "Built {} graph with {} nodes and {} edges",
            if directed { "directed" } else { "undirected" },
            nodes.len(),
            edges.len()
        );

        Ok(Self {
            nodes,
            index,
            edges,
            outgoing,
            incident,
            directed,
        })
    }

    /// Builds a graph from bare identifiers and `(from, to, weight)` triples
    pub fn from_triples(
        ids: impl IntoIterator<Item = usize>,
        triples: impl IntoIterator<Item = (usize, usize, f64)>,
        directed: bool,
    ) -> Result<Self, AlgorithmError> {
        Self::build(
            ids.into_iter().map(|id| Node::new(NodeId(id))),
            triples
                .into_iter()
                .map(|(from, to, weight)| Edge::new(NodeId(from), NodeId(to), weight)),
            directed,
        )
    }

    /// Edges traversable from `node` with the endpoint they lead to
    ///
    /// Directed graphs yield outgoing edges only; undirected graphs yield
    /// every incident edge. Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> Vec<(&Edge, NodeId)> {
        let Some(&slot) = self.index.get(&node) else {
            return Vec::new();
        };

        let adjacency = if self.directed {
            &self.outgoing[slot]
        } else {
            &self.incident[slot]
        };

        adjacency
            .iter()
            .map(|&edge_index| {
                let edge = &self.edges[edge_index];
                let other = if edge.from == node { edge.to } else { edge.from };
                (edge, other)
            })
            .collect()
    }

    /// Every edge touching `node` as `(edge index, edge)`, ignoring direction
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.index
            .get(&node)
            .map(|&slot| self.incident[slot].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&edge_index| (edge_index, &self.edges[edge_index]))
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

/// Equal when node ids, edge endpoints/weights and the directed flag match.
/// Positions are display-only and do not take part.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed
            && self.edges == other.edges
            && self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(a, b)| a.id == b.id)
    }
}
