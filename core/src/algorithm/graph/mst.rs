//! Minimum Spanning Tree Algorithm Implementation
//!
//! This module implements Kruskal's algorithm with union-find optimization and
//! Prim's algorithm with priority queue optimization.
//!
//! # Theoretical Foundation
//!
//! - **Cut Property**: For any cut (S, V-S), the minimum-weight crossing edge
//!   is safe for the MST (Prim's algorithm foundation)
//! - **Cycle Property**: For any cycle, the maximum-weight edge is not in any MST
//!   (Kruskal's algorithm foundation)
//!
//! Both solvers read every edge as traversable in both directions, whatever
//! the graph's directed flag.
//!
//! # Disconnected graphs
//!
//! Neither solver treats disconnection as an error. Prim returns the MST of
//! the component containing the start node; Kruskal returns a spanning
//! forest with one tree per component.
//!
//! # Algorithmic Complexity
//!
//! - **Kruskal's Algorithm**: O(E log E) ≈ O(E log V) with union-find optimization
//! - **Prim's Algorithm**: O(E log V) with binary heap priority queue
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashSet;

use crate::algorithm::traits::{Algorithm, AlgorithmError, EdgeSet, NodeId};
use crate::data_structures::graph::Graph;
use crate::data_structures::priority_queue::StablePriorityQueue;
use crate::data_structures::union_find::UnionFind;

/// Compute the MST of the component containing `start` using Prim's algorithm
///
/// **Algorithm**: Grow the tree by the minimum-weight edge crossing the cut;
/// equal weights resolve to the candidate that entered the frontier first
/// **Time Complexity**: O(E log V) with binary heap
/// **Correctness**: Cut property ensures optimality
pub fn prim_mst(graph: &Graph, start: NodeId) -> Result<EdgeSet, AlgorithmError> {
    if !graph.contains_node(start) {
        return Err(AlgorithmError::UnknownStartNode(start));
    }

    let node_count = graph.node_count();
    let mut visited = HashSet::with_capacity(node_count);
    let mut frontier = StablePriorityQueue::with_capacity(graph.edge_count());
    let mut mst_edges = EdgeSet::with_capacity(node_count.saturating_sub(1));
    let mut pops = 0usize;

    visited.insert(start);
    expose_edges(graph, start, &visited, &mut frontier);

    while visited.len() < node_count {
        let Some((_, (edge_index, next))) = frontier.pop() else {
            break;
        };
        pops += 1;

        // Both endpoints joined the tree after this candidate was queued
        if !visited.insert(next) {
            continue;
        }

        mst_edges.push(graph.edges()[edge_index]);
        expose_edges(graph, next, &visited, &mut frontier);
    }

    log::debug!(
        "Prim from {}: {} edges, weight {}, {} of {} nodes reached, {} frontier pops",
        start,
        mst_edges.len(),
        mst_edges.total_weight(),
        visited.len(),
        node_count,
        pops
    );

    Ok(mst_edges)
}

/// Queue every edge leading from `node` to a node outside the tree
fn expose_edges(
    graph: &Graph,
    node: NodeId,
    visited: &HashSet<NodeId>,
    frontier: &mut StablePriorityQueue<(usize, NodeId)>,
) {
    for (edge_index, edge) in graph.incident_edges(node) {
        if let Some(other) = edge.other(node) {
            if !visited.contains(&other) {
                frontier.push(edge.weight, (edge_index, other));
            }
        }
    }
}

/// Compute a minimum spanning forest using Kruskal's algorithm
///
/// **Algorithm**: Stable-sort edges by weight, add edges that don't create cycles
/// **Time Complexity**: O(E log E) ≈ O(E log V)
/// **Space Complexity**: O(V) for union-find structure
/// **Correctness**: Cycle property ensures optimality
pub fn kruskal_mst(graph: &Graph) -> EdgeSet {
    let mut sorted: Vec<_> = graph.edges().iter().collect();
    // `sort_by` is stable: equal weights keep input order
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::from_ids(graph.node_ids());
    let mut mst_edges = EdgeSet::with_capacity(graph.node_count().saturating_sub(1));
    let mut rejected = 0usize;

    for edge in sorted {
        if uf.union(edge.from, edge.to) {
            mst_edges.push(*edge);
        } else {
            rejected += 1;
        }
    }

    log::debug!(
        "Kruskal: {} edges, weight {}, {} components, {} cycle-closing edges skipped",
        mst_edges.len(),
        mst_edges.total_weight(),
        uf.component_count(),
        rejected
    );

    mst_edges
}

/// Prim's algorithm bound to a start node
#[derive(Debug, Clone, Copy)]
pub struct PrimSolver {
    pub start: NodeId,
}

impl PrimSolver {
    pub fn new(start: NodeId) -> Self {
        Self { start }
    }
}

impl Algorithm for PrimSolver {
    type Output = EdgeSet;

    fn name(&self) -> &'static str {
        "Prim"
    }

    fn category(&self) -> &'static str {
        "mst"
    }

    fn execute(&self, graph: &Graph) -> Result<EdgeSet, AlgorithmError> {
        prim_mst(graph, self.start)
    }
}

/// Kruskal's algorithm. Needs no start node.
#[derive(Debug, Clone, Copy, Default)]
pub struct KruskalSolver;

impl Algorithm for KruskalSolver {
    type Output = EdgeSet;

    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn category(&self) -> &'static str {
        "mst"
    }

    fn execute(&self, graph: &Graph) -> Result<EdgeSet, AlgorithmError> {
        Ok(kruskal_mst(graph))
    }
}
