//! Dijkstra's single-source shortest path algorithm
//!
//! Builds its own adjacency map from the edge list so that a directed graph
//! can be explored as undirected without touching the source graph: in
//! simulation mode every edge also contributes a synthetic reverse edge of
//! the same weight.
//!
//! # Directed-mode admission check
//! When simulation is off, every node touched by an edge must own at least
//! one outgoing and one incoming adjacency entry, otherwise the run fails
//! with `DisconnectedOrCyclicGraph`. This is a narrow key-presence check. It
//! is not a cycle detector and does not reject every disconnected graph.
//!
//! # Complexity
//! O((V + E) log V) with a binary heap; stale heap entries are skipped on pop.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmError, EdgeSet, NodeId};
use crate::data_structures::graph::Graph;
use crate::data_structures::priority_queue::StablePriorityQueue;

/// Tentative distance and predecessor of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    /// `f64::INFINITY` when unreachable
    pub distance: f64,
    pub predecessor: Option<NodeId>,
}

/// Distance and predecessor of every node, relative to one start node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceTable {
    pub start: NodeId,
    entries: BTreeMap<NodeId, DistanceEntry>,
}

impl DistanceTable {
    pub fn get(&self, node: NodeId) -> Option<&DistanceEntry> {
        self.entries.get(&node)
    }

    /// Recorded distance; infinite for unreachable nodes, `None` for unknown ones
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.entries.get(&node).map(|entry| entry.distance)
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.entries.get(&node).and_then(|entry| entry.predecessor)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some_and(f64::is_finite)
    }

    /// Node sequence from the start node to `node`, following predecessors
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(node) {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &DistanceEntry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shortest-path tree and the distance table it was read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// One edge per reached node (other than the start), ascending by node id
    pub tree: EdgeSet,
    pub distances: DistanceTable,
}

/// Adjacency entry: (source edge index, reached node, weight)
type Link = (usize, NodeId, f64);

/// Builds the adjacency map, running the directed-mode admission check
fn build_adjacency(
    graph: &Graph,
    simulate_undirected: bool,
) -> Result<HashMap<NodeId, Vec<Link>>, AlgorithmError> {
    let mut adjacency: HashMap<NodeId, Vec<Link>> = HashMap::with_capacity(graph.node_count());
    let mut has_incoming = HashSet::with_capacity(graph.node_count());

    for (edge_index, edge) in graph.edges().iter().enumerate() {
        adjacency
            .entry(edge.from)
            .or_default()
            .push((edge_index, edge.to, edge.weight));
        has_incoming.insert(edge.to);

        if simulate_undirected {
            adjacency
                .entry(edge.to)
                .or_default()
                .push((edge_index, edge.from, edge.weight));
            has_incoming.insert(edge.from);
        }
    }

    if !simulate_undirected {
        for edge in graph.edges() {
            for endpoint in [edge.from, edge.to] {
                if !adjacency.contains_key(&endpoint) || !has_incoming.contains(&endpoint) {
                    log::debug!("Dijkstra admission check failed at node {}", endpoint);
                    return Err(AlgorithmError::DisconnectedOrCyclicGraph(endpoint));
                }
            }
        }
    }

    Ok(adjacency)
}

/// Runs Dijkstra and returns both the tree and the distance table
pub fn shortest_paths(
    graph: &Graph,
    start: NodeId,
    simulate_undirected: bool,
) -> Result<ShortestPaths, AlgorithmError> {
    if !graph.contains_node(start) {
        return Err(AlgorithmError::UnknownStartNode(start));
    }

    let adjacency = build_adjacency(graph, simulate_undirected)?;

    let mut distance: HashMap<NodeId, f64> = graph.node_ids().map(|id| (id, f64::INFINITY)).collect();
    // node -> (predecessor, index of the edge that produced the distance)
    let mut via: HashMap<NodeId, (NodeId, usize)> = HashMap::new();
    let mut settled = HashSet::with_capacity(graph.node_count());
    let mut frontier = StablePriorityQueue::new();

    distance.insert(start, 0.0);
    frontier.push(0.0, start);

    while let Some((tentative, node)) = frontier.pop() {
        if tentative > distance[&node] || !settled.insert(node) {
            continue;
        }
        log::trace!("Settled node {} at distance {}", node, tentative);

        let Some(arcs) = adjacency.get(&node) else {
            continue;
        };

        for &(edge_index, neighbor, weight) in arcs {
            let candidate = tentative + weight;
            if candidate < distance[&neighbor] {
                distance.insert(neighbor, candidate);
                via.insert(neighbor, (node, edge_index));
                frontier.push(candidate, neighbor);
            }
        }
    }

    let entries: BTreeMap<NodeId, DistanceEntry> = distance
        .into_iter()
        .map(|(id, dist)| {
            let entry = DistanceEntry {
                distance: dist,
                predecessor: via.get(&id).map(|&(previous, _)| previous),
            };
            (id, entry)
        })
        .collect();

    let mut tree = EdgeSet::with_capacity(via.len());
    for id in entries.keys() {
        if let Some(&(_, edge_index)) = via.get(id) {
            tree.push(graph.edges()[edge_index]);
        }
    }

    log::debug!(
        "Dijkstra from {} ({}): {} of {} nodes reached",
        start,
        if simulate_undirected { "undirected" } else { "directed" },
        tree.len() + 1,
        graph.node_count()
    );

    Ok(ShortestPaths {
        tree,
        distances: DistanceTable { start, entries },
    })
}

/// Shortest-path tree rooted at `start`
pub fn dijkstra(graph: &Graph, start: NodeId, simulate_undirected: bool) -> Result<EdgeSet, AlgorithmError> {
    shortest_paths(graph, start, simulate_undirected).map(|result| result.tree)
}

/// Distance/predecessor table for every node, rooted at `start`
pub fn shortest_path_table(
    graph: &Graph,
    start: NodeId,
    simulate_undirected: bool,
) -> Result<DistanceTable, AlgorithmError> {
    shortest_paths(graph, start, simulate_undirected).map(|result| result.distances)
}

/// Dijkstra bound to a start node and traversal mode
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    pub start: NodeId,
    pub simulate_undirected: bool,
}

impl Dijkstra {
    pub fn new(start: NodeId, simulate_undirected: bool) -> Self {
        Self {
            start,
            simulate_undirected,
        }
    }
}

impl Algorithm for Dijkstra {
    type Output = ShortestPaths;

    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn category(&self) -> &'static str {
        "path_finding"
    }

    fn execute(&self, graph: &Graph) -> Result<ShortestPaths, AlgorithmError> {
        shortest_paths(graph, self.start, self.simulate_undirected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::Edge;

    fn edge(from: usize, to: usize, weight: f64) -> Edge {
        Edge::new(NodeId(from), NodeId(to), weight)
    }

    fn triangle() -> Graph {
        Graph::from_triples([1, 2, 3], [(1, 2, 4.0), (2, 3, 2.0), (1, 3, 5.0)], false).unwrap()
    }

    #[test]
    fn test_triangle_prefers_direct_edge() {
        let result = shortest_paths(&triangle(), NodeId(1), true).unwrap();

        assert_eq!(result.distances.distance(NodeId(1)), Some(0.0));
        assert_eq!(result.distances.distance(NodeId(2)), Some(4.0));
        assert_eq!(result.distances.distance(NodeId(3)), Some(5.0));
        assert_eq!(result.tree.as_slice(), &[edge(1, 2, 4.0), edge(1, 3, 5.0)]);
    }

    #[test]
    fn test_relaxation_through_intermediate_node() {
        let graph = Graph::from_triples([1, 2, 3], [(1, 2, 4.0), (2, 3, 2.0), (1, 3, 7.0)], false).unwrap();
        let table = shortest_path_table(&graph, NodeId(1), true).unwrap();

        assert_eq!(table.distance(NodeId(3)), Some(6.0));
        assert_eq!(table.predecessor(NodeId(3)), Some(NodeId(2)));
        assert_eq!(table.path_to(NodeId(3)), Some(vec![NodeId(1), NodeId(2), NodeId(3)]));
        assert_eq!(table.path_to(NodeId(1)), Some(vec![NodeId(1)]));
    }

    #[test]
    fn test_simulation_traverses_edges_backwards() {
        // only reachable from 3 by walking (2,3) and (1,2) against their direction
        let graph = Graph::from_triples([1, 2, 3], [(1, 2, 1.5), (2, 3, 2.5)], true).unwrap();
        let table = shortest_path_table(&graph, NodeId(3), true).unwrap();

        assert_eq!(table.distance(NodeId(2)), Some(2.5));
        assert_eq!(table.distance(NodeId(1)), Some(4.0));
    }

    #[test]
    fn test_unreachable_nodes_contribute_nothing() {
        let graph = Graph::from_triples([1, 2, 3, 4], [(1, 2, 1.0), (3, 4, 1.0)], false).unwrap();
        let result = shortest_paths(&graph, NodeId(1), true).unwrap();

        assert_eq!(result.tree.as_slice(), &[edge(1, 2, 1.0)]);
        assert_eq!(result.distances.distance(NodeId(4)), Some(f64::INFINITY));
        assert!(!result.distances.is_reachable(NodeId(3)));
        assert!(result.distances.path_to(NodeId(3)).is_none());
        assert_eq!(result.distances.len(), 4);
    }

    #[test]
    fn test_unknown_start_node() {
        let err = dijkstra(&triangle(), NodeId(42), true).unwrap_err();
        assert_eq!(err, AlgorithmError::UnknownStartNode(NodeId(42)));
    }

    #[test]
    fn test_directed_missing_inbound_edge_is_rejected() {
        let graph = Graph::from_triples([1, 2, 3], [(1, 2, 1.0), (2, 3, 1.0), (3, 2, 1.0)], true).unwrap();
        let err = dijkstra(&graph, NodeId(1), false).unwrap_err();
        assert_eq!(err, AlgorithmError::DisconnectedOrCyclicGraph(NodeId(1)));
    }

    #[test]
    fn test_directed_cycle_passes_admission_check() {
        let graph = Graph::from_triples(
            [1, 2, 3, 4],
            [(1, 2, 1.0), (2, 3, 2.0), (3, 1, 1.0), (1, 3, 5.0)],
            true,
        )
        .unwrap();
        let result = shortest_paths(&graph, NodeId(1), false).unwrap();

        assert_eq!(result.distances.distance(NodeId(3)), Some(3.0));
        // node 4 touches no edge, so the check ignores it
        assert!(!result.distances.is_reachable(NodeId(4)));
        assert_eq!(result.tree.as_slice(), &[edge(1, 2, 1.0), edge(2, 3, 2.0)]);
    }

    #[test]
    fn test_parallel_edges_report_the_edge_used() {
        let graph = Graph::from_triples([1, 2], [(1, 2, 9.0), (2, 1, 3.0)], false).unwrap();
        let tree = dijkstra(&graph, NodeId(1), true).unwrap();
        assert_eq!(tree.as_slice(), &[edge(2, 1, 3.0)]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = Graph::from_triples([1, 2, 3], [(1, 2, 0.0), (2, 3, 0.0)], false).unwrap();
        let table = shortest_path_table(&graph, NodeId(1), true).unwrap();
        assert_eq!(table.distance(NodeId(3)), Some(0.0));
    }

    #[test]
    fn test_solver_through_trait() {
        let solver = Dijkstra::new(NodeId(2), true);
        assert_eq!(solver.name(), "Dijkstra");
        assert_eq!(solver.category(), "path_finding");

        let result = solver.execute(&triangle()).unwrap();
        assert_eq!(result.distances.start, NodeId(2));
        assert_eq!(result.tree.len(), 2);
    }
}
