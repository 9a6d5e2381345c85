//! Maximum Flow Algorithm Implementation
//!
//! Ford-Fulkerson with breadth-first augmenting-path search (Edmonds-Karp)
//! over a residual network derived from a directed `Graph`.
//!
//! # Residual network
//! Every original edge `(u, v, c)` adds `c` to the residual capacity keyed
//! by the ordered pair `(u, v)` and ensures a `(v, u)` entry exists (initially
//! zero). Pushing `f` along `(u, v)` subtracts `f` from `(u, v)` and adds it
//! to `(v, u)`. Parallel and antiparallel edges therefore share keys and
//! need no special casing.
//!
//! # Termination
//! With integral capacities each augmentation raises the flow by at least
//! one unit, and Edmonds-Karp bounds the augmentations by O(VE) in any case.
//! Non-integral capacities are supported; for pathological inputs the
//! `max_augmentations` setting of `EngineConfig` provides a hard stop.
//!
//! The residual network is local to one call and dropped on every exit path.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmError, EdgeSet, NodeId};
use crate::config::EngineConfig;
use crate::data_structures::graph::Graph;

/// Flow capacity type
pub type Capacity = f64;

/// Flow value type
pub type Flow = f64;

/// Flow carried by one original edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeFlow {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
    pub flow: Flow,
}

impl EdgeFlow {
    pub fn is_saturated(&self) -> bool {
        self.flow >= self.capacity
    }
}

/// Maximum flow result with the flow assignment and a minimum cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    /// Total flow from source to sink
    pub value: Flow,
    /// One entry per original edge, in graph order
    pub edge_flows: Vec<EdgeFlow>,
    /// Nodes still reachable from the source in the final residual network
    pub source_side: BTreeSet<NodeId>,
    /// Original edges leaving `source_side`; their capacities sum to `value`
    pub cut_edges: EdgeSet,
    /// Number of augmenting paths applied
    pub augmentations: usize,
}

impl FlowResult {
    pub fn cut_capacity(&self) -> Capacity {
        self.cut_edges.total_weight()
    }
}

/// Residual network keyed by ordered node pairs
#[derive(Debug, Clone)]
struct FlowNetwork {
    residual: HashMap<(NodeId, NodeId), Capacity>,
    /// Residual neighbors in first-seen order, for deterministic BFS
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl FlowNetwork {
    fn from_graph(graph: &Graph) -> Self {
        let mut network = Self {
            residual: HashMap::with_capacity(graph.edge_count() * 2),
            adjacency: HashMap::with_capacity(graph.node_count()),
        };

        for edge in graph.edges() {
            network.add_edge(edge.from, edge.to, edge.weight);
        }

        network
    }

    /// Add edge with its zero-capacity reverse residual
    fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) {
        if !self.residual.contains_key(&(from, to)) && !self.residual.contains_key(&(to, from)) {
            self.adjacency.entry(from).or_default().push(to);
            if from != to {
                self.adjacency.entry(to).or_default().push(from);
            }
        }

        *self.residual.entry((from, to)).or_insert(0.0) += capacity;
        self.residual.entry((to, from)).or_insert(0.0);
    }

    #[inline]
    fn residual_capacity(&self, from: NodeId, to: NodeId) -> Capacity {
        self.residual.get(&(from, to)).copied().unwrap_or(0.0)
    }

    /// Breadth-first search over edges with residual capacity above `epsilon`
    ///
    /// Returns the predecessor map when `sink` is reached.
    fn find_augmenting_path(
        &self,
        source: NodeId,
        sink: NodeId,
        epsilon: f64,
    ) -> Option<HashMap<NodeId, NodeId>> {
        let mut parent = HashMap::new();
        let mut visited = HashSet::from([source]);
        let mut queue = VecDeque::from([source]);

        while let Some(node) = queue.pop_front() {
            if node == sink {
                return Some(parent);
            }

            for &next in self.adjacency.get(&node).into_iter().flatten() {
                if self.residual_capacity(node, next) > epsilon && visited.insert(next) {
                    parent.insert(next, node);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Pushes the bottleneck along the path, returning the amount pushed
    fn augment(&mut self, parent: &HashMap<NodeId, NodeId>, source: NodeId, sink: NodeId) -> Flow {
        let mut bottleneck = Flow::INFINITY;
        let mut node = sink;
        while node != source {
            let previous = parent[&node];
            bottleneck = bottleneck.min(self.residual_capacity(previous, node));
            node = previous;
        }

        let mut node = sink;
        while node != source {
            let previous = parent[&node];
            *self.residual.entry((previous, node)).or_insert(0.0) -= bottleneck;
            *self.residual.entry((node, previous)).or_insert(0.0) += bottleneck;
            node = previous;
        }

        bottleneck
    }

    /// Nodes reachable from `source` through unsaturated residual edges
    fn reachable_from(&self, source: NodeId, epsilon: f64) -> BTreeSet<NodeId> {
        let mut reached = BTreeSet::from([source]);
        let mut queue = VecDeque::from([source]);

        while let Some(node) = queue.pop_front() {
            for &next in self.adjacency.get(&node).into_iter().flatten() {
                if self.residual_capacity(node, next) > epsilon && reached.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        reached
    }
}

fn validate_terminals(graph: &Graph, source: NodeId, sink: NodeId) -> Result<(), AlgorithmError> {
    if !graph.is_directed() {
        return Err(AlgorithmError::UndirectedNotSupported);
    }
    for node in [source, sink] {
        if !graph.contains_node(node) {
            return Err(AlgorithmError::UnknownNode(node));
        }
    }
    if source == sink {
        return Err(AlgorithmError::SourceEqualsSink(source));
    }
    Ok(())
}

/// Splits the net flow between each ordered pair over that pair's original edges
fn assign_edge_flows(graph: &Graph, network: &FlowNetwork) -> Vec<EdgeFlow> {
    let mut pair_capacity: HashMap<(NodeId, NodeId), Capacity> = HashMap::new();
    for edge in graph.edges() {
        *pair_capacity.entry((edge.from, edge.to)).or_insert(0.0) += edge.weight;
    }

    let mut remaining: HashMap<(NodeId, NodeId), Flow> = pair_capacity
        .iter()
        .map(|(&(from, to), &capacity)| {
            let net = if from == to {
                0.0
            } else {
                capacity - network.residual_capacity(from, to)
            };
            ((from, to), net.clamp(0.0, capacity))
        })
        .collect();

    graph
        .edges()
        .iter()
        .map(|edge| {
            let left = remaining.entry((edge.from, edge.to)).or_insert(0.0);
            let flow = left.min(edge.weight);
            *left -= flow;
            EdgeFlow {
                from: edge.from,
                to: edge.to,
                capacity: edge.weight,
                flow,
            }
        })
        .collect()
}

/// Maximum flow with the full flow assignment and minimum cut
pub fn max_flow_detailed(
    graph: &Graph,
    source: NodeId,
    sink: NodeId,
    config: &EngineConfig,
) -> Result<FlowResult, AlgorithmError> {
    validate_terminals(graph, source, sink)?;
    config.validate()?;

    let epsilon = config.residual_epsilon;
    let mut network = FlowNetwork::from_graph(graph);
    let mut value: Flow = 0.0;
    let mut augmentations = 0usize;

    while let Some(parent) = network.find_augmenting_path(source, sink, epsilon) {
        if config.max_augmentations == Some(augmentations) {
            log::debug!("Max flow {} -> {} stopped after {} augmentations", source, sink, augmentations);
            return Err(AlgorithmError::AugmentationLimitExceeded(augmentations));
        }

        let pushed = network.augment(&parent, source, sink);
        value += pushed;
        augmentations += 1;
        log::trace!("Augmentation {} pushed {} (total {})", augmentations, pushed, value);
    }

    let source_side = network.reachable_from(source, epsilon);
    let cut_edges: EdgeSet = graph
        .edges()
        .iter()
        .filter(|edge| source_side.contains(&edge.from) && !source_side.contains(&edge.to))
        .copied()
        .collect::<Vec<_>>()
        .into();
    let edge_flows = assign_edge_flows(graph, &network);

    log::debug!(
        "Max flow {} -> {}: {} over {} augmenting paths, cut of {} edges",
        source,
        sink,
        value,
        augmentations,
        cut_edges.len()
    );

    Ok(FlowResult {
        value,
        edge_flows,
        source_side,
        cut_edges,
        augmentations,
    })
}

/// Maximum flow value from `source` to `sink` under the default configuration
pub fn max_flow(graph: &Graph, source: NodeId, sink: NodeId) -> Result<Flow, AlgorithmError> {
    max_flow_detailed(graph, source, sink, &EngineConfig::default()).map(|result| result.value)
}

/// Maximum flow solver bound to its terminals
#[derive(Debug, Clone)]
pub struct MaxFlowSolver {
    pub source: NodeId,
    pub sink: NodeId,
    config: EngineConfig,
}

impl MaxFlowSolver {
    pub fn new(source: NodeId, sink: NodeId) -> Self {
        Self::with_config(source, sink, EngineConfig::default())
    }

    pub fn with_config(source: NodeId, sink: NodeId, config: EngineConfig) -> Self {
        Self { source, sink, config }
    }
}

impl Algorithm for MaxFlowSolver {
    type Output = FlowResult;

    fn name(&self) -> &'static str {
        "Edmonds-Karp"
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn execute(&self, graph: &Graph) -> Result<FlowResult, AlgorithmError> {
        max_flow_detailed(graph, self.source, self.sink, &self.config)
    }
}
