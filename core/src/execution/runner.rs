//! Single entry point that runs a named algorithm over a graph
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::graph::max_flow::{FlowResult, MaxFlowSolver};
use crate::algorithm::graph::mst::{KruskalSolver, PrimSolver};
use crate::algorithm::path_finding::dijkstra::{Dijkstra, ShortestPaths};
use crate::algorithm::traits::{Algorithm, AlgorithmError, EdgeSet, NodeId};
use crate::config::EngineConfig;
use crate::data_structures::graph::{Edge, Graph};

/// Analyses offered on a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Prim,
    Kruskal,
    Dijkstra,
    MaxFlow,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [Self::Prim, Self::Kruskal, Self::Dijkstra, Self::MaxFlow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
            Self::Dijkstra => "dijkstra",
            Self::MaxFlow => "max_flow",
        }
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = AlgorithmError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "prim" => Ok(Self::Prim),
            "kruskal" => Ok(Self::Kruskal),
            "dijkstra" => Ok(Self::Dijkstra),
            "max_flow" | "maxflow" | "ford_fulkerson" | "edmonds_karp" => Ok(Self::MaxFlow),
            _ => Err(AlgorithmError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

/// Which analysis to run and with which terminals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRequest {
    pub kind: AlgorithmKind,
    /// Start node (Prim, Dijkstra) or flow source
    #[serde(default)]
    pub start: Option<NodeId>,
    /// Flow sink
    #[serde(default)]
    pub sink: Option<NodeId>,
}

impl AlgorithmRequest {
    pub fn prim(start: NodeId) -> Self {
        Self { kind: AlgorithmKind::Prim, start: Some(start), sink: None }
    }

    pub fn kruskal() -> Self {
        Self { kind: AlgorithmKind::Kruskal, start: None, sink: None }
    }

    pub fn dijkstra(start: NodeId) -> Self {
        Self { kind: AlgorithmKind::Dijkstra, start: Some(start), sink: None }
    }

    pub fn max_flow(source: NodeId, sink: NodeId) -> Self {
        Self { kind: AlgorithmKind::MaxFlow, start: Some(source), sink: Some(sink) }
    }

    /// Builds a request from an algorithm name, failing with `UnsupportedAlgorithm`
    pub fn parse(name: &str, start: Option<NodeId>, sink: Option<NodeId>) -> Result<Self, AlgorithmError> {
        Ok(Self { kind: name.parse()?, start, sink })
    }

    fn required(value: Option<NodeId>, name: &str, kind: AlgorithmKind) -> Result<NodeId, AlgorithmError> {
        value.ok_or_else(|| AlgorithmError::InvalidParameter {
            name: name.to_string(),
            reason: format!("{} requires a {} node", kind, name),
        })
    }
}

/// Typed result of a dispatched run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "result", rename_all = "snake_case")]
pub enum AlgorithmOutput {
    SpanningTree(EdgeSet),
    ShortestPaths(ShortestPaths),
    MaxFlow(FlowResult),
}

impl AlgorithmOutput {
    /// Edges a renderer should highlight: the tree edges, or every edge carrying flow
    pub fn highlighted_edges(&self) -> EdgeSet {
        match self {
            Self::SpanningTree(edges) => edges.clone(),
            Self::ShortestPaths(paths) => paths.tree.clone(),
            Self::MaxFlow(flow) => flow
                .edge_flows
                .iter()
                .filter(|edge_flow| edge_flow.flow > 0.0)
                .map(|edge_flow| Edge::new(edge_flow.from, edge_flow.to, edge_flow.flow))
                .collect::<Vec<_>>()
                .into(),
        }
    }
}

/// Runs the requested analysis
pub fn run(
    graph: &Graph,
    request: &AlgorithmRequest,
    config: &EngineConfig,
) -> Result<AlgorithmOutput, AlgorithmError> {
    let kind = request.kind;
    log::info!(
        "Running {} on {} nodes / {} edges ({})",
        kind,
        graph.node_count(),
        graph.edge_count(),
        if graph.is_directed() { "directed" } else { "undirected" }
    );

    match kind {
        AlgorithmKind::Prim => {
            let start = AlgorithmRequest::required(request.start, "start", kind)?;
            PrimSolver::new(start).execute(graph).map(AlgorithmOutput::SpanningTree)
        }
        AlgorithmKind::Kruskal => KruskalSolver.execute(graph).map(AlgorithmOutput::SpanningTree),
        AlgorithmKind::Dijkstra => {
            let start = AlgorithmRequest::required(request.start, "start", kind)?;
            let simulate = config.dijkstra_simulates_undirected(graph.is_directed());
            Dijkstra::new(start, simulate)
                .execute(graph)
                .map(AlgorithmOutput::ShortestPaths)
        }
        AlgorithmKind::MaxFlow => {
            let source = AlgorithmRequest::required(request.start, "source", kind)?;
            let sink = AlgorithmRequest::required(request.sink, "sink", kind)?;
            MaxFlowSolver::with_config(source, sink, config.clone())
                .execute(graph)
                .map(AlgorithmOutput::MaxFlow)
        }
    }
}
