//! Core algorithm trait definitions for the GraphKit analysis engine
//!
//! This module establishes the shared vocabulary of every solver: node
//! identifiers, the edge-set result type, the error taxonomy reported to
//! callers, and the `Algorithm` trait implemented by each analysis.
//!
//! # Key Design Principles
//! - Solvers are pure functions over an immutable `Graph` snapshot
//! - Failures are typed values, never panics
//! - No partial results: a failing call yields only its error
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::data_structures::graph::{Edge, Graph};

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Comprehensive error types for algorithm operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid edge ({from} -> {to}): endpoint {missing} does not exist")]
    InvalidEdge { from: NodeId, to: NodeId, missing: NodeId },

    #[error("Invalid weight {weight} on edge ({from} -> {to}): weights must be finite and non-negative")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("Duplicate node identifier: {0}")]
    DuplicateNode(NodeId),

    #[error("Start node {0} does not exist in the graph")]
    UnknownStartNode(NodeId),

    #[error("Node {0} does not exist in the graph")]
    UnknownNode(NodeId),

    #[error("Source and sink must be different nodes (both are {0})")]
    SourceEqualsSink(NodeId),

    #[error("Maximum flow requires a directed graph")]
    UndirectedNotSupported,

    #[error("The graph contains cycles/loops or becomes disconnected at node {0}")]
    DisconnectedOrCyclicGraph(NodeId),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Augmenting path limit of {0} exceeded before the flow converged")]
    AugmentationLimitExceeded(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Ordered sequence of edges forming an MST, spanning forest or shortest-path tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeSet {
    edges: Vec<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the weights of all contained edges
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Whether an edge joining `a` and `b` (in either direction) is present
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|edge| edge.joins(a, b))
    }

    pub fn into_vec(self) -> Vec<Edge> {
        self.edges
    }
}

impl From<Vec<Edge>> for EdgeSet {
    fn from(edges: Vec<Edge>) -> Self {
        Self { edges }
    }
}

impl IntoIterator for EdgeSet {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Main algorithm trait
///
/// # Invariants
/// - The graph is never mutated
/// - No state survives between invocations
/// - Deterministic behavior for given inputs
pub trait Algorithm: Debug {
    /// Value handed back to the caller on success
    type Output;

    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g., mst, path_finding)
    fn category(&self) -> &'static str;

    /// Runs the analysis over an immutable graph snapshot
    fn execute(&self, graph: &Graph) -> Result<Self::Output, AlgorithmError>;
}
