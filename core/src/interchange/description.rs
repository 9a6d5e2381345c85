//! JSON graph description
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use super::InterchangeError;
use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::data_structures::graph::{Edge, Graph, Node, Position};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Caller-facing graph input: node list, edge list and the directed flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub nodes: Vec<NodeDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
    #[serde(default)]
    pub directed: bool,
}

impl GraphDescription {
    pub fn from_json(json: &str) -> Result<Self, InterchangeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, InterchangeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the description through the Graph Model
    pub fn into_graph(self) -> Result<Graph, AlgorithmError> {
        let nodes = self.nodes.into_iter().map(|node| {
            Node::at(
                node.id,
                Position::new(node.x.unwrap_or_default(), node.y.unwrap_or_default()),
            )
        });
        let edges = self
            .edges
            .into_iter()
            .map(|edge| Edge::new(edge.from, edge.to, edge.weight));

        Graph::build(nodes, edges, self.directed)
    }
}

impl From<&Graph> for GraphDescription {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .iter()
                .map(|node| NodeDescription {
                    id: node.id,
                    x: Some(node.position.x),
                    y: Some(node.position.y),
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| EdgeDescription {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                })
                .collect(),
            directed: graph.is_directed(),
        }
    }
}
