//! Graph algorithms engine
//!
//! Minimum spanning trees (Prim, Kruskal), single-source shortest paths
//! (Dijkstra, with optional undirected simulation) and maximum flow
//! (Edmonds-Karp) over an explicitly owned, validated `Graph`.
//!
//! ```
//! use graphkit_core::{kruskal_mst, Graph};
//!
//! let graph = Graph::from_triples([1, 2, 3], [(1, 2, 4.0), (2, 3, 2.0), (1, 3, 5.0)], false)?;
//! assert_eq!(kruskal_mst(&graph).total_weight(), 6.0);
//! # Ok::<(), graphkit_core::AlgorithmError>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod execution;
pub mod interchange;

pub use crate::algorithm::{
    dijkstra, kruskal_mst, max_flow, max_flow_detailed, prim_mst, shortest_path_table,
    shortest_paths, Algorithm, AlgorithmError, DistanceTable, EdgeFlow, EdgeSet, FlowResult,
    NodeId, ShortestPaths,
};
pub use crate::config::EngineConfig;
pub use crate::data_structures::{Edge, Graph, Node, Position, UnionFind};
pub use crate::execution::{run, AlgorithmKind, AlgorithmOutput, AlgorithmRequest};
pub use crate::interchange::{from_text, to_text, GraphDescription, InterchangeError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
