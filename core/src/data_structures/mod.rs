//! Core data structures shared by the solvers
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod priority_queue;
pub mod union_find;

pub use self::graph::{Edge, Graph, Node, Position};
pub use self::priority_queue::StablePriorityQueue;
pub use self::union_find::UnionFind;
