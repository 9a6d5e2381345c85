//! Single-source shortest paths
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod dijkstra;

pub use self::dijkstra::{
    dijkstra, shortest_path_table, shortest_paths, Dijkstra, DistanceEntry, DistanceTable,
    ShortestPaths,
};
