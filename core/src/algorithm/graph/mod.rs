//! Spanning tree and network flow algorithms
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod max_flow;
pub mod mst;

pub use self::max_flow::{max_flow, max_flow_detailed, EdgeFlow, FlowResult, MaxFlowSolver};
pub use self::mst::{kruskal_mst, prim_mst, KruskalSolver, PrimSolver};
