//! Algorithm selection and dispatch
//!
//! Maps an algorithm name plus its node parameters onto the matching solver
//! and returns a single typed output for the presentation layer.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod runner;

pub use self::runner::{run, AlgorithmKind, AlgorithmOutput, AlgorithmRequest};
