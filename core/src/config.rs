//! Engine configuration
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::AlgorithmError;

/// Tunables shared by the solvers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Residual capacities at or below this value count as saturated.
    /// Zero follows every strictly positive residual.
    pub residual_epsilon: f64,

    /// Hard stop on augmenting paths per max-flow run; `None` is unbounded
    pub max_augmentations: Option<usize>,

    /// Forces Dijkstra's traversal mode when dispatching by name.
    /// `None` simulates undirected traversal exactly when the graph is undirected.
    pub simulate_undirected: Option<bool>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            residual_epsilon: 0.0,
            max_augmentations: None,
            simulate_undirected: None,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, AlgorithmError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AlgorithmError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if !self.residual_epsilon.is_finite() || self.residual_epsilon < 0.0 {
            return Err(AlgorithmError::InvalidConfig(format!(
                "residual_epsilon must be finite and non-negative, got {}",
                self.residual_epsilon
            )));
        }
        if self.max_augmentations == Some(0) {
            return Err(AlgorithmError::InvalidConfig(
                "max_augmentations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Dijkstra traversal mode for `graph_directed`
    pub fn dijkstra_simulates_undirected(&self, graph_directed: bool) -> bool {
        self.simulate_undirected.unwrap_or(!graph_directed)
    }
}
