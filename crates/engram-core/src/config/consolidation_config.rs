use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Consolidation planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Pairs at or above this similarity are linked.
    pub similarity_threshold: f64,
    /// Smaller clusters are dropped.
    pub min_cluster_size: usize,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
        }
    }
}

impl ConsolidationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "consolidation.similarity_threshold".to_string(),
                value: self.similarity_threshold.to_string(),
                reason: "must be within [0, 1]".to_string(),
            });
        }
        if self.min_cluster_size < 2 {
            return Err(ConfigError::InvalidValue {
                key: "consolidation.min_cluster_size".to_string(),
                value: self.min_cluster_size.to_string(),
                reason: "a cluster needs at least 2 members".to_string(),
            });
        }
        Ok(())
    }
}
