use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::memory::{half_life_days, Layer};

/// Score engine configuration.
///
/// Only half-lives are tunable. The boosts and floors of the effective-score
/// formula are fixed constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Per-layer half-life overrides (days). Key is the layer name.
    /// IDENTITY cannot be overridden.
    pub half_life_overrides: HashMap<String, f64>,
}

impl ScoreConfig {
    /// Half-life for a layer after applying overrides. `None` = never decays.
    ///
    /// Keys are matched case-insensitively. If an unvalidated config holds
    /// several keys for one layer, the lexicographically smallest key wins.
    pub fn half_life_for(&self, layer: Layer) -> Option<f64> {
        let default = half_life_days(layer)?;
        let over = self
            .half_life_overrides
            .iter()
            .filter(|(key, _)| key.parse::<Layer>().ok() == Some(layer))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, days)| *days);
        match over {
            Some(days) if days.is_finite() && days > 0.0 => Some(days),
            _ => Some(default),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<Layer, &str> = HashMap::new();
        for (key, days) in &self.half_life_overrides {
            let layer = key.parse::<Layer>().map_err(|e| ConfigError::InvalidValue {
                key: format!("score.half_life_overrides.{key}"),
                value: days.to_string(),
                reason: e.to_string(),
            })?;
            if let Some(previous) = seen.insert(layer, key.as_str()) {
                let mut keys = [previous, key.as_str()];
                keys.sort_unstable();
                return Err(ConfigError::InvalidValue {
                    key: "score.half_life_overrides".to_string(),
                    value: keys.join(", "),
                    reason: format!("duplicate override for {layer}"),
                });
            }
            if layer == Layer::Identity {
                return Err(ConfigError::InvalidValue {
                    key: format!("score.half_life_overrides.{key}"),
                    value: days.to_string(),
                    reason: "IDENTITY never decays".to_string(),
                });
            }
            if !days.is_finite() || *days <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("score.half_life_overrides.{key}"),
                    value: days.to_string(),
                    reason: "half-life must be a positive number of days".to_string(),
                });
            }
        }
        Ok(())
    }
}
