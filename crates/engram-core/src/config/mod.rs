mod consolidation_config;
pub mod defaults;
mod observability_config;
mod refresh_config;
mod safety_config;
mod score_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, EngramResult};

pub use consolidation_config::ConsolidationConfig;
pub use observability_config::ObservabilityConfig;
pub use refresh_config::RefreshConfig;
pub use safety_config::{PatternEntry, SafetyConfig};
pub use score_config::ScoreConfig;

/// Top-level configuration, one section per component.
///
/// Passed explicitly into each component at construction; there is no
/// process-wide instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngramConfig {
    pub score: ScoreConfig,
    pub refresh: RefreshConfig,
    pub safety: SafetyConfig,
    pub consolidation: ConsolidationConfig,
    pub observability: ObservabilityConfig,
}

impl EngramConfig {
    /// Parse and validate a TOML document. Missing sections and keys take
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> EngramResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> EngramResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.score.validate()?;
        self.consolidation.validate()?;
        Ok(())
    }
}
