use serde::{Deserialize, Serialize};

use super::defaults;

/// Score refresh configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Maximum age of a stored score on the read path (seconds).
    pub staleness_window_secs: u64,
    /// Maximum age of a stored score for scheduled batch refresh (seconds).
    pub scheduled_interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            staleness_window_secs: defaults::DEFAULT_STALENESS_WINDOW_SECS,
            scheduled_interval_secs: defaults::DEFAULT_SCHEDULED_INTERVAL_SECS,
        }
    }
}
