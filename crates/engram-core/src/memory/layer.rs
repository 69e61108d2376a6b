use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::EngramError;

/// Permanence scope of a memory. Determines its decay half-life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Layer {
    Identity,
    Project,
    Session,
    Task,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Identity, Layer::Project, Layer::Session, Layer::Task];

    /// Wire name, as used by the API and in config keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "IDENTITY",
            Self::Project => "PROJECT",
            Self::Session => "SESSION",
            Self::Task => "TASK",
        }
    }

    /// Whether memories in this layer lose importance over time.
    pub fn decays(self) -> bool {
        super::half_life_days(self).is_some()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = EngramError;

    /// Case-insensitive. Anything outside the four layers is rejected; there
    /// is no fallback layer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDENTITY" => Ok(Self::Identity),
            "PROJECT" => Ok(Self::Project),
            "SESSION" => Ok(Self::Session),
            "TASK" => Ok(Self::Task),
            _ => Err(EngramError::InvalidLayer {
                value: s.to_string(),
            }),
        }
    }
}
