use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Non-fatal input problems found while normalizing a memory for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// `baseScore` was finite but outside [0, 1] and was clamped.
    BaseScoreOutOfRange { original: f64 },
    /// `baseScore` was NaN or infinite.
    BaseScoreNotFinite,
    /// `createdAt` is after the evaluation instant; age was clamped to zero.
    ClockSkew { seconds_ahead: i64 },
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseScoreOutOfRange { original } => {
                write!(f, "base score {original} outside [0, 1], clamped")
            }
            Self::BaseScoreNotFinite => f.write_str("base score is not finite"),
            Self::ClockSkew { seconds_ahead } => {
                write!(f, "created {seconds_ahead}s in the future, age clamped to 0")
            }
        }
    }
}
