use super::{ConfigError, ConsolidationError, SafetyError};

/// Convenience alias used across every Engram crate.
pub type EngramResult<T> = Result<T, EngramError>;

/// Top-level error for the Engram scoring crates.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    /// A layer name outside IDENTITY / PROJECT / SESSION / TASK.
    #[error("invalid memory layer: {value:?} (expected IDENTITY, PROJECT, SESSION, or TASK)")]
    InvalidLayer { value: String },

    #[error("safety classifier error: {0}")]
    SafetyError(#[from] SafetyError),

    #[error("consolidation error: {0}")]
    ConsolidationError(#[from] ConsolidationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("tracing init failed: {reason}")]
    TracingInit { reason: String },
}
