/// Safety classifier errors.
#[derive(Debug, thiserror::Error)]
pub enum SafetyError {
    #[error("invalid safety pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("empty indicator label for pattern {pattern:?}")]
    EmptyLabel { pattern: String },
}
