/// Consolidation planning errors.
///
/// Raised by similarity collaborators. The planner treats any of these as
/// "not similar" for the pair involved and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum ConsolidationError {
    #[error("no embedding for memory {id}")]
    MissingEmbedding { id: String },

    #[error("similarity unavailable for ({a}, {b}): {reason}")]
    SimilarityUnavailable { a: String, b: String, reason: String },
}
