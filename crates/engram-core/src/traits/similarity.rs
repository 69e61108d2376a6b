use crate::errors::EngramResult;

/// Pairwise similarity between two memories, identified by id.
///
/// Supplied by an embedding or vector-search collaborator. Implementations
/// may fail per pair; callers decide how to treat failures.
///
/// Failures must be reported as `Err`, never as a panic: release builds
/// abort on panic, so a panicking implementation ends the whole planning pass.
pub trait ISimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> EngramResult<f64>;
}

impl<F> ISimilarity for F
where
    F: Fn(&str, &str) -> EngramResult<f64> + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> EngramResult<f64> {
        self(a, b)
    }
}
