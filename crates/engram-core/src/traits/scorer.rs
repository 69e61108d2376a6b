use crate::memory::Memory;

/// Effective-score calculation at the scorer's own notion of "now".
pub trait IScorer: Send + Sync {
    /// Returns a value in [0.0, 1.0].
    fn score(&self, memory: &Memory) -> f64;
}
