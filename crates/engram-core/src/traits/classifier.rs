use crate::models::Classification;

/// Safety classification of free text.
pub trait IClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Classification;
}
