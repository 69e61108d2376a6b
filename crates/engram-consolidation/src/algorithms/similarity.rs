//! Cosine similarity and an in-memory embedding lookup.

use std::collections::HashMap;

use engram_core::errors::{ConsolidationError, EngramResult};
use engram_core::traits::ISimilarity;

/// Cosine similarity between two vectors.
/// Returns 0.0 for empty, mismatched, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Similarity backed by precomputed embeddings, keyed by memory id.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingSimilarity {
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingSimilarity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, embedding: Vec<f32>) {
        self.vectors.insert(id.into(), embedding);
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    fn vector(&self, id: &str) -> Result<&[f32], ConsolidationError> {
        self.vectors
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| ConsolidationError::MissingEmbedding { id: id.to_string() })
    }
}

impl FromIterator<(String, Vec<f32>)> for EmbeddingSimilarity {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f32>)>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}

impl ISimilarity for EmbeddingSimilarity {
    fn similarity(&self, a: &str, b: &str) -> EngramResult<f64> {
        Ok(cosine_similarity(self.vector(a)?, self.vector(b)?))
    }
}
