use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::layer::Layer;

/// A single stored observation, in the shape the memory API serves it.
///
/// `effective_score` and `score_computed_at` are derived: they are written by
/// the refresh policy and never set independently of the scoring formula.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    /// Opaque unique identifier (UUID v4 for locally created records).
    pub id: String,
    /// Text content.
    pub raw: String,
    /// Permanence scope. Fixed at creation.
    pub layer: Layer,
    /// Importance assigned at creation, nominally in [0.0, 1.0].
    pub base_score: f64,
    /// Creation time. Immutable.
    pub created_at: DateTime<Utc>,
    /// Set by the safety classifier. Upgraded, never downgraded automatically.
    #[serde(default)]
    pub safety_critical: bool,
    /// Labels of the safety patterns that flagged this memory.
    #[serde(default)]
    pub safety_indicators: Vec<String>,
    /// User-controlled pin.
    #[serde(default)]
    pub user_pinned: bool,
    /// Number of times retrieved. Monotonically non-decreasing.
    #[serde(default)]
    pub retrieval_count: u64,
    /// Number of times used. Monotonically non-decreasing.
    #[serde(default)]
    pub used_count: u64,
    /// Last derived effective score.
    #[serde(default)]
    pub effective_score: f64,
    /// When `effective_score` was last derived.
    #[serde(default)]
    pub score_computed_at: Option<DateTime<Utc>>,
    /// Canonical memory this one was consolidated into. Set once, never unset.
    #[serde(default)]
    pub consolidated_into: Option<String>,
}

impl Memory {
    /// Create a fresh, unscored memory with a new UUID.
    pub fn new(
        raw: impl Into<String>,
        layer: Layer,
        base_score: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            raw: raw.into(),
            layer,
            base_score,
            created_at,
            safety_critical: false,
            safety_indicators: Vec::new(),
            user_pinned: false,
            retrieval_count: 0,
            used_count: 0,
            effective_score: 0.0,
            score_computed_at: None,
            consolidated_into: None,
        }
    }

    /// Same as [`Memory::new`] with a caller-chosen id.
    pub fn with_id(
        id: impl Into<String>,
        raw: impl Into<String>,
        layer: Layer,
        base_score: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            ..Self::new(raw, layer, base_score, created_at)
        }
    }

    /// Active memories take part in retrieval, scoring, and consolidation.
    pub fn is_active(&self) -> bool {
        self.consolidated_into.is_none()
    }

    pub fn record_retrieval(&mut self) {
        self.retrieval_count = self.retrieval_count.saturating_add(1);
    }

    pub fn record_use(&mut self) {
        self.used_count = self.used_count.saturating_add(1);
    }

    /// Combined retrieval and use events.
    pub fn usage_events(&self) -> u64 {
        self.retrieval_count.saturating_add(self.used_count)
    }
}

/// Identity equality: two memories are equal if they have the same ID.
impl PartialEq for Memory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_memory_is_active_and_unscored() {
        let m = Memory::new("likes tea", Layer::Identity, 0.5, Utc::now());
        assert!(m.is_active());
        assert!(m.score_computed_at.is_none());
        assert_eq!(m.usage_events(), 0);
        assert_eq!(uuid::Uuid::parse_str(&m.id).unwrap().get_version_num(), 4);
    }

    #[test]
    fn counters_saturate() {
        let mut m = Memory::new("x", Layer::Task, 0.5, Utc::now());
        m.retrieval_count = u64::MAX;
        m.record_retrieval();
        m.record_use();
        assert_eq!(m.retrieval_count, u64::MAX);
        assert_eq!(m.usage_events(), u64::MAX);
    }
}
