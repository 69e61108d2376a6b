use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A group of near-duplicate memories with one designated survivor.
///
/// Ephemeral: produced by the planner, consumed by the host, never persisted
/// on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationCluster {
    /// The member that survives.
    pub canonical_id: String,
    /// Members to archive into the canonical one.
    pub duplicate_ids: Vec<String>,
}

impl ConsolidationCluster {
    /// Total members, survivor included.
    pub fn member_count(&self) -> usize {
        self.duplicate_ids.len() + 1
    }

    pub fn contains(&self, id: &str) -> bool {
        self.canonical_id == id || self.duplicate_ids.iter().any(|d| d == id)
    }
}
