//! Writing a plan back onto memory records.

use std::collections::HashMap;

use engram_core::memory::Memory;
use engram_core::models::ConsolidationCluster;
use tracing::{debug, info};

/// Return copies of `memories` with `consolidated_into` set on every
/// duplicate named in `clusters`.
///
/// A memory that is already consolidated keeps its original target. Scores
/// are left as they are.
pub fn apply_plan(memories: &[Memory], clusters: &[ConsolidationCluster]) -> Vec<Memory> {
    let target_of: HashMap<&str, &str> = clusters
        .iter()
        .flat_map(|c| {
            c.duplicate_ids
                .iter()
                .map(move |d| (d.as_str(), c.canonical_id.as_str()))
        })
        .collect();

    let mut archived = 0usize;
    let out: Vec<Memory> = memories
        .iter()
        .map(|m| {
            let mut next = m.clone();
            if let Some(&canonical) = target_of.get(m.id.as_str()) {
                match &m.consolidated_into {
                    None => {
                        next.consolidated_into = Some(canonical.to_string());
                        archived += 1;
                    }
                    Some(existing) => {
                        debug!(
                            memory_id = %m.id,
                            existing = %existing,
                            "already consolidated; keeping original target"
                        );
                    }
                }
            }
            next
        })
        .collect();

    info!(clusters = clusters.len(), archived, "consolidation plan applied");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use engram_core::memory::Layer;

    fn make(id: &str) -> Memory {
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut m = Memory::with_id(id, "text", Layer::Session, 0.5, t);
        m.effective_score = 0.42;
        m
    }

    fn plan() -> Vec<ConsolidationCluster> {
        vec![ConsolidationCluster {
            canonical_id: "keep".to_string(),
            duplicate_ids: vec!["d1".to_string(), "d2".to_string()],
        }]
    }

    #[test]
    fn duplicates_point_at_canonical() {
        let memories = vec![make("keep"), make("d1"), make("d2"), make("other")];
        let out = apply_plan(&memories, &plan());
        assert_eq!(out[0].consolidated_into, None);
        assert_eq!(out[1].consolidated_into.as_deref(), Some("keep"));
        assert_eq!(out[2].consolidated_into.as_deref(), Some("keep"));
        assert_eq!(out[3].consolidated_into, None);
        assert!(out.iter().all(|m| m.effective_score == 0.42));
    }

    #[test]
    fn existing_target_is_never_overwritten() {
        let mut d1 = make("d1");
        d1.consolidated_into = Some("earlier".to_string());
        let out = apply_plan(&[make("keep"), d1, make("d2")], &plan());
        assert_eq!(out[1].consolidated_into.as_deref(), Some("earlier"));
        assert_eq!(out[2].consolidated_into.as_deref(), Some("keep"));
    }

    #[test]
    fn empty_plan_changes_nothing() {
        let memories = vec![make("a")];
        let out = apply_plan(&memories, &[]);
        assert_eq!(out[0].consolidated_into, None);
    }
}
