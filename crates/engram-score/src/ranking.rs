use chrono::{DateTime, Utc};
use engram_core::memory::Memory;

use crate::engine::ScoreEngine;

/// A memory's position on an active retrieval surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMemory {
    pub id: String,
    pub effective_score: f64,
}

/// Rank active memories by effective score at `now`.
///
/// Consolidated memories are excluded. Ties go to the earliest `created_at`,
/// then the smallest id.
pub fn rank_active(
    engine: &ScoreEngine,
    memories: &[Memory],
    now: DateTime<Utc>,
    limit: Option<usize>,
) -> Vec<RankedMemory> {
    let mut scored: Vec<(f64, &Memory)> = memories
        .iter()
        .filter(|m| m.is_active())
        .map(|m| (engine.compute(m, now), m))
        .collect();

    scored.sort_by(|(sa, a), (sb, b)| {
        sb.total_cmp(sa)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });

    scored
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(effective_score, m)| RankedMemory {
            id: m.id.clone(),
            effective_score,
        })
        .collect()
}
