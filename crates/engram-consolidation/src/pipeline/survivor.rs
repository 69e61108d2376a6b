//! Phase 4: Survivor choice within a cluster.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use engram_core::memory::Memory;
use engram_score::ScoreEngine;

/// A cluster member with its score at plan time.
#[derive(Debug, Clone, Copy)]
pub struct ScoredMember<'a> {
    pub memory: &'a Memory,
    pub effective_score: f64,
}

/// Survivor preference: higher score first, then older, then smaller id.
pub fn survivor_order(a: &ScoredMember<'_>, b: &ScoredMember<'_>) -> Ordering {
    b.effective_score
        .total_cmp(&a.effective_score)
        .then_with(|| a.memory.created_at.cmp(&b.memory.created_at))
        .then_with(|| a.memory.id.cmp(&b.memory.id))
}

/// Pick the survivor among `members` (already in input order). Returns its
/// position in `members`, or `None` for an empty slice.
pub fn choose_survivor(
    engine: &ScoreEngine,
    members: &[&Memory],
    now: DateTime<Utc>,
) -> Option<usize> {
    members
        .iter()
        .enumerate()
        .map(|(pos, m)| {
            (
                pos,
                ScoredMember {
                    memory: m,
                    effective_score: engine.compute(m, now),
                },
            )
        })
        .min_by(|(_, a), (_, b)| survivor_order(a, b))
        .map(|(pos, _)| pos)
}
