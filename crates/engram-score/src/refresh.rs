//! When stored scores go stale, and batch recomputation.

use chrono::{DateTime, TimeDelta, Utc};
use engram_core::config::RefreshConfig;
use engram_core::memory::Memory;
use rayon::prelude::*;
use tracing::debug;

use crate::engine::ScoreEngine;

/// What prompted a staleness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// A retrieval path is about to use the score.
    Read,
    /// A periodic batch pass over a listing.
    Schedule,
    /// A scoring input changed (pin, counters, safety flag).
    Mutation,
}

/// Outcome counts of a selective batch refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub refreshed: usize,
    pub fresh: usize,
    pub consolidated: usize,
}

/// Decides when a stored `effective_score` must be recomputed, and applies the
/// score engine across collections. Never mutates its inputs.
#[derive(Clone)]
pub struct ScoreRefreshPolicy {
    engine: ScoreEngine,
    staleness_window: TimeDelta,
    scheduled_interval: TimeDelta,
}

impl ScoreRefreshPolicy {
    pub fn new(engine: ScoreEngine, config: &RefreshConfig) -> Self {
        Self {
            engine,
            staleness_window: seconds(config.staleness_window_secs),
            scheduled_interval: seconds(config.scheduled_interval_secs),
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Read-path staleness check.
    pub fn needs_refresh(&self, memory: &Memory, now: DateTime<Utc>) -> bool {
        self.needs_refresh_for(memory, now, RefreshTrigger::Read)
    }

    /// Staleness check for a given trigger.
    ///
    /// Consolidated memories never need a refresh: their historical score is
    /// kept as is. A memory that was never scored always does.
    pub fn needs_refresh_for(
        &self,
        memory: &Memory,
        now: DateTime<Utc>,
        trigger: RefreshTrigger,
    ) -> bool {
        if !memory.is_active() {
            return false;
        }
        let Some(computed_at) = memory.score_computed_at else {
            return true;
        };
        match trigger {
            RefreshTrigger::Mutation => true,
            RefreshTrigger::Read => is_stale(computed_at, now, self.staleness_window),
            RefreshTrigger::Schedule => is_stale(computed_at, now, self.scheduled_interval),
        }
    }

    /// Recompute one memory. Consolidated memories come back unchanged.
    pub fn refresh(&self, memory: &Memory, now: DateTime<Utc>) -> Memory {
        if memory.is_active() {
            self.engine.rescore(memory, now)
        } else {
            memory.clone()
        }
    }

    /// Recompute every active memory at `now`. Output order matches input.
    pub fn refresh_all(&self, memories: &[Memory], now: DateTime<Utc>) -> Vec<Memory> {
        let span = engram_observability::refresh_span!(memories.len(), "all");
        let _guard = span.enter();

        memories.par_iter().map(|m| self.refresh(m, now)).collect()
    }

    /// Recompute only the memories that are stale for `trigger`.
    pub fn refresh_stale(
        &self,
        memories: &[Memory],
        now: DateTime<Utc>,
        trigger: RefreshTrigger,
    ) -> (Vec<Memory>, RefreshReport) {
        let span = engram_observability::refresh_span!(memories.len(), trigger);
        let _guard = span.enter();

        let refreshed: Vec<(Memory, bool)> = memories
            .par_iter()
            .map(|m| {
                if self.needs_refresh_for(m, now, trigger) {
                    (self.engine.rescore(m, now), true)
                } else {
                    (m.clone(), false)
                }
            })
            .collect();

        let mut report = RefreshReport::default();
        for (m, did_refresh) in &refreshed {
            if *did_refresh {
                report.refreshed += 1;
            } else if m.is_active() {
                report.fresh += 1;
            } else {
                report.consolidated += 1;
            }
        }
        debug!(
            refreshed = report.refreshed,
            fresh = report.fresh,
            consolidated = report.consolidated,
            "refresh pass complete"
        );

        (refreshed.into_iter().map(|(m, _)| m).collect(), report)
    }
}

/// A score computed in the future (clock skew) is treated as stale.
fn is_stale(computed_at: DateTime<Utc>, now: DateTime<Utc>, window: TimeDelta) -> bool {
    computed_at > now || now - computed_at > window
}

fn seconds(secs: u64) -> TimeDelta {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}
