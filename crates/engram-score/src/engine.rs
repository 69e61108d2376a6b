use std::sync::Arc;

use chrono::{DateTime, Utc};
use engram_core::clock::{Clock, SystemClock};
use engram_core::config::ScoreConfig;
use engram_core::memory::{Layer, Memory};
use engram_core::traits::IScorer;
use tracing::warn;

use crate::factors::ScoreInputs;
use crate::formula::{self, ScoreBreakdown};

/// Computes effective scores from stored attributes and an evaluation instant.
///
/// Pure given `(memory, now)`. The injected clock is only consulted through
/// [`IScorer::score`].
#[derive(Clone)]
pub struct ScoreEngine {
    config: ScoreConfig,
    clock: Arc<dyn Clock>,
}

impl ScoreEngine {
    /// Default half-lives, system clock.
    pub fn new() -> Self {
        Self::with_config(ScoreConfig::default())
    }

    /// Custom half-life overrides, system clock.
    pub fn with_config(config: ScoreConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used by [`IScorer::score`].
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Effective half-life for a layer. `None` = never decays.
    pub fn half_life_for(&self, layer: Layer) -> Option<f64> {
        self.config.half_life_for(layer)
    }

    /// Normalize a memory into formula inputs, logging any data-quality
    /// warnings against the memory id.
    pub fn inputs(&self, memory: &Memory, now: DateTime<Utc>) -> ScoreInputs {
        let inputs = ScoreInputs::from_memory(memory, now, self.half_life_for(memory.layer));
        for w in &inputs.warnings {
            warn!(memory_id = %memory.id, warning = %w, "data-quality warning while scoring");
        }
        inputs
    }

    /// The effective score of `memory` at `now`, in [0.0, 1.0].
    pub fn compute(&self, memory: &Memory, now: DateTime<Utc>) -> f64 {
        let span = engram_observability::score_span!(memory.id);
        let _guard = span.enter();
        formula::compute(&self.inputs(memory, now))
    }

    /// Same as [`compute`](Self::compute), with every term exposed.
    pub fn compute_breakdown(&self, memory: &Memory, now: DateTime<Utc>) -> ScoreBreakdown {
        formula::compute_breakdown(&self.inputs(memory, now))
    }

    /// A copy of `memory` with `effective_score` and `score_computed_at`
    /// derived at `now`.
    pub fn rescore(&self, memory: &Memory, now: DateTime<Utc>) -> Memory {
        let mut next = memory.clone();
        next.effective_score = self.compute(memory, now);
        next.score_computed_at = Some(now);
        next
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IScorer for ScoreEngine {
    fn score(&self, memory: &Memory) -> f64 {
        self.compute(memory, self.clock.now())
    }
}
