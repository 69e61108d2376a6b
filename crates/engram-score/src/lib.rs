//! # engram-score
//!
//! Additive effective-score engine.
//! Terms: layer decay, novelty, usage, pin, and a safety floor applied after
//! summation. The refresh policy decides when stored scores are stale and
//! recomputes them in batch.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod ranking;
pub mod refresh;

pub use engine::ScoreEngine;
pub use factors::ScoreInputs;
pub use formula::ScoreBreakdown;
pub use ranking::{rank_active, RankedMemory};
pub use refresh::{RefreshReport, RefreshTrigger, ScoreRefreshPolicy};
