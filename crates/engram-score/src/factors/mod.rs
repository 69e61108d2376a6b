pub mod decay;
pub mod novelty;
pub mod pinned;
pub mod safety;
pub mod usage;

use chrono::{DateTime, Utc};
use engram_core::constants::SECONDS_PER_DAY;
use engram_core::memory::Memory;
use engram_core::models::DataQualityWarning;

/// Normalized inputs to the effective-score formula.
///
/// Built from a memory and an evaluation instant. Out-of-range data is
/// clamped here and reported in `warnings`, so the factors never see it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInputs {
    /// Base score clamped to [0.0, 1.0].
    pub base_score: f64,
    /// Fractional days since creation, never negative.
    pub age_days: f64,
    /// `None` for layers that never decay.
    pub half_life_days: Option<f64>,
    /// Retrieval plus use events.
    pub usage_events: u64,
    pub user_pinned: bool,
    pub safety_critical: bool,
    pub warnings: Vec<DataQualityWarning>,
}

impl ScoreInputs {
    pub fn from_memory(memory: &Memory, now: DateTime<Utc>, half_life_days: Option<f64>) -> Self {
        let mut warnings = Vec::new();

        let (base_score, base_warning) = normalize_base_score(memory.base_score);
        warnings.extend(base_warning);

        let (age_days, age_warning) = age_in_days(memory.created_at, now);
        warnings.extend(age_warning);

        Self {
            base_score,
            age_days,
            half_life_days,
            usage_events: memory.usage_events(),
            user_pinned: memory.user_pinned,
            safety_critical: memory.safety_critical,
            warnings,
        }
    }
}

/// Clamp a base score into [0.0, 1.0]. NaN becomes 0.0.
pub fn normalize_base_score(value: f64) -> (f64, Option<DataQualityWarning>) {
    if value.is_nan() {
        (0.0, Some(DataQualityWarning::BaseScoreNotFinite))
    } else if value.is_infinite() {
        (value.clamp(0.0, 1.0), Some(DataQualityWarning::BaseScoreNotFinite))
    } else if !(0.0..=1.0).contains(&value) {
        (
            value.clamp(0.0, 1.0),
            Some(DataQualityWarning::BaseScoreOutOfRange { original: value }),
        )
    } else {
        (value, None)
    }
}

/// Fractional age in days. A creation time after `now` is clock skew: age 0.
pub fn age_in_days(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> (f64, Option<DataQualityWarning>) {
    let delta = now.signed_duration_since(created_at);
    let millis = delta.num_milliseconds();
    if millis < 0 {
        // Round up so any skew reports at least one second.
        let skew = DataQualityWarning::ClockSkew {
            seconds_ahead: (millis.saturating_neg() + 999) / 1000,
        };
        return (0.0, Some(skew));
    }
    (millis as f64 / 1000.0 / SECONDS_PER_DAY, None)
}
