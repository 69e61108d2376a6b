use engram_core::models::DataQualityWarning;

use crate::factors::{self, ScoreInputs};

/// Additive effective-score formula.
///
/// ```text
/// raw = baseScore × decayFactor
///     + noveltyBoost
///     + usageBoost
///     + pinnedBoost
/// effectiveScore = clamp(max(safetyFloor, raw), 0.0, 1.0)
/// ```
///
/// The floor is applied after summation, so boosts still lift a
/// safety-critical memory above 0.6.
pub fn compute(inputs: &ScoreInputs) -> f64 {
    Terms::evaluate(inputs).effective_score()
}

/// Every term of the formula, evaluated once.
struct Terms {
    decay_factor: f64,
    novelty_boost: f64,
    usage_boost: f64,
    pinned_boost: f64,
    raw: f64,
    safety_floor: f64,
}

impl Terms {
    fn evaluate(inputs: &ScoreInputs) -> Self {
        let decay_factor = factors::decay::calculate(inputs.age_days, inputs.half_life_days);
        let novelty_boost = factors::novelty::calculate(inputs.age_days);
        let usage_boost = factors::usage::calculate(inputs.usage_events);
        let pinned_boost = factors::pinned::calculate(inputs.user_pinned);
        let safety_floor = factors::safety::floor(inputs.safety_critical);
        let raw = inputs.base_score * decay_factor + novelty_boost + usage_boost + pinned_boost;
        Self {
            decay_factor,
            novelty_boost,
            usage_boost,
            pinned_boost,
            raw,
            safety_floor,
        }
    }

    fn effective_score(&self) -> f64 {
        self.raw.max(self.safety_floor).clamp(0.0, 1.0)
    }
}

/// Each term of the formula, for dashboards and audits.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub age_days: f64,
    pub decay_factor: f64,
    pub novelty_boost: f64,
    pub usage_boost: f64,
    pub pinned_boost: f64,
    pub raw: f64,
    pub safety_floor: f64,
    pub effective_score: f64,
    pub warnings: Vec<DataQualityWarning>,
}

impl ScoreBreakdown {
    /// Whether the safety floor, rather than the summed terms, set the score.
    pub fn floor_applied(&self) -> bool {
        self.safety_floor > self.raw
    }
}

/// Compute the score with a full breakdown of each term.
pub fn compute_breakdown(inputs: &ScoreInputs) -> ScoreBreakdown {
    let terms = Terms::evaluate(inputs);
    ScoreBreakdown {
        base_score: inputs.base_score,
        age_days: inputs.age_days,
        decay_factor: terms.decay_factor,
        novelty_boost: terms.novelty_boost,
        usage_boost: terms.usage_boost,
        pinned_boost: terms.pinned_boost,
        raw: terms.raw,
        safety_floor: terms.safety_floor,
        effective_score: terms.effective_score(),
        warnings: inputs.warnings.clone(),
    }
}
