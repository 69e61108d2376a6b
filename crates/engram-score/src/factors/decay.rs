use engram_core::constants::MIN_DECAY_FACTOR;

/// Layer decay factor: `max(0.1, 0.5^(ageDays / halfLife))`.
///
/// Range: 0.1 – 1.0.
/// Layers with infinite half-life (IDENTITY) return exactly 1.0.
pub fn calculate(age_days: f64, half_life_days: Option<f64>) -> f64 {
    let half_life = match half_life_days {
        Some(days) => days,
        None => return 1.0, // Infinite half-life: no decay.
    };

    0.5f64.powf(age_days / half_life).max(MIN_DECAY_FACTOR)
}
