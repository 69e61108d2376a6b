use engram_core::constants::{NOVELTY_BOOST_MAX, NOVELTY_WINDOW_DAYS};

/// Novelty boost: linear taper from 0.15 at age 0 to 0.0 at 7 days.
pub fn calculate(age_days: f64) -> f64 {
    if age_days >= NOVELTY_WINDOW_DAYS {
        return 0.0;
    }
    NOVELTY_BOOST_MAX * (1.0 - age_days / NOVELTY_WINDOW_DAYS)
}
