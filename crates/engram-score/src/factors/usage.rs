use engram_core::constants::{USAGE_BOOST_CAP, USAGE_BOOST_PER_EVENT};

/// Usage boost.
///
/// Formula: `min(0.30, 0.02 × (retrievalCount + usedCount))`
/// Range: 0.0 – 0.30 (capped).
pub fn calculate(usage_events: u64) -> f64 {
    (USAGE_BOOST_PER_EVENT * usage_events as f64).min(USAGE_BOOST_CAP)
}
