use engram_core::constants::SAFETY_FLOOR;

/// Minimum effective score. Applied after every other term is summed.
pub fn floor(safety_critical: bool) -> f64 {
    if safety_critical {
        SAFETY_FLOOR
    } else {
        0.0
    }
}
