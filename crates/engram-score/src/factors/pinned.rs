use engram_core::constants::PINNED_BOOST;

/// Flat boost for user-pinned memories.
pub fn calculate(user_pinned: bool) -> f64 {
    if user_pinned {
        PINNED_BOOST
    } else {
        0.0
    }
}
