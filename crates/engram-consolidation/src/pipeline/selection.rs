//! Phase 1: Selection. Active memories of one layer.

use engram_core::memory::{Layer, Memory};

/// Layer consolidation runs over unless configured otherwise.
pub const DEFAULT_PLANNING_LAYER: Layer = Layer::Session;

/// Keep active (not yet consolidated) memories of `layer`, in input order.
pub fn select_candidates(memories: &[Memory], layer: Layer) -> Vec<&Memory> {
    memories
        .iter()
        .filter(|m| m.layer == layer && m.is_active())
        .collect()
}
