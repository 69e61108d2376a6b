//! Span definitions per operation: scoring, refresh, classification, consolidation.

/// Create a scoring span for a single memory.
#[macro_export]
macro_rules! score_span {
    ($memory_id:expr) => {
        tracing::debug_span!("engram.score", memory_id = %$memory_id)
    };
}

/// Create a batch refresh span.
#[macro_export]
macro_rules! refresh_span {
    ($memory_count:expr, $trigger:expr) => {
        tracing::info_span!("engram.refresh", memory_count = $memory_count, trigger = ?$trigger)
    };
}

/// Create a safety classification span.
#[macro_export]
macro_rules! classify_span {
    ($text_len:expr) => {
        tracing::debug_span!("engram.classify", text_len = $text_len)
    };
}

/// Create a consolidation planning span.
#[macro_export]
macro_rules! consolidation_span {
    ($batch_size:expr) => {
        tracing::info_span!("engram.consolidation", batch_size = $batch_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORE: &str = "engram.score";
    pub const REFRESH: &str = "engram.refresh";
    pub const CLASSIFY: &str = "engram.classify";
    pub const CONSOLIDATION: &str = "engram.consolidation";
}
