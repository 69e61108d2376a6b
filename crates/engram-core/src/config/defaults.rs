// Single source of truth for all default values.

// --- Refresh ---
pub const DEFAULT_STALENESS_WINDOW_SECS: u64 = 0; // recompute on every read
pub const DEFAULT_SCHEDULED_INTERVAL_SECS: u64 = 3600; // 1 hour

// --- Safety ---
pub const DEFAULT_BUILTIN_PATTERNS: bool = true;

// --- Consolidation ---
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
