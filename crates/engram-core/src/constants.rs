/// Engram core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in one day, used to turn timestamp deltas into fractional days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minimum guaranteed effective score for safety-critical memories.
pub const SAFETY_FLOOR: f64 = 0.6;

/// Lower bound on the decay factor of any decaying layer.
pub const MIN_DECAY_FACTOR: f64 = 0.1;

/// Novelty boost at age zero.
pub const NOVELTY_BOOST_MAX: f64 = 0.15;

/// Age in days after which the novelty boost is gone.
pub const NOVELTY_WINDOW_DAYS: f64 = 7.0;

/// Boost per retrieval or use event.
pub const USAGE_BOOST_PER_EVENT: f64 = 0.02;

/// Cap on the accumulated usage boost.
pub const USAGE_BOOST_CAP: f64 = 0.30;

/// Boost applied to user-pinned memories.
pub const PINNED_BOOST: f64 = 0.50;
