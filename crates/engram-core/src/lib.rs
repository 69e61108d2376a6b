//! # engram-core
//!
//! Foundation crate for Engram memory scoring.
//! Defines the memory record, derived models, errors, config, the injected
//! clock, and the traits the scoring crates implement.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngramConfig;
pub use errors::{EngramError, EngramResult};
pub use memory::{Layer, Memory};
pub use models::{Classification, ConsolidationCluster, DataQualityWarning};
