mod config_error;
mod consolidation_error;
mod engram_error;
mod safety_error;

pub use config_error::ConfigError;
pub use consolidation_error::ConsolidationError;
pub use engram_error::{EngramError, EngramResult};
pub use safety_error::SafetyError;
