//! # engram-safety
//!
//! Flags safety-critical memories (allergies, medications, conditions,
//! emergency directives, severity keywords) with an ordered, extensible table
//! of case-insensitive patterns. Flags only ever go up.

pub mod engine;
pub mod patterns;
pub mod table;

pub use engine::SafetyClassifier;
pub use patterns::SafetyPattern;
pub use table::PatternTable;
