use serde::{Deserialize, Serialize};

use super::defaults;

/// An operator-supplied safety pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Regular expression, matched case-insensitively.
    pub pattern: String,
    /// Indicator label reported when the pattern matches.
    pub label: String,
}

/// Safety classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Load the built-in allergy / medication / condition / emergency /
    /// severity table.
    pub builtin_patterns: bool,
    /// Extra patterns appended after the built-in table.
    pub extra_patterns: Vec<PatternEntry>,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            builtin_patterns: defaults::DEFAULT_BUILTIN_PATTERNS,
            extra_patterns: Vec::new(),
        }
    }
}
