pub mod builtin;

use engram_core::errors::SafetyError;
use regex::{Regex, RegexBuilder};

/// A compiled safety pattern and the indicator label it reports.
#[derive(Debug, Clone)]
pub struct SafetyPattern {
    pub label: String,
    pub regex: Regex,
}

impl SafetyPattern {
    /// Compile `pattern` case-insensitively.
    pub fn compile(pattern: &str, label: &str) -> Result<Self, SafetyError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(SafetyError::EmptyLabel {
                pattern: pattern.to_string(),
            });
        }
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| SafetyError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            label: label.to_string(),
            regex,
        })
    }

    /// Source text of the expression.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
