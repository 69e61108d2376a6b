use engram_core::config::PatternEntry;
use engram_core::errors::SafetyError;

use crate::patterns::{builtin, SafetyPattern};

/// Ordered, extensible set of safety patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: Vec<SafetyPattern>,
}

impl PatternTable {
    /// An empty table. Nothing is ever flagged until patterns are added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in allergy / medication / condition / emergency / severity table.
    pub fn builtin() -> Result<Self, SafetyError> {
        let mut table = Self::empty();
        for (label, pattern) in builtin::BUILTIN_PATTERNS {
            table.add(pattern, label)?;
        }
        Ok(table)
    }

    /// Append a pattern after every existing one.
    pub fn add(&mut self, pattern: &str, label: &str) -> Result<(), SafetyError> {
        self.patterns.push(SafetyPattern::compile(pattern, label)?);
        Ok(())
    }

    /// Append configured entries in order. Stops at the first invalid one.
    pub fn extend_from_entries(&mut self, entries: &[PatternEntry]) -> Result<(), SafetyError> {
        for entry in entries {
            self.add(&entry.pattern, &entry.label)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[SafetyPattern] {
        &self.patterns
    }

    /// Distinct labels, in first-appearance order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for p in &self.patterns {
            if !labels.contains(&p.label.as_str()) {
                labels.push(&p.label);
            }
        }
        labels
    }

    /// Every distinct label whose pattern matches `text`, in table order.
    pub fn matching_labels(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for p in &self.patterns {
            if found.iter().any(|l| l == &p.label) {
                continue;
            }
            if p.is_match(text) {
                found.push(p.label.clone());
            }
        }
        found
    }
}
