use engram_core::config::SafetyConfig;
use engram_core::errors::EngramResult;
use engram_core::memory::Memory;
use engram_core::models::Classification;
use engram_core::traits::IClassifier;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::table::PatternTable;

/// Decides whether a memory's text is safety-critical, and why.
///
/// The pattern table is owned by the classifier and can be extended at
/// runtime with [`add_pattern`](Self::add_pattern).
#[derive(Debug, Clone)]
pub struct SafetyClassifier {
    table: PatternTable,
}

impl SafetyClassifier {
    /// Built-in pattern table.
    pub fn new() -> EngramResult<Self> {
        Ok(Self {
            table: PatternTable::builtin()?,
        })
    }

    /// Built-in table (unless disabled) followed by the configured extras.
    pub fn from_config(config: &SafetyConfig) -> EngramResult<Self> {
        let mut table = if config.builtin_patterns {
            PatternTable::builtin()?
        } else {
            PatternTable::empty()
        };
        table.extend_from_entries(&config.extra_patterns)?;
        debug!(patterns = table.len(), "safety classifier ready");
        Ok(Self { table })
    }

    /// Use an explicit table.
    pub fn with_table(table: PatternTable) -> Self {
        Self { table }
    }

    /// Register another case-insensitive pattern. Evaluated after the
    /// existing ones.
    pub fn add_pattern(&mut self, pattern: &str, indicator_label: &str) -> EngramResult<()> {
        self.table.add(pattern, indicator_label)?;
        info!(pattern, label = indicator_label, "safety pattern added");
        Ok(())
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    pub fn pattern_count(&self) -> usize {
        self.table.len()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.table.labels()
    }

    /// Scan `text`. Empty text is simply not safety-critical.
    pub fn classify(&self, text: &str) -> Classification {
        let span = engram_observability::classify_span!(text.len());
        let _guard = span.enter();

        if text.trim().is_empty() {
            return Classification::clear();
        }
        let indicators = self.table.matching_labels(text);
        Classification {
            safety_critical: !indicators.is_empty(),
            indicators,
        }
    }

    /// Re-scan a memory's text and return the upgraded record.
    ///
    /// New indicators are merged in. A scan that matches nothing never clears
    /// an existing flag.
    pub fn reclassify(&self, memory: &Memory) -> Memory {
        let found = self.classify(&memory.raw);
        let mut next = memory.clone();

        if found.safety_critical && !memory.safety_critical {
            info!(
                memory_id = %memory.id,
                indicators = ?found.indicators,
                "memory flagged safety-critical"
            );
        } else if memory.safety_critical && !found.safety_critical {
            debug!(memory_id = %memory.id, "re-scan matched nothing; safety flag retained");
        }

        next.safety_critical = memory.safety_critical || found.safety_critical;
        for label in found.indicators {
            if !next.safety_indicators.contains(&label) {
                next.safety_indicators.push(label);
            }
        }
        next
    }

    /// [`reclassify`](Self::reclassify) over a batch, order preserved.
    pub fn reclassify_all(&self, memories: &[Memory]) -> Vec<Memory> {
        memories.par_iter().map(|m| self.reclassify(m)).collect()
    }
}

impl IClassifier for SafetyClassifier {
    fn classify(&self, text: &str) -> Classification {
        SafetyClassifier::classify(self, text)
    }
}
