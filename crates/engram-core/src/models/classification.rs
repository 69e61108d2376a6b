use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of scanning a piece of text for safety-critical content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// True iff at least one pattern matched.
    pub safety_critical: bool,
    /// Every distinct label that matched, in pattern-table order.
    pub indicators: Vec<String>,
}

impl Classification {
    /// The result for empty text.
    pub fn clear() -> Self {
        Self::default()
    }
}
