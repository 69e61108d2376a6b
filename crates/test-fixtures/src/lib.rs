//! Golden scenario loader for Engram tests.
//!
//! Provides typed deserialization of the fixture JSON files under `golden/`
//! and helpers for loading them from any crate's tests.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Evaluation instant every golden scenario is expressed against.
/// Memory ages in fixtures are days before this instant.
pub const FIXTURE_NOW: &str = "2026-01-01T00:00:00Z";

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// One effective-score scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreScenario {
    pub name: String,
    pub layer: String,
    pub base_score: f64,
    pub age_days: f64,
    #[serde(default)]
    pub safety_critical: bool,
    #[serde(default)]
    pub user_pinned: bool,
    #[serde(default)]
    pub retrieval_count: u64,
    #[serde(default)]
    pub used_count: u64,
    pub expected_effective_score: f64,
    #[serde(default)]
    pub expected_decay_factor: Option<f64>,
}

/// A memory inside a consolidation scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureMemory {
    pub id: String,
    pub layer: String,
    pub base_score: f64,
    pub age_days: f64,
    #[serde(default)]
    pub user_pinned: bool,
    #[serde(default)]
    pub consolidated_into: Option<String>,
}

/// An undirected similarity edge. Pairs not listed have similarity 0.0.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityEdge {
    pub a: String,
    pub b: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectedCluster {
    pub canonical_id: String,
    pub duplicate_ids: Vec<String>,
}

/// One consolidation planning scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsolidationScenario {
    pub name: String,
    #[serde(default)]
    pub similarity_threshold: Option<f64>,
    #[serde(default)]
    pub min_cluster_size: Option<usize>,
    pub memories: Vec<FixtureMemory>,
    pub similarities: Vec<SimilarityEdge>,
    pub expected: Vec<ExpectedCluster>,
}

impl ConsolidationScenario {
    /// Look up the similarity of an unordered pair.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.similarities
            .iter()
            .find(|e| (e.a == a && e.b == b) || (e.a == b && e.b == a))
            .map(|e| e.score)
            .unwrap_or(0.0)
    }
}

pub fn score_scenarios() -> Vec<ScoreScenario> {
    load_fixture("score/scenarios.json")
}

pub fn consolidation_scenarios() -> Vec<ConsolidationScenario> {
    load_fixture("consolidation/scenarios.json")
}
