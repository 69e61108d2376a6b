//! ConsolidationPlanner: selection → linking → components → survivor.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use engram_core::clock::Clock;
use engram_core::config::ConsolidationConfig;
use engram_core::memory::{Layer, Memory};
use engram_core::models::ConsolidationCluster;
use engram_core::traits::ISimilarity;
use engram_score::ScoreEngine;
use tracing::{debug, info};

use crate::algorithms::components::connected_components;
use crate::pipeline::linking::link_candidates;
use crate::pipeline::selection::{select_candidates, DEFAULT_PLANNING_LAYER};
use crate::pipeline::survivor::choose_survivor;

/// Smallest cluster that can be consolidated.
const MIN_MEANINGFUL_CLUSTER: usize = 2;

/// Planner options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOptions {
    /// Pairs at or above this similarity are linked.
    pub similarity_threshold: f64,
    /// Clusters smaller than this are dropped. Values below 2 act as 2.
    pub min_cluster_size: usize,
    /// Only active memories of this layer are considered.
    pub layer: Layer,
}

impl PlanOptions {
    pub fn from_config(config: &ConsolidationConfig) -> Self {
        Self {
            similarity_threshold: config.similarity_threshold,
            min_cluster_size: config.min_cluster_size,
            layer: DEFAULT_PLANNING_LAYER,
        }
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    fn effective_min_size(&self) -> usize {
        self.min_cluster_size.max(MIN_MEANINGFUL_CLUSTER)
    }
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self::from_config(&ConsolidationConfig::default())
    }
}

/// Decides which memories cluster together and which one survives.
///
/// Planning is read-only; see [`apply_plan`](crate::apply_plan) for writing
/// the result back.
#[derive(Clone)]
pub struct ConsolidationPlanner {
    engine: ScoreEngine,
    options: PlanOptions,
}

impl ConsolidationPlanner {
    pub fn new(engine: ScoreEngine, options: PlanOptions) -> Self {
        Self { engine, options }
    }

    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Plan at the engine clock's current instant.
    pub fn plan_now(
        &self,
        memories: &[Memory],
        similarity: &dyn ISimilarity,
    ) -> Vec<ConsolidationCluster> {
        self.plan(memories, similarity, self.engine.clock().now())
    }

    /// Group near-duplicates among `memories`.
    ///
    /// Clusters are listed largest first, then by canonical id. Duplicates
    /// keep input order. Survivors are chosen by effective score at `now`.
    pub fn plan(
        &self,
        memories: &[Memory],
        similarity: &dyn ISimilarity,
        now: DateTime<Utc>,
    ) -> Vec<ConsolidationCluster> {
        let span = engram_observability::consolidation_span!(memories.len());
        let _guard = span.enter();

        let candidates = select_candidates(memories, self.options.layer);
        if candidates.len() < MIN_MEANINGFUL_CLUSTER {
            debug!(candidates = candidates.len(), "too few candidates to consolidate");
            return Vec::new();
        }

        let linked = link_candidates(&candidates, similarity, self.options.similarity_threshold);
        let min_size = self.options.effective_min_size();

        let mut clusters: Vec<ConsolidationCluster> =
            connected_components(candidates.len(), &linked.links)
                .into_iter()
                .filter(|group| group.len() >= min_size)
                .filter_map(|group| self.build_cluster(&candidates, &group, now))
                .collect();

        clusters.sort_by(|a, b| {
            Reverse(a.member_count())
                .cmp(&Reverse(b.member_count()))
                .then_with(|| a.canonical_id.cmp(&b.canonical_id))
        });

        info!(
            candidates = candidates.len(),
            links = linked.links.len(),
            failed_pairs = linked.failed_pairs,
            clusters = clusters.len(),
            "consolidation planned"
        );
        clusters
    }

    fn build_cluster(
        &self,
        candidates: &[&Memory],
        group: &[usize],
        now: DateTime<Utc>,
    ) -> Option<ConsolidationCluster> {
        let members: Vec<&Memory> = group.iter().map(|&i| candidates[i]).collect();
        let survivor = choose_survivor(&self.engine, &members, now)?;
        let duplicate_ids = members
            .iter()
            .enumerate()
            .filter(|(pos, _)| *pos != survivor)
            .map(|(_, m)| m.id.clone())
            .collect();
        Some(ConsolidationCluster {
            canonical_id: members[survivor].id.clone(),
            duplicate_ids,
        })
    }
}

impl Default for ConsolidationPlanner {
    fn default() -> Self {
        Self::new(ScoreEngine::new(), PlanOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use engram_core::errors::{ConsolidationError, EngramResult};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn session(id: &str, base: f64) -> Memory {
        Memory::with_id(id, "text", Layer::Session, base, now() - Duration::days(2))
    }

    fn all_similar(_: &str, _: &str) -> EngramResult<f64> {
        Ok(0.9)
    }

    #[test]
    fn defaults_follow_config() {
        let opts = PlanOptions::default();
        assert_eq!(opts.similarity_threshold, 0.85);
        assert_eq!(opts.min_cluster_size, 3);
        assert_eq!(opts.layer, Layer::Session);
    }

    #[test]
    fn empty_input_plans_nothing() {
        let planner = ConsolidationPlanner::default();
        assert!(planner.plan(&[], &all_similar, now()).is_empty());
    }

    #[test]
    fn three_similar_memories_make_one_cluster() {
        let planner = ConsolidationPlanner::default();
        let memories = vec![session("a", 0.4), session("b", 0.7), session("c", 0.5)];
        let plan = planner.plan(&memories, &all_similar, now());
        assert_eq!(
            plan,
            vec![ConsolidationCluster {
                canonical_id: "b".to_string(),
                duplicate_ids: vec!["a".to_string(), "c".to_string()],
            }]
        );
    }

    #[test]
    fn min_cluster_size_below_two_acts_as_two() {
        let opts = PlanOptions {
            min_cluster_size: 0,
            ..PlanOptions::default()
        };
        let planner = ConsolidationPlanner::new(ScoreEngine::new(), opts);
        let memories = vec![session("a", 0.4), session("b", 0.7), session("lonely", 0.5)];
        let sim = |a: &str, b: &str| -> EngramResult<f64> {
            Ok(if a == "lonely" || b == "lonely" { 0.0 } else { 0.9 })
        };
        let plan = planner.plan(&memories, &sim, now());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].canonical_id, "b");
        assert!(!plan[0].contains("lonely"));
    }

    #[test]
    fn failing_pair_does_not_abort_the_pass() {
        let planner = ConsolidationPlanner::default();
        let memories = vec![session("a", 0.4), session("b", 0.7), session("c", 0.5)];
        // a-c fails, but a-b and b-c still chain all three together.
        let sim = |a: &str, b: &str| -> EngramResult<f64> {
            match (a, b) {
                ("a", "c") => Err(ConsolidationError::SimilarityUnavailable {
                    a: a.to_string(),
                    b: b.to_string(),
                    reason: "timeout".to_string(),
                }
                .into()),
                _ => Ok(0.9),
            }
        };
        let plan = planner.plan(&memories, &sim, now());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].member_count(), 3);
    }

    #[test]
    fn nan_similarity_is_below_threshold() {
        let planner = ConsolidationPlanner::default();
        let memories = vec![session("a", 0.4), session("b", 0.7), session("c", 0.5)];
        let sim = |_: &str, _: &str| -> EngramResult<f64> { Ok(f64::NAN) };
        assert!(planner.plan(&memories, &sim, now()).is_empty());
    }

    #[test]
    fn other_layers_are_ignored_unless_configured() {
        let memories = vec![
            Memory::with_id("t1", "x", Layer::Task, 0.5, now()),
            Memory::with_id("t2", "x", Layer::Task, 0.6, now()),
            Memory::with_id("t3", "x", Layer::Task, 0.7, now()),
        ];
        let planner = ConsolidationPlanner::default();
        assert!(planner.plan(&memories, &all_similar, now()).is_empty());

        let task_opts = PlanOptions::default().with_layer(Layer::Task);
        let task_planner = ConsolidationPlanner::new(ScoreEngine::new(), task_opts);
        let plan = task_planner.plan(&memories, &all_similar, now());
        assert_eq!(plan[0].canonical_id, "t3");
    }

    #[test]
    fn plan_does_not_mutate_inputs() {
        let planner = ConsolidationPlanner::default();
        let memories = vec![session("a", 0.4), session("b", 0.7), session("c", 0.5)];
        let before = memories.clone();
        let _ = planner.plan(&memories, &all_similar, now());
        for (m, b) in memories.iter().zip(before.iter()) {
            assert_eq!(m.consolidated_into, b.consolidated_into);
            assert_eq!(m.effective_score, b.effective_score);
        }
    }
}
