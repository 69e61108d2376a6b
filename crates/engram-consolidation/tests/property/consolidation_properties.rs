use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use engram_consolidation::{ConsolidationPlanner, PlanOptions};
use engram_core::errors::EngramResult;
use engram_core::memory::{Layer, Memory};
use engram_score::ScoreEngine;
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// Symmetric pseudo-similarity in [0, 1) derived from the pair and a seed.
fn hashed_similarity(seed: u64) -> impl Fn(&str, &str) -> EngramResult<f64> + Send + Sync {
    move |a: &str, b: &str| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut hasher = blake3::Hasher::new();
        hasher.update(&seed.to_le_bytes());
        hasher.update(lo.as_bytes());
        hasher.update(&[0]);
        hasher.update(hi.as_bytes());
        let bytes = hasher.finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes.as_bytes()[..8]);
        Ok(u64::from_le_bytes(word) as f64 / (u64::MAX as f64 + 1.0))
    }
}

fn arb_memories() -> impl Strategy<Value = Vec<Memory>> {
    prop::collection::vec((0.0f64..=1.0, 0u32..30, any::<bool>()), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (base, age, pinned))| {
                let mut m = Memory::with_id(
                    format!("m{i:02}"),
                    "prop",
                    Layer::Session,
                    base,
                    now() - Duration::days(age as i64),
                );
                m.user_pinned = pinned;
                m
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn planning_is_deterministic(
        memories in arb_memories(),
        seed in any::<u64>(),
        threshold in 0.3f64..0.95,
    ) {
        let opts = PlanOptions { similarity_threshold: threshold, ..PlanOptions::default() };
        let planner = ConsolidationPlanner::new(ScoreEngine::new(), opts);
        let sim = hashed_similarity(seed);
        let first = planner.plan(&memories, &sim, now());
        let second = planner.plan(&memories, &sim, now());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn small_clusters_never_appear(
        memories in arb_memories(),
        seed in any::<u64>(),
        threshold in 0.3f64..0.95,
        min_size in 0usize..6,
    ) {
        let opts = PlanOptions {
            similarity_threshold: threshold,
            min_cluster_size: min_size,
            ..PlanOptions::default()
        };
        let planner = ConsolidationPlanner::new(ScoreEngine::new(), opts);
        let plan = planner.plan(&memories, &hashed_similarity(seed), now());
        for cluster in &plan {
            prop_assert!(cluster.member_count() >= min_size.max(2));
        }
    }

    #[test]
    fn clusters_partition_their_members(
        memories in arb_memories(),
        seed in any::<u64>(),
        threshold in 0.3f64..0.95,
    ) {
        let opts = PlanOptions { similarity_threshold: threshold, ..PlanOptions::default() };
        let planner = ConsolidationPlanner::new(ScoreEngine::new(), opts);
        let plan = planner.plan(&memories, &hashed_similarity(seed), now());
        let mut seen = HashSet::new();
        for cluster in &plan {
            prop_assert!(seen.insert(cluster.canonical_id.clone()));
            for dup in &cluster.duplicate_ids {
                prop_assert!(seen.insert(dup.clone()));
            }
        }
    }

    #[test]
    fn survivor_has_the_top_score(
        memories in arb_memories(),
        seed in any::<u64>(),
        threshold in 0.3f64..0.95,
    ) {
        let engine = ScoreEngine::new();
        let opts = PlanOptions { similarity_threshold: threshold, ..PlanOptions::default() };
        let planner = ConsolidationPlanner::new(engine.clone(), opts);
        let plan = planner.plan(&memories, &hashed_similarity(seed), now());
        let score_of = |id: &str| {
            let m = memories.iter().find(|m| m.id == id).unwrap();
            engine.compute(m, now())
        };
        for cluster in &plan {
            let top = score_of(&cluster.canonical_id);
            for dup in &cluster.duplicate_ids {
                prop_assert!(score_of(dup) <= top);
            }
        }
    }
}
