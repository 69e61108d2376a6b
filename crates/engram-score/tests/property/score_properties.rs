//! Property tests for the effective-score formula and refresh policy.

use chrono::{DateTime, Duration, TimeZone, Utc};
use engram_core::config::RefreshConfig;
use engram_core::memory::{Layer, Memory};
use engram_score::{ScoreEngine, ScoreRefreshPolicy};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn arb_layer() -> impl Strategy<Value = Layer> {
    prop_oneof![
        Just(Layer::Identity),
        Just(Layer::Project),
        Just(Layer::Session),
        Just(Layer::Task),
    ]
}

#[allow(clippy::too_many_arguments)]
fn make_memory(
    layer: Layer,
    base_score: f64,
    age_minutes: i64,
    safety_critical: bool,
    user_pinned: bool,
    retrieval_count: u64,
    used_count: u64,
) -> Memory {
    let mut m = Memory::with_id(
        "prop",
        "x",
        layer,
        base_score,
        now() - Duration::minutes(age_minutes),
    );
    m.safety_critical = safety_critical;
    m.user_pinned = user_pinned;
    m.retrieval_count = retrieval_count;
    m.used_count = used_count;
    m
}

// Ages from one week of clock skew up to ~20 years.
const MAX_AGE_MINUTES: i64 = 20 * 365 * 24 * 60;
const MAX_SKEW_MINUTES: i64 = 7 * 24 * 60;

proptest! {
    #[test]
    fn score_bounded_zero_to_one(
        layer in arb_layer(),
        base in 0.0f64..=1.0,
        age in -MAX_SKEW_MINUTES..MAX_AGE_MINUTES,
        safety in any::<bool>(),
        pinned in any::<bool>(),
        retrieved in 0u64..10_000,
        used in 0u64..10_000,
    ) {
        let engine = ScoreEngine::new();
        let m = make_memory(layer, base, age, safety, pinned, retrieved, used);
        let score = engine.compute(&m, now());
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn safety_floor_holds(
        layer in arb_layer(),
        base in 0.0f64..=1.0,
        age in 0..MAX_AGE_MINUTES,
        pinned in any::<bool>(),
        retrieved in 0u64..100,
    ) {
        let engine = ScoreEngine::new();
        let m = make_memory(layer, base, age, true, pinned, retrieved, 0);
        prop_assert!(engine.compute(&m, now()) >= 0.6);
    }

    #[test]
    fn identity_decay_is_always_one(age in 0..MAX_AGE_MINUTES) {
        let engine = ScoreEngine::new();
        let m = make_memory(Layer::Identity, 0.5, age, false, false, 0, 0);
        prop_assert_eq!(engine.compute_breakdown(&m, now()).decay_factor, 1.0);
    }

    #[test]
    fn idempotent_at_same_instant(
        layer in arb_layer(),
        base in 0.0f64..=1.0,
        age in 0..MAX_AGE_MINUTES,
        retrieved in 0u64..100,
    ) {
        let engine = ScoreEngine::new();
        let policy = ScoreRefreshPolicy::new(engine.clone(), &RefreshConfig::default());
        let m = make_memory(layer, base, age, false, false, retrieved, 0);
        let a = engine.compute(&m, now());
        let b = engine.compute(&m, now());
        prop_assert_eq!(a, b);
        let once = policy.refresh(&m, now());
        let twice = policy.refresh(&once, now());
        prop_assert_eq!(once.effective_score, twice.effective_score);
    }

    #[test]
    fn usage_never_lowers_score(
        layer in arb_layer(),
        base in 0.0f64..=1.0,
        age in 0..MAX_AGE_MINUTES,
        retrieved in 0u64..50,
        used in 0u64..50,
        extra in 1u64..50,
    ) {
        let engine = ScoreEngine::new();
        let before = make_memory(layer, base, age, false, false, retrieved, used);
        let more_retrieved = make_memory(layer, base, age, false, false, retrieved + extra, used);
        let more_used = make_memory(layer, base, age, false, false, retrieved, used + extra);
        let s = engine.compute(&before, now());
        prop_assert!(engine.compute(&more_retrieved, now()) >= s);
        prop_assert!(engine.compute(&more_used, now()) >= s);
    }

    #[test]
    fn novelty_tapers_linearly(age_minutes in 0i64..(7 * 24 * 60)) {
        let engine = ScoreEngine::new();
        let m = make_memory(Layer::Identity, 0.0, age_minutes, false, false, 0, 0);
        let b = engine.compute_breakdown(&m, now());
        let expected = 0.15 * (1.0 - (age_minutes as f64 / (24.0 * 60.0)) / 7.0);
        prop_assert!((b.novelty_boost - expected).abs() < 1e-9);
    }

    #[test]
    fn no_novelty_after_a_week(age in (7 * 24 * 60)..MAX_AGE_MINUTES) {
        let engine = ScoreEngine::new();
        let m = make_memory(Layer::Project, 0.5, age, false, false, 0, 0);
        prop_assert_eq!(engine.compute_breakdown(&m, now()).novelty_boost, 0.0);
    }
}
