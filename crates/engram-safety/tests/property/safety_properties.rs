use chrono::{TimeZone, Utc};
use engram_core::{Layer, Memory};
use engram_safety::SafetyClassifier;
use proptest::prelude::*;

fn arb_memory() -> impl Strategy<Value = Memory> {
    (
        "[ -~]{0,80}",
        any::<bool>(),
        prop::collection::vec("[a-z_]{1,12}", 0..4),
    )
        .prop_map(|(raw, flagged, indicators)| {
            let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
            let mut m = Memory::with_id("p", raw, Layer::Project, 0.5, created);
            m.safety_critical = flagged;
            m.safety_indicators = indicators;
            m
        })
}

proptest! {
    #[test]
    fn flag_matches_indicator_presence(text in "\\PC{0,120}") {
        let classifier = SafetyClassifier::new().unwrap();
        let result = classifier.classify(&text);
        prop_assert_eq!(result.safety_critical, !result.indicators.is_empty());
    }

    #[test]
    fn indicators_are_distinct(text in "\\PC{0,120}") {
        let classifier = SafetyClassifier::new().unwrap();
        let result = classifier.classify(&text);
        let mut seen = result.indicators.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), result.indicators.len());
    }

    #[test]
    fn reclassify_is_monotone(m in arb_memory()) {
        let classifier = SafetyClassifier::new().unwrap();
        let next = classifier.reclassify(&m);
        prop_assert!(next.safety_critical || !m.safety_critical);
        for label in &m.safety_indicators {
            prop_assert!(next.safety_indicators.contains(label));
        }
    }

    #[test]
    fn reclassify_is_idempotent(m in arb_memory()) {
        let classifier = SafetyClassifier::new().unwrap();
        let once = classifier.reclassify(&m);
        let twice = classifier.reclassify(&once);
        prop_assert_eq!(once.safety_critical, twice.safety_critical);
        prop_assert_eq!(once.safety_indicators, twice.safety_indicators);
    }
}
