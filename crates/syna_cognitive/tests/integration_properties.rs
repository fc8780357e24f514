use proptest::prelude::*;

use syna_cognitive::{IntegrationEngine, ProcessingResult};

const VOCAB: &[&str] = &[
    "cache", "latency", "replica", "reduces", "depends", "growth", "never", "not", "design",
    "cost",
];

fn insight() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..4).prop_map(|words| words.join(" "))
}

fn processing_result() -> impl Strategy<Value = ProcessingResult> {
    (
        prop::collection::vec(insight(), 0..5),
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..10.0f64,
    )
        .prop_map(|(insights, confidence, novelty, cost)| {
            ProcessingResult::new(insights, confidence, vec!["step".to_string()], cost, novelty)
        })
}

proptest! {
    #[test]
    fn integration_is_deterministic(d in processing_result(), c in processing_result()) {
        let engine = IntegrationEngine::default_engine();
        let first = serde_json::to_string(&engine.integrate(&d, &c).unwrap()).unwrap();
        let second = serde_json::to_string(&engine.integrate(&d, &c).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn integrated_scores_stay_in_bounds(d in processing_result(), c in processing_result()) {
        let merged = IntegrationEngine::default_engine().integrate(&d, &c).unwrap();
        prop_assert!((0.0..=1.0).contains(&merged.confidence));
        prop_assert!(merged.novelty_score >= d.novelty_score.max(c.novelty_score));
        prop_assert!(merged.novelty_score <= 1.0);
        prop_assert!(merged.resource_usage >= d.resource_usage + c.resource_usage);
        prop_assert!(merged.check_invariants().is_ok());
    }

    #[test]
    fn every_input_insight_is_accounted_for(d in processing_result(), c in processing_result()) {
        let integration = IntegrationEngine::default_engine().integrate_detailed(&d, &c).unwrap();
        for insight in d.insights.iter().chain(&c.insights) {
            prop_assert!(integration.accounts_for(insight), "lost insight {:?}", insight);
        }
    }

    #[test]
    fn shared_insight_survives_unless_dropped_on_both_sides(
        d in processing_result(),
        c in processing_result(),
    ) {
        let integration = IntegrationEngine::default_engine().integrate_detailed(&d, &c).unwrap();
        for insight in d.insights.iter().filter(|i| c.insights.contains(i)) {
            let lost_divergent = integration
                .conflicts
                .iter()
                .any(|conflict| conflict.dropped_divergent() == Some(insight.as_str()));
            let lost_convergent = integration
                .conflicts
                .iter()
                .any(|conflict| conflict.dropped_convergent() == Some(insight.as_str()));
            if !(lost_divergent && lost_convergent) {
                prop_assert!(
                    integration.result.insights.contains(insight),
                    "shared insight {:?} vanished",
                    insight
                );
            }
        }
    }

    #[test]
    fn merged_insights_have_no_duplicates(d in processing_result(), c in processing_result()) {
        let merged = IntegrationEngine::default_engine().integrate(&d, &c).unwrap();
        let mut unique = merged.insights.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), merged.insights.len());
    }
}
