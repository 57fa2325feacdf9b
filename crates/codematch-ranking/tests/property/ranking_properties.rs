use std::collections::BTreeMap;
use std::sync::Arc;

use codematch_core::config::{RankingCriteria, RankingStrategy};
use codematch_core::models::{ClassificationCandidate, ClassificationRequest, CodeType};
use codematch_ranking::RankingEngine;
use proptest::prelude::*;
use test_fixtures::{candidate, FixedScoreScorer};

fn code_type_strategy() -> impl Strategy<Value = CodeType> {
    prop_oneof![
        Just(CodeType::Naics),
        Just(CodeType::Sic),
        Just(CodeType::Mcc),
        Just(CodeType::Other),
    ]
}

fn strategy_strategy() -> impl Strategy<Value = RankingStrategy> {
    prop_oneof![
        Just(RankingStrategy::Confidence),
        Just(RankingStrategy::Composite),
        Just(RankingStrategy::Weighted),
        Just(RankingStrategy::MultiCriteria),
    ]
}

fn candidates_strategy() -> impl Strategy<Value = Vec<ClassificationCandidate>> {
    prop::collection::vec(
        (
            "[0-9]{2,6}",
            code_type_strategy(),
            prop_oneof![Just("Retail"), Just("Food"), Just("Services")],
            0.0f64..=1.0,
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(code, code_type, category, prior)| {
                candidate(&code, code_type, "Generated code", category, prior)
            })
            .collect()
    })
}

fn engine() -> RankingEngine {
    RankingEngine::with_scorer(Arc::new(FixedScoreScorer::new()))
}

proptest! {
    #[test]
    fn overall_results_are_sorted_and_ranked(
        candidates in candidates_strategy(),
        strategy in strategy_strategy(),
    ) {
        let criteria = RankingCriteria::with_strategy(strategy).min_confidence(0.0);
        let set = engine()
            .rank(&candidates, &ClassificationRequest::new("Generated"), Some(&criteria))
            .unwrap();

        prop_assert_eq!(set.len(), candidates.len());
        for pair in set.overall_results.windows(2) {
            prop_assert!(pair[0].ranking_score >= pair[1].ranking_score);
        }
        for (i, result) in set.overall_results.iter().enumerate() {
            prop_assert_eq!(result.rank, i + 1);
        }
    }

    #[test]
    fn type_ranks_restart_per_type(candidates in candidates_strategy()) {
        let set = engine()
            .rank(&candidates, &ClassificationRequest::new("Generated"), None)
            .unwrap();

        let mut seen: BTreeMap<CodeType, usize> = BTreeMap::new();
        for result in &set.overall_results {
            let count = seen.entry(result.code_type()).or_insert(0);
            *count += 1;
            prop_assert_eq!(result.type_rank, *count);
        }
    }

    #[test]
    fn groups_respect_per_type_limit(
        candidates in candidates_strategy(),
        max in 1usize..6,
    ) {
        let criteria = RankingCriteria::default().max_results_per_type(max);
        let set = engine()
            .rank(&candidates, &ClassificationRequest::new("Generated"), Some(&criteria))
            .unwrap();

        for (code_type, group) in &set.top_results_by_type {
            prop_assert!(!group.is_empty());
            prop_assert!(group.len() <= max);
            for (i, result) in group.iter().enumerate() {
                prop_assert_eq!(result.code_type(), *code_type);
                prop_assert_eq!(result.type_rank, i + 1);
            }
        }
    }

    #[test]
    fn lowering_the_floor_never_drops_survivors(
        candidates in candidates_strategy(),
        low in 0.0f64..=1.0,
        delta in 0.0f64..=0.5,
    ) {
        let request = ClassificationRequest::new("Generated");
        let loose = RankingCriteria::default().min_confidence(low);
        let strict = RankingCriteria::default().min_confidence(low + delta);
        let loose_set = engine().rank(&candidates, &request, Some(&loose)).unwrap();
        let strict_set = engine().rank(&candidates, &request, Some(&strict)).unwrap();
        prop_assert!(loose_set.len() >= strict_set.len());
        for result in &strict_set.overall_results {
            prop_assert!(result.confidence.overall() >= low + delta);
        }
    }
}
