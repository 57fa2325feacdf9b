//! End-to-end tests for the ranking engine.

use std::sync::Arc;

use codematch_confidence::{ConfidenceScorer, InMemoryMetadataStore};
use codematch_core::config::{
    CodematchConfig, CriteriaWeights, RankingCriteria, RankingStrategy, ScoringConfig,
};
use codematch_core::errors::{CodematchError, CodematchErrorCode, RankingError};
use codematch_core::models::{ClassificationRequest, CodeType};
use codematch_ranking::RankingEngine;
use test_fixtures::{load_scenario, scored, FixedScoreScorer};

fn fixed_engine() -> RankingEngine {
    RankingEngine::with_scorer(Arc::new(FixedScoreScorer::new()))
}

fn request() -> ClassificationRequest {
    ClassificationRequest::new("Sunrise Bakery").with_description("fresh bread and pastries")
}

#[test]
fn floor_filters_and_ranks_are_contiguous() {
    let candidates = vec![
        scored("A", CodeType::Naics, 0.85),
        scored("B", CodeType::Naics, 0.65),
        scored("C", CodeType::Sic, 0.75),
        scored("D", CodeType::Mcc, 0.70),
    ];
    let criteria = RankingCriteria::with_strategy(RankingStrategy::Confidence).min_confidence(0.7);
    let set = fixed_engine()
        .rank(&candidates, &request(), Some(&criteria))
        .unwrap();

    let codes: Vec<&str> = set
        .overall_results
        .iter()
        .map(|r| r.candidate.code_value())
        .collect();
    assert_eq!(codes, vec!["A", "C", "D"]);
    let ranks: Vec<usize> = set.overall_results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert!(set.overall_results.iter().all(|r| r.type_rank == 1));
    assert_eq!(set.metadata.total_candidates, 4);
    assert_eq!(set.metadata.filtered_candidates, 3);
    assert_eq!(set.metadata.skipped_candidates, 0);
    assert_eq!(set.quality.coverage_by_type.len(), 3);
}

#[test]
fn unreachable_floor_yields_empty_set() {
    let candidates = vec![scored("A", CodeType::Naics, 0.99)];
    let criteria = RankingCriteria::default().min_confidence(1.1);
    let set = fixed_engine()
        .rank(&candidates, &request(), Some(&criteria))
        .unwrap();
    assert!(set.is_empty());
    assert!(set.top_results_by_type.is_empty());
    assert!(set.best().is_none());
}

#[test]
fn identical_candidates_are_capped_per_type() {
    let candidates: Vec<_> = (0..5)
        .map(|i| scored(&format!("54{i}"), CodeType::Naics, 0.8))
        .collect();
    let criteria = RankingCriteria::default().max_results_per_type(2);
    let set = fixed_engine()
        .rank(&candidates, &request(), Some(&criteria))
        .unwrap();

    let group = set.top_for(CodeType::Naics);
    assert_eq!(group.len(), 2);
    assert_eq!(group[0].type_rank, 1);
    assert_eq!(group[1].type_rank, 2);
    assert_eq!(set.len(), 5);
    assert!(group[0].factors.tie_breaker >= group[1].factors.tie_breaker);
}

#[test]
fn identical_inputs_rank_identically() {
    let candidates: Vec<_> = ["7371", "7372", "7373"]
        .iter()
        .map(|c| scored(c, CodeType::Sic, 0.6))
        .collect();
    let engine = fixed_engine();
    let first = engine.rank(&candidates, &request(), None).unwrap();
    let second = engine.rank(&candidates, &request(), None).unwrap();
    let order = |s: &codematch_core::models::RankedResultSet| {
        s.overall_results
            .iter()
            .map(|r| r.candidate.code_value().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(order(&first), order(&second));
}

#[test]
fn empty_input_is_not_an_error() {
    let set = fixed_engine().rank(&[], &request(), None).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.metadata.total_candidates, 0);
    assert_eq!(set.quality.average_confidence, 0.0);
}

#[test]
fn zero_per_type_limit_is_invalid() {
    let criteria = RankingCriteria::default().max_results_per_type(0);
    let err = fixed_engine()
        .rank(&[scored("A", CodeType::Naics, 0.9)], &request(), Some(&criteria))
        .unwrap_err();
    assert!(matches!(err, RankingError::InvalidCriteria { .. }));
}

#[test]
fn negative_weight_is_invalid() {
    let mut criteria = RankingCriteria::with_strategy(RankingStrategy::Weighted);
    criteria.weights = CriteriaWeights {
        confidence: -1.0,
        ..CriteriaWeights::default()
    };
    let err = fixed_engine()
        .rank(&[scored("A", CodeType::Naics, 0.9)], &request(), Some(&criteria))
        .unwrap_err();
    assert!(
        matches!(err, RankingError::InvalidCriteria { ref field, .. } if field == "weights.confidence")
    );
}

#[test]
fn request_floor_overrides_engine_default() {
    let candidates = vec![
        scored("A", CodeType::Naics, 0.9),
        scored("B", CodeType::Naics, 0.4),
    ];
    let mut strict = request();
    strict.min_confidence = Some(0.5);
    let set = fixed_engine().rank(&candidates, &strict, None).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.metadata.min_confidence, 0.5);
}

#[test]
fn overridden_scores_drive_order() {
    let scorer = FixedScoreScorer::new().with_score("B", 0.95);
    let engine = RankingEngine::new(
        Arc::new(scorer),
        RankingCriteria::with_strategy(RankingStrategy::Confidence),
    );
    let candidates = vec![
        scored("A", CodeType::Naics, 0.9),
        scored("B", CodeType::Naics, 0.1),
    ];
    let set = engine.rank(&candidates, &request(), None).unwrap();
    assert_eq!(set.best().map(|r| r.candidate.code_value()), Some("B"));
}

#[test]
fn every_strategy_produces_sorted_results() {
    let candidates = vec![
        scored("A", CodeType::Naics, 0.85),
        scored("B", CodeType::Naics, 0.55),
        scored("C", CodeType::Sic, 0.75),
        scored("D", CodeType::Mcc, 0.45),
    ];
    for strategy in [
        RankingStrategy::Confidence,
        RankingStrategy::Composite,
        RankingStrategy::Weighted,
        RankingStrategy::MultiCriteria,
    ] {
        let criteria = RankingCriteria::with_strategy(strategy);
        let set = fixed_engine()
            .rank(&candidates, &request(), Some(&criteria))
            .unwrap();
        assert_eq!(set.len(), 4, "{strategy}");
        assert_eq!(set.metadata.strategy, strategy);
        assert!(set
            .overall_results
            .windows(2)
            .all(|w| w[0].ranking_score >= w[1].ranking_score));
        assert!(set
            .overall_results
            .iter()
            .all(|r| r.selection_reason.contains(strategy.name())));
    }
}

#[test]
fn bakery_scenario_picks_expected_best() {
    let scenario = load_scenario("bakery");
    let mut store = InMemoryMetadataStore::new();
    for entry in &scenario.metadata {
        store.insert(&entry.code, &entry.version, entry.metadata.clone());
    }
    let scorer = ConfidenceScorer::new(ScoringConfig::base_only(), Arc::new(store));
    let engine = RankingEngine::with_scorer(Arc::new(scorer));

    let set = engine
        .rank(&scenario.candidates, &scenario.request, None)
        .unwrap();
    let best = set.best().expect("bakery scenario has survivors");
    assert_eq!(Some(best.candidate.code_value()), scenario.expected_best.as_deref());
    assert_eq!(best.rank, 1);
    assert!(!best.selection_reason.is_empty());
    assert!(set.top_for(CodeType::Naics).len() <= 3);
}

#[test]
fn engine_from_config_uses_ranking_section() {
    let config = CodematchConfig::from_toml(
        r#"
        [ranking]
        strategy = "confidence"
        min_confidence = 0.6
        max_results_per_type = 1
        "#,
    )
    .unwrap();
    let engine =
        RankingEngine::from_config(Arc::new(FixedScoreScorer::new()), &config).unwrap();
    assert_eq!(engine.default_criteria(), &config.ranking);

    let candidates = vec![
        scored("A", CodeType::Naics, 0.9),
        scored("B", CodeType::Naics, 0.7),
        scored("C", CodeType::Naics, 0.5),
    ];
    let set = engine.rank(&candidates, &request(), None).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.top_for(CodeType::Naics).len(), 1);
    assert_eq!(set.metadata.strategy, RankingStrategy::Confidence);
}

#[test]
fn engine_from_invalid_config_is_a_config_error() {
    let mut config = CodematchConfig::default();
    config.ranking.max_results_per_type = 0;
    let err = RankingEngine::from_config(Arc::new(FixedScoreScorer::new()), &config)
        .err()
        .expect("zero per-type limit is rejected");
    assert!(matches!(err, CodematchError::Config(_)));
    assert!(!err.error_code().is_empty());
}
