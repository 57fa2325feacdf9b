use std::sync::Arc;

use chrono::Utc;
use codematch_confidence::factors::FactorCalculator;
use codematch_confidence::passes::calibration;
use codematch_confidence::{ConfidenceScorer, InMemoryMetadataStore};
use codematch_core::config::{
    CalibrationConfig, RefinementPasses, ScoringConfig, ScoringWeights, ValidationRuleConfig,
};
use codematch_core::models::{
    ClassificationCandidate, ClassificationRequest, CodeMetadata, CodeType, ConfidenceFactors,
    ConfidenceScore, DataQuality, IndustryCode,
};
use proptest::prelude::*;

fn calculator() -> FactorCalculator {
    FactorCalculator::new(
        Arc::new(InMemoryMetadataStore::new()),
        ValidationRuleConfig::builtin(),
    )
}

fn factors_strategy() -> impl Strategy<Value = ConfidenceFactors> {
    prop::array::uniform7(0.0f64..=1.0).prop_map(|v| ConfidenceFactors {
        text_match: v[0],
        keyword_match: v[1],
        name_match: v[2],
        category_match: v[3],
        code_quality: v[4],
        usage_frequency: v[5],
        contextual: v[6],
        validation: 1.0,
        custom: Default::default(),
    })
}

proptest! {
    #[test]
    fn every_factor_is_in_unit_range(
        name in ".{0,40}",
        description in ".{0,120}",
        website in ".{0,40}",
        code_description in "[a-zA-Z ]{0,60}",
        category in "[a-zA-Z ]{0,30}",
        keywords in prop::collection::vec("[a-z]{1,10}", 0..6),
        prior in -1.0f64..2.0,
    ) {
        let candidate = ClassificationCandidate::new(
            IndustryCode::new("1234", CodeType::Naics, code_description)
                .with_category(category)
                .with_keywords(keywords),
            prior,
        );
        let request = ClassificationRequest::new(name)
            .with_description(description)
            .with_website(website);
        let out = calculator().compute(&candidate, &request, Utc::now());
        for (name, value) in out.factors.named() {
            prop_assert!((0.0..=1.0).contains(&value), "{} = {}", name, value);
        }
    }

    #[test]
    fn composite_is_monotonic_in_each_factor(
        factors in factors_strategy(),
        index in 0usize..7,
        bump in 0.0f64..=1.0,
    ) {
        let weights = ScoringWeights::default();
        let before = weights.composite(&factors);
        let mut raised = factors.clone();
        let slot = match index {
            0 => &mut raised.text_match,
            1 => &mut raised.keyword_match,
            2 => &mut raised.name_match,
            3 => &mut raised.category_match,
            4 => &mut raised.code_quality,
            5 => &mut raised.usage_frequency,
            _ => &mut raised.contextual,
        };
        *slot = (*slot + bump).min(1.0);
        prop_assert!(weights.composite(&raised) >= before - 1e-12);
    }

    #[test]
    fn validation_never_raises_the_composite(
        prior in 0.0f64..=1.0,
        name in "[a-zA-Z ]{0,20}",
        rule_weight in 0.0f64..=1.0,
    ) {
        let mut rules = ValidationRuleConfig::builtin();
        rules.iter_mut().for_each(|r| r.weight = rule_weight);
        let calc = FactorCalculator::new(Arc::new(InMemoryMetadataStore::new()), rules);
        let candidate = ClassificationCandidate::new(
            IndustryCode::new("5812", CodeType::Sic, "Eating Places"),
            prior,
        );
        let out = calc.compute(&candidate, &ClassificationRequest::new(name), Utc::now());
        let composite = ScoringWeights::default().composite(&out.factors);
        prop_assert!(out.factors.validation <= 1.0);
        prop_assert!(composite * out.factors.validation <= composite + 1e-12);
    }

    #[test]
    fn overall_is_always_clamped(value in prop::num::f64::ANY) {
        let mut score = ConfidenceScore::new(0.5, ConfidenceFactors::uniform(0.5));
        score.set_overall(value);
        prop_assert!((0.0..=1.0).contains(&score.overall()));
    }

    #[test]
    fn calibration_is_monotonic(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        code_type in prop_oneof![
            Just(CodeType::Naics),
            Just(CodeType::Sic),
            Just(CodeType::Mcc),
            Just(CodeType::Other),
        ],
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut low_score = ConfidenceScore::new(low, ConfidenceFactors::uniform(low));
        let mut high_score = ConfidenceScore::new(high, ConfidenceFactors::uniform(high));
        calibration::apply(&mut low_score, code_type, &CalibrationConfig::default());
        calibration::apply(&mut high_score, code_type, &CalibrationConfig::default());
        prop_assert!(high_score.overall() >= low_score.overall());
    }

    #[test]
    fn scored_overall_never_drops_as_prior_rises(
        name in "[a-zA-Z ]{1,30}",
        description in "[a-zA-Z ]{0,80}",
        prior in 0.0f64..=1.0,
        bump in 0.0f64..=1.0,
    ) {
        // History-dependent passes off; the rest never lower a rising score.
        let config = ScoringConfig {
            passes: RefinementPasses {
                statistical_validation: false,
                benchmarking: false,
                ..RefinementPasses::all()
            },
            ..ScoringConfig::default()
        };
        // Low-tier metadata keeps code quality below 1.0 so the prior moves it.
        let mut store = InMemoryMetadataStore::new();
        store.insert(
            "311811",
            "",
            CodeMetadata {
                data_quality: DataQuality::Low,
                last_updated: Utc::now(),
                source: "trade listing".to_string(),
                usage_count: 120,
            },
        );
        let scorer = ConfidenceScorer::new(config, Arc::new(store));
        let request = ClassificationRequest::new(name).with_description(description);
        let candidate = |p: f64| {
            ClassificationCandidate::new(
                IndustryCode::new("311811", CodeType::Naics, "Retail Bakeries")
                    .with_category("Food Manufacturing")
                    .with_keywords(["bakery", "bread"]),
                p,
            )
        };
        let before = scorer.score(&candidate(prior), &request).unwrap();
        let after = scorer
            .score(&candidate((prior + bump).min(1.0)), &request)
            .unwrap();
        prop_assert!(after.factors.code_quality >= before.factors.code_quality);
        prop_assert!(after.calibration.is_some());
        prop_assert!(
            after.overall() >= before.overall() - 1e-12,
            "{} -> {}",
            before.overall(),
            after.overall()
        );
    }
}
