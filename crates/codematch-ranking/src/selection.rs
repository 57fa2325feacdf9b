//! Human-readable selection reasons and quality indicators.

use codematch_core::config::{CriteriaWeights, RankingStrategy};
use codematch_core::models::{ConfidenceScore, PerformanceTier, RankingFactors, ValidationStatus};

/// Why a result ranks where it does: its rank context, strategy, and the
/// criterion contributing most to its score.
pub fn selection_reason(
    strategy: RankingStrategy,
    weights: &CriteriaWeights,
    factors: &RankingFactors,
    type_rank: usize,
) -> String {
    let contributions = [
        ("confidence", weights.confidence * factors.confidence, factors.confidence),
        ("relevance", weights.relevance * factors.relevance, factors.relevance),
        ("data quality", weights.quality * factors.quality, factors.quality),
        ("usage frequency", weights.frequency * factors.frequency, factors.frequency),
    ];
    let (name, _, value) = contributions
        .iter()
        .copied()
        .fold(contributions[0], |best, c| if c.1 > best.1 { c } else { best });

    let position = if type_rank == 1 {
        "best match for its code type".to_string()
    } else {
        format!("alternative #{type_rank} for its code type")
    };
    let mut reason = format!("{position}, ranked by {strategy}; strongest criterion {name} ({value:.2})");
    if factors.diversity_bonus > 0.0 {
        reason.push_str("; adds category diversity");
    }
    reason
}

/// Short labels describing why a result can be trusted.
pub fn quality_indicators(score: &ConfidenceScore, preferred_type: bool) -> Vec<String> {
    let mut indicators = Vec::new();
    if score.overall() >= 0.8 {
        indicators.push("high confidence");
    }
    if score.factors.code_quality >= 0.8 {
        indicators.push("high data quality");
    }
    if score.factors.usage_frequency >= 0.8 {
        indicators.push("frequently used");
    }
    if score.data_age_days.is_some_and(|d| d <= 365) {
        indicators.push("recent data");
    }
    if score.validation_status == ValidationStatus::Valid {
        indicators.push("validated");
    }
    if preferred_type {
        indicators.push("preferred code type");
    }
    if score
        .uncertainty
        .as_ref()
        .is_some_and(|u| u.stability_index >= 0.9)
    {
        indicators.push("stable score");
    }
    if score.benchmark.as_ref().is_some_and(|b| {
        matches!(b.performance, PerformanceTier::Excellent | PerformanceTier::Good)
    }) {
        indicators.push("above benchmark");
    }
    indicators.into_iter().map(String::from).collect()
}
