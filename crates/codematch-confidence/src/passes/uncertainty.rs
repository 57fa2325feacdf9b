//! Uncertainty: how far each factor sits from full confidence.

use std::collections::BTreeMap;

use codematch_core::config::{ScoringWeights, UncertaintyConfig};
use codematch_core::models::{ConfidenceFactors, ConfidenceScore, UncertaintyMetrics};

pub fn apply(score: &mut ConfidenceScore, weights: &ScoringWeights, config: &UncertaintyConfig) {
    let factors = &score.factors;
    let factor_uncertainty: BTreeMap<String, f64> = factors
        .named()
        .iter()
        .map(|(name, value)| (name.to_string(), 1.0 - value))
        .collect();

    let weighted = weights.weighted(factors);
    let weight_sum: f64 = weighted.iter().map(|(_, w, _)| w).sum();
    let total_uncertainty = if weight_sum > 0.0 {
        weighted.iter().map(|(_, w, v)| w * (1.0 - v)).sum::<f64>() / weight_sum
    } else {
        0.0
    }
    .clamp(0.0, 1.0);

    let overall = score.overall();
    let stability_index = 1.0 - factor_variance(factors).min(1.0);

    score.uncertainty = Some(UncertaintyMetrics {
        factor_uncertainty,
        total_uncertainty,
        confidence_range: (
            (overall - total_uncertainty).clamp(0.0, 1.0),
            (overall + total_uncertainty).clamp(0.0, 1.0),
        ),
        stability_index,
    });

    if total_uncertainty > config.review_threshold {
        score.recommend("high uncertainty, review manually");
    }
}

/// Population variance of all eight factors.
fn factor_variance(factors: &ConfidenceFactors) -> f64 {
    let values = factors.values();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
