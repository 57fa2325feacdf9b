//! Synthetic cross-validation: rescoring under perturbed weights.
//!
//! No data is held out. Each fold shifts weight from keyword match to text
//! match and recomputes the composite, which shows how sensitive the score is
//! to that trade-off.

use codematch_core::config::{CrossValidationConfig, ScoringWeights};
use codematch_core::models::{ConfidenceFactors, ConfidenceScore, CrossValidationResult};

use crate::history::mean_std;

pub fn apply(
    score: &mut ConfidenceScore,
    weights: &ScoringWeights,
    config: &CrossValidationConfig,
) {
    let fold_scores = fold_scores(&score.factors, weights, config);
    let (mean, std_dev) = mean_std(&fold_scores);
    let stable = std_dev < config.stability_threshold;

    score.cross_validation = Some(CrossValidationResult {
        folds: fold_scores.len(),
        fold_scores,
        mean,
        std_dev,
        stable,
    });

    if !stable {
        score
            .validation_messages
            .push(format!("score is unstable across weightings (std dev {std_dev:.3})"));
    }
}

fn fold_scores(
    factors: &ConfidenceFactors,
    weights: &ScoringWeights,
    config: &CrossValidationConfig,
) -> Vec<f64> {
    let folds = config.folds.max(1);
    let steps = folds.saturating_sub(1).max(1) as f64;
    (0..folds)
        .map(|i| {
            let offset = config.max_perturbation * i as f64 / steps;
            let perturbed = ScoringWeights {
                text_match: (weights.text_match + offset).max(0.0),
                keyword_match: (weights.keyword_match - offset).max(0.0),
                ..weights.clone()
            };
            (perturbed.composite(factors) * factors.validation).clamp(0.0, 1.0)
        })
        .collect()
}
