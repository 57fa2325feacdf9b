//! Ranking strategies. [`base_scores`] is the single dispatch point.

use codematch_core::config::{CriteriaWeights, RankingStrategy};
use codematch_core::models::{ConfidenceFactors, ConfidenceScore};

const COMPOSITE_CONFIDENCE: f64 = 0.7;
const COMPOSITE_RELEVANCE: f64 = 0.3;

/// The four criteria a candidate is ranked on, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Criteria {
    pub confidence: f64,
    pub relevance: f64,
    pub quality: f64,
    pub frequency: f64,
}

impl Criteria {
    pub fn from_score(score: &ConfidenceScore) -> Self {
        Self {
            confidence: score.overall(),
            relevance: relevance(&score.factors),
            quality: score.factors.code_quality,
            frequency: score.factors.usage_frequency,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.confidence, self.relevance, self.quality, self.frequency]
    }
}

/// How well the candidate's text matches the request, from the text factors.
pub fn relevance(factors: &ConfidenceFactors) -> f64 {
    (0.35 * factors.text_match
        + 0.30 * factors.keyword_match
        + 0.20 * factors.name_match
        + 0.15 * factors.category_match)
        .clamp(0.0, 1.0)
}

/// Strategy score for every row, in input order.
pub fn base_scores(
    strategy: RankingStrategy,
    weights: &CriteriaWeights,
    rows: &[Criteria],
) -> Vec<f64> {
    match strategy {
        RankingStrategy::Confidence => rows.iter().map(|r| r.confidence).collect(),
        RankingStrategy::Composite => rows
            .iter()
            .map(|r| COMPOSITE_CONFIDENCE * r.confidence + COMPOSITE_RELEVANCE * r.relevance)
            .collect(),
        RankingStrategy::Weighted => rows
            .iter()
            .map(|r| weights.confidence * r.confidence + weights.relevance * r.relevance)
            .collect(),
        RankingStrategy::MultiCriteria => topsis(weights, rows),
    }
}

/// TOPSIS closeness to the ideal solution.
///
/// Columns are vector-normalized and weighted. All criteria are benefits, so
/// the ideal is the column maximum and the anti-ideal the column minimum. A
/// row at zero distance from both (every row identical) falls back to its
/// confidence.
pub fn topsis(weights: &CriteriaWeights, rows: &[Criteria]) -> Vec<f64> {
    if rows.is_empty() {
        return Vec::new();
    }
    let w = weights.as_array();
    let matrix: Vec<[f64; 4]> = rows.iter().map(Criteria::as_array).collect();

    let mut norms = [0.0f64; 4];
    for row in &matrix {
        for (j, value) in row.iter().enumerate() {
            norms[j] += value * value;
        }
    }
    let norms = norms.map(f64::sqrt);

    let weighted: Vec<[f64; 4]> = matrix
        .iter()
        .map(|row| {
            std::array::from_fn(|j| {
                if norms[j] > 0.0 {
                    w[j] * row[j] / norms[j]
                } else {
                    0.0
                }
            })
        })
        .collect();

    let mut best = [f64::NEG_INFINITY; 4];
    let mut worst = [f64::INFINITY; 4];
    for row in &weighted {
        for j in 0..4 {
            best[j] = best[j].max(row[j]);
            worst[j] = worst[j].min(row[j]);
        }
    }

    weighted
        .iter()
        .zip(rows)
        .map(|(row, original)| {
            let to_best = distance(row, &best);
            let to_worst = distance(row, &worst);
            let total = to_best + to_worst;
            if total <= f64::EPSILON {
                original.confidence
            } else {
                (to_worst / total).clamp(0.0, 1.0)
            }
        })
        .collect()
}

fn distance(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
