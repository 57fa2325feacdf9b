//! Aggregate quality and diversity metrics over ranked results.

use std::collections::{BTreeMap, BTreeSet};

use codematch_core::models::{DiversityMetrics, QualityMetrics, RankedResult};

const HIGH_QUALITY: f64 = 0.7;
const LOW_QUALITY: f64 = 0.5;

pub fn quality(results: &[RankedResult]) -> QualityMetrics {
    if results.is_empty() {
        return QualityMetrics::default();
    }
    let n = results.len() as f64;
    let confidences: Vec<f64> = results.iter().map(|r| r.confidence.overall()).collect();
    let average_confidence = confidences.iter().sum::<f64>() / n;
    let confidence_variance = confidences
        .iter()
        .map(|c| (c - average_confidence).powi(2))
        .sum::<f64>()
        / n;

    let mut coverage_by_type = BTreeMap::new();
    for r in results {
        *coverage_by_type.entry(r.code_type()).or_insert(0) += 1;
    }

    QualityMetrics {
        average_confidence,
        confidence_variance,
        average_ranking_score: results.iter().map(|r| r.ranking_score).sum::<f64>() / n,
        high_quality_count: confidences.iter().filter(|&&c| c >= HIGH_QUALITY).count(),
        low_quality_count: confidences.iter().filter(|&&c| c < LOW_QUALITY).count(),
        coverage_by_type,
    }
}

pub fn diversity(results: &[RankedResult]) -> DiversityMetrics {
    if results.is_empty() {
        return DiversityMetrics::default();
    }
    let n = results.len() as f64;
    let types: BTreeSet<_> = results.iter().map(|r| r.code_type()).collect();
    let categories: BTreeSet<String> = results
        .iter()
        .map(|r| r.candidate.code.category.trim().to_lowercase())
        .collect();

    let (min, max) = results
        .iter()
        .map(|r| r.confidence.overall())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| (lo.min(c), hi.max(c)));

    let mut match_source_distribution = BTreeMap::new();
    for r in results {
        *match_source_distribution
            .entry(r.candidate.match_type.name().to_string())
            .or_insert(0) += 1;
    }

    let type_diversity = types.len() as f64 / n;
    let category_diversity = categories.len() as f64 / n;
    let confidence_spread = max - min;
    DiversityMetrics {
        type_diversity,
        category_diversity,
        confidence_spread,
        diversity_score: 0.4 * type_diversity + 0.4 * category_diversity + 0.2 * confidence_spread,
        match_source_distribution,
    }
}
