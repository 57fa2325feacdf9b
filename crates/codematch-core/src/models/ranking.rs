use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::candidate::{ClassificationCandidate, CodeType};
use super::confidence::ConfidenceScore;
use crate::config::RankingStrategy;

/// Per-criterion inputs and adjustments behind a ranking score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingFactors {
    pub confidence: f64,
    pub relevance: f64,
    pub quality: f64,
    pub frequency: f64,
    /// Strategy output before diversification.
    pub base_score: f64,
    pub diversity_bonus: f64,
    /// Secondary sort key in [0.0, 1.0], consulted only for exact ties.
    pub tie_breaker: f64,
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub candidate: ClassificationCandidate,
    pub confidence: ConfidenceScore,
    /// `base_score + diversity_bonus`. The value results are sorted on.
    pub ranking_score: f64,
    pub factors: RankingFactors,
    /// 1-based position in the overall list.
    pub rank: usize,
    /// 1-based position among results of the same code type.
    pub type_rank: usize,
    pub selection_reason: String,
    pub quality_indicators: Vec<String>,
}

impl RankedResult {
    pub fn code_type(&self) -> CodeType {
        self.candidate.code.code_type
    }
}

/// How a ranking call ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingMetadata {
    pub strategy: RankingStrategy,
    pub min_confidence: f64,
    pub total_candidates: usize,
    /// Candidates the scorer rejected as malformed.
    pub skipped_candidates: usize,
    /// Candidates at or above the confidence floor.
    pub filtered_candidates: usize,
    pub ranking_duration: Duration,
}

/// Aggregate confidence quality of a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub average_confidence: f64,
    pub confidence_variance: f64,
    pub average_ranking_score: f64,
    pub high_quality_count: usize,
    pub low_quality_count: usize,
    pub coverage_by_type: BTreeMap<CodeType, usize>,
}

/// Spread of a result set across types, categories, and match sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiversityMetrics {
    pub type_diversity: f64,
    pub category_diversity: f64,
    pub confidence_spread: f64,
    pub diversity_score: f64,
    pub match_source_distribution: BTreeMap<String, usize>,
}

/// Output of one ranking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResultSet {
    pub overall_results: Vec<RankedResult>,
    pub top_results_by_type: BTreeMap<CodeType, Vec<RankedResult>>,
    pub metadata: RankingMetadata,
    pub quality: QualityMetrics,
    pub diversity: DiversityMetrics,
}

impl RankedResultSet {
    /// Highest-ranked result overall.
    pub fn best(&self) -> Option<&RankedResult> {
        self.overall_results.first()
    }

    /// Top results for one code type, empty when the type has none.
    pub fn top_for(&self, code_type: CodeType) -> &[RankedResult] {
        self.top_results_by_type
            .get(&code_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.overall_results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overall_results.len()
    }
}
