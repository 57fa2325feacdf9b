//! RankingEngine: orders scored candidates and selects the best per code type.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use codematch_core::config::{CodematchConfig, RankingCriteria};
use codematch_core::errors::{CodematchResult, RankingError};
use codematch_core::models::{
    ClassificationCandidate, ClassificationRequest, CodeType, ConfidenceScore, RankedResult,
    RankedResultSet, RankingFactors, RankingMetadata,
};
use codematch_core::tracing::events;
use codematch_core::traits::CandidateScorer;

use crate::diversification::{self, DiversityKey};
use crate::strategies::{self, Criteria};
use crate::{metrics, selection, tiebreak};

/// A candidate that survived scoring and the confidence floor.
struct Scored<'a> {
    candidate: &'a ClassificationCandidate,
    score: ConfidenceScore,
    criteria: Criteria,
}

/// Ranks candidates through a shared scorer.
pub struct RankingEngine {
    scorer: Arc<dyn CandidateScorer>,
    defaults: RankingCriteria,
}

impl RankingEngine {
    pub fn new(scorer: Arc<dyn CandidateScorer>, defaults: RankingCriteria) -> Self {
        Self { scorer, defaults }
    }

    /// Engine with the default criteria.
    pub fn with_scorer(scorer: Arc<dyn CandidateScorer>) -> Self {
        Self::new(scorer, RankingCriteria::default())
    }

    /// Engine using the ranking section of a config, after validating the
    /// whole config.
    pub fn from_config(
        scorer: Arc<dyn CandidateScorer>,
        config: &CodematchConfig,
    ) -> CodematchResult<Self> {
        config.validate()?;
        Ok(Self::new(scorer, config.ranking.clone()))
    }

    pub fn default_criteria(&self) -> &RankingCriteria {
        &self.defaults
    }

    /// Rank `candidates` for `request`.
    ///
    /// `criteria` overrides the engine defaults entirely when given. Without
    /// it, `request.min_confidence` replaces the default floor. Candidates the
    /// scorer rejects are skipped; only malformed criteria are an error.
    pub fn rank(
        &self,
        candidates: &[ClassificationCandidate],
        request: &ClassificationRequest,
        criteria: Option<&RankingCriteria>,
    ) -> Result<RankedResultSet, RankingError> {
        let started = Instant::now();
        let criteria = self.resolve_criteria(request, criteria);
        validate_criteria(&criteria)?;

        let mut skipped = 0usize;
        let mut survivors: Vec<Scored<'_>> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match self.scorer.score(candidate, request) {
                Ok(score) if score.overall() >= criteria.min_confidence => {
                    survivors.push(Scored {
                        candidate,
                        criteria: Criteria::from_score(&score),
                        score,
                    });
                }
                Ok(_) => {}
                Err(e) => {
                    skipped += 1;
                    events::candidate_skipped(candidate.code_value(), &e.to_string());
                }
            }
        }
        debug!(
            total = candidates.len(),
            skipped,
            survivors = survivors.len(),
            floor = criteria.min_confidence,
            "candidates scored and filtered"
        );

        let rows: Vec<Criteria> = survivors.iter().map(|s| s.criteria).collect();
        let base_scores = strategies::base_scores(criteria.strategy, &criteria.weights, &rows);
        let tie_breakers: Vec<f64> = survivors
            .iter()
            .map(|s| {
                if criteria.tie_breaking {
                    tiebreak::tie_breaker(s.candidate.code_type(), s.candidate.code_value())
                } else {
                    0.0
                }
            })
            .collect();
        let bonuses = if criteria.diversification {
            let keys: Vec<DiversityKey> = survivors
                .iter()
                .zip(base_scores.iter().zip(&tie_breakers))
                .map(|(s, (&base_score, &tie_breaker))| DiversityKey {
                    code_type: s.candidate.code_type(),
                    category: s.candidate.code.category.clone(),
                    base_score,
                    tie_breaker,
                })
                .collect();
            diversification::bonuses(&keys)
        } else {
            vec![0.0; survivors.len()]
        };

        let mut results: Vec<RankedResult> = survivors
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let factors = RankingFactors {
                    confidence: s.criteria.confidence,
                    relevance: s.criteria.relevance,
                    quality: s.criteria.quality,
                    frequency: s.criteria.frequency,
                    base_score: base_scores[i],
                    diversity_bonus: bonuses[i],
                    tie_breaker: tie_breakers[i],
                };
                RankedResult {
                    candidate: s.candidate.clone(),
                    confidence: s.score,
                    ranking_score: factors.base_score + factors.diversity_bonus,
                    factors,
                    rank: 0,
                    type_rank: 0,
                    selection_reason: String::new(),
                    quality_indicators: Vec::new(),
                }
            })
            .collect();

        // Stable: full ties keep input order.
        results.sort_by(|a, b| {
            b.ranking_score
                .total_cmp(&a.ranking_score)
                .then(b.factors.tie_breaker.total_cmp(&a.factors.tie_breaker))
        });
        let filtered_candidates = results.len();

        let mut type_counts: BTreeMap<CodeType, usize> = BTreeMap::new();
        for (i, result) in results.iter_mut().enumerate() {
            result.rank = i + 1;
            let count = type_counts.entry(result.code_type()).or_insert(0);
            *count += 1;
            result.type_rank = *count;
            result.selection_reason = selection::selection_reason(
                criteria.strategy,
                &criteria.weights,
                &result.factors,
                result.type_rank,
            );
            result.quality_indicators = selection::quality_indicators(
                &result.confidence,
                request.prefers(result.code_type()),
            );
        }

        let mut top_results_by_type: BTreeMap<CodeType, Vec<RankedResult>> = BTreeMap::new();
        for result in &results {
            let group = top_results_by_type.entry(result.code_type()).or_default();
            if group.len() < criteria.max_results_per_type {
                group.push(result.clone());
            }
        }

        if let Some(max) = request.max_results.filter(|&max| max > 0) {
            results.truncate(max);
        }

        let quality = metrics::quality(&results);
        let diversity = metrics::diversity(&results);
        let ranking_duration = started.elapsed();
        events::ranking_completed(
            criteria.strategy.name(),
            candidates.len(),
            filtered_candidates,
            ranking_duration.as_micros(),
        );

        Ok(RankedResultSet {
            overall_results: results,
            top_results_by_type,
            metadata: RankingMetadata {
                strategy: criteria.strategy,
                min_confidence: criteria.min_confidence,
                total_candidates: candidates.len(),
                skipped_candidates: skipped,
                filtered_candidates,
                ranking_duration,
            },
            quality,
            diversity,
        })
    }

    fn resolve_criteria(
        &self,
        request: &ClassificationRequest,
        explicit: Option<&RankingCriteria>,
    ) -> RankingCriteria {
        match explicit {
            Some(criteria) => criteria.clone(),
            None => {
                let mut criteria = self.defaults.clone();
                if let Some(floor) = request.min_confidence {
                    criteria.min_confidence = floor;
                }
                criteria
            }
        }
    }
}

fn validate_criteria(criteria: &RankingCriteria) -> Result<(), RankingError> {
    if criteria.max_results_per_type == 0 {
        return Err(RankingError::InvalidCriteria {
            field: "max_results_per_type".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    if criteria.min_confidence.is_nan() {
        return Err(RankingError::InvalidCriteria {
            field: "min_confidence".to_string(),
            reason: "must be a number".to_string(),
        });
    }
    for (field, weight) in [
        ("weights.confidence", criteria.weights.confidence),
        ("weights.relevance", criteria.weights.relevance),
        ("weights.quality", criteria.weights.quality),
        ("weights.frequency", criteria.weights.frequency),
    ] {
        if !weight.is_finite() || weight < 0.0 {
            return Err(RankingError::InvalidCriteria {
                field: field.to_string(),
                reason: "must be a finite, non-negative number".to_string(),
            });
        }
    }
    Ok(())
}
