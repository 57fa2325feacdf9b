//! ConfidenceScorer: factors, weighted composite, assessment, refinement
//! passes, and the rolling score history.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::debug;

use codematch_core::config::ScoringConfig;
use codematch_core::errors::ScoringError;
use codematch_core::models::{ClassificationCandidate, ClassificationRequest, ConfidenceScore};
use codematch_core::tracing::events;
use codematch_core::traits::{CandidateScorer, MetadataStore};

use crate::assessment;
use crate::factors::FactorCalculator;
use crate::history::{HistorySummary, ScoreHistory};
use crate::metadata::InMemoryMetadataStore;
use crate::passes::{self, Benchmarker};

/// Scores candidates and keeps the history the statistical passes read.
///
/// One instance owns its history and benchmark caches; every call through it
/// shares them. The history lock is held only to copy or append.
pub struct ConfidenceScorer {
    config: ScoringConfig,
    calculator: FactorCalculator,
    benchmarker: Benchmarker,
    history: Mutex<ScoreHistory>,
}

impl ConfidenceScorer {
    pub fn new(config: ScoringConfig, metadata: Arc<dyn MetadataStore>) -> Self {
        let calculator = FactorCalculator::new(metadata, config.validation_rules.clone());
        let benchmarker = Benchmarker::new(config.benchmark.clone());
        let history = Mutex::new(ScoreHistory::new(config.history_capacity));
        Self {
            config,
            calculator,
            benchmarker,
            history,
        }
    }

    /// Default configuration and an empty metadata store.
    pub fn with_defaults() -> Self {
        Self::new(
            ScoringConfig::default(),
            Arc::new(InMemoryMetadataStore::new()),
        )
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one candidate against the request.
    ///
    /// Fails only when the candidate has no code. Missing metadata and failed
    /// checks are reported on the score itself.
    pub fn score(
        &self,
        candidate: &ClassificationCandidate,
        request: &ClassificationRequest,
    ) -> Result<ConfidenceScore, ScoringError> {
        if candidate.code_value().trim().is_empty() {
            return Err(ScoringError::InvalidCandidate {
                reason: "candidate has no code value".to_string(),
            });
        }

        let now = Utc::now();
        let output = self.calculator.compute(candidate, request, now);
        let weights = &self.config.weights;
        let composite = weights.composite(&output.factors);
        let overall = composite * output.factors.validation;
        debug!(
            code = candidate.code_value(),
            composite,
            validation = output.factors.validation,
            "base score computed"
        );

        let mut score = ConfidenceScore::new(overall, output.factors);
        score.data_age_days = output.metadata.as_ref().map(|m| m.age_days(now));

        assessment::validate(&mut score, request);
        assessment::recommend(&mut score, request);

        let passes_enabled = &self.config.passes;
        let history = if passes_enabled.statistical_validation || passes_enabled.benchmarking {
            self.lock_history().snapshot()
        } else {
            Vec::new()
        };

        if passes_enabled.calibration {
            passes::calibration::apply(&mut score, candidate.code_type(), &self.config.calibration);
        }
        if passes_enabled.statistical_validation {
            passes::statistics::apply(
                &mut score,
                &history,
                &self.config.statistics,
                candidate.code_value(),
            );
        }
        if passes_enabled.uncertainty {
            passes::uncertainty::apply(&mut score, weights, &self.config.uncertainty);
        }
        if passes_enabled.cross_validation {
            passes::cross_validation::apply(&mut score, weights, &self.config.cross_validation);
        }
        if passes_enabled.benchmarking {
            self.benchmarker.apply(&mut score, candidate, request, &history);
        }

        self.lock_history().push(score.overall());

        events::candidate_scored(
            candidate.code_value(),
            candidate.code_type().name(),
            score.overall(),
            score.level.name(),
            score.validation_status.name(),
        );
        Ok(score)
    }

    /// Score candidates in order. Each result is independent; one invalid
    /// candidate does not stop the rest.
    pub fn score_batch(
        &self,
        candidates: &[ClassificationCandidate],
        request: &ClassificationRequest,
    ) -> Vec<Result<ConfidenceScore, ScoringError>> {
        candidates
            .iter()
            .map(|candidate| self.score(candidate, request))
            .collect()
    }

    pub fn history_summary(&self) -> HistorySummary {
        self.lock_history().summary()
    }

    /// Clear the history and the benchmark caches.
    pub fn reset(&self) {
        self.lock_history().clear();
        self.benchmarker.clear();
    }

    // The history is plain data, so a panic elsewhere cannot leave it torn.
    fn lock_history(&self) -> MutexGuard<'_, ScoreHistory> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CandidateScorer for ConfidenceScorer {
    fn score(
        &self,
        candidate: &ClassificationCandidate,
        request: &ClassificationRequest,
    ) -> Result<ConfidenceScore, ScoringError> {
        ConfidenceScorer::score(self, candidate, request)
    }
}
