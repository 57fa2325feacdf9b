use crate::errors::ScoringError;
use crate::models::{ClassificationCandidate, ClassificationRequest, ConfidenceScore};

/// Produces a confidence score for one candidate.
///
/// The ranking engine depends only on this trait, so it can share one scorer
/// (and its history) with other callers or run against a fixed-score stub.
pub trait CandidateScorer: Send + Sync {
    fn score(
        &self,
        candidate: &ClassificationCandidate,
        request: &ClassificationRequest,
    ) -> Result<ConfidenceScore, ScoringError>;
}
