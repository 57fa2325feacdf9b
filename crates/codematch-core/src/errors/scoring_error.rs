use super::error_code::{self, CodematchErrorCode};

/// Confidence scoring errors.
///
/// Only malformed input fails a scoring call. Metadata gaps degrade the
/// affected factor instead, and validation problems are reported on the
/// returned score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid candidate: {reason}")]
    InvalidCandidate { reason: String },
}

impl CodematchErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCandidate { .. } => error_code::INVALID_CANDIDATE,
        }
    }
}
