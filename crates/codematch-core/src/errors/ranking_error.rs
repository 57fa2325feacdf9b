use super::error_code::{self, CodematchErrorCode};

/// Ranking engine errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("invalid ranking criteria for {field}: {reason}")]
    InvalidCriteria { field: String, reason: String },
}

impl CodematchErrorCode for RankingError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CRITERIA
    }
}
