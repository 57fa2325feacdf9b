use super::error_code::CodematchErrorCode;
use super::{ConfigError, MetadataError, RankingError, ScoringError};

/// Top-level error aggregating every subsystem error via `From`.
#[derive(Debug, thiserror::Error)]
pub enum CodematchError {
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CodematchErrorCode for CodematchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring(e) => e.error_code(),
            Self::Metadata(e) => e.error_code(),
            Self::Ranking(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type CodematchResult<T> = Result<T, CodematchError>;
