use super::error_code::{self, CodematchErrorCode};

/// Code metadata lookup errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetadataError {
    #[error("no metadata for code {code} (version {version})")]
    NotFound { code: String, version: String },

    #[error("metadata store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl CodematchErrorCode for MetadataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::METADATA_NOT_FOUND,
            Self::Unavailable { .. } => error_code::METADATA_UNAVAILABLE,
        }
    }
}
