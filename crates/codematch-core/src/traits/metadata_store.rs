use crate::errors::MetadataError;
use crate::models::CodeMetadata;

/// Read access to per-code quality and usage metadata.
///
/// Lookups are expected to be fast local reads. Any retry policy belongs to
/// the implementation; the scorer treats every error as missing data.
pub trait MetadataStore: Send + Sync {
    /// Fetch metadata for `code` at scheme `version`.
    /// Returns `MetadataError::NotFound` when the store has no entry.
    fn code_metadata(&self, code: &str, version: &str) -> Result<CodeMetadata, MetadataError>;
}
