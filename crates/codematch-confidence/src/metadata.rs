//! In-memory metadata store for tests and single-run usage.

use std::collections::HashMap;

use codematch_core::errors::MetadataError;
use codematch_core::models::CodeMetadata;
use codematch_core::traits::MetadataStore;

/// Metadata keyed by `(code, version)`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMetadataStore {
    entries: HashMap<(String, String), CodeMetadata>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the metadata for a code at a version.
    pub fn insert(&mut self, code: &str, version: &str, metadata: CodeMetadata) {
        self.entries
            .insert((code.to_string(), version.to_string()), metadata);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn code_metadata(&self, code: &str, version: &str) -> Result<CodeMetadata, MetadataError> {
        self.entries
            .get(&(code.to_string(), version.to_string()))
            .cloned()
            .ok_or_else(|| MetadataError::NotFound {
                code: code.to_string(),
                version: version.to_string(),
            })
    }
}
