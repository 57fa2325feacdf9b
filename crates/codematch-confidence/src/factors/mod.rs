//! The eight confidence factors.
//!
//! Each factor is a pure function of the candidate, the request, and (for the
//! metadata-backed ones) one metadata lookup. A failed lookup degrades those
//! factors to their base value and never errors.

pub mod code_data;
pub mod contextual;
pub mod matching;
pub mod validation;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use codematch_core::config::ValidationRuleConfig;
use codematch_core::models::{
    ClassificationCandidate, ClassificationRequest, CodeMetadata, ConfidenceFactors,
};
use codematch_core::tracing::events;
use codematch_core::traits::MetadataStore;

/// Factors for one candidate, with the metadata they were computed from.
#[derive(Debug, Clone)]
pub struct FactorOutput {
    pub factors: ConfidenceFactors,
    pub metadata: Option<CodeMetadata>,
}

/// Computes [`ConfidenceFactors`] for a candidate.
pub struct FactorCalculator {
    metadata: Arc<dyn MetadataStore>,
    rules: Vec<ValidationRuleConfig>,
}

impl FactorCalculator {
    pub fn new(metadata: Arc<dyn MetadataStore>, rules: Vec<ValidationRuleConfig>) -> Self {
        Self { metadata, rules }
    }

    /// Compute all eight factors. `now` anchors every age computation so a
    /// single call sees one clock reading.
    pub fn compute(
        &self,
        candidate: &ClassificationCandidate,
        request: &ClassificationRequest,
        now: DateTime<Utc>,
    ) -> FactorOutput {
        let metadata = self.lookup(candidate);
        let factors = ConfidenceFactors {
            text_match: matching::text_match(candidate, request),
            keyword_match: matching::keyword_match(candidate, request),
            name_match: matching::name_match(candidate, request),
            category_match: matching::category_match(candidate, request),
            code_quality: code_data::code_quality(metadata.as_ref(), candidate.confidence, now),
            usage_frequency: code_data::usage_frequency(metadata.as_ref(), now),
            contextual: contextual::contextual(candidate, request),
            validation: validation::validation(&self.rules, candidate, request),
            custom: BTreeMap::new(),
        };
        FactorOutput { factors, metadata }
    }

    fn lookup(&self, candidate: &ClassificationCandidate) -> Option<CodeMetadata> {
        let code = candidate.code_value();
        let version = &candidate.code.version;
        match self.metadata.code_metadata(code, version) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                events::metadata_degraded(code, version, &e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use codematch_core::models::{CodeType, DataQuality, IndustryCode};

    use super::*;
    use crate::metadata::InMemoryMetadataStore;

    fn candidate() -> ClassificationCandidate {
        ClassificationCandidate::new(
            IndustryCode::new("722511", CodeType::Naics, "Full-Service Restaurants")
                .with_category("Food Services")
                .with_keywords(["restaurant", "dining"])
                .with_version("2022"),
            0.8,
        )
    }

    #[test]
    fn metadata_miss_degrades_to_base() {
        let calc = FactorCalculator::new(
            Arc::new(InMemoryMetadataStore::new()),
            ValidationRuleConfig::builtin(),
        );
        let req = ClassificationRequest::new("Luigi's Restaurant");
        let out = calc.compute(&candidate(), &req, Utc::now());
        assert!(out.metadata.is_none());
        assert_eq!(out.factors.code_quality, 0.5);
        assert_eq!(out.factors.usage_frequency, 0.5);
    }

    #[test]
    fn metadata_hit_feeds_quality_factors() {
        let now = Utc::now();
        let mut store = InMemoryMetadataStore::new();
        store.insert(
            "722511",
            "2022",
            CodeMetadata {
                data_quality: DataQuality::High,
                last_updated: now - Duration::days(10),
                source: "US Census Bureau".to_string(),
                usage_count: 5000,
            },
        );
        let calc = FactorCalculator::new(Arc::new(store), ValidationRuleConfig::builtin());
        let out = calc.compute(&candidate(), &ClassificationRequest::new("Luigi's"), now);
        assert!(out.metadata.is_some());
        assert_eq!(out.factors.code_quality, 1.0);
        assert_eq!(out.factors.usage_frequency, 1.0);
    }
}
