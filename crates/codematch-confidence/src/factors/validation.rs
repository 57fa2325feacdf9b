//! Validation factor: a multiplicative gate built from configured rules.

use codematch_core::config::{RequestField, ValidationRuleConfig, ValidationRuleKind};
use codematch_core::models::{ClassificationCandidate, ClassificationRequest};

/// Score one rule in [0.0, 1.0]. Rules are binary today.
pub fn rule_score(
    rule: &ValidationRuleKind,
    candidate: &ClassificationCandidate,
    request: &ClassificationRequest,
) -> f64 {
    let passed = match rule {
        ValidationRuleKind::MinConfidence { threshold } => candidate.confidence >= *threshold,
        ValidationRuleKind::RequiredField { field } => match field {
            RequestField::BusinessName => request.has_business_name(),
            RequestField::Description => request.has_description(),
            RequestField::Website => request
                .website
                .as_deref()
                .is_some_and(|w| !w.trim().is_empty()),
        },
        // Not evaluated; always passes.
        ValidationRuleKind::TextMatchConsistency { .. } => true,
    };
    if passed {
        1.0
    } else {
        0.0
    }
}

/// Factor 8: starts at 1.0; each enabled rule multiplies it by
/// `score·weight + (1 - weight)`. Never exceeds 1.0.
pub fn validation(
    rules: &[ValidationRuleConfig],
    candidate: &ClassificationCandidate,
    request: &ClassificationRequest,
) -> f64 {
    rules
        .iter()
        .filter(|r| r.enabled)
        .fold(1.0, |acc, r| {
            let weight = r.weight.clamp(0.0, 1.0);
            acc * (rule_score(&r.rule, candidate, request) * weight + (1.0 - weight))
        })
        .clamp(0.0, 1.0)
}
