//! Soft validation of a scored candidate and the recommendations that follow.

use codematch_core::models::{ClassificationRequest, ConfidenceScore, ValidationStatus};

const INVALID_BELOW: f64 = 0.3;
const WARNING_BELOW: f64 = 0.5;
const LOW_TEXT_EVIDENCE: f64 = 0.3;
const LOW_CODE_QUALITY: f64 = 0.4;
const WEAK_FACTOR: f64 = 0.3;
const WEAK_METADATA_FACTOR: f64 = 0.5;

/// Flag problems on `score`. Status only ever escalates.
pub fn validate(score: &mut ConfidenceScore, request: &ClassificationRequest) {
    let overall = score.overall();
    if overall < INVALID_BELOW {
        score.flag(
            ValidationStatus::Invalid,
            format!("confidence {overall:.2} is below the minimum of {INVALID_BELOW}"),
        );
    } else if overall < WARNING_BELOW {
        score.flag(
            ValidationStatus::Warning,
            format!("confidence {overall:.2} is low"),
        );
    }

    if !request.has_business_name() {
        score.flag(ValidationStatus::Warning, "business name is missing");
    }
    if !request.has_description() {
        score.flag(ValidationStatus::Warning, "business description is missing");
    }

    let factors = &score.factors;
    if factors.text_match + factors.keyword_match < LOW_TEXT_EVIDENCE {
        score.flag(
            ValidationStatus::Warning,
            "little text or keyword evidence supports this code",
        );
    }
    if score.factors.code_quality < LOW_CODE_QUALITY {
        score.flag(ValidationStatus::Warning, "code metadata quality is low");
    }
}

/// Append recommendations from weak factors and the validation outcome.
pub fn recommend(score: &mut ConfidenceScore, request: &ClassificationRequest) {
    let factors = score.factors.clone();
    if factors.text_match < WEAK_FACTOR {
        score.recommend("add a more detailed business description");
    }
    if factors.keyword_match < WEAK_FACTOR {
        score.recommend("provide keywords that describe the business activity");
    }
    if factors.name_match < WEAK_FACTOR {
        score.recommend("check that the business name reflects its industry");
    }
    if factors.category_match < WEAK_FACTOR {
        score.recommend("confirm the industry category");
    }
    if factors.code_quality < WEAK_METADATA_FACTOR {
        score.recommend("verify the code against an authoritative source");
    }
    if factors.usage_frequency < WEAK_METADATA_FACTOR {
        score.recommend("this code is rarely used, double-check the match");
    }
    let has_website = request
        .website
        .as_deref()
        .is_some_and(|w| !w.trim().is_empty());
    if !has_website {
        score.recommend("add the business website for context");
    }

    match score.validation_status {
        ValidationStatus::Valid => {}
        ValidationStatus::Warning => score.recommend("review manually"),
        ValidationStatus::Invalid => {
            score.recommend("review manually");
            score.recommend("consider alternative codes");
        }
    }
}
