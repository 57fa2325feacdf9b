//! Metadata-derived factors: code quality and usage frequency.
//!
//! Both fall back to their base value when the store has no metadata.

use chrono::{DateTime, Utc};
use codematch_core::models::{CodeMetadata, DataQuality};

use crate::lexicon;

const BASE: f64 = 0.5;

/// Factor 5: how trustworthy the code definition is.
pub fn code_quality(metadata: Option<&CodeMetadata>, prior: f64, now: DateTime<Utc>) -> f64 {
    let Some(metadata) = metadata else {
        return BASE;
    };

    let tier = match metadata.data_quality {
        DataQuality::High => 0.3,
        DataQuality::Medium => 0.2,
        DataQuality::Low => 0.1,
        DataQuality::Unknown => 0.0,
    };
    let age = metadata.age_days(now);
    let freshness = if age <= 365 {
        0.2
    } else if age <= 730 {
        0.1
    } else {
        0.0
    };
    let source = if lexicon::is_authoritative_source(&metadata.source) {
        0.2
    } else {
        0.0
    };
    let prior = 0.2 * prior.clamp(0.0, 1.0);

    (BASE + tier + freshness + source + prior).clamp(0.0, 1.0)
}

/// Factor 6: how often the code is used, and how recently it was touched.
///
/// The usage term is `0.4 · min(log10(n + 1) / 3, 1)` and saturates at
/// roughly 1000 uses.
pub fn usage_frequency(metadata: Option<&CodeMetadata>, now: DateTime<Utc>) -> f64 {
    let Some(metadata) = metadata else {
        return BASE;
    };

    let scaled = ((metadata.usage_count as f64 + 1.0).log10() / 3.0).min(1.0);
    let age = metadata.age_days(now);
    let recency = if age < 30 {
        0.3
    } else if age < 90 {
        0.2
    } else if age < 365 {
        0.1
    } else {
        0.0
    };

    (BASE + 0.4 * scaled + recency).clamp(0.0, 1.0)
}
