use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::refinement::{
    BenchmarkResult, CalibrationInfo, CrossValidationResult, StatisticalMetrics,
    UncertaintyMetrics,
};

/// The eight factor scores behind one confidence score, each in [0.0, 1.0].
///
/// Seven are additive and weighted into the composite. `validation` is a
/// multiplicative gate applied after the weighted sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    pub text_match: f64,
    pub keyword_match: f64,
    pub name_match: f64,
    pub category_match: f64,
    pub code_quality: f64,
    pub usage_frequency: f64,
    pub contextual: f64,
    pub validation: f64,
    /// Extension slot for caller-defined factors. Not weighted.
    #[serde(default)]
    pub custom: BTreeMap<String, f64>,
}

impl ConfidenceFactors {
    pub const NAMES: [&'static str; 8] = [
        "text_match",
        "keyword_match",
        "name_match",
        "category_match",
        "code_quality",
        "usage_frequency",
        "contextual",
        "validation",
    ];

    /// All eight factors in `NAMES` order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.text_match,
            self.keyword_match,
            self.name_match,
            self.category_match,
            self.code_quality,
            self.usage_frequency,
            self.contextual,
            self.validation,
        ]
    }

    /// `(name, value)` pairs in `NAMES` order.
    pub fn named(&self) -> [(&'static str, f64); 8] {
        let values = self.values();
        std::array::from_fn(|i| (Self::NAMES[i], values[i]))
    }

    /// Uniform factors, mostly useful in tests.
    pub fn uniform(value: f64) -> Self {
        let v = value.clamp(0.0, 1.0);
        Self {
            text_match: v,
            keyword_match: v,
            name_match: v,
            category_match: v,
            code_quality: v,
            usage_frequency: v,
            contextual: v,
            validation: 1.0,
            custom: BTreeMap::new(),
        }
    }
}

/// Discrete confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    /// Thresholds are inclusive lower bounds: 0.9 is `VeryHigh`, 0.89999 is `High`.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::VeryHigh
        } else if score >= 0.7 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else if score >= 0.3 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Soft-failure channel. Ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Invalid,
}

impl ValidationStatus {
    /// Move to `to` if it is more severe. Never recovers.
    pub fn escalate(&mut self, to: ValidationStatus) {
        if to > *self {
            *self = to;
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scored confidence for one candidate.
///
/// `overall` is private so every write goes through [`ConfidenceScore::set_overall`],
/// which clamps to [0.0, 1.0] and keeps `level` in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScoreRecord")]
pub struct ConfidenceScore {
    overall: f64,
    pub factors: ConfidenceFactors,
    pub level: ConfidenceLevel,
    pub validation_status: ValidationStatus,
    pub validation_messages: Vec<String>,
    pub recommendations: Vec<String>,
    /// Days since the code metadata was last updated, when metadata exists.
    pub data_age_days: Option<i64>,
    pub calibration: Option<CalibrationInfo>,
    pub statistics: Option<StatisticalMetrics>,
    pub uncertainty: Option<UncertaintyMetrics>,
    pub cross_validation: Option<CrossValidationResult>,
    pub benchmark: Option<BenchmarkResult>,
}

impl ConfidenceScore {
    pub fn new(overall: f64, factors: ConfidenceFactors) -> Self {
        let overall = clamp_unit(overall);
        Self {
            overall,
            factors,
            level: ConfidenceLevel::from_score(overall),
            validation_status: ValidationStatus::Valid,
            validation_messages: Vec::new(),
            recommendations: Vec::new(),
            data_age_days: None,
            calibration: None,
            statistics: None,
            uncertainty: None,
            cross_validation: None,
            benchmark: None,
        }
    }

    pub fn overall(&self) -> f64 {
        self.overall
    }

    pub fn set_overall(&mut self, value: f64) {
        self.overall = clamp_unit(value);
        self.level = ConfidenceLevel::from_score(self.overall);
    }

    /// Record a validation problem and escalate the status.
    pub fn flag(&mut self, status: ValidationStatus, message: impl Into<String>) {
        self.validation_status.escalate(status);
        self.validation_messages.push(message.into());
    }

    pub fn recommend(&mut self, recommendation: impl Into<String>) {
        let recommendation = recommendation.into();
        if !self.recommendations.contains(&recommendation) {
            self.recommendations.push(recommendation);
        }
    }
}

/// Wire form of [`ConfidenceScore`]. Converting back clamps `overall` and
/// derives `level` from it, whatever the payload claims.
#[derive(Deserialize)]
struct ScoreRecord {
    overall: f64,
    factors: ConfidenceFactors,
    validation_status: ValidationStatus,
    validation_messages: Vec<String>,
    recommendations: Vec<String>,
    data_age_days: Option<i64>,
    calibration: Option<CalibrationInfo>,
    statistics: Option<StatisticalMetrics>,
    uncertainty: Option<UncertaintyMetrics>,
    cross_validation: Option<CrossValidationResult>,
    benchmark: Option<BenchmarkResult>,
}

impl From<ScoreRecord> for ConfidenceScore {
    fn from(record: ScoreRecord) -> Self {
        let mut score = ConfidenceScore::new(record.overall, record.factors);
        score.validation_status = record.validation_status;
        score.validation_messages = record.validation_messages;
        score.recommendations = record.recommendations;
        score.data_age_days = record.data_age_days;
        score.calibration = record.calibration;
        score.statistics = record.statistics;
        score.uncertainty = record.uncertainty;
        score.cross_validation = record.cross_validation;
        score.benchmark = record.benchmark;
        score
    }
}

/// Clamp to [0.0, 1.0], mapping NaN to 0.0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
