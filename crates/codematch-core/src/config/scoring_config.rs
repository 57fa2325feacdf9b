use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ConfidenceFactors;

/// Weights of the seven additive factors. Defaults sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub text_match: f64,
    pub keyword_match: f64,
    pub name_match: f64,
    pub category_match: f64,
    pub code_quality: f64,
    pub usage_frequency: f64,
    pub contextual: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            text_match: defaults::DEFAULT_WEIGHT_TEXT_MATCH,
            keyword_match: defaults::DEFAULT_WEIGHT_KEYWORD_MATCH,
            name_match: defaults::DEFAULT_WEIGHT_NAME_MATCH,
            category_match: defaults::DEFAULT_WEIGHT_CATEGORY_MATCH,
            code_quality: defaults::DEFAULT_WEIGHT_CODE_QUALITY,
            usage_frequency: defaults::DEFAULT_WEIGHT_USAGE_FREQUENCY,
            contextual: defaults::DEFAULT_WEIGHT_CONTEXTUAL,
        }
    }
}

impl ScoringWeights {
    /// `(name, weight, factor value)` for each additive factor.
    pub fn weighted(&self, factors: &ConfidenceFactors) -> [(&'static str, f64, f64); 7] {
        [
            ("text_match", self.text_match, factors.text_match),
            ("keyword_match", self.keyword_match, factors.keyword_match),
            ("name_match", self.name_match, factors.name_match),
            ("category_match", self.category_match, factors.category_match),
            ("code_quality", self.code_quality, factors.code_quality),
            ("usage_frequency", self.usage_frequency, factors.usage_frequency),
            ("contextual", self.contextual, factors.contextual),
        ]
    }

    /// Weighted sum of the additive factors, before the validation gate.
    pub fn composite(&self, factors: &ConfidenceFactors) -> f64 {
        self.weighted(factors).iter().map(|(_, w, v)| w * v).sum()
    }

    pub fn total(&self) -> f64 {
        self.text_match
            + self.keyword_match
            + self.name_match
            + self.category_match
            + self.code_quality
            + self.usage_frequency
            + self.contextual
    }
}

/// Request field a `RequiredField` rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestField {
    BusinessName,
    Description,
    Website,
}

/// Rule logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationRuleKind {
    /// Passes when the candidate's prior confidence reaches `threshold`.
    MinConfidence { threshold: f64 },
    /// Passes when the request field is present and non-blank.
    RequiredField { field: RequestField },
    /// Always passes. `max_difference` is carried but not evaluated yet.
    TextMatchConsistency { max_difference: f64 },
}

/// One validation rule feeding the multiplicative validation factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRuleConfig {
    pub name: String,
    pub rule: ValidationRuleKind,
    /// Fraction of the running product a full failure removes.
    pub weight: f64,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl ValidationRuleConfig {
    pub fn new(name: impl Into<String>, rule: ValidationRuleKind, weight: f64) -> Self {
        Self {
            name: name.into(),
            rule,
            weight,
            enabled: true,
        }
    }

    /// The three built-in rules.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new(
                "min_confidence",
                ValidationRuleKind::MinConfidence {
                    threshold: defaults::DEFAULT_RULE_MIN_CONFIDENCE,
                },
                defaults::DEFAULT_RULE_MIN_CONFIDENCE_WEIGHT,
            ),
            Self::new(
                "business_name_required",
                ValidationRuleKind::RequiredField {
                    field: RequestField::BusinessName,
                },
                defaults::DEFAULT_RULE_BUSINESS_NAME_WEIGHT,
            ),
            Self::new(
                "text_match_consistency",
                ValidationRuleKind::TextMatchConsistency {
                    max_difference: defaults::DEFAULT_RULE_CONSISTENCY_MAX_DIFFERENCE,
                },
                defaults::DEFAULT_RULE_CONSISTENCY_WEIGHT,
            ),
        ]
    }
}

/// Toggles for the optional passes that run after the base score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementPasses {
    pub calibration: bool,
    pub statistical_validation: bool,
    pub uncertainty: bool,
    pub cross_validation: bool,
    pub benchmarking: bool,
}

impl Default for RefinementPasses {
    fn default() -> Self {
        Self::all()
    }
}

impl RefinementPasses {
    pub fn all() -> Self {
        Self {
            calibration: true,
            statistical_validation: true,
            uncertainty: true,
            cross_validation: true,
            benchmarking: true,
        }
    }

    pub fn none() -> Self {
        Self {
            calibration: false,
            statistical_validation: false,
            uncertainty: false,
            cross_validation: false,
            benchmarking: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Calibrated score replaces the overall score at or above this quality.
    pub quality_threshold: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            quality_threshold: defaults::DEFAULT_CALIBRATION_QUALITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Scores with `|z|` at or above this are flagged.
    pub z_score_threshold: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            z_score_threshold: defaults::DEFAULT_Z_SCORE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyConfig {
    /// Manual review is recommended above this total uncertainty.
    pub review_threshold: f64,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            review_threshold: defaults::DEFAULT_UNCERTAINTY_REVIEW_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossValidationConfig {
    pub folds: usize,
    /// Weight offset of the last fold.
    pub max_perturbation: f64,
    /// Fold standard deviation at or above this marks the score unstable.
    pub stability_threshold: f64,
}

impl Default for CrossValidationConfig {
    fn default() -> Self {
        Self {
            folds: defaults::DEFAULT_CROSS_VALIDATION_FOLDS,
            max_perturbation: defaults::DEFAULT_CROSS_VALIDATION_MAX_PERTURBATION,
            stability_threshold: defaults::DEFAULT_CROSS_VALIDATION_STABILITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Minimum benchmark data quality before the score is adjusted.
    pub quality_threshold: f64,
    /// History length at which the sample-size component saturates.
    pub min_sample_size: usize,
    /// Most recent scores averaged into the historical baseline.
    pub historical_window: usize,
    /// Window length compared against the previous window for the trend.
    pub trend_window: usize,
    /// Entries per baseline cache.
    pub cache_capacity: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            quality_threshold: defaults::DEFAULT_BENCHMARK_QUALITY_THRESHOLD,
            min_sample_size: defaults::DEFAULT_BENCHMARK_MIN_SAMPLE_SIZE,
            historical_window: defaults::DEFAULT_BENCHMARK_HISTORICAL_WINDOW,
            trend_window: defaults::DEFAULT_BENCHMARK_TREND_WINDOW,
            cache_capacity: defaults::DEFAULT_BENCHMARK_CACHE_CAPACITY,
        }
    }
}

/// Confidence scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub validation_rules: Vec<ValidationRuleConfig>,
    pub passes: RefinementPasses,
    pub calibration: CalibrationConfig,
    pub statistics: StatisticsConfig,
    pub uncertainty: UncertaintyConfig,
    pub cross_validation: CrossValidationConfig,
    pub benchmark: BenchmarkConfig,
    /// Most recent overall scores kept for the statistical passes.
    pub history_capacity: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            validation_rules: ValidationRuleConfig::builtin(),
            passes: RefinementPasses::default(),
            calibration: CalibrationConfig::default(),
            statistics: StatisticsConfig::default(),
            uncertainty: UncertaintyConfig::default(),
            cross_validation: CrossValidationConfig::default(),
            benchmark: BenchmarkConfig::default(),
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl ScoringConfig {
    /// Base score only: every refinement pass disabled.
    pub fn base_only() -> Self {
        Self {
            passes: RefinementPasses::none(),
            ..Self::default()
        }
    }
}
