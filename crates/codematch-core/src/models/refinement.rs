//! Result blocks of the optional refinement passes.
//!
//! These are descriptive heuristics. The "statistical" and "cross-validation"
//! numbers are approximations for display, not rigorous estimators.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the calibration pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationInfo {
    pub raw_score: f64,
    pub calibrated_score: f64,
    /// Code-type bias times score-band bias.
    pub calibration_factor: f64,
    pub calibration_quality: f64,
    /// Whether `calibrated_score` replaced the overall score.
    pub applied: bool,
}

/// Position of a score against the rolling history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalMetrics {
    pub sample_size: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub z_score: f64,
    /// Two-sided p-value of `z_score` under a standard normal.
    pub p_value: f64,
    /// `score ± 1.96·std_dev`, clamped to [0.0, 1.0].
    pub confidence_interval: (f64, f64),
    pub statistically_valid: bool,
}

/// Factor-derived uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyMetrics {
    /// `1 - value` per factor.
    pub factor_uncertainty: BTreeMap<String, f64>,
    pub total_uncertainty: f64,
    pub confidence_range: (f64, f64),
    /// `1 - min(variance of the eight factors, 1)`.
    pub stability_index: f64,
}

/// Synthetic weight-perturbation folds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidationResult {
    pub folds: usize,
    pub fold_scores: Vec<f64>,
    pub mean: f64,
    pub std_dev: f64,
    pub stable: bool,
}

/// Performance against the benchmark, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl PerformanceTier {
    /// Classify the gap `score - benchmark`.
    pub fn from_gap(gap: f64) -> Self {
        if gap >= 0.15 {
            Self::Excellent
        } else if gap >= 0.05 {
            Self::Good
        } else if gap > -0.05 {
            Self::Average
        } else if gap > -0.15 {
            Self::BelowAverage
        } else {
            Self::Poor
        }
    }

    /// Multiplicative adjustment applied when benchmark data is trusted.
    pub fn adjustment_factor(&self) -> f64 {
        match self {
            Self::Excellent => 1.02,
            Self::Good => 1.01,
            Self::Average => 1.0,
            Self::BelowAverage => 0.99,
            Self::Poor => 0.98,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::BelowAverage => "below_average",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of recent scores relative to the window before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison of a score with heuristic and historical baselines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub industry_benchmark: f64,
    pub code_type_benchmark: f64,
    pub historical_benchmark: f64,
    pub peer_benchmark: f64,
    pub overall_benchmark: f64,
    pub data_quality: f64,
    /// `score - overall_benchmark`, measured before any adjustment.
    pub gap: f64,
    pub performance: PerformanceTier,
    pub adjustment_factor: f64,
    pub applied: bool,
    pub trend: TrendDirection,
}
