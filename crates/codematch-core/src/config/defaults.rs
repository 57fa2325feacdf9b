// Single source of truth for all default values.

// --- Scoring weights (sum to 1.0) ---
pub const DEFAULT_WEIGHT_TEXT_MATCH: f64 = 0.25;
pub const DEFAULT_WEIGHT_KEYWORD_MATCH: f64 = 0.20;
pub const DEFAULT_WEIGHT_NAME_MATCH: f64 = 0.15;
pub const DEFAULT_WEIGHT_CATEGORY_MATCH: f64 = 0.10;
pub const DEFAULT_WEIGHT_CODE_QUALITY: f64 = 0.15;
pub const DEFAULT_WEIGHT_USAGE_FREQUENCY: f64 = 0.10;
pub const DEFAULT_WEIGHT_CONTEXTUAL: f64 = 0.05;

// --- Validation rules ---
pub const DEFAULT_RULE_MIN_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_RULE_MIN_CONFIDENCE_WEIGHT: f64 = 0.3;
pub const DEFAULT_RULE_BUSINESS_NAME_WEIGHT: f64 = 0.5;
pub const DEFAULT_RULE_CONSISTENCY_MAX_DIFFERENCE: f64 = 0.3;
pub const DEFAULT_RULE_CONSISTENCY_WEIGHT: f64 = 0.2;

// --- Refinement passes ---
pub const DEFAULT_CALIBRATION_QUALITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_Z_SCORE_THRESHOLD: f64 = 2.0;
pub const DEFAULT_UNCERTAINTY_REVIEW_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CROSS_VALIDATION_FOLDS: usize = 5;
pub const DEFAULT_CROSS_VALIDATION_MAX_PERTURBATION: f64 = 0.1;
pub const DEFAULT_CROSS_VALIDATION_STABILITY_THRESHOLD: f64 = 0.1;

// --- Benchmarking ---
pub const DEFAULT_BENCHMARK_QUALITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_BENCHMARK_MIN_SAMPLE_SIZE: usize = 100;
pub const DEFAULT_BENCHMARK_HISTORICAL_WINDOW: usize = 30;
pub const DEFAULT_BENCHMARK_TREND_WINDOW: usize = 10;
pub const DEFAULT_BENCHMARK_CACHE_CAPACITY: u64 = 256;

// --- History ---
pub const DEFAULT_HISTORY_CAPACITY: usize = 1_000;

// --- Ranking ---
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_MAX_RESULTS_PER_TYPE: usize = 3;
pub const DEFAULT_CRITERIA_CONFIDENCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_CRITERIA_RELEVANCE_WEIGHT: f64 = 0.3;
pub const DEFAULT_CRITERIA_QUALITY_WEIGHT: f64 = 0.2;
pub const DEFAULT_CRITERIA_FREQUENCY_WEIGHT: f64 = 0.1;
pub const DEFAULT_DIVERSIFICATION: bool = true;
pub const DEFAULT_TIE_BREAKING: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "codematch=info";
