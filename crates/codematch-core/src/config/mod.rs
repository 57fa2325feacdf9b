//! Configuration system for codematch.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod codematch_config;
pub mod defaults;
pub mod ranking_config;
pub mod scoring_config;

pub use codematch_config::CodematchConfig;
pub use ranking_config::{CriteriaWeights, RankingCriteria, RankingStrategy};
pub use scoring_config::{
    BenchmarkConfig, CalibrationConfig, CrossValidationConfig, RefinementPasses, RequestField,
    ScoringConfig, ScoringWeights, StatisticsConfig, UncertaintyConfig, ValidationRuleConfig,
    ValidationRuleKind,
};
