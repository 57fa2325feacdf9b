//! Top-level codematch configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RankingCriteria, ScoringConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating the scorer and ranking sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CODEMATCH_*`)
/// 2. TOML config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodematchConfig {
    pub scoring: ScoringConfig,
    /// Criteria used when a ranking call passes none.
    pub ranking: RankingCriteria,
}

impl CodematchConfig {
    /// Load configuration: defaults, then the optional TOML file, then env.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides through `lookup`.
    /// Unparseable values are ignored and the previous value is kept.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CODEMATCH_MIN_CONFIDENCE").and_then(|s| s.parse::<f64>().ok()) {
            self.ranking.min_confidence = v;
        }
        if let Some(v) = lookup("CODEMATCH_RANKING_STRATEGY").and_then(|s| s.parse().ok()) {
            self.ranking.strategy = v;
        }
        if let Some(v) =
            lookup("CODEMATCH_MAX_RESULTS_PER_TYPE").and_then(|s| s.parse::<usize>().ok())
        {
            self.ranking.max_results_per_type = v;
        }
        if let Some(v) = lookup("CODEMATCH_HISTORY_CAPACITY").and_then(|s| s.parse::<usize>().ok())
        {
            self.scoring.history_capacity = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        let weights = &scoring.weights;
        let named_weights = [
            ("scoring.weights.text_match", weights.text_match),
            ("scoring.weights.keyword_match", weights.keyword_match),
            ("scoring.weights.name_match", weights.name_match),
            ("scoring.weights.category_match", weights.category_match),
            ("scoring.weights.code_quality", weights.code_quality),
            ("scoring.weights.usage_frequency", weights.usage_frequency),
            ("scoring.weights.contextual", weights.contextual),
        ];
        for (field, value) in named_weights {
            check_unit(field, value)?;
        }

        for rule in &scoring.validation_rules {
            check_unit(&format!("scoring.validation_rules.{}.weight", rule.name), rule.weight)?;
        }

        check_unit(
            "scoring.benchmark.quality_threshold",
            scoring.benchmark.quality_threshold,
        )?;
        if scoring.history_capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.history_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if scoring.cross_validation.folds < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.cross_validation.folds".to_string(),
                message: "must be at least 2".to_string(),
            });
        }

        let criteria = &self.ranking;
        for (field, value) in [
            ("ranking.weights.confidence", criteria.weights.confidence),
            ("ranking.weights.relevance", criteria.weights.relevance),
            ("ranking.weights.quality", criteria.weights.quality),
            ("ranking.weights.frequency", criteria.weights.frequency),
        ] {
            check_unit(field, value)?;
        }
        if !criteria.min_confidence.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "ranking.min_confidence".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if criteria.max_results_per_type == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "ranking.max_results_per_type".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}
