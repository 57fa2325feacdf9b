use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// How ranking scores are derived from scored candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Overall confidence unchanged.
    Confidence,
    /// Fixed blend of confidence and relevance.
    #[default]
    Composite,
    /// Caller weights on confidence and relevance, used as given.
    Weighted,
    /// TOPSIS over confidence, relevance, quality, and frequency.
    MultiCriteria,
}

impl RankingStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Confidence => "confidence",
            Self::Composite => "composite",
            Self::Weighted => "weighted",
            Self::MultiCriteria => "multi_criteria",
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RankingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "confidence" => Ok(Self::Confidence),
            "composite" => Ok(Self::Composite),
            "weighted" => Ok(Self::Weighted),
            "multi_criteria" | "topsis" => Ok(Self::MultiCriteria),
            other => Err(format!("unknown ranking strategy: {other}")),
        }
    }
}

/// Per-criterion weights for the Weighted and MultiCriteria strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaWeights {
    pub confidence: f64,
    pub relevance: f64,
    pub quality: f64,
    pub frequency: f64,
}

impl Default for CriteriaWeights {
    fn default() -> Self {
        Self {
            confidence: defaults::DEFAULT_CRITERIA_CONFIDENCE_WEIGHT,
            relevance: defaults::DEFAULT_CRITERIA_RELEVANCE_WEIGHT,
            quality: defaults::DEFAULT_CRITERIA_QUALITY_WEIGHT,
            frequency: defaults::DEFAULT_CRITERIA_FREQUENCY_WEIGHT,
        }
    }
}

impl CriteriaWeights {
    pub fn as_array(&self) -> [f64; 4] {
        [self.confidence, self.relevance, self.quality, self.frequency]
    }
}

/// Per-call ranking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingCriteria {
    pub strategy: RankingStrategy,
    pub weights: CriteriaWeights,
    /// Candidates scoring below this are dropped before ranking.
    pub min_confidence: f64,
    pub max_results_per_type: usize,
    pub diversification: bool,
    pub tie_breaking: bool,
}

impl Default for RankingCriteria {
    fn default() -> Self {
        Self {
            strategy: RankingStrategy::default(),
            weights: CriteriaWeights::default(),
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            max_results_per_type: defaults::DEFAULT_MAX_RESULTS_PER_TYPE,
            diversification: defaults::DEFAULT_DIVERSIFICATION,
            tie_breaking: defaults::DEFAULT_TIE_BREAKING,
        }
    }
}

impl RankingCriteria {
    pub fn with_strategy(strategy: RankingStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn min_confidence(mut self, floor: f64) -> Self {
        self.min_confidence = floor;
        self
    }

    pub fn max_results_per_type(mut self, max: usize) -> Self {
        self.max_results_per_type = max;
        self
    }

    pub fn diversification(mut self, enabled: bool) -> Self {
        self.diversification = enabled;
        self
    }

    pub fn tie_breaking(mut self, enabled: bool) -> Self {
        self.tie_breaking = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let criteria = RankingCriteria::default();
        assert_eq!(criteria.strategy, RankingStrategy::Composite);
        assert_eq!(criteria.min_confidence, 0.3);
        assert_eq!(criteria.max_results_per_type, 3);
        assert!(criteria.diversification);
        assert!(criteria.tie_breaking);
    }

    #[test]
    fn strategy_parses_aliases() {
        assert_eq!("TOPSIS".parse::<RankingStrategy>(), Ok(RankingStrategy::MultiCriteria));
        assert_eq!(
            "multi-criteria".parse::<RankingStrategy>(),
            Ok(RankingStrategy::MultiCriteria)
        );
        assert!("best".parse::<RankingStrategy>().is_err());
    }
}
