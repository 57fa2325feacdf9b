//! Classification, scoring, and ranking data models.

pub mod candidate;
pub mod confidence;
pub mod metadata;
pub mod ranking;
pub mod refinement;
pub mod request;

pub use candidate::{ClassificationCandidate, CodeType, IndustryCode, MatchType};
pub use confidence::{ConfidenceFactors, ConfidenceLevel, ConfidenceScore, ValidationStatus};
pub use metadata::{CodeMetadata, DataQuality};
pub use ranking::{
    DiversityMetrics, QualityMetrics, RankedResult, RankedResultSet, RankingFactors,
    RankingMetadata,
};
pub use refinement::{
    BenchmarkResult, CalibrationInfo, CrossValidationResult, PerformanceTier,
    StatisticalMetrics, TrendDirection, UncertaintyMetrics,
};
pub use request::ClassificationRequest;
