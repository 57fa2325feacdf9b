//! # codematch-core
//!
//! Foundation crate for codematch.
//! Defines the classification models, traits, errors, config, and tracing setup.
//! The confidence scorer and the ranking engine both depend on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CodematchConfig;
pub use errors::{CodematchError, CodematchResult};
pub use models::{
    ClassificationCandidate, ClassificationRequest, CodeType, ConfidenceFactors,
    ConfidenceLevel, ConfidenceScore, IndustryCode, ValidationStatus,
};
