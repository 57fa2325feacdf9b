//! # codematch-confidence
//!
//! Scores how well an industry code fits a business.
//! Eight factors feed a weighted composite gated by validation rules; optional
//! passes then calibrate, place the score against history, quantify
//! uncertainty, perturb the weights, and compare with benchmarks.

pub mod assessment;
pub mod factors;
pub mod history;
pub mod lexicon;
pub mod metadata;
pub mod passes;
pub mod scorer;
pub mod text;

pub use factors::FactorCalculator;
pub use history::{HistorySummary, ScoreHistory};
pub use metadata::InMemoryMetadataStore;
pub use scorer::ConfidenceScorer;
