//! # codematch-ranking
//!
//! Ranks scored classification candidates.
//! Pipeline: score → floor filter → strategy score → diversification →
//! tie-break sort → per-type grouping → selection reasons and metrics.

pub mod diversification;
pub mod engine;
pub mod metrics;
pub mod selection;
pub mod strategies;
pub mod tiebreak;

pub use engine::RankingEngine;
