//! Optional refinement passes run after the base score.
//!
//! Each pass reads the score, records its own result block, and may move the
//! overall score. Every move goes through `ConfidenceScore::set_overall`, so
//! the score stays clamped and the level stays current.

pub mod benchmark;
pub mod calibration;
pub mod cross_validation;
pub mod statistics;
pub mod uncertainty;

pub use benchmark::Benchmarker;
