//! Error handling for codematch.
//! One error enum per subsystem, `thiserror` only.

pub mod codematch_error;
pub mod config_error;
pub mod error_code;
pub mod metadata_error;
pub mod ranking_error;
pub mod scoring_error;

pub use codematch_error::{CodematchError, CodematchResult};
pub use config_error::ConfigError;
pub use error_code::CodematchErrorCode;
pub use metadata_error::MetadataError;
pub use ranking_error::RankingError;
pub use scoring_error::ScoringError;
