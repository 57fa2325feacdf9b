//! CodematchErrorCode trait for boundary callers.

/// Stable error codes for callers outside the crate graph (API layers, logs).
/// Every error enum implements this to provide a structured code string.
pub trait CodematchErrorCode {
    /// Returns the error code string (e.g., "INVALID_CANDIDATE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_CANDIDATE: &str = "INVALID_CANDIDATE";
pub const METADATA_NOT_FOUND: &str = "METADATA_NOT_FOUND";
pub const METADATA_UNAVAILABLE: &str = "METADATA_UNAVAILABLE";
pub const INVALID_CRITERIA: &str = "INVALID_CRITERIA";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
