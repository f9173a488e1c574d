//! EdgarErrorCode trait for callers that branch on error kind.

/// Every error enum implements this to expose a structured code string
/// that stays stable across message wording changes.
pub trait EdgarErrorCode {
    /// Returns the error code string (e.g., "PATTERN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const PATTERN_ERROR: &str = "PATTERN_ERROR";
pub const WALK_ERROR: &str = "WALK_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
