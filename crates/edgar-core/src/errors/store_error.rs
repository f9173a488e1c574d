//! Aggregate error for callers that drive several store operations.

use super::error_code::EdgarErrorCode;
use super::{ConfigError, ResolveError, WalkError};

/// Any error the local store can produce.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EdgarErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Resolve(e) => e.error_code(),
            Self::Walk(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
