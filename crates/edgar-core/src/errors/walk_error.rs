//! Directory walk errors.

use super::error_code::{self, EdgarErrorCode};

/// Errors that can occur while setting up or running a filtered walk.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// The name filter did not compile. Returned before any entry is read.
    #[error("Invalid name pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Passed through unmodified from the underlying directory traversal.
    #[error("Traversal error: {0}")]
    Traversal(#[from] walkdir::Error),
}

impl EdgarErrorCode for WalkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Pattern { .. } => error_code::PATTERN_ERROR,
            Self::Traversal(_) => error_code::WALK_ERROR,
        }
    }
}
