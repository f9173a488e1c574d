//! Path resolution errors.

use super::error_code::{self, EdgarErrorCode};

/// Errors returned by filing path resolution.
///
/// An unparseable CIK is not an error: resolution returns `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Requires non-missing {fields}")]
    InvalidArgument { fields: &'static str },
}

impl ResolveError {
    /// Build an `InvalidArgument` naming whichever of the two identifiers are missing.
    ///
    /// Returns `None` when neither is missing.
    pub fn missing(cik_missing: bool, accession_missing: bool) -> Option<Self> {
        let fields = match (cik_missing, accession_missing) {
            (true, true) => "CIK and accession",
            (true, false) => "CIK",
            (false, true) => "accession",
            (false, false) => return None,
        };
        Some(Self::InvalidArgument { fields })
    }
}

impl EdgarErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
