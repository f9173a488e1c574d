//! Filing path resolution.
//!
//! A filing lives at `<feed root>/<s0>/<s1>/<s2>/<s3>/<s4>/<accession>.txt`,
//! where `s0..s4` are the consecutive two-character slices of the zero-padded
//! CIK. Resolution is pure path arithmetic; nothing is read from disk.

use std::path::{Path, PathBuf};

use edgar_core::errors::ResolveError;

use crate::accession::canonical_accession;
use crate::cik::{Cik, CIK_WIDTH};

/// Extension of a full-submission filing document.
pub const FILING_SUFFIX: &str = ".txt";

const SHARD_WIDTH: usize = 2;

/// Split a zero-padded CIK into its five directory shards.
///
/// Input shorter than ten characters yields only the complete shards it has.
pub fn shard_segments(padded_cik: &str) -> impl Iterator<Item = &str> {
    (0..CIK_WIDTH)
        .step_by(SHARD_WIDTH)
        .map_while(move |i| padded_cik.get(i..i + SHARD_WIDTH))
}

/// Resolve the on-disk path of a filing's full-submission document.
///
/// Errors when the CIK or the accession is missing (an empty accession
/// counts as missing). Returns `Ok(None)` when the CIK is present but is not
/// a non-negative integer of at most ten digits. Accession text without a
/// recognizable number is used verbatim as the file stem.
pub fn resolve_filing_path<'a>(
    feed_root: &Path,
    cik: impl Into<Cik<'a>>,
    accession: &str,
) -> Result<Option<PathBuf>, ResolveError> {
    let cik = cik.into();
    if let Some(err) = ResolveError::missing(cik.is_missing(), accession.is_empty()) {
        return Err(err);
    }

    let Some(padded) = cik.padded() else {
        tracing::debug!(?cik, "CIK is not a usable integer, no filing path");
        return Ok(None);
    };

    let mut path = feed_root.to_path_buf();
    path.extend(shard_segments(&padded));
    path.push(format!("{}{FILING_SUFFIX}", canonical_accession(accession)));

    tracing::debug!(path = %path.display(), "resolved filing path");
    Ok(Some(path))
}
