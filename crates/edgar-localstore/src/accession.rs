//! Accession number extraction and canonicalization.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// 10-2-6 digit groups with optional dashes between them.
static ACCESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<accession>[0-9]{10}-?[0-9]{2}-?[0-9]{6})").unwrap()
});

/// Length of an accession number written without dashes.
const UNDASHED_LEN: usize = 18;

/// Extract the accession number from `raw` in `NNNNNNNNNN-NN-NNNNNN` form.
///
/// Only the first match is used. A dash-free match gets its dashes inserted;
/// a match that already has any dash is returned as found. Text with no match
/// at all is returned unchanged.
pub fn canonical_accession(raw: &str) -> Cow<'_, str> {
    let Some(found) = ACCESSION_RE
        .captures(raw)
        .and_then(|caps| caps.name("accession"))
    else {
        return Cow::Borrowed(raw);
    };

    let matched = found.as_str();
    if matched.len() == UNDASHED_LEN {
        Cow::Owned(format!(
            "{}-{}-{}",
            &matched[..10],
            &matched[10..12],
            &matched[12..]
        ))
    } else {
        Cow::Borrowed(matched)
    }
}
