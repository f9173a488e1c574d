//! CIK input handling and zero-padded formatting.

use std::borrow::Cow;

/// Width of the canonical, zero-padded CIK.
pub const CIK_WIDTH: usize = 10;

const MAX_CIK: i128 = 9_999_999_999;

/// A CIK as handed in by a caller: numeric, textual, or missing.
///
/// Numbers are widened to `i128` so every primitive integer converts without
/// loss; negative values and values past ten digits format to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cik<'a> {
    Missing,
    Number(i128),
    Text(Cow<'a, str>),
}

impl Cik<'_> {
    /// Empty text counts as missing, the same as no value at all.
    pub fn is_missing(&self) -> bool {
        match self {
            Cik::Missing => true,
            Cik::Text(s) => s.is_empty(),
            Cik::Number(_) => false,
        }
    }

    /// The canonical 10-digit form, or `None` if this is not a usable CIK.
    pub fn padded(&self) -> Option<String> {
        let value = match self {
            Cik::Missing => return None,
            Cik::Number(n) => *n,
            Cik::Text(s) => i128::from(s.trim().parse::<u64>().ok()?),
        };
        if !(0..=MAX_CIK).contains(&value) {
            return None;
        }
        Some(format!("{value:0width$}", width = CIK_WIDTH))
    }
}

macro_rules! cik_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Cik<'_> {
                fn from(n: $int) -> Self {
                    Cik::Number(i128::from(n))
                }
            }
        )*
    };
}

cik_from_int!(u32, u64, i32, i64);

impl<'a> From<&'a str> for Cik<'a> {
    fn from(s: &'a str) -> Self {
        Cik::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Cik<'a> {
    fn from(s: &'a String) -> Self {
        Cik::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Cik<'_> {
    fn from(s: String) -> Self {
        Cik::Text(Cow::Owned(s))
    }
}

impl<'a, T> From<Option<T>> for Cik<'a>
where
    T: Into<Cik<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Cik::Missing, Into::into)
    }
}

/// Format a CIK as its canonical 10-digit, zero-padded string.
///
/// Returns `None` when the value is missing, is not a non-negative integer,
/// or needs more than ten digits. Surrounding whitespace and a leading `+`
/// are accepted in text.
pub fn format_cik<'a>(cik: impl Into<Cik<'a>>) -> Option<String> {
    cik.into().padded()
}
