//! Lazy, filtered directory walking.
//!
//! The walk is top-down over `walkdir`, which keeps one open handle per
//! directory level and closes them as it unwinds or when dropped. Entries are
//! produced only as the caller pulls them.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use edgar_core::errors::WalkError;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

/// Name filter for [`walk`]: either an already compiled regex or pattern text.
#[derive(Debug, Clone)]
pub enum NamePattern {
    Compiled(Regex),
    Text(String),
}

impl NamePattern {
    /// Compile the pattern, logging and returning a `WalkError::Pattern` on failure.
    pub fn compile(self) -> Result<Regex, WalkError> {
        match self {
            NamePattern::Compiled(re) => Ok(re),
            NamePattern::Text(text) => Regex::new(&text).map_err(|source| {
                tracing::error!(pattern = %text, error = %source, "name pattern is not a valid regex");
                WalkError::Pattern {
                    pattern: text,
                    source,
                }
            }),
        }
    }
}

impl From<Regex> for NamePattern {
    fn from(re: Regex) -> Self {
        NamePattern::Compiled(re)
    }
}

impl From<&str> for NamePattern {
    fn from(text: &str) -> Self {
        NamePattern::Text(text.to_string())
    }
}

impl From<String> for NamePattern {
    fn from(text: String) -> Self {
        NamePattern::Text(text)
    }
}

/// Options for [`walk`].
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Regex searched for in each entry's base name. `None` matches everything.
    pub name_pattern: Option<NamePattern>,
    /// Yield matching directories as well as files.
    pub include_dirs: bool,
}

impl WalkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_pattern(mut self, pattern: impl Into<NamePattern>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    pub fn include_dirs(mut self, include: bool) -> Self {
        self.include_dirs = include;
        self
    }
}

/// Walk `root` recursively, yielding the full path of each matching entry.
///
/// The name pattern is compiled before anything is read, so an invalid one
/// fails here rather than during iteration. The pattern is searched for in
/// the entry's base name (not anchored, not the full path). The root itself
/// is never yielded, and a root that does not exist yields nothing.
///
/// Names that are not valid UTF-8 are matched in their lossy form, with each
/// invalid sequence replaced by U+FFFD, so a pattern such as `\x{FFFD}` matches
/// them. The yielded path keeps the original bytes.
pub fn walk(root: impl AsRef<Path>, options: WalkOptions) -> Result<FilteredWalk, WalkError> {
    let matcher = options.name_pattern.map(NamePattern::compile).transpose()?;
    let root = root.as_ref();

    tracing::debug!(
        root = %root.display(),
        pattern = matcher.as_ref().map(Regex::as_str),
        include_dirs = options.include_dirs,
        "starting filtered walk"
    );

    Ok(FilteredWalk {
        inner: WalkDir::new(root).follow_links(false).into_iter(),
        matcher,
        include_dirs: options.include_dirs,
    })
}

/// Iterator returned by [`walk`].
///
/// Single pass: once exhausted it stays exhausted. Traversal errors are
/// yielded as `Err` items and the walk continues after them.
#[derive(Debug)]
pub struct FilteredWalk {
    inner: walkdir::IntoIter,
    matcher: Option<Regex>,
    include_dirs: bool,
}

impl FilteredWalk {
    fn name_matches(&self, name: &OsStr) -> bool {
        match &self.matcher {
            Some(re) => re.is_match(&name.to_string_lossy()),
            None => true,
        }
    }
}

impl Iterator for FilteredWalk {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) if is_missing_root(&err) => return None,
                Err(err) => return Some(Err(err.into())),
            };

            if entry.depth() == 0 {
                continue;
            }
            if is_dir_like(&entry) && !self.include_dirs {
                continue;
            }
            if !self.name_matches(entry.file_name()) {
                continue;
            }
            return Some(Ok(entry.into_path()));
        }
    }
}

fn is_missing_root(err: &walkdir::Error) -> bool {
    err.depth() == 0 && err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound)
}

/// Symlinks are not descended into, but a link to a directory is still
/// reported as a directory.
fn is_dir_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());
    }
    file_type.is_dir()
}
