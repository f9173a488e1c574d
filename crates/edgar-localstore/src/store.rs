//! The local mirror as a value: configured roots plus the operations over them.

use std::path::{Path, PathBuf};

use edgar_core::config::{ConfigOverrides, EdgarConfig, StoreConfig};
use edgar_core::errors::{ResolveError, StoreError, WalkError};

use crate::cik::Cik;
use crate::resolver::resolve_filing_path;
use crate::walker::{walk, FilteredWalk, WalkOptions};

/// Immutable handle on a local EDGAR mirror.
///
/// Roots are fixed at construction; build a new store to point elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStore {
    feed_root: PathBuf,
    feed_cache_root: PathBuf,
    index_root: PathBuf,
}

impl LocalStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            feed_root: config.effective_feed_root(),
            feed_cache_root: config.effective_feed_cache_root(),
            index_root: config.effective_index_root(),
        }
    }

    /// Load layered configuration from `dir` and build a store from it.
    pub fn load(dir: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, StoreError> {
        let config = EdgarConfig::load(dir, overrides)?;
        Ok(Self::from(&config))
    }

    pub fn feed_root(&self) -> &Path {
        &self.feed_root
    }

    pub fn feed_cache_root(&self) -> &Path {
        &self.feed_cache_root
    }

    pub fn index_root(&self) -> &Path {
        &self.index_root
    }

    /// Path of a filing in the primary feed store. See [`resolve_filing_path`].
    pub fn filing_path<'a>(
        &self,
        cik: impl Into<Cik<'a>>,
        accession: &str,
    ) -> Result<Option<PathBuf>, ResolveError> {
        resolve_filing_path(&self.feed_root, cik, accession)
    }

    /// Path of the same filing in the backup mirror, which shares the feed layout.
    pub fn cache_filing_path<'a>(
        &self,
        cik: impl Into<Cik<'a>>,
        accession: &str,
    ) -> Result<Option<PathBuf>, ResolveError> {
        resolve_filing_path(&self.feed_cache_root, cik, accession)
    }

    /// Walk the primary feed store.
    pub fn walk_feed(&self, options: WalkOptions) -> Result<FilteredWalk, WalkError> {
        walk(&self.feed_root, options)
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl From<&EdgarConfig> for LocalStore {
    fn from(config: &EdgarConfig) -> Self {
        Self::new(&config.store)
    }
}
