//! Store root configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FEED_ROOT: &str = "/data/storage/edgar/feeds/";
pub const DEFAULT_FEED_CACHE_ROOT: &str = "/data/backup/edgar/feeds/";
pub const DEFAULT_INDEX_ROOT: &str = "/data/storage/edgar/indices/";

/// Root directories of the local EDGAR mirror.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Primary feed store holding the sharded filing documents.
    pub feed_root: Option<String>,
    /// Backup mirror of the feed store, laid out the same way.
    pub feed_cache_root: Option<String>,
    /// Directory holding the downloaded EDGAR indices.
    pub index_root: Option<String>,
}

impl StoreConfig {
    /// Returns the effective feed root, defaulting to `/data/storage/edgar/feeds/`.
    pub fn effective_feed_root(&self) -> PathBuf {
        PathBuf::from(self.feed_root.as_deref().unwrap_or(DEFAULT_FEED_ROOT))
    }

    /// Returns the effective feed cache root, defaulting to `/data/backup/edgar/feeds/`.
    pub fn effective_feed_cache_root(&self) -> PathBuf {
        PathBuf::from(
            self.feed_cache_root
                .as_deref()
                .unwrap_or(DEFAULT_FEED_CACHE_ROOT),
        )
    }

    /// Returns the effective index root, defaulting to `/data/storage/edgar/indices/`.
    pub fn effective_index_root(&self) -> PathBuf {
        PathBuf::from(self.index_root.as_deref().unwrap_or(DEFAULT_INDEX_ROOT))
    }
}
