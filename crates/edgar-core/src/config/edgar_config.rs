//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::StoreConfig;
use crate::errors::ConfigError;

/// Name of the project-level config file looked up by [`EdgarConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "edgar.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`EDGAR_*`)
/// 3. Project config (`edgar.toml` in the given directory)
/// 4. User config (`~/.edgar/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EdgarConfig {
    pub store: StoreConfig,
}

/// Override arguments that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub feed_root: Option<String>,
    pub feed_cache_root: Option<String>,
    pub index_root: Option<String>,
}

impl EdgarConfig {
    /// Load configuration with layered resolution rooted at `dir`.
    pub fn load(dir: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = dir.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        ::tracing::debug!(
            feed_root = %config.store.effective_feed_root().display(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &EdgarConfig) -> Result<(), ConfigError> {
        let roots = [
            ("store.feed_root", &config.store.feed_root),
            ("store.feed_cache_root", &config.store.feed_cache_root),
            ("store.index_root", &config.store.index_root),
        ];
        for (field, value) in roots {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.edgar/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".edgar").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut EdgarConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: EdgarConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut EdgarConfig, other: &EdgarConfig) {
        if other.store.feed_root.is_some() {
            base.store.feed_root = other.store.feed_root.clone();
        }
        if other.store.feed_cache_root.is_some() {
            base.store.feed_cache_root = other.store.feed_cache_root.clone();
        }
        if other.store.index_root.is_some() {
            base.store.index_root = other.store.index_root.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `EDGAR_FEED_ROOT`, `EDGAR_FEED_CACHE_ROOT`, `EDGAR_INDEX_ROOT`.
    fn apply_env_overrides(config: &mut EdgarConfig) {
        if let Ok(val) = std::env::var("EDGAR_FEED_ROOT") {
            config.store.feed_root = Some(val);
        }
        if let Ok(val) = std::env::var("EDGAR_FEED_CACHE_ROOT") {
            config.store.feed_cache_root = Some(val);
        }
        if let Ok(val) = std::env::var("EDGAR_INDEX_ROOT") {
            config.store.index_root = Some(val);
        }
    }

    fn apply_overrides(config: &mut EdgarConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.feed_root {
            config.store.feed_root = Some(v.clone());
        }
        if let Some(ref v) = overrides.feed_cache_root {
            config.store.feed_cache_root = Some(v.clone());
        }
        if let Some(ref v) = overrides.index_root {
            config.store.index_root = Some(v.clone());
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
