//! Configuration system for the EDGAR local store.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod edgar_config;
pub mod store_config;

pub use edgar_config::{ConfigOverrides, EdgarConfig};
pub use store_config::StoreConfig;
