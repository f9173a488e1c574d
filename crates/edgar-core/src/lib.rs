//! edgar-core: shared foundations for the EDGAR local store.
//!
//! - Errors: one `thiserror` enum per subsystem, each carrying a stable code
//! - Config: TOML-based layered resolution of the store roots
//! - Tracing: `EDGAR_LOG`-driven subscriber setup

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{ConfigOverrides, EdgarConfig, StoreConfig};
pub use errors::{ConfigError, EdgarErrorCode, ResolveError, StoreError, WalkError};
