//! Error handling for the EDGAR local store.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod resolve_error;
pub mod store_error;
pub mod walk_error;

pub use config_error::ConfigError;
pub use error_code::EdgarErrorCode;
pub use resolve_error::ResolveError;
pub use store_error::StoreError;
pub use walk_error::WalkError;
