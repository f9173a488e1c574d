//! Observability for the EDGAR local store.
//! `tracing` crate with `EnvFilter`, configured through `EDGAR_LOG`.

pub mod setup;

pub use setup::{build_filter, init_tracing};
