//! edgar-localstore: locate filings in a local EDGAR mirror.
//!
//! - Resolver: CIK + accession → sharded `.txt` path, no filesystem access
//! - Walker: lazy recursive enumeration with an optional base-name regex
//! - LocalStore: both of the above bound to configured store roots

pub mod accession;
pub mod cik;
pub mod resolver;
pub mod store;
pub mod walker;

pub use accession::canonical_accession;
pub use cik::{format_cik, Cik};
pub use resolver::{resolve_filing_path, shard_segments, FILING_SUFFIX};
pub use store::LocalStore;
pub use walker::{walk, FilteredWalk, NamePattern, WalkOptions};
