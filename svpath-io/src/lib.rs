//! # Input/Output for the svpath datasets.
//!
//! This crate is the I/O boundary of the dashboard. It parses the two tab separated
//! inputs (per-chromosome summary counts and structural-variant match details) into
//! the models of `svpath-core`, holds them in a [`RecordStore`], and loads them
//! asynchronously so a slow file never blocks a filter transition.
//!
//! It also carries the small data-preparation steps that turn a raw ClinVar export
//! and a raw match table into those inputs (see [`prep`]).
//!
pub mod error;
pub mod loader;
pub mod prep;
pub mod store;
pub mod tsv;

// re-expose core functions
pub use error::*;
pub use loader::*;
pub use store::*;
pub use tsv::*;
