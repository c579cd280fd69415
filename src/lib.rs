//! Project-model IR decoding.
//!
//! This library reconstructs the in-memory [`project::Project`] model from
//! the compact IR emitted by build-graph analysis, and provides the reference
//! encoder and command line definitions used to inspect those payloads.

pub mod cli;
pub mod label;
pub mod load;
pub mod path;
pub mod project;
pub mod runner;
pub mod scheme;
pub mod target;
pub mod version;
pub mod wire;
