//! Wayfinder Core Library
//!
//! Shortest travel-time routes over weighted, undirected location graphs.

pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod graph;
pub mod logging;

#[cfg(test)]
pub(crate) mod test_fixtures;
