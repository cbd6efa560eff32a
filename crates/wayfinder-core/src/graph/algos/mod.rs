//! Graph algorithm implementations
//!
//! - `dijkstra`: label-setting single-source shortest paths

pub mod dijkstra;

pub use dijkstra::{compute_shortest_paths, shortest_paths};
