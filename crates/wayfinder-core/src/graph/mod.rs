//! Weighted undirected graphs and shortest-path queries
//!
//! - Graph store holding locations and travel-time edges
//! - Dijkstra engine producing distance and predecessor maps
//! - Route reconstruction from predecessor links
//! - Graph provider trait for read-only engine access

pub mod algos;
pub mod build;
pub mod path;
pub mod spec;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{compute_shortest_paths, shortest_paths};
pub use build::{build_graph, node_label};
pub use path::{get_route, reconstruct_path};
pub use spec::{EdgeSpec, GraphSpec, SpecFormat};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{NodeId, RouteEdge, RouteResult, ShortestPaths, Strategy, Weight};
