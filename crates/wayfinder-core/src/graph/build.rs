//! Graph construction from a node count and edge triples

use std::time::Instant;

use crate::error::Result;
use crate::graph::spec::EdgeSpec;
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, Weight};

/// Label for the `index`-th node of a counted graph: A..Z, AA..AZ, BA, ...
pub fn node_label(index: usize) -> NodeId {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Build a graph of `node_count` labelled nodes and the given edges.
///
/// Edges may only reference labels `node_label(0..node_count)`; anything
/// else, a self-loop or a negative weight fails with `InvalidEdge`.
#[tracing::instrument(skip(edges))]
pub fn build_graph(node_count: usize, edges: impl IntoIterator<Item = EdgeSpec>) -> Result<Graph> {
    let begin = Instant::now();
    let mut graph = Graph::new();
    for index in 0..node_count {
        graph.add_node(node_label(index));
    }
    for edge in edges {
        graph.add_edge(&edge.from, &edge.to, Weight::new(edge.weight))?;
    }
    tracing::debug!(edges = graph.edge_count(), "build_graph");
    crate::trace_time!(begin, "build_graph_elapsed");
    Ok(graph)
}
