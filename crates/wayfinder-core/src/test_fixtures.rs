//! Shared test fixtures for wayfinder-core unit tests.
//!
//! `city_graph()` is the four-location reference graph used across the
//! engine and route tests; `oracle_distances()` is an independent
//! Bellman-Ford relaxation used to check engine output on generated graphs.

use crate::generate::{generate, GeneratorOptions};
use crate::graph::{Graph, NodeId, Weight};
use std::collections::BTreeMap;

/// A-B=1, A-C=4, B-C=2, B-D=5, C-D=1
pub fn city_graph() -> Graph {
    let mut graph = Graph::new();
    for id in ["A", "B", "C", "D"] {
        graph.add_node(id);
    }
    for (a, b, w) in [
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "C", 2),
        ("B", "D", 5),
        ("C", "D", 1),
    ] {
        graph.add_edge(a, b, Weight::from(w)).unwrap();
    }
    graph
}

/// `city_graph()` plus an isolated node E
pub fn city_graph_with_island() -> Graph {
    let mut graph = city_graph();
    graph.add_node("E");
    graph
}

/// Seeded random graph, possibly disconnected
pub fn random_graph(seed: u64, nodes: usize) -> Graph {
    let opts = GeneratorOptions {
        nodes,
        density: 0.3,
        min_weight: 0,
        max_weight: 20,
        connected: false,
        seed: Some(seed),
    };
    generate(&opts).unwrap().graph
}

/// Bellman-Ford distances from `start`, independent of the engine
pub fn oracle_distances(graph: &Graph, start: &str) -> BTreeMap<NodeId, Weight> {
    let mut distances: BTreeMap<NodeId, Weight> = graph
        .nodes()
        .map(|id| (id.to_string(), Weight::INFINITY))
        .collect();
    distances.insert(start.to_string(), Weight::ZERO);

    for _ in 0..graph.node_count() {
        let mut changed = false;
        for (a, b, w) in graph.edges() {
            for (from, to) in [(a, b), (b, a)] {
                let candidate = distances[from] + w;
                if candidate.value() < distances[to].value() {
                    distances.insert(to.to_string(), candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    distances
}
