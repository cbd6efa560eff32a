//! In-memory store for weighted undirected graphs

use crate::bail_edge;
use crate::error::{Result, WayfinderError};
use crate::graph::types::{NodeId, RouteEdge, Weight};
use std::collections::BTreeMap;

/// Nodes and weighted undirected edges.
///
/// Each edge is stored in both endpoints' adjacency maps, so a lookup from
/// either side sees the same weight. Sorted maps keep iteration order
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Weight>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node; inserting an existing id is a no-op
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Insert or overwrite the edge between `a` and `b`.
    ///
    /// Rejects self-loops, negative or non-finite weights and endpoints that
    /// are not in the graph. A rejected edge leaves the graph unchanged.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        if a == b {
            bail_edge!(a, b, "self-loop");
        }
        if !weight.is_finite() {
            bail_edge!(a, b, format!("weight {} is not finite", weight.value()));
        }
        if weight.value() < 0.0 {
            bail_edge!(a, b, format!("negative weight {}", weight));
        }
        for endpoint in [a, b] {
            if !self.contains(endpoint) {
                bail_edge!(a, b, format!("unknown node {}", endpoint));
            }
        }

        if let Some(previous) = self.edge_weight(a, b) {
            tracing::debug!(from = a, to = b, %previous, %weight, "overwrite_edge");
        }
        self.link(a, b, weight);
        self.link(b, a, weight);
        Ok(())
    }

    fn link(&mut self, from: &str, to: &str, weight: Weight) {
        if let Some(adjacent) = self.adjacency.get_mut(from) {
            adjacent.insert(to.to_string(), weight);
        }
    }

    /// Adjacent nodes with their edge weights, ordered by node id
    pub fn neighbors(&self, node: &str) -> Result<Vec<(&str, Weight)>> {
        self.adjacency
            .get(node)
            .map(|adjacent| {
                adjacent
                    .iter()
                    .map(|(id, weight)| (id.as_str(), *weight))
                    .collect()
            })
            .ok_or_else(|| WayfinderError::unknown_node(node))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.adjacency.get(a).and_then(|adjacent| adjacent.get(b)).copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Every undirected edge once, as `(a, b, weight)` with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Weight)> {
        self.adjacency.iter().flat_map(|(a, adjacent)| {
            adjacent
                .iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, weight)| (a.as_str(), b.as_str(), *weight))
        })
    }

    /// Sum the edge weights along a route
    pub fn path_weight(&self, route: &[RouteEdge]) -> Result<Weight> {
        route.iter().try_fold(Weight::ZERO, |total, edge| {
            for endpoint in [&edge.from, &edge.to] {
                if !self.contains(endpoint) {
                    return Err(WayfinderError::unknown_node(endpoint));
                }
            }
            self.edge_weight(&edge.from, &edge.to)
                .map(|weight| total + weight)
                .ok_or_else(|| WayfinderError::invalid_edge(&edge.from, &edge.to, "not an edge"))
        })
    }
}
