//! Route reconstruction from engine predecessor links

use crate::error::{Result, WayfinderError};
use crate::graph::types::{NodeId, RouteEdge, RouteResult, ShortestPaths, Weight};
use std::collections::BTreeMap;

/// Walk predecessor links back from `destination` to `start`.
///
/// Returns the traversed edges in travel order (start-adjacent edge first).
/// `destination == start` yields an empty route. A node with no recorded
/// predecessor before reaching `start` means the destination is unreachable.
pub fn reconstruct_path(
    predecessors: &BTreeMap<NodeId, NodeId>,
    start: &str,
    destination: &str,
) -> Result<Vec<RouteEdge>> {
    let mut edges = Vec::new();
    let mut current = destination;

    while current != start {
        // A well-formed predecessor map has no cycles, so a walk longer
        // than the map cannot end at `start`
        if edges.len() > predecessors.len() {
            return Err(WayfinderError::no_path(start, destination));
        }
        let Some(pred) = predecessors.get(current) else {
            return Err(WayfinderError::no_path(start, destination));
        };
        edges.push(RouteEdge::new(pred.as_str(), current));
        current = pred.as_str();
    }

    edges.reverse();
    Ok(edges)
}

/// Route from `start` to `destination` over a finished engine run.
///
/// Unlike [`reconstruct_path`], an unreachable destination is not an error:
/// it yields `found: false` with no edges and an infinite total, so callers
/// can tell it apart from the zero-edge route of `start == destination`.
pub fn get_route(paths: &ShortestPaths, start: &str, destination: &str) -> Result<RouteResult> {
    for node in [start, destination] {
        if !paths.distances.contains_key(node) {
            return Err(WayfinderError::unknown_node(node));
        }
    }
    if start != paths.start {
        return Err(WayfinderError::invalid_value(
            "route start",
            format!("{} (distances were computed from {})", start, paths.start),
        ));
    }

    let total = paths.distance(destination).unwrap_or(Weight::INFINITY);
    if !total.is_finite() {
        tracing::debug!(from = start, to = destination, "route_unreachable");
        return Ok(RouteResult {
            from: start.to_string(),
            to: destination.to_string(),
            found: false,
            edges: Vec::new(),
            total,
            path_length: 0,
        });
    }

    let edges = reconstruct_path(&paths.predecessors, start, destination)?;
    Ok(RouteResult {
        from: start.to_string(),
        to: destination.to_string(),
        found: true,
        path_length: edges.len(),
        edges,
        total,
    })
}

impl ShortestPaths {
    /// Route from this run's start node to `destination`
    pub fn route_to(&self, destination: &str) -> Result<RouteResult> {
        get_route(self, &self.start, destination)
    }
}
