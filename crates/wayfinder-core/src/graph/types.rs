use crate::error::WayfinderError;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque node identifier (a location label)
pub type NodeId = String;

/// Travel cost along an edge or accumulated from the start node.
///
/// Edge weights are finite and non-negative (enforced by the graph store);
/// `Weight::INFINITY` marks a node not reached from the start.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order over weights, used where heap entries need `Ord`
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<u32> for Weight {
    fn from(minutes: u32) -> Self {
        Weight(f64::from(minutes))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            write!(f, "inf")
        } else if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// Unreached distances serialize as null rather than a non-portable infinity
impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Node selection strategy for the shortest-path engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Linear scan for the minimum unsettled node, O(V²)
    #[default]
    Scan,
    /// Binary heap keyed on (distance, node id), O((V + E) log V)
    Heap,
}

impl std::str::FromStr for Strategy {
    type Err = WayfinderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scan" => Ok(Strategy::Scan),
            "heap" => Ok(Strategy::Heap),
            other => Err(WayfinderError::invalid_value(
                "strategy",
                format!("{} (expected: scan, heap)", other),
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Scan => write!(f, "scan"),
            Strategy::Heap => write!(f, "heap"),
        }
    }
}

/// Output of one engine run from a fixed start node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub start: NodeId,
    /// Distance from `start` for every node in the graph
    pub distances: BTreeMap<NodeId, Weight>,
    /// Node from which each reached node's distance was last improved
    pub predecessors: BTreeMap<NodeId, NodeId>,
    /// Nodes in the order they were settled
    pub settled: Vec<NodeId>,
}

impl ShortestPaths {
    pub fn distance(&self, node: &str) -> Option<Weight> {
        self.distances.get(node).copied()
    }

    pub fn predecessor(&self, node: &str) -> Option<&str> {
        self.predecessors.get(node).map(String::as_str)
    }

    pub fn is_reachable(&self, node: &str) -> bool {
        self.distance(node).is_some_and(|d| d.is_finite())
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }
}

/// One traversed edge of a route, in travel direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEdge {
    pub from: NodeId,
    pub to: NodeId,
}

impl RouteEdge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        RouteEdge {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Route query result with an explicit reachability flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub from: NodeId,
    pub to: NodeId,
    pub found: bool,
    pub edges: Vec<RouteEdge>,
    pub total: Weight,
    pub path_length: usize,
}
