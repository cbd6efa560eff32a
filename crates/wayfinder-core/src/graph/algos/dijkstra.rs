use crate::error::{Result, WayfinderError};
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, ShortestPaths, Strategy, Weight};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// then node id so ties settle in the same order as the linear scan)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub accumulated_cost: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// State tracked during a single engine run
struct DijkstraState {
    distances: BTreeMap<NodeId, Weight>,
    predecessors: BTreeMap<NodeId, NodeId>,
    settled: BTreeSet<NodeId>,
    settle_order: Vec<NodeId>,
    /// Unreached node -> node whose edge to it overflowed the cost sum
    overflowed: BTreeMap<NodeId, NodeId>,
}

impl DijkstraState {
    fn new(provider: &dyn GraphProvider, start: &str) -> Self {
        let mut distances: BTreeMap<NodeId, Weight> = provider
            .node_ids()
            .into_iter()
            .map(|id| (id.to_string(), Weight::INFINITY))
            .collect();
        distances.insert(start.to_string(), Weight::ZERO);

        Self {
            distances,
            predecessors: BTreeMap::new(),
            settled: BTreeSet::new(),
            settle_order: Vec::new(),
            overflowed: BTreeMap::new(),
        }
    }

    fn distance(&self, node: &str) -> Weight {
        self.distances.get(node).copied().unwrap_or(Weight::INFINITY)
    }

    /// Unsettled node with the smallest finite distance; lowest id wins ties
    fn select_min(&self) -> Option<(NodeId, Weight)> {
        let mut best: Option<(&NodeId, Weight)> = None;
        for (id, distance) in &self.distances {
            if self.settled.contains(id) || !distance.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, current)| distance.value() < current.value()) {
                best = Some((id, *distance));
            }
        }
        best.map(|(id, distance)| (id.clone(), distance))
    }

    /// Relax every edge out of `current`, returning the nodes whose distance improved.
    ///
    /// `current` always holds a finite distance, so a non-finite candidate
    /// means the sum overflowed. It is only noted here; another path may
    /// still reach the neighbor with a finite cost.
    fn relax_neighbors(
        &mut self,
        provider: &dyn GraphProvider,
        current: &str,
    ) -> Result<Vec<(NodeId, Weight)>> {
        let base = self.distance(current);
        let mut improved = Vec::new();

        for (neighbor, weight) in provider.neighbors(current)? {
            let candidate = base + weight;
            if !candidate.is_finite() {
                if !self.distance(neighbor).is_finite() {
                    self.overflowed
                        .entry(neighbor.to_string())
                        .or_insert_with(|| current.to_string());
                }
                continue;
            }
            if candidate.value() < self.distance(neighbor).value() {
                tracing::trace!(node = neighbor, via = current, distance = %candidate, "relax");
                self.distances.insert(neighbor.to_string(), candidate);
                self.predecessors
                    .insert(neighbor.to_string(), current.to_string());
                improved.push((neighbor.to_string(), candidate));
            }
        }

        Ok(improved)
    }

    fn settle(&mut self, node: NodeId) {
        self.settled.insert(node.clone());
        self.settle_order.push(node);
    }

    /// A node left unreached only because its cost overflowed is an error
    fn finish(self, start: &str) -> Result<ShortestPaths> {
        for (node, via) in &self.overflowed {
            if !self.distance(node).is_finite() {
                return Err(WayfinderError::cost_overflow(via, node));
            }
        }
        Ok(ShortestPaths {
            start: start.to_string(),
            distances: self.distances,
            predecessors: self.predecessors,
            settled: self.settle_order,
        })
    }
}

fn run_scan(provider: &dyn GraphProvider, state: &mut DijkstraState) -> Result<()> {
    while state.settled.len() < state.distances.len() {
        // No finite unsettled node left: the rest is disconnected from start
        let Some((current, _)) = state.select_min() else {
            break;
        };
        state.relax_neighbors(provider, &current)?;
        state.settle(current);
    }
    Ok(())
}

fn run_heap(provider: &dyn GraphProvider, state: &mut DijkstraState, start: &str) -> Result<()> {
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node_id: start.to_string(),
        accumulated_cost: Weight::ZERO,
    }));

    while let Some(Reverse(HeapEntry { node_id, .. })) = heap.pop() {
        // Stale entry superseded by a later improvement
        if state.settled.contains(&node_id) {
            continue;
        }

        for (neighbor, cost) in state.relax_neighbors(provider, &node_id)? {
            heap.push(Reverse(HeapEntry {
                node_id: neighbor,
                accumulated_cost: cost,
            }));
        }
        state.settle(node_id);
    }
    Ok(())
}

/// Compute shortest distances and predecessors from `start`.
///
/// Both strategies settle nodes in the same `(distance, node id)` order, so
/// they produce identical distance and predecessor maps. Nodes unreachable
/// from `start` keep an infinite distance and no predecessor.
#[tracing::instrument(skip(provider))]
pub fn shortest_paths(
    provider: &dyn GraphProvider,
    start: &str,
    strategy: Strategy,
) -> Result<ShortestPaths> {
    if !provider.contains(start) {
        return Err(WayfinderError::unknown_node(start));
    }

    let begin = Instant::now();
    let mut state = DijkstraState::new(provider, start);

    match strategy {
        Strategy::Scan => run_scan(provider, &mut state)?,
        Strategy::Heap => run_heap(provider, &mut state, start)?,
    }

    let result = state.finish(start)?;
    tracing::debug!(
        nodes = result.distances.len(),
        settled = result.settled.len(),
        reachable = result.reachable_count(),
        "shortest_paths"
    );
    crate::trace_time!(begin, "shortest_paths_elapsed", nodes = result.distances.len());
    Ok(result)
}

/// Run the engine over a graph with the default (scan) strategy
pub fn compute_shortest_paths(graph: &Graph, start: &str) -> Result<ShortestPaths> {
    shortest_paths(graph, start, Strategy::default())
}
