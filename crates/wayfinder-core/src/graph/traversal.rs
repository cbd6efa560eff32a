use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::Weight;

/// Read-only view of a weighted undirected graph, as consumed by the engine
pub trait GraphProvider {
    fn contains(&self, id: &str) -> bool;
    fn node_ids(&self) -> Vec<&str>;
    fn neighbors(&self, id: &str) -> Result<Vec<(&str, Weight)>>;
}

impl GraphProvider for Graph {
    fn contains(&self, id: &str) -> bool {
        Graph::contains(self, id)
    }

    fn node_ids(&self) -> Vec<&str> {
        self.nodes().collect()
    }

    fn neighbors(&self, id: &str) -> Result<Vec<(&str, Weight)>> {
        Graph::neighbors(self, id)
    }
}
