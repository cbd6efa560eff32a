//! Serializable graph description used for input files and generator output
//!
//! ```toml
//! nodes = ["A", "B", "C"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 4
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, WayfinderError};
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, Weight};

/// A single undirected edge as written in a graph file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        EdgeSpec {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Node list plus edge list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Encoding of a graph file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Toml,
    Json,
    Yaml,
}

impl SpecFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(SpecFormat::Toml),
            "json" => Ok(SpecFormat::Json),
            "yaml" | "yml" => Ok(SpecFormat::Yaml),
            _ => bail_invalid!(
                "graph file extension (expected toml, json, yaml)",
                path.display()
            ),
        }
    }
}

impl GraphSpec {
    /// Read a graph file, picking the decoder from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let begin = Instant::now();
        let format = SpecFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            WayfinderError::Other(format!(
                "failed to read graph file {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path.display(), ?format, "load_graph_spec");
        let spec = Self::parse(&content, format)?;
        crate::trace_time!(begin, "load_graph_spec_elapsed", edges = spec.edges.len());
        Ok(spec)
    }

    pub fn parse(content: &str, format: SpecFormat) -> Result<Self> {
        let spec = match format {
            SpecFormat::Toml => toml::from_str(content)?,
            SpecFormat::Json => serde_json::from_str(content)?,
            SpecFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(spec)
    }

    /// Validate into a graph; edges must reference listed nodes
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in self.edges {
            graph.add_edge(&edge.from, &edge.to, Weight::new(edge.weight))?;
        }
        Ok(graph)
    }

    pub fn from_graph(graph: &Graph) -> Self {
        GraphSpec {
            nodes: graph.nodes().map(str::to_string).collect(),
            edges: graph
                .edges()
                .map(|(a, b, weight)| EdgeSpec::new(a, b, weight.value()))
                .collect(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| WayfinderError::Other(format!("failed to serialize graph: {}", e)))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: SpecFormat) -> Result<String> {
        match format {
            SpecFormat::Toml => self.to_toml_string(),
            SpecFormat::Json => self.to_json_string(),
            SpecFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }
}
