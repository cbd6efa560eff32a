//! Resolve the graph a command runs against
//!
//! One source per invocation: a graph file, inline `--edge` flags
//! (optionally with `--nodes`), or a random graph.

use wayfinder_core::bail_usage;
use wayfinder_core::config::Config;
use wayfinder_core::error::Result;
use wayfinder_core::generate::generate;
use wayfinder_core::graph::{build_graph, EdgeSpec, Graph, GraphSpec};

use crate::cli::GraphArgs;

pub fn load_graph(args: &GraphArgs, config: &Config) -> Result<Graph> {
    if !args.random && args.generator.is_set() {
        bail_usage!("--seed, --density, --min-weight and --max-weight require --random");
    }

    if let Some(path) = &args.graph {
        return GraphSpec::load(path)?.into_graph();
    }

    if args.random {
        let mut opts = args.generator.apply(config.generator.clone());
        if let Some(nodes) = args.nodes {
            opts.nodes = nodes;
        }
        let generated = generate(&opts)?;
        tracing::info!(seed = generated.seed, "random_graph");
        return Ok(generated.graph);
    }

    match args.nodes {
        Some(count) => build_graph(count, args.edges.iter().cloned()),
        None if !args.edges.is_empty() => graph_from_edges(&args.edges),
        None => bail_usage!("no graph given (use --graph, --edge or --random)"),
    }
}

/// Without `--nodes`, the node set is whatever the edges name
fn graph_from_edges(edges: &[EdgeSpec]) -> Result<Graph> {
    let spec = GraphSpec {
        nodes: edges
            .iter()
            .flat_map(|e| [e.from.clone(), e.to.clone()])
            .collect(),
        edges: edges.to_vec(),
    };
    spec.into_graph()
}
