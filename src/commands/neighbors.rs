//! `wayfinder neighbors` - direct neighbors of one node

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use wayfinder_core::error::Result;
use wayfinder_core::graph::{Graph, Weight};

#[derive(Debug, Serialize)]
struct NeighborEntry<'a> {
    node: &'a str,
    weight: Weight,
}

pub fn execute(cli: &Cli, graph: &Graph, node: &str) -> Result<()> {
    let entries: Vec<NeighborEntry<'_>> = graph
        .neighbors(node)?
        .into_iter()
        .map(|(node, weight)| NeighborEntry { node, weight })
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "node": node,
                "neighbors": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No neighbors found for {}", node);
                }
            } else {
                if !cli.quiet {
                    println!("Neighbors of {}:", node);
                }
                for entry in &entries {
                    println!("{} {}", entry.node, entry.weight);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H wayfinder=1 records=1 mode=neighbors node={} count={}",
                node,
                entries.len()
            );
            for entry in &entries {
                println!("N {} {}", entry.node, entry.weight);
            }
        }
    }
    Ok(())
}
