//! `wayfinder generate` - random graphs for later use with `--graph`

use std::fs;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use wayfinder_core::error::{Result, WayfinderError};
use wayfinder_core::generate::{generate, GeneratedGraph, GeneratorOptions};
use wayfinder_core::graph::{GraphSpec, SpecFormat};

pub fn execute(cli: &Cli, opts: &GeneratorOptions, output: Option<&Path>) -> Result<()> {
    let generated = generate(opts)?;
    let spec = GraphSpec::from_graph(&generated.graph);

    if let Some(path) = output {
        let text = spec.render(SpecFormat::from_path(path)?)?;
        fs::write(path, text).map_err(|e| {
            WayfinderError::Other(format!("failed to write graph to {}: {}", path.display(), e))
        })?;
        report_written(cli, &generated, path)?;
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => {
            // Extra `seed` key is ignored when the file is loaded back
            let mut value = serde_json::to_value(&spec)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("seed".to_string(), serde_json::json!(generated.seed));
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("# seed = {}", generated.seed);
            }
            print!("{}", spec.to_toml_string()?);
        }
        OutputFormat::Records => {
            print_header(&generated);
            for node in &spec.nodes {
                println!("N {}", node);
            }
            for edge in &spec.edges {
                println!("E {} {} {}", edge.from, edge.to, edge.weight);
            }
        }
    }
    Ok(())
}

fn print_header(generated: &GeneratedGraph) {
    println!(
        "H wayfinder=1 records=1 mode=generate seed={} nodes={} edges={}",
        generated.seed,
        generated.graph.node_count(),
        generated.graph.edge_count()
    );
}

fn report_written(cli: &Cli, generated: &GeneratedGraph, path: &Path) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "seed": generated.seed,
                "nodes": generated.graph.node_count(),
                "edges": generated.graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Wrote {} nodes and {} edges to {} (seed {})",
                    generated.graph.node_count(),
                    generated.graph.edge_count(),
                    path.display(),
                    generated.seed
                );
            }
        }
        OutputFormat::Records => print_header(generated),
    }
    Ok(())
}
