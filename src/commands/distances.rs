//! `wayfinder distances` - travel time from one node to every node

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use wayfinder_core::error::Result;
use wayfinder_core::graph::{shortest_paths, Graph, ShortestPaths, Strategy, Weight};

#[derive(Debug, Serialize)]
struct DistanceEntry<'a> {
    node: &'a str,
    /// `null` when unreachable
    distance: Weight,
    predecessor: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct DistancesOutput<'a> {
    start: &'a str,
    strategy: Strategy,
    reachable: usize,
    distances: Vec<DistanceEntry<'a>>,
}

pub fn execute(cli: &Cli, graph: &Graph, start: &str, strategy: Strategy) -> Result<()> {
    let paths = shortest_paths(graph, start, strategy)?;

    match cli.format {
        OutputFormat::Json => output_json(&paths, strategy)?,
        OutputFormat::Human => output_human(cli, &paths),
        OutputFormat::Records => output_records(&paths, strategy),
    }
    Ok(())
}

fn entries(paths: &ShortestPaths) -> Vec<DistanceEntry<'_>> {
    paths
        .distances
        .iter()
        .map(|(node, distance)| DistanceEntry {
            node,
            distance: *distance,
            predecessor: paths.predecessor(node),
        })
        .collect()
}

fn output_json(paths: &ShortestPaths, strategy: Strategy) -> Result<()> {
    let output = DistancesOutput {
        start: &paths.start,
        strategy,
        reachable: paths.reachable_count(),
        distances: entries(paths),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, paths: &ShortestPaths) {
    if !cli.quiet {
        println!("Distances from {}:", paths.start);
    }
    for entry in entries(paths) {
        match entry.predecessor {
            Some(pred) => println!("{} {} (via {})", entry.node, entry.distance, pred),
            None if entry.distance.is_finite() => println!("{} {}", entry.node, entry.distance),
            None => println!("{} {} (unreachable)", entry.node, entry.distance),
        }
    }
}

fn output_records(paths: &ShortestPaths, strategy: Strategy) {
    println!(
        "H wayfinder=1 records=1 mode=distances start={} strategy={} nodes={} reachable={}",
        paths.start,
        strategy,
        paths.distances.len(),
        paths.reachable_count()
    );
    for entry in entries(paths) {
        println!(
            "D {} {} {}",
            entry.node,
            entry.distance,
            entry.predecessor.unwrap_or("-")
        );
    }
}
