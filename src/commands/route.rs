//! `wayfinder route` - fastest route between two nodes

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use wayfinder_core::error::{Result, WayfinderError};
use wayfinder_core::graph::{get_route, shortest_paths, Graph, RouteResult, Strategy, Weight};

/// One traversed edge with its weight
#[derive(Debug, Serialize)]
struct Leg<'a> {
    from: &'a str,
    to: &'a str,
    weight: Weight,
}

#[derive(Debug, Serialize)]
struct RouteOutput<'a> {
    from: &'a str,
    to: &'a str,
    found: bool,
    strategy: Strategy,
    /// `null` when no route exists
    total: Weight,
    path_length: usize,
    edges: Vec<Leg<'a>>,
}

pub fn execute(cli: &Cli, graph: &Graph, start: &str, end: &str, strategy: Strategy) -> Result<()> {
    let paths = shortest_paths(graph, start, strategy)?;
    let route = get_route(&paths, start, end)?;
    let legs = legs(graph, &route)?;

    match cli.format {
        OutputFormat::Json => {
            let output = RouteOutput {
                from: &route.from,
                to: &route.to,
                found: route.found,
                strategy,
                total: route.total,
                path_length: route.path_length,
                edges: legs,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, &route, &legs),
        OutputFormat::Records => output_records(&route, &legs),
    }
    Ok(())
}

fn legs<'a>(graph: &Graph, route: &'a RouteResult) -> Result<Vec<Leg<'a>>> {
    route
        .edges
        .iter()
        .map(|edge| {
            let weight = graph.edge_weight(&edge.from, &edge.to).ok_or_else(|| {
                WayfinderError::invalid_edge(&edge.from, &edge.to, "not present in graph")
            })?;
            Ok(Leg {
                from: &edge.from,
                to: &edge.to,
                weight,
            })
        })
        .collect()
}

fn output_human(cli: &Cli, route: &RouteResult, legs: &[Leg<'_>]) {
    if !route.found {
        println!("No path found from {} to {}", route.from, route.to);
        return;
    }

    if !cli.quiet {
        println!("Route {} -> {}:", route.from, route.to);
    }
    for leg in legs {
        println!("  {} -> {} ({})", leg.from, leg.to, leg.weight);
    }
    println!("Total: {}", route.total);
    if !cli.quiet {
        let unit = if route.path_length == 1 { "hop" } else { "hops" };
        println!("Path length: {} {}", route.path_length, unit);
    }
}

fn output_records(route: &RouteResult, legs: &[Leg<'_>]) {
    println!(
        "H wayfinder=1 records=1 mode=route from={} to={} found={} length={} total={}",
        route.from, route.to, route.found, route.path_length, route.total
    );
    for leg in legs {
        println!("E {} {} {}", leg.from, leg.to, leg.weight);
    }
}
