//! CLI argument parsing for wayfinder
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GeneratorArgs, GraphArgs};
pub use output::OutputFormat;
use parse::parse_strategy;
use wayfinder_core::graph::Strategy;

/// Wayfinder - shortest travel-time routes between locations
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: ~/.config/wayfinder/config.toml)
    #[arg(long, global = true, env = "WAYFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest travel time from a start node to every node
    Distances {
        /// Start node
        #[arg(long, short)]
        start: String,

        /// Search strategy (scan or heap)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Fastest route between two nodes
    Route {
        /// Start node
        #[arg(long, short)]
        start: String,

        /// Destination node
        #[arg(long = "end", short = 'd')]
        end: String,

        /// Search strategy (scan or heap)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List a node's direct neighbors and edge weights
    Neighbors {
        /// Node to inspect
        node: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print a random graph for later use with --graph
    Generate {
        /// Number of nodes
        #[arg(long, short = 'n')]
        nodes: Option<usize>,

        /// Allow nodes unreachable from the rest of the graph
        #[arg(long)]
        disconnected: bool,

        /// Write the graph to a file (format chosen by extension) instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[command(flatten)]
        generator: GeneratorArgs,
    },
}
