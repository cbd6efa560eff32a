//! Argument groups shared by several subcommands

use clap::Args;
use std::path::PathBuf;

use super::parse::{parse_density, parse_edge};
use wayfinder_core::generate::GeneratorOptions;
use wayfinder_core::graph::EdgeSpec;

/// Where a command's graph comes from
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Graph file (.toml, .json, .yaml)
    #[arg(long, short = 'g', conflicts_with_all = ["edges", "random", "nodes"])]
    pub graph: Option<PathBuf>,

    /// Inline edge as FROM-TO=WEIGHT (repeatable; ids may not contain '-')
    #[arg(long = "edge", short = 'e', value_parser = parse_edge)]
    pub edges: Vec<EdgeSpec>,

    /// Node count; nodes are labelled A, B, ..., Z, AA, ...
    #[arg(long, short = 'n')]
    pub nodes: Option<usize>,

    /// Generate a random graph instead of loading one
    #[arg(long, conflicts_with = "edges")]
    pub random: bool,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Overrides for the random graph generator
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// Seed for reproducible graphs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability of an extra edge between any two nodes
    #[arg(long, value_parser = parse_density)]
    pub density: Option<f64>,

    /// Smallest edge weight
    #[arg(long)]
    pub min_weight: Option<u32>,

    /// Largest edge weight
    #[arg(long)]
    pub max_weight: Option<u32>,
}

impl GeneratorArgs {
    pub fn is_set(&self) -> bool {
        self.seed.is_some()
            || self.density.is_some()
            || self.min_weight.is_some()
            || self.max_weight.is_some()
    }

    /// Layer these flags over configured generator defaults
    pub fn apply(&self, mut opts: GeneratorOptions) -> GeneratorOptions {
        if let Some(seed) = self.seed {
            opts.seed = Some(seed);
        }
        if let Some(density) = self.density {
            opts.density = density;
        }
        if let Some(min) = self.min_weight {
            opts.min_weight = min;
        }
        if let Some(max) = self.max_weight {
            opts.max_weight = max;
        }
        opts
    }
}
