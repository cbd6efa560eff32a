//! Seeded random travel-time graphs
//!
//! Nodes are labelled like [`build_graph`] labels them (A, B, ...). With
//! `connected` set, a random spanning tree is laid down first so every node
//! is reachable; each remaining pair then gets an edge with probability
//! `density`. Weights are whole minutes in `min_weight..=max_weight`.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::{build_graph, node_label, EdgeSpec, Graph};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub nodes: usize,
    /// Probability of an edge between any pair not already linked
    pub density: f64,
    pub min_weight: u32,
    pub max_weight: u32,
    pub connected: bool,
    /// Fixed seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            nodes: 6,
            density: 0.4,
            min_weight: 1,
            max_weight: 10,
            connected: true,
            seed: None,
        }
    }
}

impl GeneratorOptions {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            bail_invalid!("density (expected 0.0 to 1.0)", self.density);
        }
        if self.min_weight > self.max_weight {
            bail_invalid!(
                "weight range",
                format!("{}..{}", self.min_weight, self.max_weight)
            );
        }
        Ok(())
    }
}

/// A generated graph together with the seed that reproduces it
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub seed: u64,
}

pub fn generate(opts: &GeneratorOptions) -> Result<GeneratedGraph> {
    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let graph = generate_with_rng(opts, &mut rng)?;

    tracing::debug!(
        seed,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generate_graph"
    );
    Ok(GeneratedGraph { graph, seed })
}

pub fn generate_with_rng<R: Rng>(opts: &GeneratorOptions, rng: &mut R) -> Result<Graph> {
    opts.validate()?;
    let n = opts.nodes;
    let mut edges = EdgeSet::default();

    if opts.connected && n > 1 {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        for i in 1..n {
            let anchor = order[rng.gen_range(0..i)];
            edges.link(anchor, order[i], opts, rng);
        }
    }

    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(opts.density) {
                edges.link(a, b, opts, rng);
            }
        }
    }

    build_graph(n, edges.specs)
}

#[derive(Default)]
struct EdgeSet {
    linked: BTreeSet<(usize, usize)>,
    specs: Vec<EdgeSpec>,
}

impl EdgeSet {
    fn link<R: Rng>(&mut self, a: usize, b: usize, opts: &GeneratorOptions, rng: &mut R) {
        let pair = (a.min(b), a.max(b));
        if self.linked.insert(pair) {
            let minutes = rng.gen_range(opts.min_weight..=opts.max_weight);
            self.specs.push(EdgeSpec::new(
                node_label(pair.0),
                node_label(pair.1),
                f64::from(minutes),
            ));
        }
    }
}
