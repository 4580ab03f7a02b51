//! Graph generators for benchmarks and tests.
//!
//! Every random generator takes an explicit seed so benchmark inputs are
//! reproducible across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{NodeId, SweepError, SweepResult};

use super::Graph;

/// Named graph shapes understood by [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Each pair `i < j` is linked with a fixed probability.
    Random,
    /// Every pair of distinct nodes is linked.
    Complete,
    /// `0 - 1 - 2 - ... - (n-1)`.
    Path,
    /// Node 0 linked to every other node.
    Star,
    /// A path with its ends joined.
    Cycle,
}

impl Shape {
    /// Parse a shape from its CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "random" => Some(Self::Random),
            "complete" => Some(Self::Complete),
            "path" | "line" => Some(Self::Path),
            "star" => Some(Self::Star),
            "cycle" | "ring" => Some(Self::Cycle),
            _ => None,
        }
    }

    /// Return a human-readable name for this shape.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Complete => "complete",
            Self::Path => "path",
            Self::Star => "star",
            Self::Cycle => "cycle",
        }
    }
}

/// Build a graph of the given shape. `probability` and `seed` only matter
/// for [`Shape::Random`].
pub fn generate(shape: Shape, nodes: usize, probability: f64, seed: u64) -> SweepResult<Graph> {
    match shape {
        Shape::Random => random_graph(nodes, probability, seed),
        Shape::Complete => complete_graph(nodes),
        Shape::Path => path_graph(nodes),
        Shape::Star => star_graph(nodes),
        Shape::Cycle => cycle_graph(nodes),
    }
}

/// Random undirected graph: each pair `i < j` is linked with probability `p`.
///
/// Pairs are visited in row-major order, so a seed fully determines the
/// edge list and therefore every adjacency order.
pub fn random_graph(nodes: usize, p: f64, seed: u64) -> SweepResult<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SweepError::Config(format!(
            "edge probability must lie in [0, 1], got {}",
            p
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(NodeId, NodeId)> = Vec::new();
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            if rng.gen_bool(p) {
                edges.push((i as NodeId, j as NodeId));
            }
        }
    }

    log::debug!(
        "generated random graph: {} nodes, {} edges (p={}, seed={})",
        nodes,
        edges.len(),
        p,
        seed
    );
    Graph::from_edges(nodes, &edges)
}

/// Complete graph on `nodes` nodes.
pub fn complete_graph(nodes: usize) -> SweepResult<Graph> {
    let mut edges = Vec::with_capacity(nodes.saturating_mul(nodes.saturating_sub(1)) / 2);
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            edges.push((i as NodeId, j as NodeId));
        }
    }
    Graph::from_edges(nodes, &edges)
}

/// Path `0 - 1 - ... - (nodes-1)`.
pub fn path_graph(nodes: usize) -> SweepResult<Graph> {
    let edges: Vec<_> = (1..nodes)
        .map(|i| ((i - 1) as NodeId, i as NodeId))
        .collect();
    Graph::from_edges(nodes, &edges)
}

/// Star with center 0.
pub fn star_graph(nodes: usize) -> SweepResult<Graph> {
    let edges: Vec<_> = (1..nodes).map(|i| (0, i as NodeId)).collect();
    Graph::from_edges(nodes, &edges)
}

/// Cycle over all nodes. Fewer than 3 nodes degrades to a path.
pub fn cycle_graph(nodes: usize) -> SweepResult<Graph> {
    let mut edges: Vec<_> = (1..nodes)
        .map(|i| ((i - 1) as NodeId, i as NodeId))
        .collect();
    if nodes >= 3 {
        edges.push(((nodes - 1) as NodeId, 0));
    }
    Graph::from_edges(nodes, &edges)
}
