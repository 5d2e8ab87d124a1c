//! Seeded synthetic graph generation.
//!
//! Every generated graph contains a random spanning backbone, so it is
//! connected when read as undirected, plus `extra_degree * node_count`
//! uniformly drawn edges.

use graphkit_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Edge orientation of a generated graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// One arc per edge, for undirected consumers.
    Single,
    /// Both arcs per edge with independently drawn weights.
    Both,
}

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Graph size and density.
    pub params: GraphBenchParams,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: u64,
    /// Edge orientation.
    pub orientation: Orientation,
    /// RNG seed.
    pub seed: u64,
}

/// Generates a graph over nodes `0..node_count`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `node_count` or `max_weight` is
/// zero, and [`BenchSetupError::Graph`] if an edge cannot be inserted.
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph<usize, u64>, BenchSetupError> {
    let node_count = config.params.node_count;
    if node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }
    if config.max_weight == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "max_weight",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let extra = node_count.saturating_mul(config.params.extra_degree);
    let mut graph = Graph::with_capacity(node_count.saturating_add(extra));
    for node in 1..node_count {
        let parent = rng.gen_range(0..node);
        insert(&mut graph, &mut rng, config, parent, node)?;
    }
    for _ in 0..extra {
        let origin = rng.gen_range(0..node_count);
        let destination = rng.gen_range(0..node_count);
        if origin != destination {
            insert(&mut graph, &mut rng, config, origin, destination)?;
        }
    }
    Ok(graph)
}

fn insert(
    graph: &mut Graph<usize, u64>,
    rng: &mut SmallRng,
    config: &SyntheticGraphConfig,
    origin: usize,
    destination: usize,
) -> Result<(), BenchSetupError> {
    graph.insert_edge(origin, destination, rng.gen_range(1..=config.max_weight))?;
    if config.orientation == Orientation::Both {
        graph.insert_edge(destination, origin, rng.gen_range(1..=config.max_weight))?;
    }
    Ok(())
}

/// Draws `count` element pairs over `0..universe` for union-find benchmarks.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `universe` is zero.
pub fn union_pairs(
    universe: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if universe == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "universe",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| (rng.gen_range(0..universe), rng.gen_range(0..universe)))
        .collect())
}
