//! Graph generators for MST property-based tests.
//!
//! Every generator draws from a seeded [`SmallRng`], so a failing case can be
//! replayed from its distribution and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 40;
const DENSE_MAX_NODES: usize = 24;

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            probabilistic(rng, MAX_NODES, (0.2, 0.6), distribution, |rng| {
                rng.gen_range(0..1_000_000)
            })
        }
        WeightDistribution::ManyIdentical => {
            probabilistic(rng, MAX_NODES, (0.2, 0.6), distribution, |rng| {
                rng.gen_range(1..=3)
            })
        }
        WeightDistribution::Dense => {
            probabilistic(rng, DENSE_MAX_NODES, (0.7, 0.95), distribution, |rng| {
                rng.gen_range(0..100)
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Bidirectional => generate_bidirectional(rng),
    }
}

fn insert(graph: &mut Graph<usize, u32>, origin: usize, destination: usize, weight: u32) {
    if let Err(err) = graph.insert_edge(origin, destination, weight) {
        panic!("integer weights are always finite: {err}");
    }
}

fn probabilistic(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut graph = Graph::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(probability) {
                let value = weight(rng);
                insert(&mut graph, i, j, value);
            }
        }
    }
    MstFixture {
        node_count,
        graph,
        distribution,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_target = node_count + node_count / 2;
    let mut graph = Graph::new();
    for _ in 0..edge_target {
        let origin = rng.gen_range(0..node_count);
        let destination = rng.gen_range(0..node_count);
        insert(&mut graph, origin, destination, rng.gen_range(0..50));
    }
    MstFixture {
        node_count,
        graph,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let components = rng.gen_range(2..=4);
    let mut graph = Graph::new();
    let mut offset = 0;
    for _ in 0..components {
        let size = rng.gen_range(2..=8);
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(0.6) {
                    insert(&mut graph, i, j, rng.gen_range(0..20));
                }
            }
        }
        offset += size;
    }
    MstFixture {
        node_count: offset,
        graph,
        distribution: WeightDistribution::Disconnected,
    }
}

fn generate_bidirectional(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
    let mut graph = Graph::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(0.4) {
                insert(&mut graph, i, j, rng.gen_range(0..30));
                insert(&mut graph, j, i, rng.gen_range(0..30));
            }
        }
    }
    MstFixture {
        node_count,
        graph,
        distribution: WeightDistribution::Bidirectional,
    }
}
