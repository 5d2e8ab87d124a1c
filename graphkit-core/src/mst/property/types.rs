//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

use crate::Graph;

/// Weight distribution strategy for generated graphs.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Weights drawn from a handful of values, stressing tie-breaking.
    ManyIdentical,
    /// Roughly one and a half edges per node.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
    /// Every edge supplied in both directions with independent weights.
    Bidirectional,
}

/// Generated graph plus the context needed to diagnose a failure.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes the generator intended to create. Isolated nodes never
    /// appear in the graph, so `graph.node_count()` may be smaller.
    pub node_count: usize,
    /// Generated graph over `0..node_count`.
    pub graph: Graph<usize, u32>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
