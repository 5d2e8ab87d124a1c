//! Benchmark parameter types.

use std::fmt;

/// Size and density of a synthetic benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Extra edges per node on top of the spanning backbone.
    pub extra_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.node_count, self.extra_degree)
    }
}
