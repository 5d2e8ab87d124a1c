//! Structural invariant and oracle-equivalence checks.
//!
//! For any forest produced by [`kruskal`], verifies:
//!
//! - **Provenance**: every selected edge exists in the input with the same
//!   weight.
//! - **Acyclicity**: no selected edge joins two already-connected nodes.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **No self-loops**.
//! - **Minimality**: the total weight matches the Prim oracle.
//! - **Determinism**: a second run is identical.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSetForest, kruskal};

use super::oracle::prim_forest;
use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph);

    let mut subsets = DisjointSetForest::new(fixture.graph.nodes().iter().copied())
        .map_err(|err| TestCaseError::fail(format!("node set must be distinct: {err}")))?;
    for (index, (origin, destination, weight)) in forest.edges().edges().enumerate() {
        if origin == destination {
            return Err(TestCaseError::fail(format!(
                "edge {index}: self-loop on node {origin}"
            )));
        }
        if fixture.graph.weight(origin, destination) != Some(weight) {
            return Err(TestCaseError::fail(format!(
                "edge {index}: ({origin}, {destination}, {weight}) is not an input edge"
            )));
        }
        let merged = subsets
            .union(origin, destination)
            .map_err(|err| TestCaseError::fail(format!("edge {index}: {err}")))?;
        if !merged {
            return Err(TestCaseError::fail(format!(
                "edge {index}: ({origin}, {destination}) closes a cycle"
            )));
        }
    }

    let expected_edges = forest.node_count().saturating_sub(forest.component_count());
    if forest.edge_count() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {} != V - C = {expected_edges}",
            forest.edge_count()
        )));
    }
    if forest.node_count() > fixture.node_count {
        return Err(TestCaseError::fail(format!(
            "forest spans {} nodes but the fixture has {} ({:?})",
            forest.node_count(),
            fixture.node_count,
            fixture.distribution,
        )));
    }
    Ok(())
}

pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph);
    let oracle = prim_forest(&fixture.graph);

    let total = forest
        .edges()
        .edges()
        .map(|(_, _, weight)| u64::from(weight))
        .sum::<u64>();
    if total != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal total {total} != oracle total {} ({:?})",
            oracle.total_weight, fixture.distribution
        )));
    }
    if forest.edge_count() != oracle.edge_count
        || forest.component_count() != oracle.component_count
    {
        return Err(TestCaseError::fail(format!(
            "shape mismatch: kruskal ({} edges, {} components) vs oracle {oracle:?}",
            forest.edge_count(),
            forest.component_count(),
        )));
    }
    Ok(())
}

pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let first = kruskal(&fixture.graph);
    let second = kruskal(&fixture.graph);
    if first != second {
        return Err(TestCaseError::fail("repeated runs diverged"));
    }
    Ok(())
}
