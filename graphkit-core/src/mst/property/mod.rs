//! Property-based tests for the Kruskal minimum spanning forest.
//!
//! Verifies Kruskal against an independent Prim oracle, validates structural
//! invariants (acyclicity, component count, edge count, provenance) and
//! checks that repeated runs produce identical output.

mod strategies;
mod structural;
mod types;
