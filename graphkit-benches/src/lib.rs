//! Benchmark support crate for graphkit.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for union-find, Kruskal and Floyd–Warshall.

pub mod error;
pub mod params;
pub mod synthetic;
