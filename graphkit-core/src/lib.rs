//! Graph algorithms over caller-defined node and weight types.
//!
//! - [`DisjointSetForest`]: union-find over a fixed universe of elements.
//! - [`kruskal`]: minimum spanning forest of a [`Graph`] read as undirected.
//! - [`AllPairsShortestPaths`]: Floyd–Warshall distances and routes over a
//!   [`Graph`] read as directed.
//!
//! Nodes only need `Clone + Debug + Eq + Hash`; weights implement [`Weight`],
//! which covers the primitive integers and floats.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;
mod shortest_paths;
#[cfg(test)]
mod test_utils;
mod weight;

pub use crate::{
    disjoint_set::{DisjointSetForest, DuplicatePolicy, Subsets},
    error::{GraphError, GraphErrorCode, Result},
    graph::{Edges, Graph},
    mst::{MinimumSpanningForest, kruskal},
    shortest_paths::{AllPairsShortestPaths, ShortestPathsBuilder},
    weight::Weight,
};
