//! Minimum spanning forest construction.
//!
//! Kruskal's algorithm over a [`Graph`] read as undirected: candidate edges
//! are stably sorted by weight, so equal weights keep their insertion order,
//! and each edge is accepted when its endpoints still live in different
//! subsets of a [`DisjointSetForest`] built over the graph's nodes.

use std::{fmt::Debug, hash::Hash};

use tracing::{debug, instrument};

use crate::{DisjointSetForest, Graph, Weight};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<N, W> {
    edges: Graph<N, W>,
    node_count: usize,
    component_count: usize,
}

impl<N, W> MinimumSpanningForest<N, W> {
    /// Returns the selected edges, in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &Graph<N, W> { &self.edges }

    /// Consumes the forest, returning the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_graph(self) -> Graph<N, W> { self.edges }

    /// Returns the number of nodes of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of selected edges, always
    /// `node_count - component_count`.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

impl<N, W> MinimumSpanningForest<N, W>
where
    N: Clone + Eq + Hash,
    W: Weight,
{
    /// Sums the weights of the selected edges, returning `None` on overflow.
    ///
    /// Every selected edge joins two previously separate subsets, so an edge
    /// supplied as both `(u, v)` and `(v, u)` is counted at most once.
    #[must_use]
    pub fn total_weight(&self) -> Option<W> {
        self.edges.total_weight()
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Edges are read as undirected. Self-loops are never selected; parallel
/// edges, including an edge supplied in both directions, compete as separate
/// candidates and only the first in sorted order can be selected. Negative
/// weights are accepted. An empty graph produces an empty forest.
///
/// Every [`Graph`] already holds distinct nodes and finite weights, so the
/// computation cannot fail.
///
/// # Examples
/// ```
/// use graphkit_core::{Graph, kruskal};
///
/// let graph = Graph::from_edges([
///     (("a", "b"), 4_u32),
///     (("b", "c"), 1),
///     (("a", "c"), 2),
/// ])?;
/// let forest = kruskal(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), Some(3));
/// assert!(!forest.edges().contains_edge(&"a", &"b"));
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip_all,
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn kruskal<N, W>(graph: &Graph<N, W>) -> MinimumSpanningForest<N, W>
where
    N: Clone + Debug + Eq + Hash,
    W: Weight,
{
    let node_count = graph.node_count();
    let mut subsets = DisjointSetForest::from_distinct(graph.nodes().iter());

    let mut candidates: Vec<(usize, usize, W)> = graph.indexed_edges().collect();
    candidates.sort_by(|left, right| left.2.total_cmp(&right.2));

    let mut edges = Graph::with_capacity(node_count.saturating_sub(1));
    let mut discarded = 0_usize;
    for (position, &(origin, destination, weight)) in candidates.iter().enumerate() {
        if subsets.subset_count() <= 1 {
            discarded = discarded.saturating_add(candidates.len() - position);
            break;
        }
        if !subsets.union_indices(origin, destination) {
            discarded = discarded.saturating_add(1);
            continue;
        }
        if let (Some(origin), Some(destination)) = (graph.node(origin), graph.node(destination)) {
            edges.insert_finite(origin.clone(), destination.clone(), weight);
        }
    }

    #[cfg(feature = "metrics")]
    {
        metrics::counter!("mst_edges_accepted").increment(edges.edge_count() as u64);
        metrics::counter!("mst_edges_discarded").increment(discarded as u64);
    }

    let component_count = subsets.subset_count();
    debug!(
        accepted = edges.edge_count(),
        discarded,
        components = component_count,
        "minimum spanning forest complete"
    );
    MinimumSpanningForest {
        edges,
        node_count,
        component_count,
    }
}

#[cfg(test)]
mod property;
