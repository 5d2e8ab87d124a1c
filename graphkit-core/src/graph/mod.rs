//! Weighted graphs keyed by ordered node pairs.
//!
//! A [`Graph`] maps `(origin, destination)` pairs to weights. Nodes are
//! derived from edge endpoints as edges are inserted and receive a stable
//! index in first-appearance order; edges keep their insertion order. Both
//! orders are relied upon downstream: Kruskal breaks weight ties by edge
//! order and Floyd–Warshall addresses its matrices by node index.

use std::{collections::HashMap, hash::Hash};

use crate::{
    error::{GraphError, Result, render},
    weight::Weight,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct EdgeRecord<W> {
    origin: usize,
    destination: usize,
    weight: W,
}

/// A weighted graph stored as a mapping from ordered node pairs to weights.
///
/// `(u, v)` and `(v, u)` are distinct keys. Undirected consumers such as
/// [`crate::kruskal`] treat them as parallel candidates for the same edge;
/// directed consumers such as [`crate::AllPairsShortestPaths`] treat them as
/// two arcs.
///
/// # Examples
/// ```
/// use graphkit_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.insert_edge("a", "b", 3_u32)?;
/// graph.insert_edge("b", "c", 4)?;
/// assert_eq!(graph.nodes(), &["a", "b", "c"]);
/// assert_eq!(graph.weight(&"a", &"b"), Some(3));
/// assert_eq!(graph.weight(&"b", &"a"), None);
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<N, W> {
    nodes: Vec<N>,
    node_indices: HashMap<N, usize>,
    edges: Vec<EdgeRecord<W>>,
    edge_indices: HashMap<(usize, usize), usize>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            node_indices: HashMap::new(),
            edges: Vec::new(),
            edge_indices: HashMap::new(),
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Clone + Eq + Hash,
    W: Weight,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `edges` edges.
    #[must_use]
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            nodes: Vec::new(),
            node_indices: HashMap::new(),
            edges: Vec::with_capacity(edges),
            edge_indices: HashMap::with_capacity(edges),
        }
    }

    /// Builds a graph from `((origin, destination), weight)` entries.
    ///
    /// Later entries for the same ordered pair replace earlier weights while
    /// keeping the position of the first insertion.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when any weight is NaN or
    /// infinite.
    ///
    /// # Examples
    /// ```
    /// use graphkit_core::Graph;
    ///
    /// let graph = Graph::from_edges([(("a", "b"), 1.5_f64), (("b", "c"), 2.0)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.node_count(), 3);
    /// # Ok::<(), graphkit_core::GraphError>(())
    /// ```
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((N, N), W)>,
        N: std::fmt::Debug,
    {
        let edges = edges.into_iter();
        let mut graph = Self::with_capacity(edges.size_hint().0);
        for ((origin, destination), weight) in edges {
            graph.insert_edge(origin, destination, weight)?;
        }
        Ok(graph)
    }

    /// Inserts the arc `(origin, destination)` with `weight`.
    ///
    /// Returns the previous weight when the ordered pair was already present;
    /// the edge then keeps its original position in [`Graph::edges`].
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when `weight` is NaN or
    /// infinite. The graph is left unchanged.
    pub fn insert_edge(&mut self, origin: N, destination: N, weight: W) -> Result<Option<W>>
    where
        N: std::fmt::Debug,
    {
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                origin: render(&origin),
                destination: render(&destination),
            });
        }

        Ok(self.insert_finite(origin, destination, weight))
    }

    /// Inserts an arc whose weight is already known to be finite.
    pub(crate) fn insert_finite(&mut self, origin: N, destination: N, weight: W) -> Option<W> {
        let origin = self.intern(origin);
        let destination = self.intern(destination);

        if let Some(&position) = self.edge_indices.get(&(origin, destination)) {
            return self.edges.get_mut(position).map(|edge| {
                let previous = edge.weight;
                edge.weight = weight;
                previous
            });
        }

        self.edge_indices.insert((origin, destination), self.edges.len());
        self.edges.push(EdgeRecord {
            origin,
            destination,
            weight,
        });
        None
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&index) = self.node_indices.get(&node) {
            return index;
        }
        let index = self.nodes.len();
        self.node_indices.insert(node.clone(), index);
        self.nodes.push(node);
        index
    }

    /// Returns the weight of the arc `(origin, destination)`, if present.
    #[must_use]
    pub fn weight(&self, origin: &N, destination: &N) -> Option<W> {
        let origin = self.node_index(origin)?;
        let destination = self.node_index(destination)?;
        let position = self.edge_indices.get(&(origin, destination))?;
        self.edges.get(*position).map(|edge| edge.weight)
    }

    /// Returns `true` when the arc `(origin, destination)` is present.
    #[must_use]
    pub fn contains_edge(&self, origin: &N, destination: &N) -> bool {
        self.weight(origin, destination).is_some()
    }

    /// Returns `true` when `node` is an endpoint of at least one edge.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.node_indices.contains_key(node)
    }

    /// Returns the stable index assigned to `node`.
    #[must_use]
    pub fn node_index(&self, node: &N) -> Option<usize> {
        self.node_indices.get(node).copied()
    }

    /// Iterates over `(origin_index, destination_index, weight)` in
    /// insertion order.
    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.edges
            .iter()
            .map(|edge| (edge.origin, edge.destination, edge.weight))
    }

    /// Sums every edge weight, returning `None` on overflow.
    ///
    /// Each ordered pair counts once; an undirected edge supplied in both
    /// directions therefore contributes both weights.
    #[must_use]
    pub fn total_weight(&self) -> Option<W> {
        self.edges
            .iter()
            .try_fold(W::zero(), |total, edge| total.checked_add(edge.weight))
    }
}

impl<N, W> Graph<N, W> {
    /// Returns the nodes in first-appearance order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the node stored at `index`.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct ordered pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over `(origin, destination, weight)` in insertion order.
    pub fn edges(&self) -> Edges<'_, N, W> {
        Edges {
            nodes: &self.nodes,
            records: self.edges.iter(),
        }
    }
}

impl<'a, N, W: Copy> IntoIterator for &'a Graph<N, W> {
    type Item = (&'a N, &'a N, W);
    type IntoIter = Edges<'a, N, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges()
    }
}

/// Iterator over the edges of a [`Graph`] in insertion order.
#[derive(Clone, Debug)]
pub struct Edges<'a, N, W> {
    nodes: &'a [N],
    records: std::slice::Iter<'a, EdgeRecord<W>>,
}

impl<'a, N, W: Copy> Iterator for Edges<'a, N, W> {
    type Item = (&'a N, &'a N, W);

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.records.next()?;
        let origin = self.nodes.get(edge.origin)?;
        let destination = self.nodes.get(edge.destination)?;
        Some((origin, destination, edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

impl<N, W> PartialEq for Graph<N, W>
where
    N: PartialEq,
    W: PartialEq,
{
    /// Graphs are equal when they hold the same nodes and edges in the same
    /// order.
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}
