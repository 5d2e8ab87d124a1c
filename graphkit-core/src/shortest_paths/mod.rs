//! All-pairs shortest paths via Floyd–Warshall.
//!
//! Distances and first hops are computed eagerly at construction into two
//! flat row-major `n * n` matrices and never change afterwards. Node indices
//! follow [`Graph::nodes`].
//!
//! Unreachable pairs keep a finite sentinel one larger than the sum of all
//! edge weights. The successor matrix alone decides reachability: float
//! rounding can make the sentinel equal to a real path weight, so a pair with
//! no successor accepts any candidate path regardless of the sentinel.
//!
//! Weights must be non-negative. Negative weights are rejected, which also
//! rules out negative cycles; no cycle detection is attempted.

use std::{collections::HashMap, fmt::Debug, hash::Hash, num::NonZeroUsize};

use tracing::{debug, instrument, warn};

use crate::{
    Graph, Weight,
    error::{GraphError, Result, render},
};

/// Configures and constructs [`AllPairsShortestPaths`] instances.
///
/// Floyd–Warshall takes cubic time and quadratic memory, so callers facing
/// untrusted input can cap the node count before anything is allocated.
///
/// # Examples
/// ```
/// use graphkit_core::{Graph, GraphError, ShortestPathsBuilder};
///
/// let graph = Graph::from_edges([(("a", "b"), 1_u32), (("b", "c"), 1)])?;
/// let err = ShortestPathsBuilder::new()
///     .with_max_nodes(2)
///     .build(&graph)
///     .expect_err("three nodes exceed the limit");
/// assert!(matches!(err, GraphError::TooManyNodes { nodes: 3, limit: 2 }));
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShortestPathsBuilder {
    max_nodes: Option<usize>,
}

impl ShortestPathsBuilder {
    /// Creates a builder without a node limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses graphs with more than `max_nodes` nodes.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Returns the configured node limit, if any.
    #[must_use]
    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    fn validated_limit(&self) -> Result<Option<NonZeroUsize>> {
        self.max_nodes
            .map(|limit| NonZeroUsize::new(limit).ok_or(GraphError::InvalidMaxNodes { got: limit }))
            .transpose()
    }

    /// Computes all-pairs shortest paths for `graph`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidMaxNodes`] when the limit is zero,
    /// [`GraphError::TooManyNodes`] when `graph` exceeds it,
    /// [`GraphError::NegativeWeight`] for any negative edge weight, and
    /// [`GraphError::WeightOverflow`] when the unreachable sentinel does not
    /// fit in `W`.
    #[instrument(
        name = "shortest_paths.build",
        err,
        skip_all,
        fields(nodes = graph.node_count(), edges = graph.edge_count(), max_nodes = ?self.max_nodes),
    )]
    pub fn build<N, W>(&self, graph: &Graph<N, W>) -> Result<AllPairsShortestPaths<N, W>>
    where
        N: Clone + Debug + Eq + Hash,
        W: Weight,
    {
        let nodes = graph.node_count();
        if let Some(limit) = self.validated_limit()? {
            if nodes > limit.get() {
                warn!(nodes, limit = limit.get(), "graph exceeds node limit");
                return Err(GraphError::TooManyNodes {
                    nodes,
                    limit: limit.get(),
                });
            }
        }

        if let Some((origin, destination, weight)) =
            graph.edges().find(|(_, _, weight)| weight.is_negative())
        {
            return Err(GraphError::NegativeWeight {
                origin: render(origin),
                destination: render(destination),
                weight: render(&weight),
            });
        }

        let infinity = graph
            .total_weight()
            .and_then(|total| total.checked_add(W::one()))
            .ok_or(GraphError::WeightOverflow {
                edges: graph.edge_count(),
            })?;

        let mut matrices = Matrices::new(nodes, infinity);
        for (origin, destination, weight) in graph.indexed_edges() {
            matrices.seed_edge(origin, destination, weight);
        }
        let relaxations = matrices.relax();

        #[cfg(feature = "metrics")]
        metrics::counter!("shortest_paths_relaxations").increment(relaxations as u64);
        debug!(relaxations, "all-pairs shortest paths computed");

        Ok(AllPairsShortestPaths {
            nodes: graph.nodes().to_vec(),
            indices: graph
                .nodes()
                .iter()
                .enumerate()
                .map(|(index, node)| (node.clone(), index))
                .collect(),
            matrices,
        })
    }
}

/// Distance and successor matrices in row-major order.
#[derive(Clone, Debug)]
struct Matrices<W> {
    size: usize,
    infinity: W,
    dist: Vec<W>,
    next: Vec<Option<usize>>,
}

impl<W: Weight> Matrices<W> {
    fn new(size: usize, infinity: W) -> Self {
        let cells = size.saturating_mul(size);
        let mut matrices = Self {
            size,
            infinity,
            dist: vec![infinity; cells],
            next: vec![None; cells],
        };
        for node in 0..size {
            let cell = matrices.cell(node, node);
            matrices.dist[cell] = W::zero();
            matrices.next[cell] = Some(node);
        }
        matrices
    }

    fn cell(&self, row: usize, column: usize) -> usize {
        row * self.size + column
    }

    /// Records a direct arc. Self-loops never beat the zero diagonal.
    fn seed_edge(&mut self, origin: usize, destination: usize, weight: W) {
        if origin == destination {
            return;
        }
        let cell = self.cell(origin, destination);
        self.dist[cell] = weight;
        self.next[cell] = Some(destination);
    }

    /// Runs the triple loop with the intermediate node outermost.
    fn relax(&mut self) -> usize {
        let n = self.size;
        let mut relaxations = 0_usize;
        for k in 0..n {
            for i in 0..n {
                let ik = self.cell(i, k);
                let Some(first_hop) = self.next[ik] else {
                    continue;
                };
                let via = self.dist[ik];
                for j in 0..n {
                    let kj = self.cell(k, j);
                    if self.next[kj].is_none() {
                        continue;
                    }
                    let Some(candidate) = via.checked_add(self.dist[kj]) else {
                        continue;
                    };
                    let ij = self.cell(i, j);
                    if self.next[ij].is_none() || candidate < self.dist[ij] {
                        self.dist[ij] = candidate;
                        self.next[ij] = Some(first_hop);
                        relaxations += 1;
                    }
                }
            }
        }
        relaxations
    }

    fn distance(&self, origin: usize, destination: usize) -> Option<W> {
        let cell = self.cell(origin, destination);
        self.next.get(cell).copied().flatten()?;
        self.dist.get(cell).copied()
    }

    fn next_hop(&self, origin: usize, destination: usize) -> Option<usize> {
        self.next.get(self.cell(origin, destination)).copied().flatten()
    }
}

/// Precomputed shortest-path distances and routes between every node pair.
///
/// Built from a graph snapshot with [`AllPairsShortestPaths::new`] or a
/// [`ShortestPathsBuilder`]; queries are read-only. Requires non-negative
/// weights.
///
/// # Examples
/// ```
/// use graphkit_core::{AllPairsShortestPaths, Graph};
///
/// let graph = Graph::from_edges([
///     (("a", "b"), 2_u32),
///     (("a", "d"), 1),
///     (("b", "d"), 3),
///     (("d", "g"), 4),
///     (("g", "f"), 1),
///     (("d", "f"), 8),
/// ])?;
/// let paths = AllPairsShortestPaths::new(&graph)?;
/// assert_eq!(paths.distance(&"a", &"f")?, Some(6));
/// assert_eq!(paths.path(&"a", &"f")?, Some(vec!["a", "d", "g", "f"]));
/// assert_eq!(paths.distance(&"f", &"a")?, None);
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AllPairsShortestPaths<N, W> {
    nodes: Vec<N>,
    indices: HashMap<N, usize>,
    matrices: Matrices<W>,
}

impl<N, W> AllPairsShortestPaths<N, W>
where
    N: Clone + Debug + Eq + Hash,
    W: Weight,
{
    /// Computes all-pairs shortest paths with the default configuration.
    ///
    /// # Errors
    /// See [`ShortestPathsBuilder::build`].
    pub fn new(graph: &Graph<N, W>) -> Result<Self> {
        ShortestPathsBuilder::new().build(graph)
    }

    /// Returns the sentinel stored for unreachable pairs: one more than the
    /// sum of all edge weights, as far as `W` can represent it.
    #[must_use]
    pub fn unreachable_sentinel(&self) -> W {
        self.matrices.infinity
    }

    fn index_of(&self, node: &N) -> Result<usize> {
        self.indices
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::unknown_element(node))
    }

    /// Returns the minimum total weight from `origin` to `destination`, or
    /// `None` when no path exists.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when either node is not part
    /// of the graph.
    pub fn distance(&self, origin: &N, destination: &N) -> Result<Option<W>> {
        let origin = self.index_of(origin)?;
        let destination = self.index_of(destination)?;
        Ok(self.matrices.distance(origin, destination))
    }

    /// Returns `true` when a path leads from `origin` to `destination`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when either node is not part
    /// of the graph.
    pub fn is_reachable(&self, origin: &N, destination: &N) -> Result<bool> {
        Ok(self.next_hop(origin, destination)?.is_some())
    }

    /// Returns the first node after `origin` on a shortest path towards
    /// `destination`; `origin` itself when both are the same node.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when either node is not part
    /// of the graph.
    pub fn next_hop(&self, origin: &N, destination: &N) -> Result<Option<&N>> {
        let origin = self.index_of(origin)?;
        let destination = self.index_of(destination)?;
        Ok(self
            .matrices
            .next_hop(origin, destination)
            .and_then(|hop| self.nodes.get(hop)))
    }

    /// Reconstructs a shortest path from `origin` to `destination`, both
    /// included, or `None` when no path exists.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when either node is not part
    /// of the graph.
    pub fn path(&self, origin: &N, destination: &N) -> Result<Option<Vec<N>>> {
        let origin_index = self.index_of(origin)?;
        let destination_index = self.index_of(destination)?;
        if self.matrices.next_hop(origin_index, destination_index).is_none() {
            return Ok(None);
        }

        let mut path = vec![origin.clone()];
        let mut current = origin_index;
        // A shortest path visits each node at most once.
        for _ in 0..self.nodes.len() {
            if current == destination_index {
                return Ok(Some(path));
            }
            let Some(hop) = self.matrices.next_hop(current, destination_index) else {
                break;
            };
            let Some(node) = self.nodes.get(hop) else {
                break;
            };
            path.push(node.clone());
            current = hop;
        }
        if current == destination_index {
            return Ok(Some(path));
        }
        warn!(
            origin = ?origin,
            destination = ?destination,
            "successor chain did not reach destination"
        );
        Ok(None)
    }
}

impl<N, W> AllPairsShortestPaths<N, W> {
    /// Returns the nodes in matrix index order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<N, W> AllPairsShortestPaths<N, W>
where
    N: Eq + Hash,
{
    /// Returns `true` when `node` is part of the graph.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.indices.contains_key(node)
    }
}
