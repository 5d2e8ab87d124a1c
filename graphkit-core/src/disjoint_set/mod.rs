//! Union-find (disjoint set forest) over a fixed universe of elements.
//!
//! Elements are mapped to dense indices once at construction; the forest
//! itself is a pair of parallel arrays holding parent indices and root
//! heights. Unions attach the lower root beneath the higher one, and equal
//! heights raise the surviving root by one, which bounds every parent chain
//! by `log2` of its subset size. [`DisjointSetForest::union`] additionally
//! halves the paths it walks. Queries never restructure the forest, so they
//! only need `&self`; halving never changes which element is a root, so
//! representatives stay stable until their subset is merged away.

use std::{collections::HashMap, fmt::Debug, hash::Hash, iter::FusedIterator};

use tracing::{debug, instrument, trace};

use crate::error::{GraphError, Result};

/// How [`DisjointSetForest::with_policy`] treats repeated elements.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// Fail construction with [`GraphError::DuplicateElement`].
    #[default]
    Reject,
    /// Keep the first occurrence and ignore later repeats.
    Deduplicate,
}

/// Partition of a fixed universe into disjoint subsets.
///
/// # Examples
/// ```
/// use graphkit_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(["a", "b", "c"])?;
/// assert_eq!(forest.subset_count(), 3);
///
/// assert!(forest.union(&"a", &"b")?);
/// assert!(!forest.union(&"b", &"a")?);
/// assert_eq!(forest.subset_count(), 2);
/// assert_eq!(forest.representative(&"a")?, forest.representative(&"b")?);
/// assert_eq!(forest.size_of(&"b")?, 2);
/// assert_eq!(forest.total_size(), 3);
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest<E> {
    elements: Vec<E>,
    indices: HashMap<E, usize>,
    parent: Vec<usize>,
    height: Vec<u8>,
    size: Vec<usize>,
    subset_count: usize,
}

impl<E> DisjointSetForest<E>
where
    E: Clone + Debug + Eq + Hash,
{
    /// Creates a forest where every element is a singleton subset.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateElement`] when `elements` repeats an
    /// element.
    pub fn new<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        Self::with_policy(elements, DuplicatePolicy::Reject)
    }

    /// Creates a forest of singletons, resolving repeats with `policy`.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateElement`] when `elements` repeats an
    /// element and `policy` is [`DuplicatePolicy::Reject`].
    ///
    /// # Examples
    /// ```
    /// use graphkit_core::{DisjointSetForest, DuplicatePolicy};
    ///
    /// let forest = DisjointSetForest::with_policy([1, 2, 1, 3], DuplicatePolicy::Deduplicate)?;
    /// assert_eq!(forest.total_size(), 3);
    /// assert!(DisjointSetForest::new([1, 2, 1]).is_err());
    /// # Ok::<(), graphkit_core::GraphError>(())
    /// ```
    #[instrument(name = "disjoint_set.new", err, skip_all, fields(policy = ?policy))]
    pub fn with_policy<I>(elements: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let elements = elements.into_iter();
        let mut stored = Vec::with_capacity(elements.size_hint().0);
        let mut indices = HashMap::with_capacity(elements.size_hint().0);

        for element in elements {
            if indices.contains_key(&element) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(GraphError::duplicate_element(&element));
                    }
                    DuplicatePolicy::Deduplicate => {
                        trace!(element = ?element, "ignoring repeated element");
                        continue;
                    }
                }
            }
            indices.insert(element.clone(), stored.len());
            stored.push(element);
        }

        debug!(elements = stored.len(), "disjoint set forest created");
        Ok(Self::from_parts(stored, indices))
    }

    /// Creates a forest of singletons over elements the caller guarantees to
    /// be distinct, such as the node set of a [`crate::Graph`].
    pub(crate) fn from_distinct<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let stored: Vec<E> = elements.into_iter().collect();
        let indices = stored
            .iter()
            .enumerate()
            .map(|(index, element)| (element.clone(), index))
            .collect();
        Self::from_parts(stored, indices)
    }

    fn from_parts(elements: Vec<E>, indices: HashMap<E, usize>) -> Self {
        let len = elements.len();
        Self {
            elements,
            indices,
            parent: (0..len).collect(),
            height: vec![0; len],
            size: vec![1; len],
            subset_count: len,
        }
    }

    fn index_of(&self, element: &E) -> Result<usize> {
        self.indices
            .get(element)
            .copied()
            .ok_or_else(|| GraphError::unknown_element(element))
    }

    /// Returns `true` when `element` belongs to the universe.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.indices.contains_key(element)
    }

    /// Returns the canonical element of the subset containing `element`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when `element` is outside the
    /// universe.
    pub fn representative(&self, element: &E) -> Result<&E> {
        let root = self.find(self.index_of(element)?);
        self.elements
            .get(root)
            .ok_or_else(|| GraphError::unknown_element(element))
    }

    /// Returns the number of elements in the subset containing `element`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when `element` is outside the
    /// universe.
    pub fn size_of(&self, element: &E) -> Result<usize> {
        let root = self.find(self.index_of(element)?);
        Ok(self.size[root])
    }

    /// Lists every element sharing a subset with `element`, in construction
    /// order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when `element` is outside the
    /// universe.
    pub fn members(&self, element: &E) -> Result<Vec<&E>> {
        let root = self.find(self.index_of(element)?);
        Ok(self
            .elements
            .iter()
            .enumerate()
            .filter(|&(index, _)| self.find(index) == root)
            .map(|(_, member)| member)
            .collect())
    }

    /// Returns `true` when `left` and `right` belong to the same subset.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when either element is outside
    /// the universe.
    pub fn same_subset(&self, left: &E, right: &E) -> Result<bool> {
        let left = self.index_of(left)?;
        let right = self.index_of(right)?;
        Ok(self.find(left) == self.find(right))
    }

    /// Merges the subsets containing `left` and `right`.
    ///
    /// Returns `true` when two subsets were merged and `false` when both
    /// elements already shared a subset.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownElement`] when either element is outside
    /// the universe; the forest is left unchanged.
    pub fn union(&mut self, left: &E, right: &E) -> Result<bool> {
        let left_index = self.index_of(left)?;
        let right_index = self.index_of(right)?;
        let merged = self.union_indices(left_index, right_index);
        if merged {
            trace!(left = ?left, right = ?right, subsets = self.subset_count, "merged subsets");
        }
        Ok(merged)
    }

    /// Iterates over one representative per current subset.
    ///
    /// The roots are collected when this is called; the iterator is a
    /// snapshot, not a live view.
    #[must_use]
    pub fn subsets(&self) -> Subsets<'_, E> {
        let roots: Vec<usize> = (0..self.elements.len())
            .filter(|&index| self.parent[index] == index)
            .collect();
        Subsets {
            elements: &self.elements,
            roots: roots.into_iter(),
        }
    }
}

impl<E> DisjointSetForest<E> {
    /// Returns the current number of disjoint subsets.
    #[must_use]
    pub fn subset_count(&self) -> usize {
        self.subset_count
    }

    /// Returns the size of the universe, which unions never change.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the universe in construction order.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Follows parent links from `node` to its root without restructuring.
    pub(crate) fn find(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Follows parent links from `node`, pointing each visited node at its
    /// grandparent.
    fn find_halving(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }

    /// Merges the subsets holding the elements at `left` and `right`.
    pub(crate) fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find_halving(left);
        let mut right = self.find_halving(right);
        if left == right {
            return false;
        }

        let left_height = self.height[left];
        let right_height = self.height[right];
        if left_height < right_height {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        self.size[left] = self.size[left].saturating_add(self.size[right]);
        if left_height == right_height {
            self.height[left] = left_height.saturating_add(1);
        }
        self.subset_count = self.subset_count.saturating_sub(1);

        #[cfg(feature = "metrics")]
        metrics::counter!("disjoint_set_unions").increment(1);

        true
    }
}

/// Snapshot iterator over one representative per subset.
///
/// Returned by [`DisjointSetForest::subsets`].
#[derive(Clone, Debug)]
pub struct Subsets<'a, E> {
    elements: &'a [E],
    roots: std::vec::IntoIter<usize>,
}

impl<'a, E> Iterator for Subsets<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.roots.next()?;
        self.elements.get(root)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.roots.size_hint()
    }
}

impl<E> ExactSizeIterator for Subsets<'_, E> {}

impl<E> FusedIterator for Subsets<'_, E> {}

#[cfg(test)]
mod property;
