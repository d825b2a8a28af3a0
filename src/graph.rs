//! # Labeled Graphs
//!
//! This module provides [`Graph`], a finite undirected graph stored as an
//! adjacency mapping from vertex labels to neighbor lists.
//!
//! ## Key Features:
//!
//! - **Ownership**: every graph owns its adjacency; constructors take the
//!   supplied pairs by value and every transformation builds fresh storage, so
//!   no two graphs ever share neighbor lists.
//! - **Ordering**: vertices iterate in insertion order. The isomorphism search
//!   indexes into this order, so it is part of a graph's observable behaviour.
//! - **No validation**: symmetry of the adjacency is assumed, never checked.
//!   Parallel edges and self-loops are stored as given.
//! - **Equality**: [`Graph::equals`] compares neighbor *sets* over the vertices
//!   of the left-hand graph only.
//!
//! ```
//! use isograph::graph;
//!
//! let triangle = graph! { 0 => [1, 2], 1 => [0, 2], 2 => [0, 1] };
//! assert_eq!(triangle.n_vertices(), 3);
//! assert_eq!(triangle.n_edges(), 3);
//! assert_eq!(triangle.to_string(), "{0: [1, 2], 1: [0, 2], 2: [0, 1]}");
//! ```

use std::{
    fmt::{self, Debug},
    hash::Hash,
};

use ahash::AHashSet;
use indexmap::IndexMap;

use crate::error::GraphError;

/// Anything usable as a vertex label.
///
/// `Ord` is needed to normalise permuted neighbor lists, `Hash` for set comparison.
pub trait Label: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Label for T {}

/// A finite undirected graph on labels of type `L`.
///
/// The [`Display`](fmt::Display) form is a `{vertex: [neighbors], ..}` dump in
/// vertex order, with every label printed through its `Debug` impl, so string
/// labels come out quoted: `{"a": ["b"], "b": ["a"]}`.
#[derive(Debug, Clone)]
pub struct Graph<L> {
    pub(crate) adjacency: IndexMap<L, Vec<L>>,
    n_vertices: usize,
}

/// Builds a [`Graph`] from `vertex => [neighbors]` pairs, in the given order.
///
/// ```
/// # use isograph::graph;
/// let path = graph! { "a" => ["b"], "b" => ["a", "c"], "c" => ["b"] };
/// assert_eq!(path.n_edges(), 2);
/// ```
#[macro_export]
macro_rules! graph {
    () => {
        $crate::graph::Graph::new()
    };
    ($($vertex:expr => [$($neighbor:expr),* $(,)?]),+ $(,)?) => {
        $crate::graph::Graph::from_adjacency([$(($vertex, vec![$($neighbor),*])),+])
    };
}

impl<L: Label> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> {
    pub fn new() -> Self {
        Graph {
            adjacency: IndexMap::new(),
            n_vertices: 0,
        }
    }

    /// Builds a graph owning the given adjacency. No structural checks are made.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (L, N)>,
        N: IntoIterator<Item = L>,
    {
        let adjacency: IndexMap<L, Vec<L>> = adjacency
            .into_iter()
            .map(|(vertex, neighbors)| (vertex, neighbors.into_iter().collect()))
            .collect();
        let n_vertices = adjacency.len();
        Graph {
            adjacency,
            n_vertices,
        }
    }

    pub fn neighbors(&self, vertex: &L) -> Result<&[L], GraphError<L>> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    /// Length of the neighbor list, so a self-loop added through
    /// [`Graph::add_vertex`] counts twice.
    pub fn degree(&self, vertex: &L) -> Result<usize, GraphError<L>> {
        Ok(self.neighbors(vertex)?.len())
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    pub fn total_degree(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Half the total degree. Only meaningful for symmetric adjacency;
    /// an odd total degree is truncated.
    pub fn n_edges(&self) -> usize {
        self.total_degree() / 2
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &L> + '_ {
        self.adjacency.keys()
    }

    pub fn contains(&self, vertex: &L) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Index of `vertex` in [`Graph::vertices`] order.
    pub fn position(&self, vertex: &L) -> Result<usize, GraphError<L>> {
        self.adjacency
            .get_index_of(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    /// Inserts `label` with the given neighbors and appends `label` to each
    /// neighbor's own list.
    ///
    /// Every neighbor must already be present (or be `label` itself, giving a
    /// self-loop); otherwise nothing is modified. Re-adding an existing label
    /// replaces its list without touching the lists that pointed at it before.
    pub fn add_vertex(
        &mut self,
        label: L,
        neighbors: impl IntoIterator<Item = L>,
    ) -> Result<(), GraphError<L>> {
        let neighbors: Vec<L> = neighbors.into_iter().collect();
        if let Some(missing) = neighbors
            .iter()
            .find(|&n| *n != label && !self.adjacency.contains_key(n))
        {
            return Err(GraphError::UnknownVertex(missing.clone()));
        }

        if self
            .adjacency
            .insert(label.clone(), neighbors.clone())
            .is_none()
        {
            self.n_vertices += 1;
        }

        for neighbor in neighbors {
            if let Some(list) = self.adjacency.get_mut(&neighbor) {
                list.push(label.clone());
            }
        }
        Ok(())
    }

    /// The subgraph induced on `vertices`, which keep their given order.
    pub fn subgraph(&self, vertices: &[L]) -> Result<Self, GraphError<L>> {
        let keep: AHashSet<&L> = vertices.iter().collect();
        let adjacency = vertices
            .iter()
            .map(|vertex| {
                let retained: Vec<L> = self
                    .neighbors(vertex)?
                    .iter()
                    .filter(|n| keep.contains(n))
                    .cloned()
                    .collect();
                Ok((vertex.clone(), retained))
            })
            .collect::<Result<Vec<_>, GraphError<L>>>()?;
        Ok(Self::from_adjacency(adjacency))
    }

    /// A copy with every vertex renamed to its position in [`Graph::vertices`].
    ///
    /// Fails if a neighbor list refers to a label that is not a vertex.
    pub fn relabeled(&self) -> Result<Graph<usize>, GraphError<L>> {
        let adjacency = self
            .adjacency
            .values()
            .enumerate()
            .map(|(i, neighbors)| {
                let neighbors = neighbors
                    .iter()
                    .map(|n| self.position(n))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((i, neighbors))
            })
            .collect::<Result<Vec<_>, GraphError<L>>>()?;
        Ok(Graph::from_adjacency(adjacency))
    }

    /// Structural equality as labeled graphs.
    ///
    /// True when both graphs have the same vertex count and every vertex of
    /// `self` has the same neighbor set in `other`. Vertices of `other` missing
    /// from `self` are not inspected, and multiplicities are ignored.
    ///
    /// With equal counts, a vertex of `self` that `other` lacks is an
    /// [`GraphError::UnknownVertex`], as for [`Graph::neighbors`].
    pub fn equals(&self, other: &Self) -> Result<bool, GraphError<L>> {
        if self.n_vertices() != other.n_vertices() {
            return Ok(false);
        }
        for (vertex, neighbors) in &self.adjacency {
            let ours: AHashSet<&L> = neighbors.iter().collect();
            let theirs: AHashSet<&L> = other.neighbors(vertex)?.iter().collect();
            if ours != theirs {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Graph<usize> {
    /// In-place [`Graph::relabeled`], returning `self` for chaining.
    pub fn relabel(&mut self) -> Result<&mut Self, GraphError<usize>> {
        *self = self.relabeled()?;
        Ok(self)
    }
}

impl<L: Label> FromIterator<(L, Vec<L>)> for Graph<L> {
    fn from_iter<I: IntoIterator<Item = (L, Vec<L>)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}

impl<L: Debug> fmt::Display for Graph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (vertex, neighbors)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex:?}: {neighbors:?}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests;
