//! # Isomorphism Orbits
//!
//! Brute-force isomorphism classes: every permutation of vertex positions is
//! applied to the graph, and the distinct results (under [`Graph::equals`])
//! form the orbit. The cost is `V!` relabelings, each checked against the
//! orbit collected so far, so this is meant for small graphs (`V <= 8` or so).
//!
//! Orbit members are kept in the order their first permutation appears in
//! [`Permutation::all`], which makes the result of
//! [`Graph::fits_in`](crate::graph::Graph::fits_in) deterministic.

use log::{debug, trace};

use crate::{
    error::GraphError,
    graph::{Graph, Label},
    permutation::Permutation,
};

impl<L: Label> Graph<L> {
    /// The copy of `self` obtained by moving the vertex at position `i` to
    /// position `perm[i]`.
    ///
    /// Neighbor references are redirected through the permutation first, then
    /// each rewritten list is moved to its new slot and sorted. The new graph
    /// keeps the original vertex order; only the lists change places.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isograph::{graph, permutation::Permutation};
    /// let path = graph! { 0 => [1], 1 => [0, 2], 2 => [1] };
    /// let moved = path.permute_vertex_labels(&Permutation::from_map(vec![1, 0, 2])).unwrap();
    /// assert_eq!(moved.to_string(), "{0: [1, 2], 1: [0], 2: [0]}");
    /// ```
    pub fn permute_vertex_labels(&self, perm: &Permutation) -> Result<Self, GraphError<L>> {
        if perm.len() != self.adjacency.len() {
            return Err(GraphError::PermutationLength {
                expected: self.adjacency.len(),
                found: perm.len(),
            });
        }

        let vertices: Vec<&L> = self.vertices().collect();
        let rewired = self
            .adjacency
            .values()
            .map(|neighbors| {
                neighbors
                    .iter()
                    .map(|n| Ok(vertices[perm[self.position(n)?]].clone()))
                    .collect::<Result<Vec<_>, GraphError<L>>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let relocated = perm.apply_slice(rewired).into_iter().map(|mut neighbors| {
            neighbors.sort();
            neighbors
        });

        Ok(Self::from_adjacency(
            vertices.into_iter().cloned().zip(relocated),
        ))
    }

    /// Every structurally distinct relabeling of `self`, the graph itself first.
    ///
    /// For a well-formed simple graph the orbit has `V! / |Aut|` members.
    pub fn isomorphisms(&self) -> Result<Vec<Self>, GraphError<L>> {
        let mut orbit: Vec<Self> = Vec::new();

        for perm in Permutation::all(self.n_vertices()) {
            let copy = self.permute_vertex_labels(&perm)?;
            if Self::is_member(&orbit, &copy)? {
                trace!("permutation {perm} reproduces an orbit member");
                continue;
            }
            orbit.push(copy);
        }

        debug!(
            "orbit of a graph on {} vertices has {} members",
            self.n_vertices(),
            orbit.len()
        );
        Ok(orbit)
    }

    /// Whether `self` equals some member of `other`'s orbit.
    ///
    /// Only `other`'s orbit is computed, and the comparison is
    /// [`Graph::equals`] with `self` on the left. The two graphs are expected
    /// to share a label domain: a vertex of `self` missing from an orbit member
    /// of the same size is an [`GraphError::UnknownVertex`].
    pub fn isomorphic(&self, other: &Self) -> Result<bool, GraphError<L>> {
        for member in other.isomorphisms()? {
            if self.equals(&member)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The permutations of vertex positions that map `self` onto itself,
    /// in enumeration order. The identity always comes first.
    pub fn automorphisms(&self) -> Result<Vec<Permutation>, GraphError<L>> {
        let mut group = Vec::new();
        for perm in Permutation::all(self.n_vertices()) {
            if self.equals(&self.permute_vertex_labels(&perm)?)? {
                group.push(perm);
            }
        }
        debug!("automorphism group of order {}", group.len());
        Ok(group)
    }

    pub fn orbit_size(&self) -> Result<usize, GraphError<L>> {
        Ok(self.isomorphisms()?.len())
    }

    fn is_member(orbit: &[Self], copy: &Self) -> Result<bool, GraphError<L>> {
        for member in orbit {
            if member.equals(copy)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
