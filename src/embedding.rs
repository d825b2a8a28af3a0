use log::debug;

use crate::{error::GraphError, graph::Graph};

impl Graph<usize> {
    /// Looks for a relabeled copy of `big` whose vertices `0..k` induce a copy
    /// of `self`, where `k` is the vertex count of `self`.
    ///
    /// Orbit members of `big` are tried in enumeration order and the first
    /// match is returned. Only the position prefix `0..k` is ever examined, not
    /// every `k`-subset of `big`'s vertices, so this answers "does `self` sit
    /// in front of some relabeling of `big`", which is the embedding test
    /// callers building graphs vertex by vertex need.
    ///
    /// `big` must be labeled `0..n` and `self` `0..k`; a label outside those
    /// ranges is an [`GraphError::UnknownVertex`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use isograph::{graph, graph::Graph};
    /// let edge: Graph<usize> = graph! { 0 => [1], 1 => [0] };
    /// let triangle = graph! { 0 => [1, 2], 1 => [0, 2], 2 => [0, 1] };
    /// assert!(edge.fits_in(&triangle).unwrap().is_some());
    /// assert!(triangle.fits_in(&edge).unwrap().is_none());
    /// ```
    pub fn fits_in(&self, big: &Graph<usize>) -> Result<Option<Graph<usize>>, GraphError<usize>> {
        let k = self.n_vertices();
        if k > big.n_vertices() {
            debug!(
                "{k} vertices cannot fit in a graph on {} vertices",
                big.n_vertices()
            );
            return Ok(None);
        }

        let positions: Vec<usize> = (0..k).collect();
        for (i, copy) in big.isomorphisms()?.into_iter().enumerate() {
            let mut candidate = copy.subgraph(&positions)?;
            if self.equals(candidate.relabel()?)? {
                debug!("embedding found at orbit member {i}");
                return Ok(Some(copy));
            }
        }

        debug!("no embedding found");
        Ok(None)
    }
}
