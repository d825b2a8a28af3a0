use std::fmt::Debug;

use thiserror::Error;

/// Failures raised by [`Graph`](crate::graph::Graph) operations.
///
/// Malformed adjacency (asymmetric lists, parallel edges, self-loops) is never
/// reported here: it is accepted and simply produces skewed results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<L: Debug> {
    #[error("Unknown vertex: {0:?}")]
    UnknownVertex(L),

    #[error("Permutation of length {found} applied to a graph with {expected} vertices")]
    PermutationLength { expected: usize, found: usize },
}
