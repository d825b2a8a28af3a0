//! # Isograph
//!
//! Isograph is a small Rust library for finite labeled undirected graphs held
//! as explicit adjacency lists. It answers three questions by brute force:
//!
//! - are two labelings the same graph ([`Graph::equals`]),
//! - are they the same graph up to relabeling ([`Graph::isomorphic`], built on
//!   the full isomorphism orbit from [`Graph::isomorphisms`]),
//! - does one graph sit as an induced subgraph at the front of some
//!   relabeling of another ([`Graph::fits_in`]).
//!
//! Every orbit computation walks all `V!` permutations of the vertex
//! positions, so it is intended for small graphs.
//!
//! ```
//! use isograph::graph;
//!
//! let path = graph! { 0 => [1], 1 => [0, 2], 2 => [1] };
//! let bent = graph! { 0 => [2], 1 => [2], 2 => [0, 1] };
//! assert!(path.isomorphic(&bent).unwrap());
//! assert_eq!(path.isomorphisms().unwrap().len(), 3);
//! ```

pub mod embedding;
pub mod error;
pub mod graph;
pub mod isomorphism;
pub mod permutation;

pub use error::GraphError;
pub use graph::{Graph, Label};
pub use permutation::Permutation;
