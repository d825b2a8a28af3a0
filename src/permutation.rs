//! # Permutations
//!
//! This module provides a `Permutation` struct for representing permutations of
//! vertex positions `0..n`, together with the enumeration of every such
//! permutation that drives the isomorphism-orbit search.
//!
//! ## Key Features:
//!
//! - **Representation**: A `Permutation` is stored by its direct mapping (`map[i]` is
//!   the image of `i`) and its inverse mapping.
//! - **Construction**:
//!   - Identity permutation: `Permutation::id(n)`.
//!   - From a mapping vector: `Permutation::from_map(vec![...])`.
//! - **Basic Operations**:
//!   - Apply to slices: `p.apply_slice(data)` (returns a new `Vec`).
//!   - Check for identity: `p.is_identity()`.
//!   - Cycle decomposition: `p.find_cycles()`.
//! - **Enumeration**:
//!   - `Permutation::all(n)` lazily yields all `n!` permutations in lexicographic order.

use std::{fmt, ops::Index};

use itertools::Itertools;

/// A permutation of `0..n`, with the ability to apply itself to slices.
///
/// # Examples
///
/// ```
/// use isograph::permutation::Permutation;
///
/// // Create a permutation that maps 0->2, 1->0, 2->1, 3->3
/// let p = Permutation::from_map(vec![2, 0, 1, 3]);
///
/// // Apply the permutation to a slice
/// let data = vec![10, 20, 30, 40];
/// let permuted = p.apply_slice(&data);
/// assert_eq!(permuted, vec![20, 30, 10, 40]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    map: Vec<usize>,
    inv: Vec<usize>,
}

/// Ordering follows the `map` field, so lexicographic enumeration order is preserved.
impl PartialOrd for Permutation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Permutation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.map.cmp(&other.map)
    }
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Basic Constructors and Accessors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation of length `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isograph::permutation::Permutation;
    /// let p = Permutation::id(4);
    /// assert_eq!(p.apply_slice(&[10,20,30,40]), vec![10,20,30,40]);
    /// ```
    pub fn id(n: usize) -> Self {
        Permutation {
            map: (0..n).collect(),
            inv: (0..n).collect(),
        }
    }

    /// Creates a permutation from a mapping vector.
    /// The `map` vector states where index `i` is sent: `map[i]` is the image of `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isograph::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1]);
    /// assert_eq!(p.apply_slice(&[10,20,30]), vec![20,30,10]);
    /// ```
    pub fn from_map(map: Vec<usize>) -> Self {
        let mut inv = vec![0; map.len()];
        for (i, &j) in map.iter().enumerate() {
            inv[j] = i;
        }
        Permutation { map, inv }
    }

    /// Every permutation of `0..n`, in lexicographic order of their maps.
    ///
    /// The sequence is produced lazily and is finite (`n!` items, a single empty
    /// permutation when `n == 0`). Calling this again starts a fresh sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isograph::permutation::Permutation;
    /// let maps: Vec<Vec<usize>> = Permutation::all(3).map(|p| p.map().to_vec()).collect();
    /// assert_eq!(maps.len(), 6);
    /// assert_eq!(maps[0], vec![0, 1, 2]);
    /// assert_eq!(maps[1], vec![0, 2, 1]);
    /// assert_eq!(maps[5], vec![2, 1, 0]);
    /// ```
    pub fn all(n: usize) -> impl Iterator<Item = Permutation> {
        (0..n).permutations(n).map(Permutation::from_map)
    }

    /// Returns the mapping as a slice.
    pub fn map(&self) -> &[usize] {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // --------------------------------------------------------------------------------------------
    // Basic Operations
    // --------------------------------------------------------------------------------------------

    /// Applies `self` to a slice, returning a new `Vec<T>` where the element at
    /// position `i` has moved to position `map[i]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isograph::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1]);
    /// let data = vec![10, 20, 30];
    /// assert_eq!(p.apply_slice(&data), vec![20, 30, 10]);
    /// ```
    pub fn apply_slice<T: Clone, S>(&self, slice: S) -> Vec<T>
    where
        S: AsRef<[T]>,
    {
        let s = slice.as_ref();
        self.inv.iter().map(|&idx| s[idx].clone()).collect()
    }

    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i == m)
    }

    /// Decomposes the permutation into disjoint cycles, fixed points included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isograph::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1, 3]);
    /// assert_eq!(p.find_cycles(), vec![vec![0, 2, 1], vec![3]]);
    /// ```
    pub fn find_cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.map.len()];
        let mut cycles = Vec::new();
        for i in 0..self.map.len() {
            if visited[i] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut j = i;
            while !visited[j] {
                visited[j] = true;
                cycle.push(j);
                j = self.map[j];
            }
            cycles.push(cycle);
        }
        cycles
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // cycle notation, then one-line notation
        let mut first = true;
        for cycle in self.find_cycles().into_iter().filter(|c| c.len() > 1) {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "({})", cycle.iter().join(" "))?;
            first = false;
        }
        if first {
            write!(f, "()")?;
        }

        write!(f, " [{}]", self.map.iter().join(" "))
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.map[index]
    }
}
