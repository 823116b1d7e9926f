//! Graphs given as a map from a value to its neighboring values.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::traversal::{Adjacency, DepthFirst};

/// Borrowed view that lets [`DepthFirst`] walk a `HashMap<T, Vec<T>>`.
///
/// Nodes are compared by value. A value that is not a key has no outgoing
/// edges.
#[derive(Debug)]
pub struct AdjacencyMap<'g, T> {
    map: &'g HashMap<T, Vec<T>>,
}

impl<'g, T: Eq + Hash> AdjacencyMap<'g, T> {
    pub fn new(map: &'g HashMap<T, Vec<T>>) -> Self {
        Self { map }
    }

    /// Walk from `start`, yielding borrowed values in visitation order.
    pub fn walk(&self, start: &'g T) -> DepthFirst<'_, Self> {
        DepthFirst::new(self, start)
    }
}

impl<'g, T: Eq + Hash> Adjacency for AdjacencyMap<'g, T> {
    type Node = &'g T;

    fn extend_frontier(&self, node: &'g T, frontier: &mut Vec<&'g T>) {
        if let Some(neighbors) = self.map.get(node) {
            frontier.extend(neighbors.iter());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
