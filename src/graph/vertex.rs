//! Arena-backed vertex graph.
//!
//! Vertices are addressed by [`VertexId`] handles. A handle is the vertex's
//! identity: two vertices holding equal values are still distinct nodes.
//! Handles also record which graph issued them; a clone of a graph accepts
//! the handles of its source.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::next_arena_tag;
use crate::graph::traversal::Adjacency;

// ---------------------------------------------------------------------------
// VertexId
// ---------------------------------------------------------------------------

/// Handle to a vertex inside the [`VertexGraph`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId {
    arena: u32,
    index: usize,
}

impl VertexId {
    /// Position of the vertex in insertion order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// A value plus the ordered handles of the vertices it points to.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub data: T,
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

// ---------------------------------------------------------------------------
// VertexGraph
// ---------------------------------------------------------------------------

/// Directed graph whose vertices live in a single arena.
#[derive(Debug, Clone)]
pub struct VertexGraph<T> {
    arena: u32,
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self {
            arena: next_arena_tag(),
            vertices: Vec::new(),
        }
    }
}

impl<T> VertexGraph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex with no neighbors and return its handle.
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        self.vertices.push(Vertex {
            data,
            neighbors: Vec::new(),
        });
        VertexId {
            arena: self.arena,
            index: self.vertices.len() - 1,
        }
    }

    /// Append `to` to the neighbor list of `from`.
    ///
    /// Self-loops and parallel edges are allowed.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if !self.contains(to) {
            return Err(GraphError::UnknownVertex(to));
        }
        if !self.contains(from) {
            return Err(GraphError::UnknownVertex(from));
        }
        self.vertices[from.index].neighbors.push(to);
        Ok(())
    }

    /// Whether `id` was issued by this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        id.arena == self.arena && id.index < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        if !self.contains(id) {
            return None;
        }
        self.vertices.get(id.index)
    }

    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(|v| &v.data)
    }

    /// Outgoing neighbors of `id`; empty for a foreign handle.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map(Vertex::neighbors).unwrap_or(&[])
    }

    /// Whether `id` lists itself among its own neighbors.
    pub fn has_self_loop(&self, id: VertexId) -> bool {
        self.neighbors(id).contains(&id)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All handles, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        let arena = self.arena;
        (0..self.vertices.len()).map(move |index| VertexId { arena, index })
    }

    /// `Some(id)` when `id` belongs to this graph.
    pub(crate) fn resolve(&self, id: Option<VertexId>) -> Option<VertexId> {
        id.filter(|&id| self.contains(id))
    }
}

impl<T> Adjacency for VertexGraph<T> {
    type Node = VertexId;

    fn extend_frontier(&self, node: VertexId, frontier: &mut Vec<VertexId>) {
        frontier.extend_from_slice(self.neighbors(node));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
