//! Iterative depth-first traversal shared by every reachability query.
//!
//! The frontier is an explicit LIFO stack and each node is marked visited
//! the first time it is popped. Neighbors are pushed in listed order without
//! checking the visited set, so duplicates are allowed on the stack and are
//! discarded on pop. The last-listed neighbor is therefore visited first.

use std::collections::HashSet;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// A directed graph that can be walked by [`DepthFirst`].
///
/// `Node` is whatever identifies a node in the implementing graph: an arena
/// handle for [`VertexGraph`](crate::graph::vertex::VertexGraph), or a
/// borrowed key for an adjacency map. Two nodes are "the same" exactly when
/// their `Node` values compare equal.
pub trait Adjacency {
    type Node: Copy + Eq + Hash;

    /// Push every successor of `node` onto `frontier`, in listed order.
    ///
    /// A node the graph knows nothing about has no successors.
    fn extend_frontier(&self, node: Self::Node, frontier: &mut Vec<Self::Node>);
}

// ---------------------------------------------------------------------------
// DepthFirst
// ---------------------------------------------------------------------------

/// Lazy depth-first walk yielding each reachable node once, in visitation
/// order.
///
/// A yielded node is expanded only when the iterator is advanced again, so a
/// consumer that stops early never pushes the neighbors of the last node it
/// saw.
pub struct DepthFirst<'g, G: Adjacency + ?Sized> {
    graph: &'g G,
    frontier: Vec<G::Node>,
    visited: HashSet<G::Node>,
    pending: Option<G::Node>,
    expansions: usize,
    trace: bool,
}

impl<'g, G: Adjacency + ?Sized> DepthFirst<'g, G> {
    /// Start a walk from `start`.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Self {
            graph,
            frontier: vec![start],
            visited: HashSet::new(),
            pending: None,
            expansions: 0,
            trace: false,
        }
    }

    /// A walk that visits nothing.
    pub fn empty(graph: &'g G) -> Self {
        Self {
            graph,
            frontier: Vec::new(),
            visited: HashSet::new(),
            pending: None,
            expansions: 0,
            trace: false,
        }
    }

    /// Start a walk from `start` if present, otherwise an empty walk.
    pub fn from_optional(graph: &'g G, start: Option<G::Node>) -> Self {
        match start {
            Some(node) => Self::new(graph, node),
            None => Self::empty(graph),
        }
    }

    /// Emit a `trace!` event for every visited node.
    pub fn traced(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Whether `node` has already been visited.
    pub fn is_visited(&self, node: G::Node) -> bool {
        self.visited.contains(&node)
    }

    /// Number of distinct nodes visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of nodes whose neighbors have been pushed so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Run the walk to completion and return the visited set.
    pub fn into_visited(mut self) -> HashSet<G::Node> {
        while self.next().is_some() {}
        self.visited
    }
}

impl<G: Adjacency + ?Sized> Iterator for DepthFirst<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.pending.take() {
            self.graph.extend_frontier(node, &mut self.frontier);
            self.expansions += 1;
        }

        while let Some(node) = self.frontier.pop() {
            if !self.visited.insert(node) {
                continue;
            }
            if self.trace {
                tracing::trace!(visited = self.visited.len(), "dfs visit");
            }
            self.pending = Some(node);
            return Some(node);
        }

        None
    }
}

/// Every node reachable from `start` by zero or more directed edges.
pub fn reachable<G: Adjacency + ?Sized>(graph: &G, start: G::Node) -> HashSet<G::Node> {
    DepthFirst::new(graph, start).into_visited()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal graph over `u32` node ids.
    struct Edges(HashMap<u32, Vec<u32>>);

    impl Edges {
        fn from_pairs(pairs: &[(u32, u32)]) -> Self {
            let mut map: HashMap<u32, Vec<u32>> = HashMap::new();
            for &(from, to) in pairs {
                map.entry(from).or_default().push(to);
            }
            Edges(map)
        }
    }

    impl Adjacency for Edges {
        type Node = u32;

        fn extend_frontier(&self, node: u32, frontier: &mut Vec<u32>) {
            if let Some(next) = self.0.get(&node) {
                frontier.extend(next.iter().copied());
            }
        }
    }

    #[test]
    fn last_listed_neighbor_is_visited_first() {
        let g = Edges::from_pairs(&[(1, 2), (1, 3), (2, 3)]);
        let order: Vec<u32> = DepthFirst::new(&g, 1).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn cycles_are_visited_once() {
        let g = Edges::from_pairs(&[(1, 2), (2, 3), (3, 1), (3, 3)]);
        let order: Vec<u32> = DepthFirst::new(&g, 1).collect();
        assert_eq!(order.len(), 3);
        assert_eq!(reachable(&g, 2), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn unknown_start_visits_only_itself() {
        let g = Edges::from_pairs(&[(1, 2)]);
        let order: Vec<u32> = DepthFirst::new(&g, 9).collect();
        assert_eq!(order, vec![9]);
    }

    #[test]
    fn empty_walk_yields_nothing() {
        let g = Edges::from_pairs(&[(1, 2)]);
        assert_eq!(DepthFirst::empty(&g).count(), 0);
        assert_eq!(DepthFirst::from_optional(&g, None).count(), 0);
    }

    #[test]
    fn stopping_early_skips_expansion() {
        let g = Edges::from_pairs(&[(1, 2), (2, 3)]);
        let mut walk = DepthFirst::new(&g, 1);
        assert_eq!(walk.next(), Some(1));
        assert_eq!(walk.expansions(), 0);
        assert_eq!(walk.next(), Some(2));
        assert_eq!(walk.expansions(), 1);
        assert!(walk.is_visited(1));
        assert!(!walk.is_visited(3));
    }

    #[test]
    fn duplicates_on_the_frontier_are_discarded() {
        // 1 -> 2 twice, 1 -> 3 -> 2
        let g = Edges::from_pairs(&[(1, 2), (1, 2), (1, 3), (3, 2)]);
        let mut walk = DepthFirst::new(&g, 1);
        let order: Vec<u32> = walk.by_ref().collect();
        assert_eq!(order, vec![1, 3, 2]);
        assert_eq!(walk.visited_count(), 3);
        assert_eq!(walk.expansions(), 3);
    }
}
