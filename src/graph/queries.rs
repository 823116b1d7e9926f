//! Reachability queries.
//!
//! [`GraphTraversal`] runs every query with one [`DepthFirst`] walk that
//! inspects each reachable node exactly once. An absent start (`None`, or a
//! handle issued by another graph) yields the query's degenerate value rather than
//! an error. The free functions run the same queries with the default
//! [`TraversalConfig`].
//!
//! The `write_*` variants emit one value per line in visitation order; the
//! `print_*` variants do the same on stdout.

use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::{self, Write};

use crate::config::TraversalConfig;
use crate::graph::adjacency_map::AdjacencyMap;
use crate::graph::airport::{AirportId, AirportNetwork};
use crate::graph::traversal::{Adjacency, DepthFirst};
use crate::graph::vertex::{VertexGraph, VertexId};

/// Length of a word in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice.
fn word_len(word: &str) -> usize {
    word.encode_utf16().count()
}

fn write_lines<'a, T, I, W>(values: I, out: &mut W) -> io::Result<usize>
where
    T: Display + 'a,
    I: Iterator<Item = &'a T>,
    W: Write,
{
    let mut written = 0;
    for value in values {
        writeln!(out, "{value}")?;
        written += 1;
    }
    Ok(written)
}

// ---------------------------------------------------------------------------
// GraphTraversal
// ---------------------------------------------------------------------------

/// Depth-first reachability queries over vertex graphs, airport networks
/// and adjacency maps.
#[derive(Debug, Clone, Default)]
pub struct GraphTraversal {
    config: TraversalConfig,
}

impl GraphTraversal {
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    fn walk<'g, G: Adjacency + ?Sized>(&self, graph: &'g G, start: Option<G::Node>) -> DepthFirst<'g, G> {
        DepthFirst::from_optional(graph, start).traced(self.config.trace_visits)
    }

    // -------------------------------------------------------------------
    // filter_short_reachable
    // -------------------------------------------------------------------

    /// Values reachable from `vertex` whose length is strictly less than
    /// `k`, in visitation order.
    pub fn filter_short_reachable<'g, T: AsRef<str>>(
        &self,
        graph: &'g VertexGraph<T>,
        vertex: Option<VertexId>,
        k: usize,
    ) -> impl Iterator<Item = &'g T> + 'g {
        self.walk(graph, graph.resolve(vertex)).filter_map(move |id| {
            graph
                .value(id)
                .filter(|value| word_len((*value).as_ref()) < k)
        })
    }

    /// Write every value yielded by [`filter_short_reachable`] on its own
    /// line. Returns the number of lines written.
    ///
    /// [`filter_short_reachable`]: GraphTraversal::filter_short_reachable
    pub fn write_short_reachable<T, W>(
        &self,
        graph: &VertexGraph<T>,
        vertex: Option<VertexId>,
        k: usize,
        out: &mut W,
    ) -> io::Result<usize>
    where
        T: AsRef<str> + Display,
        W: Write,
    {
        write_lines(self.filter_short_reachable(graph, vertex, k), out)
    }

    // -------------------------------------------------------------------
    // longest_reachable_word
    // -------------------------------------------------------------------

    /// The longest value reachable from `vertex`, the start included.
    ///
    /// Ties keep the value visited first. Returns `""` for an absent vertex.
    pub fn longest_reachable_word<'g, T: AsRef<str>>(
        &self,
        graph: &'g VertexGraph<T>,
        vertex: Option<VertexId>,
    ) -> &'g str {
        let mut longest = "";
        let mut longest_len = 0;
        let mut walk = self.walk(graph, graph.resolve(vertex));

        for id in walk.by_ref() {
            let Some(word) = graph.value(id).map(|value| value.as_ref()) else {
                continue;
            };
            let len = word_len(word);
            if len > longest_len {
                longest = word;
                longest_len = len;
            }
        }

        tracing::debug!(visited = walk.visited_count(), longest_len, "longest_reachable_word");
        longest
    }

    // -------------------------------------------------------------------
    // find_self_looping_reachable
    // -------------------------------------------------------------------

    /// Values of the vertices reachable from `vertex` that list themselves
    /// as a neighbor, in visitation order.
    ///
    /// Containment is by handle: a neighbor holding an equal value does not
    /// count.
    pub fn find_self_looping_reachable<'g, T>(
        &self,
        graph: &'g VertexGraph<T>,
        vertex: Option<VertexId>,
    ) -> impl Iterator<Item = &'g T> + 'g {
        self.walk(graph, graph.resolve(vertex))
            .filter(move |&id| graph.has_self_loop(id))
            .filter_map(move |id| graph.value(id))
    }

    pub fn write_self_looping_reachable<T, W>(
        &self,
        graph: &VertexGraph<T>,
        vertex: Option<VertexId>,
        out: &mut W,
    ) -> io::Result<usize>
    where
        T: Display,
        W: Write,
    {
        write_lines(self.find_self_looping_reachable(graph, vertex), out)
    }

    // -------------------------------------------------------------------
    // is_reachable
    // -------------------------------------------------------------------

    /// Whether `destination` can be reached from `start` through a series
    /// of flights.
    ///
    /// Returns `false` when either airport is absent and `true` without
    /// walking when both are the same airport. Otherwise stops as soon as
    /// `destination` is popped.
    pub fn is_reachable(
        &self,
        network: &AirportNetwork,
        start: Option<AirportId>,
        destination: Option<AirportId>,
    ) -> bool {
        let (Some(start), Some(destination)) = (start, destination) else {
            return false;
        };
        if !network.contains(start) || !network.contains(destination) {
            return false;
        }
        self.reaches(network, start, destination)
    }

    /// Walk from `start` until `destination` is popped. Equal endpoints
    /// answer `true` without expanding any node.
    fn reaches<G>(&self, graph: &G, start: G::Node, destination: G::Node) -> bool
    where
        G: Adjacency + ?Sized,
        G::Node: Debug,
    {
        if start == destination {
            return true;
        }

        let mut walk = self.walk(graph, Some(start));
        let found = walk.any(|node| node == destination);
        tracing::debug!(
            start = ?start,
            destination = ?destination,
            visited = walk.visited_count(),
            expansions = walk.expansions(),
            found,
            "is_reachable"
        );
        found
    }

    // -------------------------------------------------------------------
    // unreachable_from
    // -------------------------------------------------------------------

    /// The keys of `graph` that cannot be reached from `start`.
    ///
    /// When `start` is not itself a key, nothing is considered reachable and
    /// the whole key set is returned. Values that only ever appear as
    /// neighbors are never part of the result.
    pub fn unreachable_from<T>(&self, graph: &HashMap<T, Vec<T>>, start: &T) -> HashSet<T>
    where
        T: Eq + Hash + Clone,
    {
        let Some((start, _)) = graph.get_key_value(start) else {
            tracing::debug!(keys = graph.len(), "unreachable_from: start is not a key");
            return graph.keys().cloned().collect();
        };

        let view = AdjacencyMap::new(graph);
        let visited = self.walk(&view, Some(start)).into_visited();

        let unreachable: HashSet<T> = graph
            .keys()
            .filter(|key| !visited.contains(key))
            .cloned()
            .collect();
        tracing::debug!(
            keys = graph.len(),
            visited = visited.len(),
            unreachable = unreachable.len(),
            "unreachable_from"
        );
        unreachable
    }
}

// ---------------------------------------------------------------------------
// Free functions (default config)
// ---------------------------------------------------------------------------

/// See [`GraphTraversal::filter_short_reachable`].
pub fn filter_short_reachable<T: AsRef<str>>(
    graph: &VertexGraph<T>,
    vertex: Option<VertexId>,
    k: usize,
) -> impl Iterator<Item = &T> + '_ {
    GraphTraversal::default().filter_short_reachable(graph, vertex, k)
}

pub fn write_short_reachable<T, W>(
    graph: &VertexGraph<T>,
    vertex: Option<VertexId>,
    k: usize,
    out: &mut W,
) -> io::Result<usize>
where
    T: AsRef<str> + Display,
    W: Write,
{
    GraphTraversal::default().write_short_reachable(graph, vertex, k, out)
}

pub fn print_short_reachable<T>(graph: &VertexGraph<T>, vertex: Option<VertexId>, k: usize) -> io::Result<usize>
where
    T: AsRef<str> + Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_short_reachable(graph, vertex, k, &mut out)
}

/// See [`GraphTraversal::longest_reachable_word`].
pub fn longest_reachable_word<T: AsRef<str>>(graph: &VertexGraph<T>, vertex: Option<VertexId>) -> &str {
    GraphTraversal::default().longest_reachable_word(graph, vertex)
}

/// See [`GraphTraversal::find_self_looping_reachable`].
pub fn find_self_looping_reachable<T>(
    graph: &VertexGraph<T>,
    vertex: Option<VertexId>,
) -> impl Iterator<Item = &T> + '_ {
    GraphTraversal::default().find_self_looping_reachable(graph, vertex)
}

pub fn write_self_looping_reachable<T, W>(
    graph: &VertexGraph<T>,
    vertex: Option<VertexId>,
    out: &mut W,
) -> io::Result<usize>
where
    T: Display,
    W: Write,
{
    GraphTraversal::default().write_self_looping_reachable(graph, vertex, out)
}

pub fn print_self_looping_reachable<T: Display>(graph: &VertexGraph<T>, vertex: Option<VertexId>) -> io::Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_self_looping_reachable(graph, vertex, &mut out)
}

/// See [`GraphTraversal::is_reachable`].
pub fn is_reachable(network: &AirportNetwork, start: Option<AirportId>, destination: Option<AirportId>) -> bool {
    GraphTraversal::default().is_reachable(network, start, destination)
}

/// See [`GraphTraversal::unreachable_from`].
pub fn unreachable_from<T>(graph: &HashMap<T, Vec<T>>, start: &T) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    GraphTraversal::default().unreachable_from(graph, start)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
