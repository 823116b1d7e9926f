//! graphwalk — depth-first reachability utilities.
//!
//! Walks vertex graphs, airport/flight networks and adjacency maps with one
//! iterative depth-first search, and answers reachability questions on top
//! of it: short words, the longest word, self-looping vertices, whether one
//! airport reaches another, and which map keys a start value cannot reach.

pub mod config;
pub mod error;
pub mod graph;
pub mod observability;

pub use error::{GraphError, Result};
pub use graph::adjacency_map::AdjacencyMap;
pub use graph::airport::{Airport, AirportId, AirportNetwork};
pub use graph::queries::{
    filter_short_reachable, find_self_looping_reachable, is_reachable, longest_reachable_word,
    print_self_looping_reachable, print_short_reachable, unreachable_from, write_self_looping_reachable,
    write_short_reachable, GraphTraversal,
};
pub use graph::traversal::{reachable, Adjacency, DepthFirst};
pub use graph::vertex::{Vertex, VertexGraph, VertexId};
