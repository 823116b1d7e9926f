//! Error type for graph construction and configuration loading.
//!
//! Traversals themselves never fail: an absent start node yields a defined
//! degenerate value. Errors only arise when building graphs from handles or
//! documents, and when reading configuration.

use thiserror::Error;

use crate::graph::airport::AirportId;
use crate::graph::vertex::VertexId;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {0} does not belong to this graph")]
    UnknownVertex(VertexId),

    #[error("airport {0} does not belong to this network")]
    UnknownAirport(AirportId),

    #[error("unknown label `{0}`")]
    UnknownLabel(String),

    #[error("label `{0}` is defined more than once")]
    DuplicateLabel(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
