//! Serializable graph descriptions.
//!
//! Graphs are written by label so that documents stay readable:
//!
//! ```yaml
//! vertices:
//!   - label: a
//!     value: apple
//!     neighbors: [b]
//!   - label: b
//!     value: banana
//! ```
//!
//! [`VertexGraphDocument::build`] resolves labels into handles and rejects
//! duplicate or dangling labels. Map-shaped graphs need no document type;
//! they deserialize directly as `HashMap<String, Vec<String>>`.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::airport::{AirportId, AirportNetwork};
use crate::graph::vertex::{VertexGraph, VertexId};

// ---------------------------------------------------------------------------
// Vertex graphs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSpec<T> {
    pub label: String,
    pub value: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub neighbors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexGraphDocument<T> {
    #[serde(default = "Vec::new")]
    pub vertices: Vec<VertexSpec<T>>,
}

/// A built graph together with the label each handle was declared under.
#[derive(Debug, Clone)]
pub struct LabeledGraph<T> {
    pub graph: VertexGraph<T>,
    pub labels: HashMap<String, VertexId>,
}

impl<T> LabeledGraph<T> {
    pub fn id(&self, label: &str) -> Option<VertexId> {
        self.labels.get(label).copied()
    }
}

impl<T: DeserializeOwned> VertexGraphDocument<T> {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T> VertexGraphDocument<T> {
    /// Build the graph. Neighbor order is preserved.
    pub fn build(self) -> Result<LabeledGraph<T>> {
        let mut graph = VertexGraph::new();
        let mut labels: HashMap<String, VertexId> = HashMap::with_capacity(self.vertices.len());
        let mut pending = Vec::with_capacity(self.vertices.len());

        for spec in self.vertices {
            if labels.contains_key(&spec.label) {
                return Err(GraphError::DuplicateLabel(spec.label));
            }
            let id = graph.add_vertex(spec.value);
            labels.insert(spec.label, id);
            pending.push((id, spec.neighbors));
        }

        for (from, neighbors) in pending {
            for label in neighbors {
                let to = *labels
                    .get(&label)
                    .ok_or_else(|| GraphError::UnknownLabel(label.clone()))?;
                graph.add_edge(from, to)?;
            }
        }

        tracing::debug!(vertices = graph.len(), "built vertex graph from document");
        Ok(LabeledGraph { graph, labels })
    }
}

// ---------------------------------------------------------------------------
// Airport networks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportSpec {
    pub code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportNetworkDocument {
    #[serde(default)]
    pub airports: Vec<AirportSpec>,
}

impl AirportNetworkDocument {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the network. Airport codes act as labels and must be unique.
    pub fn build(self) -> Result<AirportNetwork> {
        let mut network = AirportNetwork::new();
        let mut pending: Vec<(AirportId, Vec<String>)> = Vec::with_capacity(self.airports.len());

        for spec in self.airports {
            if network.find(&spec.code).is_some() {
                return Err(GraphError::DuplicateLabel(spec.code));
            }
            let id = network.add_airport(spec.code);
            pending.push((id, spec.flights));
        }

        for (from, flights) in pending {
            for code in flights {
                let to = network
                    .find(&code)
                    .ok_or(GraphError::UnknownLabel(code))?;
                network.add_flight(from, to)?;
            }
        }

        tracing::debug!(airports = network.len(), "built airport network from document");
        Ok(network)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
