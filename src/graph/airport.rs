//! Airport/flight network.
//!
//! Airports are identified by [`AirportId`] handles, flights are directed
//! edges stored on the departure airport. A handle is only accepted by the
//! network that issued it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::next_arena_tag;
use crate::graph::queries;
use crate::graph::traversal::Adjacency;

/// Handle to an airport inside the [`AirportNetwork`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AirportId {
    arena: u32,
    index: usize,
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "airport#{}", self.index)
    }
}

#[derive(Debug, Clone)]
pub struct Airport {
    pub code: String,
    outbound: Vec<AirportId>,
}

impl Airport {
    /// Airports reachable with a single flight, in the order flights were added.
    pub fn outbound_flights(&self) -> &[AirportId] {
        &self.outbound
    }
}

#[derive(Debug, Clone)]
pub struct AirportNetwork {
    arena: u32,
    airports: Vec<Airport>,
    by_code: HashMap<String, AirportId>,
}

impl Default for AirportNetwork {
    fn default() -> Self {
        Self {
            arena: next_arena_tag(),
            airports: Vec::new(),
            by_code: HashMap::new(),
        }
    }
}

impl AirportNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport. Codes are not required to be unique; [`find`]
    /// returns the most recently added airport with a given code.
    ///
    /// [`find`]: AirportNetwork::find
    pub fn add_airport(&mut self, code: impl Into<String>) -> AirportId {
        let code = code.into();
        let id = AirportId {
            arena: self.arena,
            index: self.airports.len(),
        };
        self.by_code.insert(code.clone(), id);
        self.airports.push(Airport {
            code,
            outbound: Vec::new(),
        });
        id
    }

    pub fn add_flight(&mut self, from: AirportId, to: AirportId) -> Result<()> {
        if !self.contains(to) {
            return Err(GraphError::UnknownAirport(to));
        }
        if !self.contains(from) {
            return Err(GraphError::UnknownAirport(from));
        }
        self.airports[from.index].outbound.push(to);
        Ok(())
    }

    pub fn contains(&self, id: AirportId) -> bool {
        id.arena == self.arena && id.index < self.airports.len()
    }

    pub fn airport(&self, id: AirportId) -> Option<&Airport> {
        if !self.contains(id) {
            return None;
        }
        self.airports.get(id.index)
    }

    pub fn find(&self, code: &str) -> Option<AirportId> {
        self.by_code.get(code).copied()
    }

    pub fn outbound_flights(&self, id: AirportId) -> &[AirportId] {
        self.airport(id).map(Airport::outbound_flights).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// See [`GraphTraversal::is_reachable`](crate::graph::queries::GraphTraversal::is_reachable).
    pub fn can_reach(&self, start: Option<AirportId>, destination: Option<AirportId>) -> bool {
        queries::is_reachable(self, start, destination)
    }
}

impl Adjacency for AirportNetwork {
    type Node = AirportId;

    fn extend_frontier(&self, node: AirportId, frontier: &mut Vec<AirportId>) {
        frontier.extend_from_slice(self.outbound_flights(node));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
