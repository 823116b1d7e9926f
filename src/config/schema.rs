//! Configuration data structures for graphwalk.
//!
//! Defines the YAML/JSON config format: logging and traversal knobs. Every
//! field has a default so partial files are valid.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration for graphwalk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphWalkConfig {
    /// Config format version (currently "1.0").
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub traversal: TraversalConfig,
}

impl Default for GraphWalkConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            traversal: TraversalConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// LoggingConfig
// ---------------------------------------------------------------------------

/// Settings for the `tracing` subscriber installed by
/// [`init_logging`](crate::observability::init_logging).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `graphwalk=debug`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Include the event target (module path) in each line.
    #[serde(default = "default_true")]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            with_target: true,
        }
    }
}

// ---------------------------------------------------------------------------
// TraversalConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Emit a `trace!` event for every visited node.
    #[serde(default)]
    pub trace_visits: bool,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_version() -> String {
    "1.0".to_string()
}

pub(crate) fn default_filter() -> String {
    "graphwalk=info".to_string()
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
