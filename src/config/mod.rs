//! Configuration loading.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. a YAML or JSON file (JSON when the extension is `.json`)
//! 3. the `GRAPHWALK_LOG` environment variable, overriding `logging.filter`

pub mod schema;

use std::path::{Path, PathBuf};

pub use schema::{GraphWalkConfig, LoggingConfig, TraversalConfig};

use crate::error::Result;

/// Environment variable that overrides the logging filter.
pub const LOG_ENV_VAR: &str = "GRAPHWALK_LOG";

/// `<platform config dir>/graphwalk/config.yaml`, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "graphwalk")
        .map(|dirs| dirs.config_dir().join("config.yaml"))
}

/// Parse a config file. The format is chosen by extension.
pub fn parse_config_file(path: &Path) -> Result<GraphWalkConfig> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&text)?)
    } else if text.trim().is_empty() {
        Ok(GraphWalkConfig::default())
    } else {
        Ok(serde_yaml::from_str(&text)?)
    }
}

/// Load configuration from `path` (or defaults when it does not exist) and
/// apply environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<GraphWalkConfig> {
    let mut config = match path {
        Some(path) if path.exists() => parse_config_file(path)?,
        Some(path) => {
            tracing::debug!("config file {} not found, using defaults", path.display());
            GraphWalkConfig::default()
        }
        None => GraphWalkConfig::default(),
    };

    apply_env_overrides(&mut config, std::env::var(LOG_ENV_VAR).ok());
    Ok(config)
}

fn apply_env_overrides(config: &mut GraphWalkConfig, log_filter: Option<String>) {
    if let Some(filter) = log_filter.filter(|f| !f.trim().is_empty()) {
        config.logging.filter = filter;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
