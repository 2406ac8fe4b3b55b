use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dump::SortOrder;
use crate::graph::DEFAULT_CAPACITY;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphgenConfig {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Slots preallocated at startup and by `new`.
    #[serde(default = "default_capacity")]
    pub default_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_sort")]
    pub sort: SortOrder,
    #[serde(default = "default_true")]
    pub mark_dual: bool,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            mark_dual: default_true(),
            color: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_true")]
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_true(),
        }
    }
}

/// Location of the per-user config file, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("graphgen/config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the per-user file is used when
/// present, otherwise built-in defaults.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed, or if the parsed
/// values are out of range.
pub fn load_config(explicit: Option<&Path>) -> Result<GraphgenConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => Ok(GraphgenConfig::default()),
    }
}

/// Read and parse one config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or holds
/// out-of-range values.
pub fn load_config_file(path: &Path) -> Result<GraphgenConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse config text and validate it.
///
/// # Errors
///
/// Returns an error on invalid TOML or an unusable `default_capacity`.
pub fn parse_config(content: &str) -> Result<GraphgenConfig> {
    let config: GraphgenConfig = toml::from_str(content)?;
    let capacity = config.graph.default_capacity;
    if capacity == 0 || capacity > crate::index::MAX_VERTICES {
        anyhow::bail!(
            "graph.default_capacity must be between 1 and {}, got {capacity}",
            crate::index::MAX_VERTICES
        );
    }
    Ok(config)
}

const fn default_true() -> bool {
    true
}

const fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

const fn default_sort() -> SortOrder {
    SortOrder::Ascending
}

fn default_prompt() -> String {
    "> ".to_string()
}
