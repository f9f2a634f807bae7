//! Configuration file discovery and loading.
//!
//! Every config file is optional. Layers are merged in this order (later
//! overrides earlier):
//! 1. User global config (`~/.hubslot/config.yml`)
//! 2. Project config (`.hubslot/config.yml`)
//! 3. Local overrides (`.hubslot/config.local.yml`)

use crate::config::merger::merge_configs;
use crate::config::schema::HubslotConfig;
use crate::error::{HubslotError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project (and per-user) config directory.
pub const CONFIG_DIR: &str = ".hubslot";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.hubslot/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .hubslot/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .hubslot/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(CONFIG_DIR).join("config.yml"))),
            ..Self::discover_project(project_root)
        }
    }

    /// Discover only the project-level config files.
    pub fn discover_project(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            user_global: None,
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Load a single config file and parse it into [`HubslotConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<HubslotConfig> {
    let value = load_config_value(path)?;
    from_value(merge_configs(&[value]), path)
}

/// Parse YAML content into [`HubslotConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<HubslotConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| HubslotError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    from_value(merge_configs(&[value]), source_path)
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HubslotError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HubslotError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| HubslotError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the discovered config layers.
///
/// Returns the defaults when no layer exists.
pub fn load_merged(paths: &ConfigPaths, project_root: &Path) -> Result<HubslotConfig> {
    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    from_value(
        merge_configs(&layers),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config layers.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<HubslotConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged(&ConfigPaths::discover(project_root), project_root),
    }
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<HubslotConfig> {
    serde_yaml::from_value(value).map_err(|e| HubslotError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
