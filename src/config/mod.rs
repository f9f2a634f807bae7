//! Configuration loading, merging, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use hubslot::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".hubslot");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "resolve:\n  check_word: \"3.\"\n").unwrap();
//!
//! let config = load_config(temp.path(), Some(&dir.join("config.yml"))).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.resolve.check_word, "3.");
//! ```
//!
//! # Configuration File Locations
//!
//! All files are optional and merged in this order:
//! 1. User global config (`~/.hubslot/config.yml`)
//! 2. Project config (`.hubslot/config.yml`)
//! 3. Local overrides (`.hubslot/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

use std::path::Path;

use crate::slots::SlotResolver;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged, parse_config, ConfigPaths,
    CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{HubslotConfig, LayoutConfig, OutputMode, Settings};
pub use validator::{validate, validate_config, Severity, ValidationError};

impl HubslotConfig {
    /// Build a resolver for this layout rooted at `project_root`.
    pub fn resolver(&self, project_root: &Path) -> SlotResolver {
        SlotResolver::with_layout(
            project_root.join(&self.layout.projects_dir),
            self.layout.registry_file.clone(),
        )
    }
}
