//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::slots::{ResolveOptions, DEFAULT_PROJECTS_DIR, DEFAULT_REGISTRY_FILE};

/// Root configuration structure for `.hubslot/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubslotConfig {
    /// Where programs and the registry live
    pub layout: LayoutConfig,

    /// Default resolution options
    pub resolve: ResolveOptions,

    /// Global settings
    pub settings: Settings,
}

/// On-disk layout of the hub's file system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory holding program directories (relative to the project root)
    pub projects_dir: PathBuf,

    /// Registry file name inside `projects_dir`
    pub registry_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from(DEFAULT_PROJECTS_DIR),
            registry_file: DEFAULT_REGISTRY_FILE.to_string(),
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity as written in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::Extension;

    #[test]
    fn empty_mapping_uses_defaults() {
        let config: HubslotConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, HubslotConfig::default());
        assert_eq!(config.layout.projects_dir, PathBuf::from("projects"));
        assert_eq!(config.layout.registry_file, ".slots");
        assert_eq!(config.settings.default_output, OutputMode::Normal);
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
layout:
  projects_dir: flash/projects
  registry_file: slots.json
resolve:
  extension: .mpy
  do_check: true
  check_word: "3."
settings:
  default_output: quiet
"#;
        let config: HubslotConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.layout.projects_dir, PathBuf::from("flash/projects"));
        assert_eq!(config.layout.registry_file, "slots.json");
        assert_eq!(config.resolve.extension, Extension::Compiled);
        assert!(config.resolve.do_check);
        assert_eq!(config.resolve.check_word, "3.");
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
    }

    #[test]
    fn partial_resolve_section_keeps_other_defaults() {
        let config: HubslotConfig =
            serde_yaml::from_str("resolve:\n  check_word: hub\n").unwrap();
        assert_eq!(config.resolve.extension, Extension::Source);
        assert!(!config.resolve.do_check);
        assert_eq!(config.resolve.check_word, "hub");
    }

    #[test]
    fn rejects_unknown_extension() {
        let result: Result<HubslotConfig, _> = serde_yaml::from_str("resolve:\n  extension: .js\n");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_defaults() {
        let config = HubslotConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains(".py"));
        assert!(yaml.contains("default_output: normal"));
    }
}
