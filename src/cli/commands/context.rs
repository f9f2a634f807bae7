//! Shared setup for slot commands.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::config::{load_config, validate, HubslotConfig};
use crate::error::{ErrorKind, HubslotError, Result};
use crate::slots::{ResolveOptions, SlotResolver};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::CommandResult;

/// Project root and config source for a command run.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context for the given project root.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Explicit config file, if one was given.
    pub fn config_override(&self) -> Option<&Path> {
        self.config_override.as_deref()
    }

    /// Load and validate configuration, showing warnings.
    ///
    /// The config's `default_output` applies when no CLI flag changed the
    /// output mode.
    pub fn load_config(&self, ui: &mut dyn UserInterface) -> Result<HubslotConfig> {
        let config = load_config(&self.project_root, self.config_override())?;

        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        for warning in validate(&config)? {
            ui.warning(&warning.message);
        }

        Ok(config)
    }

    /// Load config and build the resolver and options for a slot command.
    pub fn prepare(
        &self,
        ui: &mut dyn UserInterface,
        args: &ResolveArgs,
    ) -> Result<(SlotResolver, ResolveOptions)> {
        let config = self.load_config(ui)?;
        let options = args.apply(config.resolve.clone())?;
        Ok((config.resolver(&self.project_root), options))
    }

    /// Display a path relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Report an expected failure through the UI.
///
/// Errors of kind [`ErrorKind::Other`] are unexpected and passed back up.
pub fn report_failure(ui: &mut dyn UserInterface, err: HubslotError) -> Result<CommandResult> {
    if err.kind() == ErrorKind::Other {
        return Err(err);
    }

    ui.error(&err.to_string());
    Ok(CommandResult::failure(err.exit_code()))
}
