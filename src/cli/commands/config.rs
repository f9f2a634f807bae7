//! Config command implementation.
//!
//! The `hubslot config` command shows the effective configuration.

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{HubslotError, Result};
use crate::ui::UserInterface;

use super::context::{report_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    context: CommandContext,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(context: CommandContext, args: ConfigArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(ui) {
            Ok(config) => config,
            Err(e) => return report_failure(ui, e),
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| HubslotError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let sources: Vec<String> = match self.context.config_override() {
            Some(path) => vec![path.display().to_string()],
            None => ConfigPaths::discover(self.context.project_root())
                .all_existing()
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        };
        if sources.is_empty() {
            ui.message("# defaults (no config files found)");
        } else {
            for source in &sources {
                ui.message(&format!("# {}", source));
            }
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| HubslotError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}
