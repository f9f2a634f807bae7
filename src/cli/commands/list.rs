//! List command implementation.
//!
//! The `hubslot list` command lists occupied slots. Slots whose program is
//! missing or fails the format check are left out; in verbose mode they are
//! named with the reason.

use std::collections::BTreeMap;

use crate::cli::args::ListArgs;
use crate::error::{HubslotError, Result};
use crate::slots::{CandidateStatus, Slot};
use crate::ui::theme::HubslotTheme;
use crate::ui::{should_use_colors, Table, UserInterface};

use super::context::{report_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (resolver, options) = match self.context.prepare(ui, &self.args.resolve) {
            Ok(prepared) => prepared,
            Err(e) => return report_failure(ui, e),
        };

        let registry = match resolver.load_registry() {
            Ok(registry) => registry,
            Err(e) => return report_failure(ui, e),
        };
        let checked = resolver.check_registry(&registry, &options);
        let resolved: BTreeMap<Slot, _> = checked
            .iter()
            .filter(|(_, candidate)| candidate.status.is_ready())
            .map(|(slot, candidate)| (*slot, &candidate.path))
            .collect();

        if self.args.json {
            let by_slot: BTreeMap<String, String> = resolved
                .iter()
                .map(|(slot, path)| (slot.to_string(), self.context.display_path(path)))
                .collect();
            let json = serde_json::to_string_pretty(&by_slot)
                .map_err(|e| HubslotError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if resolved.is_empty() {
            ui.message(&format!(
                "No occupied slots with {} programs.",
                options.extension
            ));
        } else {
            let mut table = Table::new(&["Slot", "Id", "Name", "Path"]);
            for (slot, path) in &resolved {
                let record = registry.get(*slot);
                table.add_row([
                    slot.to_string(),
                    record.map(|r| r.id.to_string()).unwrap_or_default(),
                    record
                        .and_then(|r| r.name())
                        .unwrap_or_default()
                        .to_string(),
                    self.context.display_path(path),
                ]);
            }
            ui.message(&table.render());
        }

        if ui.output_mode().shows_detail() {
            let theme = if should_use_colors() {
                HubslotTheme::new()
            } else {
                HubslotTheme::plain()
            };
            for (slot, candidate) in &checked {
                let reason = match &candidate.status {
                    CandidateStatus::Ready => continue,
                    CandidateStatus::Unavailable { reason } => reason.clone(),
                    CandidateStatus::FormatMismatch { found } => {
                        format!("first word is '{}'", found)
                    }
                };
                ui.message(&format!(
                    "  {} {} {} {}",
                    theme.dim.apply_to("skipped slot"),
                    theme.highlight.apply_to(slot),
                    theme.path.apply_to(self.context.display_path(&candidate.path)),
                    theme.dim.apply_to(format!("({})", reason)),
                ));
            }
        }

        ui.success(&format!(
            "{} of {} registered slots available",
            resolved.len(),
            registry.len()
        ));

        Ok(CommandResult::success())
    }
}
