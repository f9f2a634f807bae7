//! Show command implementation.
//!
//! The `hubslot show <SLOT>` command prints the program stored in a slot,
//! line by line.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::{report_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    context: CommandContext,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: CommandContext, args: ShowArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (resolver, options) = match self.context.prepare(ui, &self.args.resolve) {
            Ok(prepared) => prepared,
            Err(e) => return report_failure(ui, e),
        };

        if !options.extension.is_text() {
            ui.error(&format!(
                "Compiled modules ({}) cannot be shown as text",
                options.extension
            ));
            return Ok(CommandResult::failure(2));
        }

        let path = match resolver.resolve_one(self.args.slot, &options) {
            Ok(path) => path,
            Err(e) => return report_failure(ui, e),
        };
        tracing::debug!("Showing {}", path.display());

        let reader = BufReader::new(File::open(&path)?);
        let skip = usize::from(self.args.skip_first_line);
        for line in reader.lines().skip(skip) {
            ui.message(&line?);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ResolveArgs;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_hub() -> TempDir {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        fs::create_dir_all(projects.join("pi")).unwrap();
        fs::write(projects.join(".slots"), r#"{"0": {"id": "pi"}}"#).unwrap();
        fs::write(
            projects.join("pi").join("__init__.py"),
            "3.\n1415926535\n8979323846\n",
        )
        .unwrap();
        temp
    }

    fn run(root: &Path, args: ShowArgs) -> (CommandResult, MockUI) {
        let hub_config = root.join("hub.yml");
        fs::write(&hub_config, "").unwrap();
        let cmd = ShowCommand::new(CommandContext::new(root, Some(hub_config)), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn prints_every_line() {
        let temp = setup_hub();
        let (result, ui) = run(temp.path(), ShowArgs::default());

        assert!(result.success);
        assert_eq!(ui.messages(), ["3.", "1415926535", "8979323846"]);
    }

    #[test]
    fn skips_first_line() {
        let temp = setup_hub();
        let (_, ui) = run(
            temp.path(),
            ShowArgs {
                skip_first_line: true,
                ..Default::default()
            },
        );

        assert_eq!(ui.messages(), ["1415926535", "8979323846"]);
    }

    #[test]
    fn empty_slot_prints_nothing() {
        let temp = setup_hub();
        let (result, ui) = run(
            temp.path(),
            ShowArgs {
                slot: 1,
                ..Default::default()
            },
        );

        assert!(!result.success);
        assert!(ui.messages().is_empty());
        assert!(ui.has_error_containing("Slot 1 is empty"));
    }

    #[test]
    fn refuses_compiled_modules() {
        let temp = setup_hub();
        let (result, ui) = run(
            temp.path(),
            ShowArgs {
                resolve: ResolveArgs {
                    extension: Some(".mpy".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        );

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error_containing("Compiled modules"));
    }
}
