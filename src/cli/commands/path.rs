//! Path command implementation.
//!
//! The `hubslot path <SLOT>` command prints the program path stored in a slot.

use crate::cli::args::PathArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::{report_failure, CommandContext};
use super::dispatcher::{Command, CommandResult};

/// The path command implementation.
pub struct PathCommand {
    context: CommandContext,
    args: PathArgs,
}

impl PathCommand {
    /// Create a new path command.
    pub fn new(context: CommandContext, args: PathArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PathArgs {
        &self.args
    }
}

impl Command for PathCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (resolver, options) = match self.context.prepare(ui, &self.args.resolve) {
            Ok(prepared) => prepared,
            Err(e) => return report_failure(ui, e),
        };

        let path = match resolver.resolve_one(self.args.slot, &options) {
            Ok(path) => path,
            Err(e) => return report_failure(ui, e),
        };

        if self.args.absolute {
            ui.message(&path.display().to_string());
        } else {
            ui.message(&self.context.display_path(&path));
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
        fs::create_dir_all(projects.join("X")).unwrap();
        fs::create_dir_all(projects.join("Y")).unwrap();
        fs::write(
            projects.join(".slots"),
            r#"{"3": {"id": "X"}, "5": {"id": "Y"}}"#,
        )
        .unwrap();
        fs::write(projects.join("X").join("__init__.py"), "3.14159\n").unwrap();
        fs::write(projects.join("Y").join("__init__.py"), "hello world\n").unwrap();
        temp
    }

    fn run(root: &Path, args: PathArgs) -> (CommandResult, MockUI) {
        let hub_config = root.join("hub.yml");
        fs::write(&hub_config, "").unwrap();
        let cmd = PathCommand::new(CommandContext::new(root, Some(hub_config)), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn prints_relative_path() {
        let temp = setup_hub();
        let (result, ui) = run(
            temp.path(),
            PathArgs {
                slot: 3,
                ..Default::default()
            },
        );

        assert!(result.success);
        assert_eq!(ui.messages(), ["projects/X/__init__.py"]);
    }

    #[test]
    fn prints_absolute_path() {
        let temp = setup_hub();
        let (_, ui) = run(
            temp.path(),
            PathArgs {
                slot: 3,
                absolute: true,
                ..Default::default()
            },
        );

        let expected = temp.path().join("projects/X/__init__.py");
        assert_eq!(ui.messages(), [expected.display().to_string()]);
    }

    #[test]
    fn out_of_range_slot_exits_with_two() {
        let temp = setup_hub();
        let (result, ui) = run(
            temp.path(),
            PathArgs {
                slot: 20,
                ..Default::default()
            },
        );

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error_containing("0-19"));
    }

    #[test]
    fn empty_slot_is_reported() {
        let temp = setup_hub();
        let (result, ui) = run(
            temp.path(),
            PathArgs {
                slot: 4,
                ..Default::default()
            },
        );

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error_containing("Slot 4 is empty"));
    }

    #[test]
    fn failed_check_is_reported() {
        let temp = setup_hub();
        let (result, ui) = run(
            temp.path(),
            PathArgs {
                slot: 5,
                resolve: ResolveArgs {
                    check: Some("3.14159".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        );

        assert!(!result.success);
        assert!(ui.has_error_containing("format check failed"));
    }

    #[test]
    fn bad_extension_exits_with_two() {
        let temp = setup_hub();
        let (result, ui) = run(
            temp.path(),
            PathArgs {
                slot: 3,
                resolve: ResolveArgs {
                    extension: Some(".txt".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        );

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error_containing(".txt"));
    }
}
