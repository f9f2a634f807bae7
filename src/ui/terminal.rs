//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, HubslotTheme, NonInteractiveUI, OutputMode, UserInterface};

/// Terminal UI implementation with colored status lines.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
    theme: HubslotTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HubslotTheme::new()
        } else {
            HubslotTheme::plain()
        };

        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_results() {
            writeln!(self.stdout, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_results() {
            writeln!(self.stderr, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.theme.format_error(msg)).ok();
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the UI for the current environment.
///
/// Falls back to [`NonInteractiveUI`] when stdout is not a terminal.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
