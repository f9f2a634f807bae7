//! Command-line interface for hubslot.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ConfigArgs, ListArgs, PathArgs, ResolveArgs, ShowArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
