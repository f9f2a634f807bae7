//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Slot commands share config loading
//! and failure reporting through [`CommandContext`].

pub mod completions;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod list;
pub mod path;
pub mod show;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
