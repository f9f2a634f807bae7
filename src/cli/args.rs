//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::error::Result;
use crate::slots::ResolveOptions;

/// hubslot - Resolve hub program slots to program files.
#[derive(Debug, Parser)]
#[command(name = "hubslot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .hubslot/config.yml discovery)
    #[arg(short, long, global = true, env = "HUBSLOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the hub file system root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the program path stored in a slot
    Path(PathArgs),

    /// List occupied slots (default if no command specified)
    List(ListArgs),

    /// Print the program stored in a slot
    Show(ShowArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Resolution flags shared by the slot commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Program file extension: .py or .mpy
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Require the program's first word to equal WORD
    #[arg(long, value_name = "WORD", conflicts_with = "no_check")]
    pub check: Option<String>,

    /// Skip the format check even if configured
    #[arg(long)]
    pub no_check: bool,
}

impl ResolveArgs {
    /// Layer these flags over the configured options.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExtension` if `--ext` is not `.py` or `.mpy`.
    pub fn apply(&self, mut options: ResolveOptions) -> Result<ResolveOptions> {
        if let Some(ext) = &self.extension {
            options = options.with_extension(ext.parse()?);
        }
        if let Some(word) = &self.check {
            options = options.with_check(word.clone());
        }
        if self.no_check {
            options = options.without_check();
        }
        Ok(options)
    }
}

/// Arguments for the `path` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PathArgs {
    /// Slot number (0-19)
    #[arg(allow_negative_numbers = true)]
    pub slot: i64,

    /// Print the absolute path instead of one relative to the project root
    #[arg(long)]
    pub absolute: bool,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Slot number (0-19)
    #[arg(allow_negative_numbers = true)]
    pub slot: i64,

    /// Skip the program's first line (e.g. a format marker)
    #[arg(long)]
    pub skip_first_line: bool,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
