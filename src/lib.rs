//! hubslot - Resolve robotics hub program slots to program files.
//!
//! A programmable hub stores user programs in numbered slots (0-19). The
//! registry file `projects/.slots` maps each occupied slot to a storage id,
//! and the program lives at `projects/<id>/__init__.py` (or `.mpy` when
//! precompiled). This crate resolves slot numbers to those paths, optionally
//! checks the program's first word, and ships a small CLI around it.
//!
//! # Modules
//!
//! - [`slots`] - Registry parsing and slot resolution
//! - [`config`] - Configuration loading, merging, and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use hubslot::slots::{ResolveOptions, SlotResolver};
//! use hubslot::error::ErrorKind;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let resolver = SlotResolver::new(temp.path());
//!
//! // Out-of-range slots are rejected before the registry is read
//! let err = resolver.resolve_one(42, &ResolveOptions::default()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod slots;
pub mod ui;

pub use error::{ErrorKind, HubslotError, Result};
