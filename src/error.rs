//! Error types for hubslot operations.
//!
//! This module defines [`HubslotError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Single-slot resolution surfaces every failure as a distinct variant
//! - Bulk resolution only fails when the registry itself is unusable
//! - [`HubslotError::kind`] groups variants so callers (and the CLI exit
//!   codes) can tell "bad input" from "nothing there" from "failed check"

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`HubslotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a slot or extension outside the allowed set.
    InvalidArgument,
    /// The slot, its program file, or the registry does not exist.
    NotFound,
    /// The program file exists but its first token did not match.
    FormatMismatch,
    /// The registry file exists but could not be parsed.
    Registry,
    /// Configuration could not be loaded or is invalid.
    Config,
    /// Anything else (I/O, wrapped errors).
    Other,
}

/// Core error type for hubslot operations.
#[derive(Debug, Error)]
pub enum HubslotError {
    /// Slot number outside the hub's range.
    #[error("Slot {slot} is not in the range 0-19 (both inclusive)")]
    InvalidSlot { slot: i64 },

    /// File extension not in the allowed set.
    #[error("Extension '{extension}' is not one of the valid extensions: .py, .mpy")]
    InvalidExtension { extension: String },

    /// No registry entry for the slot.
    #[error("Slot {slot} is empty. Try to upload the program again, or try another slot")]
    SlotEmpty { slot: u8 },

    /// Registry entry exists but the program file cannot be opened.
    #[error("Program for slot {slot} is unavailable at {path}: {message}")]
    PathUnavailable {
        slot: u8,
        path: PathBuf,
        message: String,
    },

    /// First-token format check failed.
    #[error("File format check failed for {path}: expected '{expected}', found '{found}'")]
    FormatCheckFailed {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// Registry file not found at expected location.
    #[error("Slot registry not found: {path}")]
    RegistryNotFound { path: PathBuf },

    /// Registry file could not be parsed.
    #[error("Failed to parse slot registry at {path}: {message}")]
    RegistryParseError { path: PathBuf, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HubslotError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSlot { .. } | Self::InvalidExtension { .. } => ErrorKind::InvalidArgument,
            Self::SlotEmpty { .. } | Self::PathUnavailable { .. } | Self::RegistryNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::FormatCheckFailed { .. } => ErrorKind::FormatMismatch,
            Self::RegistryParseError { .. } => ErrorKind::Registry,
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::ConfigValidationError { .. } => ErrorKind::Config,
            Self::Io(_) | Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidArgument => 2,
            _ => 1,
        }
    }
}

/// Result type alias for hubslot operations.
pub type Result<T> = std::result::Result<T, HubslotError>;
