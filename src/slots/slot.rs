//! Slot numbers and program file extensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HubslotError, Result};

/// Lowest slot number on the hub.
pub const MIN_SLOT: u8 = 0;

/// Highest slot number on the hub.
pub const MAX_SLOT: u8 = 19;

/// A validated slot number in `MIN_SLOT..=MAX_SLOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// Validate a raw slot number.
    pub fn new(slot: i64) -> Result<Self> {
        if (i64::from(MIN_SLOT)..=i64::from(MAX_SLOT)).contains(&slot) {
            Ok(Self(slot as u8))
        } else {
            Err(HubslotError::InvalidSlot { slot })
        }
    }

    /// The slot number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// All slots in ascending order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (MIN_SLOT..=MAX_SLOT).map(Slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Slot {
    type Error = HubslotError;

    fn try_from(slot: i64) -> Result<Self> {
        Self::new(slot)
    }
}

/// Program file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Extension {
    /// Python source (`.py`).
    #[default]
    Source,
    /// Precompiled module (`.mpy`).
    Compiled,
}

impl Extension {
    /// The extension including its leading dot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => ".py",
            Self::Compiled => ".mpy",
        }
    }

    /// Whether files with this extension are readable as text.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Source)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = HubslotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix('.').unwrap_or(s) {
            "py" => Ok(Self::Source),
            "mpy" => Ok(Self::Compiled),
            _ => Err(HubslotError::InvalidExtension {
                extension: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Extension {
    type Error = HubslotError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Extension> for String {
    fn from(ext: Extension) -> Self {
        ext.as_str().to_string()
    }
}
