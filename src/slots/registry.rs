//! Slot registry loading.
//!
//! The hub keeps a registry file (`projects/.slots`) whose first line is a
//! JSON object mapping slot numbers to program records:
//!
//! ```text
//! {"0": {"id": 17493, "name": "Drive"}, "3": {"id": "pi_digits"}}
//! ```
//!
//! Only the first line is read. Each record must carry an `id`, which names
//! the program's directory under `projects/`. An id is a single path
//! component: absolute ids, separators and `.`/`..` are rejected.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Component, Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{HubslotError, Result};

use super::slot::Slot;

/// On-hub storage identifier of a program.
///
/// The hub writes numeric ids; hand-written registries often use strings.
/// Both are used verbatim when building paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl ProgramId {
    /// Whether the id names exactly one directory below the projects dir.
    pub fn is_single_component(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(s) => {
                let mut components = Path::new(s).components();
                !s.contains(|c: char| c == '/' || c == '\\')
                    && matches!(components.next(), Some(Component::Normal(_)))
                    && components.next().is_none()
            }
        }
    }
}

/// A registry entry for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Storage identifier used in the program path.
    pub id: ProgramId,

    /// Remaining fields written by the hub (name, type, size, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SlotRecord {
    /// Display name of the program, if the hub recorded one.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// Parsed slot registry, ordered by slot number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotRegistry {
    entries: BTreeMap<Slot, SlotRecord>,
}

impl SlotRegistry {
    /// Load the registry from its first line.
    ///
    /// # Errors
    ///
    /// Returns `RegistryNotFound` if the file doesn't exist.
    /// Returns `RegistryParseError` if the first line is not a valid registry.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HubslotError::RegistryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                HubslotError::Io(e)
            }
        })?;

        let mut first_line = String::new();
        BufReader::new(file)
            .read_line(&mut first_line)
            .map_err(|e| parse_error(path, e.to_string()))?;

        tracing::debug!("Loaded slot registry from {}", path.display());
        Self::parse(&first_line, path)
    }

    /// Parse a registry line.
    ///
    /// `source_path` is only used for error reporting.
    pub fn parse(line: &str, source_path: &Path) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(parse_error(source_path, "registry is empty"));
        }

        let raw: RawEntries =
            serde_json::from_str(line).map_err(|e| parse_error(source_path, e.to_string()))?;

        let mut entries = BTreeMap::new();
        for (key, value) in raw.0 {
            let number: i64 = key.trim().parse().map_err(|_| {
                parse_error(source_path, format!("slot key '{}' is not an integer", key))
            })?;
            let slot = Slot::new(number)
                .map_err(|e| parse_error(source_path, format!("slot key '{}': {}", key, e)))?;
            let record: SlotRecord = serde_json::from_value(value)
                .map_err(|e| parse_error(source_path, format!("slot {}: {}", slot, e)))?;
            if !record.id.is_single_component() {
                return Err(parse_error(
                    source_path,
                    format!("slot {}: id '{}' is not a plain directory name", slot, record.id),
                ));
            }

            if entries.insert(slot, record).is_some() {
                return Err(parse_error(
                    source_path,
                    format!("slot {} is listed more than once", slot),
                ));
            }
        }

        Ok(Self { entries })
    }

    /// Look up a slot.
    pub fn get(&self, slot: Slot) -> Option<&SlotRecord> {
        self.entries.get(&slot)
    }

    /// Iterate entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &SlotRecord)> {
        self.entries.iter().map(|(slot, record)| (*slot, record))
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Top-level registry object, keeping every key in file order.
///
/// `serde_json::Map` keeps only the last of two identical keys, which would
/// hide a slot listed twice.
struct RawEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping slot numbers to program records")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RawEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.push((key, value));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

fn parse_error(path: &Path, message: impl Into<String>) -> HubslotError {
    HubslotError::RegistryParseError {
        path: PathBuf::from(path),
        message: message.into(),
    }
}
