//! Slot path resolution.
//!
//! [`SlotResolver`] ties the registry, the path template and the candidate
//! check together:
//!
//! - [`SlotResolver::resolve_one`] is strict: every failure is returned as a
//!   distinct [`HubslotError`].
//! - [`SlotResolver::resolve_all`] is lenient: slots whose program is missing
//!   or fails the format check are left out of the result. Only an unusable
//!   registry is an error.
//!
//! The registry is read on every call; nothing is cached.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{HubslotError, Result};

use super::check::{check_candidate, CandidateStatus};
use super::options::ResolveOptions;
use super::registry::{SlotRecord, SlotRegistry};
use super::slot::{Extension, Slot};

/// Default directory holding programs and the registry.
pub const DEFAULT_PROJECTS_DIR: &str = "projects";

/// Default registry file name inside the projects directory.
pub const DEFAULT_REGISTRY_FILE: &str = ".slots";

/// A registry entry's program path together with its check outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCandidate {
    pub path: PathBuf,
    pub status: CandidateStatus,
}

/// Resolves slot numbers to program paths under a root directory.
#[derive(Debug, Clone)]
pub struct SlotResolver {
    projects_dir: PathBuf,
    registry_file: String,
}

impl SlotResolver {
    /// Create a resolver using the default layout under `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            projects_dir: root.join(DEFAULT_PROJECTS_DIR),
            registry_file: DEFAULT_REGISTRY_FILE.to_string(),
        }
    }

    /// Create a resolver with an explicit projects directory and registry name.
    pub fn with_layout(projects_dir: PathBuf, registry_file: impl Into<String>) -> Self {
        Self {
            projects_dir,
            registry_file: registry_file.into(),
        }
    }

    /// Directory holding program directories.
    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// Path of the registry file.
    pub fn registry_path(&self) -> PathBuf {
        self.projects_dir.join(&self.registry_file)
    }

    /// Read the registry fresh from disk.
    pub fn load_registry(&self) -> Result<SlotRegistry> {
        SlotRegistry::load(&self.registry_path())
    }

    /// Build the program path for a registry record.
    pub fn program_path(&self, record: &SlotRecord, extension: Extension) -> PathBuf {
        self.projects_dir
            .join(record.id.to_string())
            .join(format!("__init__{}", extension))
    }

    /// Resolve a single slot to a validated program path.
    ///
    /// # Errors
    ///
    /// - `InvalidSlot` if `slot` is outside 0-19 (checked before any I/O)
    /// - `RegistryNotFound` / `RegistryParseError` if the registry is unusable
    /// - `SlotEmpty` if the registry has no entry for the slot
    /// - `PathUnavailable` if the program file cannot be opened
    /// - `FormatCheckFailed` if the format check is enabled and fails
    pub fn resolve_one(&self, slot: i64, options: &ResolveOptions) -> Result<PathBuf> {
        let slot = Slot::new(slot)?;
        let registry = self.load_registry()?;

        let record = registry
            .get(slot)
            .ok_or(HubslotError::SlotEmpty { slot: slot.number() })?;

        let path = self.program_path(record, options.extension);
        tracing::debug!("Slot {} candidate: {}", slot, path.display());

        match check_candidate(&path, options) {
            CandidateStatus::Ready => Ok(path),
            CandidateStatus::Unavailable { reason } => Err(HubslotError::PathUnavailable {
                slot: slot.number(),
                path,
                message: reason,
            }),
            CandidateStatus::FormatMismatch { found } => Err(HubslotError::FormatCheckFailed {
                path,
                expected: options.check_word.clone(),
                found,
            }),
        }
    }

    /// Resolve every registered slot, keeping only usable programs.
    ///
    /// The result is ordered by slot number.
    ///
    /// # Errors
    ///
    /// Returns `RegistryNotFound` or `RegistryParseError` if the registry is
    /// missing or malformed. Per-slot problems never produce an error.
    pub fn resolve_all(&self, options: &ResolveOptions) -> Result<BTreeMap<Slot, PathBuf>> {
        let registry = self.load_registry()?;
        Ok(self.resolve_registry(&registry, options))
    }

    /// Resolve every entry of an already loaded registry.
    ///
    /// Entries whose program is unavailable or fails the format check are
    /// left out.
    pub fn resolve_registry(
        &self,
        registry: &SlotRegistry,
        options: &ResolveOptions,
    ) -> BTreeMap<Slot, PathBuf> {
        self.check_registry(registry, options)
            .into_iter()
            .filter_map(|(slot, candidate)| match candidate.status {
                CandidateStatus::Ready => Some((slot, candidate.path)),
                status => {
                    tracing::debug!(
                        "Leaving out slot {} ({}): {:?}",
                        slot,
                        candidate.path.display(),
                        status
                    );
                    None
                }
            })
            .collect()
    }

    /// Check every entry of a loaded registry, keeping the outcome of each.
    ///
    /// Each candidate file is opened once.
    pub fn check_registry(
        &self,
        registry: &SlotRegistry,
        options: &ResolveOptions,
    ) -> BTreeMap<Slot, SlotCandidate> {
        registry
            .iter()
            .map(|(slot, record)| {
                let path = self.program_path(record, options.extension);
                let status = check_candidate(&path, options);
                (slot, SlotCandidate { path, status })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn setup_hub(registry: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        fs::create_dir_all(&projects).unwrap();
        fs::write(projects.join(".slots"), registry).unwrap();
        temp
    }

    fn write_program(root: &Path, id: &str, file: &str, content: &str) {
        let dir = root.join("projects").join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn out_of_range_slot_rejected_without_registry() {
        let temp = TempDir::new().unwrap();
        let resolver = SlotResolver::new(temp.path());

        for slot in [-1, 20, 1000] {
            let err = resolver
                .resolve_one(slot, &ResolveOptions::default())
                .unwrap_err();
            assert!(matches!(err, HubslotError::InvalidSlot { .. }));
        }
    }

    #[test]
    fn resolves_existing_program() {
        let temp = setup_hub(r#"{"3": {"id": "X"}}"#);
        write_program(temp.path(), "X", "__init__.py", "3.\n");
        let resolver = SlotResolver::new(temp.path());

        let path = resolver.resolve_one(3, &ResolveOptions::default()).unwrap();
        assert_eq!(path, temp.path().join("projects/X/__init__.py"));
    }

    #[test]
    fn numeric_id_is_used_verbatim() {
        let temp = setup_hub(r#"{"0": {"id": 17493}}"#);
        write_program(temp.path(), "17493", "__init__.py", "print(1)\n");
        let resolver = SlotResolver::new(temp.path());

        let path = resolver.resolve_one(0, &ResolveOptions::default()).unwrap();
        assert!(path.ends_with("17493/__init__.py"));
    }

    #[test]
    fn missing_registry_entry_is_slot_empty() {
        let temp = setup_hub(r#"{"3": {"id": "X"}}"#);
        let resolver = SlotResolver::new(temp.path());

        let err = resolver.resolve_one(4, &ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, HubslotError::SlotEmpty { slot: 4 }));
    }

    #[test]
    fn wrong_extension_is_path_unavailable() {
        let temp = setup_hub(r#"{"3": {"id": "X"}}"#);
        write_program(temp.path(), "X", "__init__.mpy", "M");
        let resolver = SlotResolver::new(temp.path());

        let err = resolver.resolve_one(3, &ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, HubslotError::PathUnavailable { slot: 3, .. }));

        let compiled = ResolveOptions::default().with_extension(Extension::Compiled);
        let path = resolver.resolve_one(3, &compiled).unwrap();
        assert!(path.ends_with("X/__init__.mpy"));
    }

    #[test]
    fn format_check_compares_first_token() {
        let temp = setup_hub(r#"{"3": {"id": "X"}, "5": {"id": "Y"}}"#);
        write_program(temp.path(), "X", "__init__.py", "3. 14159\n");
        write_program(temp.path(), "Y", "__init__.py", "hello world\n");
        let resolver = SlotResolver::new(temp.path());
        let options = ResolveOptions::default().with_check("3.");

        assert!(resolver.resolve_one(3, &options).is_ok());

        let err = resolver.resolve_one(5, &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatMismatch);
    }

    #[test]
    fn resolve_all_drops_unusable_slots() {
        let temp = setup_hub(r#"{"3": {"id": "X"}, "7": {"id": "Y"}}"#);
        write_program(temp.path(), "X", "__init__.py", "3.\n");
        let resolver = SlotResolver::new(temp.path());

        let all = resolver.resolve_all(&ResolveOptions::default()).unwrap();
        let slots: Vec<u8> = all.keys().map(|s| s.number()).collect();
        assert_eq!(slots, vec![3]);
    }

    #[test]
    fn resolve_all_drops_failed_checks() {
        let temp = setup_hub(r#"{"1": {"id": "A"}, "2": {"id": "B"}}"#);
        write_program(temp.path(), "A", "__init__.py", "3.\n");
        write_program(temp.path(), "B", "__init__.py", "hello\n");
        let resolver = SlotResolver::new(temp.path());

        let all = resolver
            .resolve_all(&ResolveOptions::default().with_check("3."))
            .unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.contains_key(&Slot::new(1).unwrap()));
    }

    #[test]
    fn resolve_all_fails_only_for_registry() {
        let temp = TempDir::new().unwrap();
        let resolver = SlotResolver::new(temp.path());
        let err = resolver.resolve_all(&ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, HubslotError::RegistryNotFound { .. }));

        let temp = setup_hub("not json");
        let resolver = SlotResolver::new(temp.path());
        let err = resolver.resolve_all(&ResolveOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Registry);
    }

    #[test]
    fn check_registry_reports_every_entry() {
        let temp = setup_hub(r#"{"1": {"id": "A"}, "2": {"id": "B"}, "3": {"id": "C"}}"#);
        write_program(temp.path(), "A", "__init__.py", "3.\n");
        write_program(temp.path(), "B", "__init__.py", "hello\n");
        let resolver = SlotResolver::new(temp.path());
        let registry = resolver.load_registry().unwrap();
        let options = ResolveOptions::default().with_check("3.");

        let checked = resolver.check_registry(&registry, &options);
        let statuses: Vec<_> = checked.values().map(|c| c.status.clone()).collect();
        assert!(statuses[0].is_ready());
        assert_eq!(
            statuses[1],
            CandidateStatus::FormatMismatch {
                found: "hello".to_string()
            }
        );
        assert!(matches!(statuses[2], CandidateStatus::Unavailable { .. }));
        assert_eq!(
            checked[&Slot::new(3).unwrap()].path,
            temp.path().join("projects/C/__init__.py")
        );
    }

    #[test]
    fn absolute_id_never_escapes_projects_dir() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("__init__.py"), "3.\n").unwrap();
        let registry = serde_json::json!({ "3": { "id": outside.path() } }).to_string();
        let temp = setup_hub(&registry);
        let resolver = SlotResolver::new(temp.path());

        let err = resolver.resolve_one(3, &ResolveOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Registry);
        assert!(resolver.resolve_all(&ResolveOptions::default()).is_err());
    }

    #[test]
    fn custom_layout() {
        let temp = TempDir::new().unwrap();
        let hub = temp.path().join("hub");
        fs::create_dir_all(hub.join("p1")).unwrap();
        fs::write(hub.join("registry.json"), r#"{"9": {"id": "p1"}}"#).unwrap();
        fs::write(hub.join("p1").join("__init__.py"), "x\n").unwrap();

        let resolver = SlotResolver::with_layout(hub.clone(), "registry.json");
        assert_eq!(resolver.registry_path(), hub.join("registry.json"));
        let path = resolver.resolve_one(9, &ResolveOptions::default()).unwrap();
        assert_eq!(path, hub.join("p1/__init__.py"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let temp = setup_hub(r#"{"3": {"id": "X"}, "7": {"id": "Y"}}"#);
        write_program(temp.path(), "X", "__init__.py", "3.\n");
        let resolver = SlotResolver::new(temp.path());
        let options = ResolveOptions::default();

        assert_eq!(
            resolver.resolve_one(3, &options).unwrap(),
            resolver.resolve_one(3, &options).unwrap()
        );
        assert_eq!(
            resolver.resolve_all(&options).unwrap(),
            resolver.resolve_all(&options).unwrap()
        );
    }

    #[test]
    fn registry_changes_are_picked_up() {
        let temp = setup_hub(r#"{"3": {"id": "X"}}"#);
        write_program(temp.path(), "X", "__init__.py", "3.\n");
        let resolver = SlotResolver::new(temp.path());
        assert!(resolver.resolve_one(3, &ResolveOptions::default()).is_ok());

        fs::write(temp.path().join("projects/.slots"), "{}").unwrap();
        let err = resolver.resolve_one(3, &ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, HubslotError::SlotEmpty { .. }));
    }
}
