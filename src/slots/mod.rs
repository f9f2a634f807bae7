//! Slot registry resolution.
//!
//! This module maps hub slot numbers to program files:
//! - [`slot`] - validated slot numbers and program extensions
//! - [`registry`] - parsing the `projects/.slots` registry
//! - [`options`] - explicit resolution options
//! - [`check`] - per-candidate existence and format check
//! - [`resolver`] - single-slot and all-slots resolution
//!
//! # Example
//!
//! ```
//! use hubslot::slots::{ResolveOptions, SlotResolver};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let projects = temp.path().join("projects");
//! fs::create_dir_all(projects.join("X")).unwrap();
//! fs::write(projects.join(".slots"), r#"{"3": {"id": "X"}}"#).unwrap();
//! fs::write(projects.join("X").join("__init__.py"), "3.14159\n").unwrap();
//!
//! let resolver = SlotResolver::new(temp.path());
//! let path = resolver.resolve_one(3, &ResolveOptions::default()).unwrap();
//! assert!(path.ends_with("X/__init__.py"));
//! ```

pub mod check;
pub mod options;
pub mod registry;
pub mod resolver;
pub mod slot;

pub use check::{check_candidate, CandidateStatus};
pub use options::ResolveOptions;
pub use registry::{ProgramId, SlotRecord, SlotRegistry};
pub use resolver::{SlotCandidate, SlotResolver, DEFAULT_PROJECTS_DIR, DEFAULT_REGISTRY_FILE};
pub use slot::{Extension, Slot, MAX_SLOT, MIN_SLOT};
