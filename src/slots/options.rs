//! Resolution options.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::slot::Extension;

/// How a slot path is built and validated.
///
/// - `extension` selects the program file (`__init__.py` or `__init__.mpy`)
/// - `do_check` enables the first-token format check
/// - `check_word` is the token the check expects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    pub extension: Extension,
    pub do_check: bool,
    pub check_word: String,
}

impl ResolveOptions {
    /// Options for an extension given as text, without a format check.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExtension` if `extension` is not `.py` or `.mpy`.
    pub fn new(extension: &str) -> Result<Self> {
        Ok(Self {
            extension: extension.parse()?,
            ..Default::default()
        })
    }

    /// Use a different extension.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    /// Enable the format check with the given expected word.
    pub fn with_check(mut self, word: impl Into<String>) -> Self {
        self.do_check = true;
        self.check_word = word.into();
        self
    }

    /// Disable the format check.
    pub fn without_check(mut self) -> Self {
        self.do_check = false;
        self
    }
}
