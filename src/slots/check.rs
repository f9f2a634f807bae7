//! Per-candidate validation.
//!
//! [`check_candidate`] opens a candidate program path and, when asked,
//! compares the first whitespace-separated token of its first line to the
//! expected word. It reports the outcome as a [`CandidateStatus`] rather
//! than an error so bulk discovery can filter without error plumbing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::options::ResolveOptions;

/// Outcome of validating one candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateStatus {
    /// The file exists and passed the format check (if any).
    Ready,
    /// The file could not be opened.
    Unavailable { reason: String },
    /// The file's first token did not match the expected word.
    FormatMismatch { found: String },
}

impl CandidateStatus {
    /// Whether the candidate can be used.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Validate a candidate program path.
///
/// The file handle lives only for the duration of this call.
pub fn check_candidate(path: &Path, options: &ResolveOptions) -> CandidateStatus {
    let file = match File::open(path) {
        Ok(file) if file.metadata().map(|m| m.is_file()).unwrap_or(false) => file,
        Ok(_) => {
            return CandidateStatus::Unavailable {
                reason: "not a regular file".to_string(),
            }
        }
        Err(e) => {
            return CandidateStatus::Unavailable {
                reason: e.to_string(),
            }
        }
    };

    if !options.do_check {
        return CandidateStatus::Ready;
    }

    let mut first_line = Vec::new();
    if let Err(e) = BufReader::new(file).read_until(b'\n', &mut first_line) {
        return CandidateStatus::Unavailable {
            reason: e.to_string(),
        };
    }

    let first_token = first_token(&first_line);
    if first_token == Some(options.check_word.as_bytes()) {
        CandidateStatus::Ready
    } else {
        CandidateStatus::FormatMismatch {
            found: first_token
                .map(|t| String::from_utf8_lossy(t).into_owned())
                .unwrap_or_default(),
        }
    }
}

/// First whitespace separated token of a line.
///
/// Text lines split on Unicode whitespace. Lines that are not valid UTF-8,
/// such as the header of a compiled module, split on ASCII whitespace so
/// they can be checked without decoding.
fn first_token(line: &[u8]) -> Option<&[u8]> {
    match std::str::from_utf8(line) {
        Ok(text) => text.split_whitespace().next().map(str::as_bytes),
        Err(_) => line
            .split(|b| b.is_ascii_whitespace())
            .find(|token| !token.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::Extension;
    use std::fs;
    use tempfile::TempDir;

    fn checking(word: &str) -> ResolveOptions {
        ResolveOptions::default().with_check(word)
    }

    #[test]
    fn first_token_skips_leading_whitespace() {
        assert_eq!(first_token(b"  3.14159 26535\n"), Some(&b"3.14159"[..]));
        assert_eq!(first_token(b"\t\n"), None);
        assert_eq!(first_token(b""), None);
    }

    #[test]
    fn first_token_splits_text_on_unicode_whitespace() {
        assert_eq!(
            first_token("3.\u{a0}14159\n".as_bytes()),
            Some(&b"3."[..])
        );
        assert_eq!(
            first_token("\u{2003}pi 3".as_bytes()),
            Some(&b"pi"[..])
        );
    }

    #[test]
    fn non_breaking_space_separates_check_word() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__init__.py");
        fs::write(&path, "3.\u{a0}14159\n").unwrap();
        assert!(check_candidate(&path, &checking("3.")).is_ready());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let status = check_candidate(&temp.path().join("nope.py"), &ResolveOptions::default());
        assert!(matches!(status, CandidateStatus::Unavailable { .. }));
    }

    #[test]
    fn directory_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let status = check_candidate(temp.path(), &ResolveOptions::default());
        assert!(matches!(status, CandidateStatus::Unavailable { .. }));
    }

    #[test]
    fn existing_file_without_check_is_ready() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__init__.py");
        fs::write(&path, "").unwrap();
        assert!(check_candidate(&path, &ResolveOptions::default()).is_ready());
    }

    #[test]
    fn matching_first_token_is_ready() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__init__.py");
        fs::write(&path, "3. 14159\n26535\n").unwrap();
        assert!(check_candidate(&path, &checking("3.")).is_ready());
    }

    #[test]
    fn only_the_first_token_is_compared() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__init__.py");
        fs::write(&path, "3.14159\n").unwrap();

        assert_eq!(
            check_candidate(&path, &checking("3.")),
            CandidateStatus::FormatMismatch {
                found: "3.14159".to_string()
            }
        );
        assert!(check_candidate(&path, &checking("3.14159")).is_ready());
    }

    #[test]
    fn mismatched_first_token_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__init__.py");
        fs::write(&path, "hello world\n").unwrap();

        assert_eq!(
            check_candidate(&path, &checking("3.")),
            CandidateStatus::FormatMismatch {
                found: "hello".to_string()
            }
        );
    }

    #[test]
    fn empty_file_fails_check() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__init__.py");
        fs::write(&path, "").unwrap();

        assert_eq!(
            check_candidate(&path, &checking("3.")),
            CandidateStatus::FormatMismatch {
                found: String::new()
            }
        );
    }

    #[test]
    fn compiled_module_is_checked_as_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__init__.mpy");
        fs::write(&path, [b'M', 0x05, 0xff, b' ', 0x00, b'\n']).unwrap();

        let options = ResolveOptions::default()
            .with_extension(Extension::Compiled)
            .with_check("M\u{5}");
        let status = check_candidate(&path, &options);
        assert!(matches!(status, CandidateStatus::FormatMismatch { .. }));
    }
}
