//! Line-oriented substring matching over staged files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bg_error::{Result, ScanError};

/// Case-sensitive substring matcher over text files.
///
/// Reads line by line and stops at the first line containing the needle.
/// No regex, no fuzzy semantics; a needle differing only in letter case
/// from the content does not match.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    needle: String,
}

impl SubstringMatcher {
    /// Create a matcher for the given needle.
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    /// The substring this matcher looks for.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Check whether any line of the file contains the needle.
    ///
    /// Fails if the file cannot be read or contains bytes that are not
    /// valid UTF-8.
    pub fn matches_file(&self, path: &Path) -> Result<bool> {
        let file = File::open(path)
            .map_err(|e| ScanError::Io(format!("Failed to open '{}': {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);

        let mut line = String::new();
        loop {
            line.clear();
            let read = reader.read_line(&mut line).map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => {
                    ScanError::Decode(format!("'{}' is not valid UTF-8: {}", path.display(), e))
                }
                _ => ScanError::Io(format!("Failed to read '{}': {}", path.display(), e)),
            })?;

            if read == 0 {
                return Ok(false);
            }

            if line.contains(&self.needle) {
                return Ok(true);
            }
        }
    }
}
