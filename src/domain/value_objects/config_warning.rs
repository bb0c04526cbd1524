//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Raised while loading `encore.toml` for keys the loader does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
