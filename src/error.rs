//! Error types for Encore entrypoints
//!
//! Uses `thiserror` for library errors. Collaborator errors (`FsError`,
//! `CacheError`) are defined next to their ports and wrapped here.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CacheError, FsError};

/// Result type alias for Encore operations
pub type EncoreResult<T> = Result<T, EncoreError>;

/// Main error type for Encore operations
#[derive(Error, Debug)]
pub enum EncoreError {
    /// Manifest file does not exist (strict mode only)
    #[error("could not find the entrypoints file from Webpack: the file \"{}\" does not exist", path.display())]
    ManifestMissing { path: PathBuf },

    /// Manifest is not valid JSON (or not a JSON object)
    #[error("there was a problem JSON decoding the \"{}\" file: {message}", path.display())]
    ManifestMalformed { path: PathBuf, message: String },

    /// Manifest parsed but has no top-level `entrypoints` key
    #[error("could not find an \"entrypoints\" key in the \"{}\" file", path.display())]
    EntrypointsKeyMissing { path: PathBuf },

    /// Entry absent, but stripping the extension names an existing entry
    #[error("could not find the entry \"{entry}\". Try \"{suggestion}\" instead (without the extension)")]
    EntryNotFoundWithSuggestion { entry: String, suggestion: String },

    /// Entry absent from the manifest
    #[error("could not find the entry \"{entry}\" in \"{}\". Found: {}.", path.display(), available.join(", "))]
    EntryNotFound {
        entry: String,
        path: PathBuf,
        available: Vec<String>,
    },

    /// No build name passed and no default build registered
    #[error("there is no default build configured: please pass a build name")]
    NoDefaultBuild,

    /// Requested build has no registered lookup
    #[error("the build \"{name}\" is not configured")]
    UnknownBuild { name: String },

    /// Neither `output_path` nor any `[builds]` entry configured
    #[error("no build is defined: set `output_path` or add an entry under [builds]")]
    NoBuildDefined,

    /// `_default` is reserved for the build created from `output_path`
    #[error("key '{name}' can't be used as build name")]
    ReservedBuildName { name: String },

    /// Configuration file could not be parsed or validated
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// URL resolver has no package with this name
    #[error("there is no \"{name}\" asset package configured")]
    UnknownPackage { name: String },

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Manifest cache port error
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl EncoreError {
    /// True for both entry-not-found variants.
    pub fn is_entry_not_found(&self) -> bool {
        matches!(
            self,
            EncoreError::EntryNotFound { .. } | EncoreError::EntryNotFoundWithSuggestion { .. }
        )
    }

    /// True for errors caused by a missing or broken configuration or manifest.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EncoreError::ManifestMissing { .. }
                | EncoreError::ManifestMalformed { .. }
                | EncoreError::EntrypointsKeyMissing { .. }
                | EncoreError::NoDefaultBuild
                | EncoreError::UnknownBuild { .. }
                | EncoreError::NoBuildDefined
                | EncoreError::ReservedBuildName { .. }
                | EncoreError::InvalidConfig { .. }
                | EncoreError::UnknownPackage { .. }
        )
    }
}
