//! ManifestCache port
//!
//! External store for parsed manifests, keyed by the (URL-encoded) build
//! name. A hit is trusted verbatim: the lookup skips file I/O and
//! validation entirely.

use std::path::PathBuf;

use crate::domain::entities::Manifest;

pub trait ManifestCache: Send + Sync {
    /// Return the cached manifest for `key`, `None` on a miss.
    fn get(&self, key: &str) -> Result<Option<Manifest>, CacheError>;

    /// Store `manifest` under `key`. Read-only stores may ignore this.
    fn set(&self, key: &str, manifest: &Manifest) -> Result<(), CacheError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("failed to access entrypoints cache: {message}")]
    AccessError { message: String },

    #[error("failed to serialize entrypoints cache: {message}")]
    SerializationError { message: String },

    #[error(
        "entrypoints cache file corrupted: {}\n  → Fix: run `encore warmup-cache` again\n  → Details: {message}",
        path.display()
    )]
    Corrupted { path: PathBuf, message: String },
}
