//! Warmed manifest cache file
//!
//! `encore warmup-cache` parses every build's manifest once and dumps the
//! result into a single JSON file. At runtime [`FileCache`] serves lookups
//! from that dump so no `entrypoints.json` is read or validated. The dump
//! is read-only: `set` is ignored, and a missing dump simply misses.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Manifest;
use crate::domain::ports::{CacheError, ManifestCache};
use crate::infrastructure::fs::atomic_write;

pub const CACHE_DUMP_VERSION: u32 = 1;

/// On-disk layout of the cache file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheDump {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: BTreeMap<String, Manifest>,
}

#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    loaded: Mutex<Option<BTreeMap<String, Manifest>>>,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the dump with `entries`.
    ///
    /// Written atomically while holding an exclusive lock on a sibling
    /// `.lock` file, so concurrent warm-ups do not interleave.
    pub fn warm_up(&self, entries: BTreeMap<String, Manifest>) -> Result<(), CacheError> {
        let dump = CacheDump {
            version: CACHE_DUMP_VERSION,
            generated_at: Utc::now(),
            entries,
        };
        let content =
            serde_json::to_string(&dump).map_err(|e| CacheError::SerializationError {
                message: e.to_string(),
            })?;

        let lock_path = self.path.with_extension("lock");
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CacheError::AccessError {
                message: e.to_string(),
            })?;
        }
        let lock_file = fs::File::create(&lock_path).map_err(|e| CacheError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| CacheError::AccessError {
                message: e.to_string(),
            })?;

        let result = atomic_write(&self.path, content.as_bytes()).map_err(|e| {
            CacheError::AccessError {
                message: e.to_string(),
            }
        });

        let _ = lock_file.unlock();
        result?;

        tracing::info!(
            path = %self.path.display(),
            builds = dump.entries.len(),
            "entrypoints cache written"
        );
        *self.loaded.lock().unwrap_or_else(PoisonError::into_inner) = Some(dump.entries);
        Ok(())
    }

    fn load_from_disk(&self) -> Result<BTreeMap<String, Manifest>, CacheError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no entrypoints cache file");
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| CacheError::AccessError {
            message: e.to_string(),
        })?;
        let dump: CacheDump =
            serde_json::from_str(&content).map_err(|e| CacheError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        if dump.version != CACHE_DUMP_VERSION {
            return Err(CacheError::Corrupted {
                path: self.path.clone(),
                message: format!(
                    "unsupported cache version {} (expected {})",
                    dump.version, CACHE_DUMP_VERSION
                ),
            });
        }

        Ok(dump.entries)
    }
}

impl ManifestCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<Manifest>, CacheError> {
        let mut loaded = self.loaded.lock().unwrap_or_else(PoisonError::into_inner);
        if loaded.is_none() {
            *loaded = Some(self.load_from_disk()?);
        }
        Ok(loaded.as_ref().and_then(|entries| entries.get(key).cloned()))
    }

    fn set(&self, key: &str, _manifest: &Manifest) -> Result<(), CacheError> {
        tracing::trace!(key, "entrypoints cache file is read-only, skipping store");
        Ok(())
    }
}
