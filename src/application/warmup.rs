//! Cache warm-up use case
//!
//! Parses every configured manifest once and dumps the parsed data into the
//! cache file, so production processes never read `entrypoints.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::services::EntrypointLookup;
use crate::error::EncoreResult;
use crate::infrastructure::{FileCache, MemoryCache};

/// Entry requested to force a parse; whether it exists is irrelevant.
pub const WARMUP_ENTRY: &str = "dummy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmupReport {
    pub cache_file: PathBuf,
    /// Cache keys written to the dump
    pub dumped: Vec<String>,
    /// Cache keys whose manifest file does not exist
    pub skipped: Vec<String>,
}

/// Dump the manifests behind `cache_keys` (cache key to manifest path)
/// into `cache_file`.
///
/// Builds without a manifest file are skipped. A malformed manifest aborts
/// the warm-up without touching the existing dump.
pub fn warmup_cache(
    cache_keys: &BTreeMap<String, PathBuf>,
    cache_file: &Path,
) -> EncoreResult<WarmupReport> {
    let collected = Arc::new(MemoryCache::new());
    let mut skipped = Vec::new();

    for (key, manifest_path) in cache_keys {
        if !manifest_path.exists() {
            tracing::info!(key = %key, path = %manifest_path.display(), "manifest missing, skipped");
            skipped.push(key.clone());
            continue;
        }

        let mut lookup = EntrypointLookup::new(manifest_path).with_cache(collected.clone(), key.clone());
        match lookup.javascript_files(WARMUP_ENTRY) {
            Ok(_) => {}
            Err(e) if e.is_entry_not_found() => {}
            Err(e) => return Err(e),
        }
        tracing::debug!(key = %key, "manifest collected");
    }

    let entries = collected.entries();
    let dumped = entries.keys().cloned().collect();
    FileCache::new(cache_file).warm_up(entries)?;

    Ok(WarmupReport {
        cache_file: cache_file.to_path_buf(),
        dumped,
        skipped,
    })
}
