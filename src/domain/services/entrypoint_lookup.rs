//! Entrypoint lookup
//!
//! Answers "which files belong to entry X" for one build, and remembers
//! which files were already handed out during the current request so the
//! same `<script>` is never emitted twice. Call [`EntrypointLookup::reset`]
//! once the request/response cycle ends.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::Manifest;
use crate::domain::ports::{FileSystem, ManifestCache};
use crate::domain::value_objects::AssetType;
use crate::error::{EncoreError, EncoreResult};
use crate::infrastructure::fs::LocalFs;

static EMPTY_MANIFEST: Manifest = Manifest::empty();

pub struct EntrypointLookup {
    manifest_path: PathBuf,
    cache: Option<(Arc<dyn ManifestCache>, String)>,
    strict_mode: bool,
    fs: Box<dyn FileSystem>,
    manifest: Option<Manifest>,
    returned_files: Vec<String>,
}

impl EntrypointLookup {
    /// Strict lookup reading `manifest_path` from the local disk.
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            cache: None,
            strict_mode: true,
            fs: Box::new(LocalFs::new()),
            manifest: None,
            returned_files: Vec::new(),
        }
    }

    /// Consult `cache` under `key` before touching the manifest file, and
    /// store freshly parsed manifests there.
    pub fn with_cache(mut self, cache: Arc<dyn ManifestCache>, key: impl Into<String>) -> Self {
        self.cache = Some((cache, key.into()));
        self
    }

    /// In non-strict mode a missing manifest or entry yields no files
    /// instead of an error.
    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    pub fn with_file_system(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn is_strict(&self) -> bool {
        self.strict_mode
    }

    pub fn javascript_files(&mut self, entry_name: &str) -> EncoreResult<Vec<String>> {
        self.files(entry_name, AssetType::Js)
    }

    pub fn css_files(&mut self, entry_name: &str) -> EncoreResult<Vec<String>> {
        self.files(entry_name, AssetType::Css)
    }

    /// Files of `entry_name` not yet returned in this cycle, in manifest order.
    ///
    /// A second call for the same entry returns an empty list until
    /// [`reset`](Self::reset).
    pub fn files(&mut self, entry_name: &str, asset_type: AssetType) -> EncoreResult<Vec<String>> {
        let new_files = self.pending_files(entry_name, asset_type)?;
        self.mark_returned(&new_files);
        Ok(new_files)
    }

    /// Same selection as [`files`](Self::files) without marking anything
    /// as returned. Pair with [`mark_returned`](Self::mark_returned) once
    /// the files are actually used.
    pub fn pending_files(
        &mut self,
        entry_name: &str,
        asset_type: AssetType,
    ) -> EncoreResult<Vec<String>> {
        self.validate_entry_name(entry_name)?;

        Ok(self
            .loaded()
            .files(entry_name, asset_type)
            .iter()
            .filter(|file| !self.returned_files.contains(file))
            .cloned()
            .collect())
    }

    pub fn mark_returned(&mut self, files: &[String]) {
        for file in files {
            if !self.returned_files.contains(file) {
                self.returned_files.push(file.clone());
            }
        }
    }

    /// True iff the manifest declares `entry_name`, whatever the mode and
    /// whatever was returned so far.
    pub fn entry_exists(&mut self, entry_name: &str) -> EncoreResult<bool> {
        Ok(self.manifest()?.contains_entry(entry_name))
    }

    /// Entry names declared by the manifest.
    pub fn entry_names(&mut self) -> EncoreResult<Vec<String>> {
        Ok(self.manifest()?.entry_names())
    }

    /// Subresource-integrity hashes keyed by file path.
    pub fn integrity_data(&mut self) -> EncoreResult<BTreeMap<String, String>> {
        Ok(self.manifest()?.integrity.clone())
    }

    /// Files handed out since the last reset, in the order they were returned.
    pub fn returned_files(&self) -> &[String] {
        &self.returned_files
    }

    /// Forget returned files. The parsed manifest is kept.
    pub fn reset(&mut self) {
        self.returned_files.clear();
    }

    fn validate_entry_name(&mut self, entry_name: &str) -> EncoreResult<()> {
        self.ensure_loaded()?;
        let manifest = self.loaded();

        if !self.strict_mode || manifest.contains_entry(entry_name) {
            return Ok(());
        }

        let without_extension = entry_name
            .rfind('.')
            .map(|dot| &entry_name[..dot])
            .filter(|candidate| manifest.contains_entry(candidate));

        Err(match without_extension {
            Some(suggestion) => EncoreError::EntryNotFoundWithSuggestion {
                entry: entry_name.to_string(),
                suggestion: suggestion.to_string(),
            },
            None => EncoreError::EntryNotFound {
                entry: entry_name.to_string(),
                path: self.manifest_path.clone(),
                available: manifest.entry_names(),
            },
        })
    }

    fn manifest(&mut self) -> EncoreResult<&Manifest> {
        self.ensure_loaded()?;
        Ok(self.loaded())
    }

    fn ensure_loaded(&mut self) -> EncoreResult<()> {
        if self.manifest.is_none() {
            self.manifest = self.load()?;
        }
        Ok(())
    }

    fn loaded(&self) -> &Manifest {
        self.manifest.as_ref().unwrap_or(&EMPTY_MANIFEST)
    }

    /// `Ok(None)` means "no manifest yet" in non-strict mode; it is not
    /// memoized so a build finishing later is picked up.
    fn load(&self) -> EncoreResult<Option<Manifest>> {
        if let Some((cache, key)) = &self.cache {
            if let Some(manifest) = cache.get(key)? {
                tracing::debug!(key = %key, "entrypoints loaded from cache");
                return Ok(Some(manifest));
            }
        }

        if !self.fs.exists(&self.manifest_path) {
            if !self.strict_mode {
                tracing::debug!(
                    path = %self.manifest_path.display(),
                    "entrypoints file missing, continuing without entries"
                );
                return Ok(None);
            }
            return Err(EncoreError::ManifestMissing {
                path: self.manifest_path.clone(),
            });
        }

        let content = self.fs.read(&self.manifest_path)?;
        let manifest = Manifest::from_json(&content, &self.manifest_path)?;
        tracing::debug!(
            path = %self.manifest_path.display(),
            entries = manifest.entrypoints.len(),
            "entrypoints file parsed"
        );

        if let Some((cache, key)) = &self.cache {
            cache.set(key, &manifest)?;
        }

        Ok(Some(manifest))
    }
}

impl std::fmt::Debug for EntrypointLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntrypointLookup")
            .field("manifest_path", &self.manifest_path)
            .field("cache_key", &self.cache.as_ref().map(|(_, key)| key))
            .field("strict_mode", &self.strict_mode)
            .field("loaded", &self.manifest.is_some())
            .field("returned_files", &self.returned_files)
            .finish()
    }
}
