//! In-memory manifest cache

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::entities::Manifest;
use crate::domain::ports::{CacheError, ManifestCache};

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<BTreeMap<String, Manifest>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored manifest, keyed by cache key.
    pub fn entries(&self) -> BTreeMap<String, Manifest> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ManifestCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Manifest>, CacheError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, manifest: &Manifest) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), manifest.clone());
        Ok(())
    }
}
