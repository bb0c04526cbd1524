//! Entrypoints manifest
//!
//! Shape of the `entrypoints.json` file written by Webpack Encore:
//!
//! ```json
//! {
//!   "entrypoints": { "app": { "js": ["/build/app.js"], "css": ["/build/app.css"] } },
//!   "integrity": { "/build/app.js": "sha384-..." }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AssetType;
use crate::error::{EncoreError, EncoreResult};

/// Files of one entry point, in build order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFiles {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub js: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,
}

impl EntryFiles {
    pub fn files(&self, asset_type: AssetType) -> &[String] {
        match asset_type {
            AssetType::Js => &self.js,
            AssetType::Css => &self.css,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub entrypoints: BTreeMap<String, EntryFiles>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub integrity: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    entrypoints: Option<BTreeMap<String, EntryFiles>>,
    #[serde(default)]
    integrity: Option<BTreeMap<String, String>>,
}

impl Manifest {
    /// Manifest without any entry points.
    pub const fn empty() -> Self {
        Self {
            entrypoints: BTreeMap::new(),
            integrity: BTreeMap::new(),
        }
    }

    /// Parse manifest JSON read from `path` (used for error messages only).
    ///
    /// The document must be an object with an `entrypoints` key.
    pub fn from_json(content: &str, path: &Path) -> EncoreResult<Self> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|e| EncoreError::ManifestMalformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let entrypoints = raw
            .entrypoints
            .ok_or_else(|| EncoreError::EntrypointsKeyMissing {
                path: path.to_path_buf(),
            })?;

        Ok(Self {
            entrypoints,
            integrity: raw.integrity.unwrap_or_default(),
        })
    }

    pub fn entry(&self, name: &str) -> Option<&EntryFiles> {
        self.entrypoints.get(name)
    }

    pub fn contains_entry(&self, name: &str) -> bool {
        self.entrypoints.contains_key(name)
    }

    pub fn entry_names(&self) -> Vec<String> {
        self.entrypoints.keys().cloned().collect()
    }

    /// Files listed for `(entry, asset_type)`; empty when either is absent.
    pub fn files(&self, entry: &str, asset_type: AssetType) -> &[String] {
        self.entry(entry)
            .map(|e| e.files(asset_type))
            .unwrap_or_default()
    }
}
