//! Configuration type definitions

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{cache_key, Attributes, DEFAULT_BUILD, ENTRYPOINTS_FILENAME};
use crate::error::{EncoreError, EncoreResult};

use super::loader::{self, ConfigWarning};

/// `crossorigin` attribute value for rendered tags and preload hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossOrigin {
    Anonymous,
    UseCredentials,
}

impl CrossOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            CrossOrigin::Anonymous => "anonymous",
            CrossOrigin::UseCredentials => "use-credentials",
        }
    }
}

impl fmt::Display for CrossOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `crossorigin` as written in the file: `false` or a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CrossOriginSetting {
    Flag(bool),
    Value(String),
}

impl Default for CrossOriginSetting {
    fn default() -> Self {
        CrossOriginSetting::Flag(false)
    }
}

/// URL resolution for asset paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Prefix for the default package
    #[serde(default)]
    pub base_path: String,

    /// Named packages and their prefixes
    #[serde(default)]
    pub packages: BTreeMap<String, String>,
}

/// Configuration file contents before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    #[serde(default)]
    pub crossorigin: CrossOriginSetting,

    #[serde(default)]
    pub preload: bool,

    #[serde(default)]
    pub cache: bool,

    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,

    #[serde(default = "default_true")]
    pub strict_mode: bool,

    #[serde(default)]
    pub builds: BTreeMap<String, PathBuf>,

    #[serde(default)]
    pub script_attributes: Attributes,

    #[serde(default)]
    pub link_attributes: Attributes,

    #[serde(default)]
    pub assets: AssetsConfig,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            crossorigin: CrossOriginSetting::default(),
            preload: false,
            cache: false,
            cache_file: default_cache_file(),
            strict_mode: true,
            builds: BTreeMap::new(),
            script_attributes: Attributes::new(),
            link_attributes: Attributes::new(),
            assets: AssetsConfig::default(),
        }
    }
}

fn default_cache_file() -> PathBuf {
    PathBuf::from("var/cache/encore.cache.json")
}

fn default_true() -> bool {
    true
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoreConfig {
    /// Output directory of the `_default` build
    pub output_path: Option<PathBuf>,
    pub crossorigin: Option<CrossOrigin>,
    /// Emit `Link: rel=preload` headers for rendered files
    pub preload: bool,
    /// Serve manifests from the warmed cache file
    pub cache: bool,
    pub cache_file: PathBuf,
    pub strict_mode: bool,
    /// Named builds and their output directories
    pub builds: BTreeMap<String, PathBuf>,
    pub script_attributes: Attributes,
    pub link_attributes: Attributes,
    pub assets: AssetsConfig,
}

impl EncoreConfig {
    /// Validate raw values. `file` is only used in error messages.
    pub fn from_raw(raw: RawConfig, file: &Path) -> EncoreResult<Self> {
        if raw.output_path.is_none() && raw.builds.is_empty() {
            return Err(EncoreError::NoBuildDefined);
        }

        if raw.builds.contains_key(DEFAULT_BUILD) {
            return Err(EncoreError::ReservedBuildName {
                name: DEFAULT_BUILD.to_string(),
            });
        }

        let crossorigin = match raw.crossorigin {
            CrossOriginSetting::Flag(false) => None,
            CrossOriginSetting::Value(ref v) if v == "anonymous" => Some(CrossOrigin::Anonymous),
            CrossOriginSetting::Value(ref v) if v == "use-credentials" => {
                Some(CrossOrigin::UseCredentials)
            }
            other => {
                return Err(EncoreError::InvalidConfig {
                    file: file.to_path_buf(),
                    message: format!(
                        "crossorigin must be false, \"anonymous\" or \"use-credentials\", got {:?}",
                        other
                    ),
                })
            }
        };

        Ok(Self {
            output_path: raw.output_path,
            crossorigin,
            preload: raw.preload,
            cache: raw.cache,
            cache_file: raw.cache_file,
            strict_mode: raw.strict_mode,
            builds: raw.builds,
            script_attributes: raw.script_attributes,
            link_attributes: raw.link_attributes,
            assets: raw.assets,
        })
    }

    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> EncoreResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EncoreResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Build registered from `output_path`, if any.
    pub fn default_build(&self) -> Option<&str> {
        self.output_path.as_ref().map(|_| DEFAULT_BUILD)
    }

    /// Build name to manifest path, `_default` included.
    pub fn manifest_paths(&self) -> BTreeMap<String, PathBuf> {
        let mut paths = BTreeMap::new();
        if let Some(output_path) = &self.output_path {
            paths.insert(
                DEFAULT_BUILD.to_string(),
                output_path.join(ENTRYPOINTS_FILENAME),
            );
        }
        for (name, dir) in &self.builds {
            paths.insert(name.clone(), dir.join(ENTRYPOINTS_FILENAME));
        }
        paths
    }

    /// Cache key to manifest path, as consumed by the warm-up command.
    pub fn cache_keys(&self) -> BTreeMap<String, PathBuf> {
        self.manifest_paths()
            .into_iter()
            .map(|(name, path)| (cache_key(&name), path))
            .collect()
    }

    /// Attributes applied to every tag (currently only `crossorigin`).
    pub fn default_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        if let Some(crossorigin) = self.crossorigin {
            attributes.insert("crossorigin", crossorigin.as_str());
        }
        attributes
    }
}
