//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use strsim::levenshtein;

use crate::error::{EncoreError, EncoreResult};

use super::types::{EncoreConfig, RawConfig};

pub use crate::domain::value_objects::ConfigWarning;

/// Configuration file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "encore.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths in the file are resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> EncoreResult<(EncoreConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| EncoreError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let raw: RawConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EncoreError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let raw = with_env_overrides(resolve_relative_paths(raw, base_dir));
    let config = EncoreConfig::from_raw(raw, path)?;

    tracing::debug!(
        file = %path.display(),
        builds = config.manifest_paths().len(),
        strict_mode = config.strict_mode,
        cache = config.cache,
        "configuration loaded"
    );

    Ok((config, warnings))
}

/// Apply environment variable overrides (ENCORE_* prefix)
pub fn with_env_overrides(mut raw: RawConfig) -> RawConfig {
    // ENCORE_OUTPUT_PATH
    if let Ok(path) = std::env::var("ENCORE_OUTPUT_PATH") {
        if !path.is_empty() {
            raw.output_path = Some(PathBuf::from(path));
        }
    }

    // ENCORE_STRICT_MODE
    if let Some(flag) = env_flag("ENCORE_STRICT_MODE") {
        raw.strict_mode = flag;
    }

    // ENCORE_CACHE
    if let Some(flag) = env_flag("ENCORE_CACHE") {
        raw.cache = flag;
    }

    // ENCORE_PRELOAD
    if let Some(flag) = env_flag("ENCORE_PRELOAD") {
        raw.preload = flag;
    }

    raw
}

/// Read a boolean override; unset and empty both mean "keep the file value".
fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|val| parse_flag(&val))
}

fn parse_flag(val: &str) -> Option<bool> {
    let val = val.trim();
    if val.is_empty() {
        return None;
    }
    Some(!val.eq_ignore_ascii_case("false") && val != "0")
}

fn resolve_relative_paths(mut raw: RawConfig, base_dir: &Path) -> RawConfig {
    let resolve = |p: PathBuf| {
        if p.is_relative() {
            base_dir.join(p)
        } else {
            p
        }
    };

    raw.output_path = raw.output_path.map(resolve);
    raw.cache_file = resolve(raw.cache_file);
    raw.builds = raw
        .builds
        .into_iter()
        .map(|(name, dir)| (name, resolve(dir)))
        .collect();
    raw
}

/// First line declaring `key`, either as a key or inside a table header.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .map(str::trim_start)
        .position(|line| {
            if let Some(header) = line.strip_prefix('[') {
                return header
                    .split(['.', ']', '['])
                    .any(|part| part.trim() == key);
            }
            line.strip_prefix(key).is_some_and(|rest| {
                let rest = rest.trim_start();
                rest.starts_with('=') || rest.starts_with('.')
            })
        })
        .map(|index| index + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "output_path",
    "crossorigin",
    "preload",
    "cache",
    "cache_file",
    "strict_mode",
    "builds",
    "script_attributes",
    "link_attributes",
    "assets",
    "base_path",
    "packages",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
