//! Asset URL resolvers
//!
//! Implementations of the `PackageResolver` port.

use std::collections::BTreeMap;

use crate::domain::ports::PackageResolver;
use crate::error::{EncoreError, EncoreResult};

/// Returns manifest paths unchanged. Encore manifests already contain
/// public paths (`/build/app.js`), so this is enough for most setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl PackageResolver for IdentityResolver {
    fn url(&self, path: &str, _package: Option<&str>) -> EncoreResult<String> {
        Ok(path.to_string())
    }
}

/// Prefix-based packages: a default base path/URL plus named packages,
/// each with its own prefix (e.g. a CDN host).
///
/// Absolute URLs (`https://...`, `//host/...`) are returned as-is.
#[derive(Debug, Clone, Default)]
pub struct PathPackages {
    base_path: String,
    packages: BTreeMap<String, String>,
}

impl PathPackages {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            packages: BTreeMap::new(),
        }
    }

    pub fn with_package(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.packages.insert(name.into(), prefix.into());
        self
    }

    fn prefix(&self, package: Option<&str>) -> EncoreResult<&str> {
        match package {
            None => Ok(&self.base_path),
            Some(name) => self
                .packages
                .get(name)
                .map(String::as_str)
                .ok_or_else(|| EncoreError::UnknownPackage {
                    name: name.to_string(),
                }),
        }
    }
}

impl PackageResolver for PathPackages {
    fn url(&self, path: &str, package: Option<&str>) -> EncoreResult<String> {
        let prefix = self.prefix(package)?;

        if is_absolute_url(path) || prefix.is_empty() {
            return Ok(path.to_string());
        }

        Ok(format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("//") || path.contains("://")
}
