//! PackageResolver port
//!
//! Turns a manifest file path into a public URL. Versioning and CDN
//! concerns belong entirely to the implementation.

use crate::error::EncoreResult;

pub trait PackageResolver: Send + Sync {
    /// Resolve `path` against the named package, or the default package
    /// when `package` is `None`.
    fn url(&self, path: &str, package: Option<&str>) -> EncoreResult<String>;
}
