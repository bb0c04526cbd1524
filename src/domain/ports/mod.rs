//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod manifest_cache;
pub mod package_resolver;
pub mod tag_hook;

pub use file_system::{FileSystem, FsError, FsResult};
pub use manifest_cache::{CacheError, ManifestCache};
pub use package_resolver::PackageResolver;
pub use tag_hook::TagAttributeHook;
