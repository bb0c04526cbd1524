//! Build naming conventions

/// Name of the build registered from `output_path`.
pub const DEFAULT_BUILD: &str = "_default";

/// Manifest file name inside a build output directory.
pub const ENTRYPOINTS_FILENAME: &str = "entrypoints.json";

/// Cache key for a build: the build name, URL-encoded so it is safe to use
/// as a file-system or cache identifier.
pub fn cache_key(build_name: &str) -> String {
    urlencoding::encode(build_name).into_owned()
}
