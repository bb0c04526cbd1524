//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Write content to a file atomically
///
/// Creates parent directories, writes to a temp file in the same directory
/// and renames it over `path`, so readers never see a partial file.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
    tmp.write_all(content).map_err(|e| FsError::at(path, e))?;
    tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
    tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}
