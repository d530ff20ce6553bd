//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// With `atomic` set (the default), writes go to a temp file in the target's
/// directory that is then renamed over the target, so a crash mid-write
/// leaves the previous file intact.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    atomic: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFs {
    /// Create a LocalFs with atomic writes
    pub fn new() -> Self {
        Self { atomic: true }
    }

    /// Create a LocalFs that truncates and writes in place
    pub fn non_atomic() -> Self {
        Self { atomic: false }
    }

    pub fn with_atomic_writes(atomic: bool) -> Self {
        Self { atomic }
    }
}

/// Write `content` to `path` through a sibling temp file and rename
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        // Ensure parent directories exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;
            }
        }

        if self.atomic {
            atomic_write(path, content.as_bytes()).map_err(|e| FsError::from_io(e, path))
        } else {
            std::fs::write(path, content).map_err(|e| FsError::from_io(e, path))
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
