//! Record-format Catalog Repository
//!
//! Implements the CatalogRepository port on top of any FileSystem.

use std::path::Path;

use crate::domain::entities::Catalog;
use crate::domain::ports::{CatalogRepository, FileSystem, RepositoryError, RepositoryResult};
use crate::infrastructure::fs::LocalFs;

use super::records::{parse_books, render_books};

/// Books file repository (`books.txt` by default)
#[derive(Debug, Clone, Default)]
pub struct RecordCatalogRepository<FS = LocalFs> {
    fs: FS,
}

impl RecordCatalogRepository<LocalFs> {
    /// Create a repository on the local disk with atomic writes
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> RecordCatalogRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> CatalogRepository for RecordCatalogRepository<FS> {
    fn load(&self, path: &Path) -> RepositoryResult<Catalog> {
        if !self.fs.exists(path) {
            tracing::debug!(path = %path.display(), "books file absent, starting empty");
            return Ok(Catalog::new());
        }

        let content = self.fs.read(path).map_err(|source| RepositoryError::Io {
            file: path.to_path_buf(),
            source,
        })?;
        let books = parse_books(&content, path)?;
        tracing::debug!(path = %path.display(), count = books.len(), "loaded books");
        Ok(Catalog::from_books(books))
    }

    fn save(&self, catalog: &Catalog, path: &Path) -> RepositoryResult<()> {
        let content = render_books(catalog.books());
        self.fs
            .write(path, &content)
            .map_err(|source| RepositoryError::Io {
                file: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), count = catalog.len(), "saved books");
        Ok(())
    }
}
