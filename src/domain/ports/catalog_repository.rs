//! CatalogRepository port - abstraction for catalog persistence
//!
//! Lets the application layer load and rewrite the books file without
//! knowing the record format.

use std::path::Path;

use crate::domain::entities::Catalog;

use super::RepositoryResult;

/// Abstract repository for the book catalog
pub trait CatalogRepository {
    /// Load the catalog from `path`; a missing file is an empty catalog
    fn load(&self, path: &Path) -> RepositoryResult<Catalog>;

    /// Rewrite `path` with every book in `catalog`
    fn save(&self, catalog: &Catalog, path: &Path) -> RepositoryResult<()>;
}
