//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{LibraryOptions, LibraryUseCase};
use crate::config::Config;
use crate::error::LibraryResult;
use crate::infrastructure::{LocalFs, RecordCatalogRepository, RecordLedgerRepository, SystemClock};

/// Type alias for the concrete LibraryUseCase with all dependencies
pub type ConcreteLibraryUseCase =
    LibraryUseCase<RecordCatalogRepository<LocalFs>, RecordLedgerRepository<LocalFs>, SystemClock>;

/// Open the library stored in `data_dir`
///
/// Loads both record files; a malformed file is an error.
pub fn create_library_use_case(
    config: &Config,
    data_dir: &Path,
) -> LibraryResult<ConcreteLibraryUseCase> {
    let file_system = LocalFs::with_atomic_writes(config.storage.atomic_writes);
    let catalog_repo = RecordCatalogRepository::with_fs(file_system);
    let ledger_repo = RecordLedgerRepository::with_fs(file_system);
    let options = LibraryOptions::from_config(config, data_dir);

    LibraryUseCase::open(catalog_repo, ledger_repo, SystemClock, options)
}
