//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_repository;
pub mod clock;
pub mod file_system;
pub mod ledger_repository;

pub use catalog_repository::CatalogRepository;
pub use clock::Clock;
pub use file_system::{FileSystem, FsError, FsResult};
pub use ledger_repository::LedgerRepository;

use std::path::PathBuf;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors shared by the record repositories
#[derive(Debug)]
pub enum RepositoryError {
    /// A record in the file could not be parsed
    InvalidRecord {
        file: PathBuf,
        line: usize,
        message: String,
    },
    /// Reading or writing the file failed
    Io { file: PathBuf, source: FsError },
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::InvalidRecord {
                file,
                line,
                message,
            } => write!(f, "invalid record in {}:{}: {}", file.display(), line, message),
            RepositoryError::Io { file, source } => {
                write!(f, "cannot access {}: {}", file.display(), source)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<RepositoryError> for crate::error::LibraryError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidRecord {
                file,
                line,
                message,
            } => crate::error::LibraryError::InvalidRecord {
                file,
                line,
                message,
            },
            RepositoryError::Io { .. } => {
                crate::error::LibraryError::Io(std::io::Error::other(err.to_string()))
            }
        }
    }
}
