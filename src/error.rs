//! Error types for Libris
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::BookId;

/// Result type alias for Libris operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Main error type for catalog and ledger operations
#[derive(Error, Debug)]
pub enum LibraryError {
    /// No book with this id in the catalog
    #[error("book {id} not found")]
    BookNotFound { id: BookId },

    /// Book exists but is already lent out
    #[error("book {id} is already issued")]
    AlreadyIssued { id: BookId },

    /// No active loan for this book
    #[error("no active loan for book {id}")]
    LoanNotFound { id: BookId },

    /// Add with an id that is already catalogued
    #[error("book {id} already exists")]
    DuplicateId { id: BookId },

    /// Delete of a book that is still on loan
    #[error("book {id} is on loan and cannot be deleted")]
    BookOnLoan { id: BookId },

    /// Loan period too long to compute a due time
    #[error("loan period of {days} days is out of range")]
    LoanPeriodOutOfRange { days: u32 },

    /// Required text field left blank
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    /// Text field would break the line-oriented record format
    #[error("{field} must be a single line")]
    MultilineField { field: &'static str },

    /// Malformed record in one of the data files
    #[error("invalid record in {file}:{line}: {message}")]
    InvalidRecord {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
