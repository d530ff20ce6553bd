//! Libris - single-user library catalog and loan ledger
//!
//! Libris keeps a catalog of books and a ledger of active loans in two
//! line-oriented text files, and charges a daily fine for late returns.
//! It is driven from a numbered text menu or from one-shot subcommands.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LibraryOptions, LibraryUseCase, ReturnReceipt};
pub use config::Config;
pub use domain::entities::{Book, Catalog, Ledger, Loan, OverdueLoan};
pub use domain::value_objects::{BookId, FineAssessment, LoanPolicy};
pub use error::{LibraryError, LibraryResult};
