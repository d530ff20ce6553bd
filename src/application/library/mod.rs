//! Library Use Case
//!
//! Orchestrates the catalog and the loan ledger.
//!
//! This module handles:
//! - Loading both record files at startup
//! - Catalog operations (add, delete, search, list)
//! - Loan operations (issue, return) and fine assessment
//! - Rewriting the affected file after every mutation

mod options;
mod result;
mod use_case;

pub use options::LibraryOptions;
pub use result::ReturnReceipt;
pub use use_case::LibraryUseCase;
