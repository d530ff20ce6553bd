//! Repository Implementations
//!
//! Concrete implementations of domain repository ports, backed by the
//! line-record format in `records`.

mod catalog;
mod ledger;
pub mod records;

pub use catalog::RecordCatalogRepository;
pub use ledger::RecordLedgerRepository;
