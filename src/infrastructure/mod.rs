//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `repositories/` - Record-format catalog and ledger repositories
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use fs::{LocalFs, MemoryFs};
pub use repositories::{RecordCatalogRepository, RecordLedgerRepository};
