//! Domain Layer
//!
//! The catalog and loan ledger as pure data, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Book, Loan and the collections that own them (Catalog, Ledger)
//! - `value_objects/` - Immutable value types (BookId, LoanPolicy, field rules)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or the clock directly
//! 2. **Ports & Adapters** - Persistence and time go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
