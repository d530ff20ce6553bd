//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LibraryUseCase` - Catalog and loan operations, persisted after every mutation

pub mod library;

pub use library::{LibraryOptions, LibraryUseCase, ReturnReceipt};
