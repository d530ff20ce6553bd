//! Domain Entities
//!
//! - `Book` - A catalogued title with its issued flag
//! - `Loan` - An active issue record
//! - `Catalog` - Ordered collection of books
//! - `Ledger` - Ordered collection of active loans

mod book;
mod catalog;
mod ledger;
mod loan;

pub use book::Book;
pub use catalog::Catalog;
pub use ledger::{Ledger, OverdueLoan};
pub use loan::Loan;
