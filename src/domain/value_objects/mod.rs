//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod book_id;
mod field;
mod loan_policy;

pub use book_id::BookId;
pub use field::require_line;
pub use loan_policy::{FineAssessment, LoanPolicy, SECONDS_PER_DAY};
