//! Loan entity - an active issue record

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::BookId;

/// A book lent to a borrower until `due_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loan {
    book_id: BookId,
    borrower: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    issued_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    due_at: DateTime<Utc>,
}

impl Loan {
    pub fn new(
        book_id: BookId,
        borrower: impl Into<String>,
        issued_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            book_id,
            borrower: borrower.into(),
            issued_at,
            due_at,
        }
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn borrower(&self) -> &str {
        &self.borrower
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now > self.due_at
    }
}
