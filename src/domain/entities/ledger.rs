//! Ledger entity - the active loans

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{BookId, FineAssessment, LoanPolicy};
use crate::error::{LibraryError, LibraryResult};

use super::Loan;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    loans: Vec<Loan>,
}

/// A loan past its due time, with the fine accrued so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueLoan {
    pub loan: Loan,
    #[serde(flatten)]
    pub assessment: FineAssessment,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_loans(loans: Vec<Loan>) -> Self {
        Self { loans }
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    pub fn find(&self, id: BookId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.book_id() == id)
    }

    pub fn open(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    /// Remove and return the first loan for `id`
    pub fn close(&mut self, id: BookId) -> LibraryResult<Loan> {
        let index = self
            .loans
            .iter()
            .position(|l| l.book_id() == id)
            .ok_or(LibraryError::LoanNotFound { id })?;
        Ok(self.loans.remove(index))
    }

    /// Loans past due at `now`, in ledger order
    pub fn overdue(&self, policy: &LoanPolicy, now: DateTime<Utc>) -> Vec<OverdueLoan> {
        self.loans
            .iter()
            .filter(|l| l.is_overdue(now))
            .map(|l| OverdueLoan {
                loan: l.clone(),
                assessment: policy.assess(l.due_at(), now),
            })
            .collect()
    }
}
