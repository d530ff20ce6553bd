//! Library operation results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Loan;
use crate::domain::value_objects::FineAssessment;

/// Outcome of returning a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnReceipt {
    /// The loan that was closed
    pub loan: Loan,
    /// When the return was recorded
    #[serde(with = "chrono::serde::ts_seconds")]
    pub returned_at: DateTime<Utc>,
    /// Lateness and fine
    #[serde(flatten)]
    pub assessment: FineAssessment,
}

impl ReturnReceipt {
    pub fn is_overdue(&self) -> bool {
        self.assessment.overdue
    }

    pub fn overdue_days(&self) -> u64 {
        self.assessment.overdue_days
    }

    pub fn fine(&self) -> u64 {
        self.assessment.fine
    }
}
