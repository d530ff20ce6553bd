//! Loan policy - how long a book may be kept and what lateness costs
//!
//! Overdue days are whole days past the due time, rounded down; a return
//! within the first day after the due time is overdue by zero days.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Length of one fine day in seconds
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Loan period and fine rate applied at issue and return time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    period_days: u32,
    fine_per_day: u64,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            period_days: 7,
            fine_per_day: 10,
        }
    }
}

impl LoanPolicy {
    pub fn new(period_days: u32, fine_per_day: u64) -> Self {
        Self {
            period_days,
            fine_per_day,
        }
    }

    pub fn period_days(&self) -> u32 {
        self.period_days
    }

    pub fn fine_per_day(&self) -> u64 {
        self.fine_per_day
    }

    /// Due time for a loan issued at `issued_at`
    ///
    /// `None` when the period pushes the due time past the representable range.
    pub fn due_from(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let period = Duration::try_seconds(i64::from(self.period_days) * SECONDS_PER_DAY)?;
        issued_at.checked_add_signed(period)
    }

    /// Assess lateness of a loan due at `due_at`, returned at `now`
    pub fn assess(&self, due_at: DateTime<Utc>, now: DateTime<Utc>) -> FineAssessment {
        if now <= due_at {
            return FineAssessment::on_time();
        }
        let late_seconds = (now - due_at).num_seconds();
        let overdue_days = u64::try_from(late_seconds / SECONDS_PER_DAY).unwrap_or(0);
        FineAssessment {
            overdue: true,
            overdue_days,
            fine: overdue_days.saturating_mul(self.fine_per_day),
        }
    }
}

/// Outcome of applying the fine rule to one loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FineAssessment {
    /// Returned after the due time (even by less than a day)
    pub overdue: bool,
    /// Whole days past due
    pub overdue_days: u64,
    /// Fine in units
    pub fine: u64,
}

impl FineAssessment {
    pub fn on_time() -> Self {
        Self::default()
    }
}
