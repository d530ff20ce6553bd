//! Clock port - source of "now" for issue and return

use chrono::{DateTime, Utc};

/// Wall clock abstraction so due dates and fines are testable
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
