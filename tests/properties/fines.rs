//! Property tests for fine assessment.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use libris::LoanPolicy;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: fine = max(0, floor((now - due) / 86400)) * rate.
    #[test]
    fn property_fine_is_whole_days_late_times_rate(
        due in 0i64..2_000_000_000,
        offset in -5_000_000i64..5_000_000,
        rate in 0u64..1_000,
    ) {
        let policy = LoanPolicy::new(7, rate);
        let due_at = Utc.timestamp_opt(due, 0).unwrap();
        let now = due_at + Duration::seconds(offset);

        let assessment = policy.assess(due_at, now);

        let expected_days = if offset > 0 { (offset / 86_400) as u64 } else { 0 };
        prop_assert_eq!(assessment.overdue, offset > 0);
        prop_assert_eq!(assessment.overdue_days, expected_days);
        prop_assert_eq!(assessment.fine, expected_days * rate);
    }

    /// PROPERTY: the due time is always the issue time plus the period.
    #[test]
    fn property_due_is_issue_plus_period(issued in 0i64..2_000_000_000, days in 1u32..365) {
        let policy = LoanPolicy::new(days, 10);
        let issued_at = Utc.timestamp_opt(issued, 0).unwrap();

        prop_assert_eq!(
            policy.due_from(issued_at),
            Some(issued_at + Duration::days(i64::from(days)))
        );
    }
}
