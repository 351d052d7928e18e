//! Leave-day counting.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::LeavePolicy;
use crate::models::{DateInterval, LeaveDuration, LeaveKind, LeaveRequest};

const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Number of days from `start` to `end`, both endpoints counted.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::inclusive_day_count;
/// use chrono::NaiveDate;
///
/// let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// assert_eq!(inclusive_day_count(d("2024-10-16"), d("2024-10-16")), 1);
/// assert_eq!(inclusive_day_count(d("2024-10-16"), d("2024-10-18")), 3);
/// ```
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Days charged for a leave period.
///
/// A half day is always `0.5`, whatever the span.
pub fn leave_days(period: DateInterval, duration: LeaveDuration) -> Decimal {
    match duration {
        LeaveDuration::HalfDay(_) => HALF_DAY,
        LeaveDuration::FullDay => Decimal::from(inclusive_day_count(period.start, period.end)),
    }
}

/// Vacation days left after the given requests.
///
/// Only vacation requests count; sick leave never reduces the allowance.
/// The result is negative when the allowance is already overdrawn.
pub fn remaining_vacation_days(existing: &[LeaveRequest], policy: &LeavePolicy) -> Decimal {
    let taken: Decimal = existing
        .iter()
        .filter(|request| request.kind == LeaveKind::Vacation)
        .map(|request| request.total_days)
        .sum();
    policy.annual_vacation_days - taken
}
