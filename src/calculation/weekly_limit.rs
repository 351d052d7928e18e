//! Weekly working-time limit.
//!
//! The weekly window is the most recent `weekly_window_entries` records in
//! insertion order, not a calendar week.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::RuleTable;
use crate::models::{Severity, Violation, ViolationKind};

/// Clause reference for the weekly maximum (six working days of eight hours).
pub const WEEKLY_CLAUSE: &str = "ArbZG §3";

/// Sums the most recent entries of the weekly window.
///
/// `entries` is ordered by insertion, oldest first. Entries older than the
/// window do not affect the result, whatever their order.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::weekly_hours;
/// use arbzg_engine::config::ARBZG_RULES;
/// use rust_decimal::Decimal;
///
/// let entries: Vec<Decimal> = (0..9).map(|_| Decimal::from(8)).collect();
/// assert_eq!(weekly_hours(&entries, &ARBZG_RULES), Decimal::from(56));
/// ```
pub fn weekly_hours(entries: &[Decimal], rules: &RuleTable) -> Decimal {
    let skip = entries.len().saturating_sub(rules.weekly_window_entries);
    entries[skip..].iter().sum()
}

/// Returns `true` when `sum_of_worked_hours` stays within the weekly maximum.
pub fn check_weekly_limit(sum_of_worked_hours: Decimal, rules: &RuleTable) -> bool {
    sum_of_worked_hours <= rules.max_weekly_hours
}

/// Returns a `WeeklyLimit` violation when the weekly maximum is exceeded.
pub fn weekly_limit_violation(sum_of_worked_hours: Decimal, rules: &RuleTable) -> Option<Violation> {
    if check_weekly_limit(sum_of_worked_hours, rules) {
        return None;
    }

    warn!(weekly_hours = %sum_of_worked_hours, "Weekly working time exceeded");

    Some(Violation::new(
        ViolationKind::WeeklyLimit,
        Severity::Critical,
        format!(
            "Weekly working hours ({}h) exceeded maximum of {} hours",
            sum_of_worked_hours.normalize(),
            rules.max_weekly_hours.normalize()
        ),
        WEEKLY_CLAUSE,
    ))
}
