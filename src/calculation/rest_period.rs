//! Rest-period check between consecutive working days (ArbZG §5).
//!
//! The check is a standalone predicate: it never adds to the per-day
//! violation list produced by [`super::check_daily_compliance`].

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::warn;

use super::worked_hours::{minutes_to_hours, round_hours};
use crate::config::RuleTable;
use crate::models::{Severity, Violation, ViolationKind};

/// Clause reference for the minimum rest period.
pub const REST_CLAUSE: &str = "ArbZG §5";

/// Hours elapsed between the end of one day and the start of the next.
pub fn rest_hours_between(previous_day_end: NaiveDateTime, current_day_start: NaiveDateTime) -> Decimal {
    round_hours(minutes_to_hours(
        (current_day_start - previous_day_end).num_minutes(),
    ))
}

/// Returns `true` when enough rest preceded `current_day_start`.
///
/// With no previous end (first recorded day) the check passes.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::check_rest_period;
/// use arbzg_engine::config::ARBZG_RULES;
/// use chrono::NaiveDateTime;
///
/// let previous_end = NaiveDateTime::parse_from_str("2024-10-16 21:00", "%Y-%m-%d %H:%M").unwrap();
/// let start = NaiveDateTime::parse_from_str("2024-10-17 08:00", "%Y-%m-%d %H:%M").unwrap();
///
/// assert!(check_rest_period(start, Some(previous_end), &ARBZG_RULES));
/// assert!(check_rest_period(start, None, &ARBZG_RULES));
/// ```
pub fn check_rest_period(
    current_day_start: NaiveDateTime,
    previous_day_end: Option<NaiveDateTime>,
    rules: &RuleTable,
) -> bool {
    match previous_day_end {
        None => true,
        Some(previous_end) => {
            let elapsed = minutes_to_hours((current_day_start - previous_end).num_minutes());
            elapsed >= rules.min_rest_hours
        }
    }
}

/// Returns an `InsufficientRest` violation when the rest period is too short.
pub fn rest_period_violation(
    current_day_start: NaiveDateTime,
    previous_day_end: Option<NaiveDateTime>,
    rules: &RuleTable,
) -> Option<Violation> {
    let previous_end = previous_day_end?;
    if check_rest_period(current_day_start, Some(previous_end), rules) {
        return None;
    }

    let rest_hours = rest_hours_between(previous_end, current_day_start);
    warn!(
        %previous_end,
        %current_day_start,
        rest_hours = %rest_hours,
        "Rest period shorter than required"
    );

    Some(Violation::new(
        ViolationKind::InsufficientRest,
        Severity::Critical,
        format!(
            "Rest period ({}h) shorter than required minimum of {} hours",
            rest_hours.normalize(),
            rules.min_rest_hours.normalize()
        ),
        REST_CLAUSE,
    ))
}
