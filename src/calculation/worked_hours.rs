//! Worked-hours calculation.
//!
//! Hours are carried as [`Decimal`] and rounded to two places with half-up
//! rounding (midpoint away from zero), so threshold comparisons such as
//! "exactly 9.00 hours" never suffer from binary floating-point drift.

use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::{SlotDuration, TimeRange};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Converts minutes into unrounded decimal hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / MINUTES_PER_HOUR
}

/// Rounds an hour figure to two decimal places, midpoint away from zero.
///
/// Trailing zeros are stripped, so `8.50` comes back as `8.5`.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::round_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_hours(Decimal::new(8125, 3)), Decimal::new(813, 2)); // 8.125 -> 8.13
/// ```
pub fn round_hours(hours: Decimal) -> Decimal {
    hours
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Computes worked hours between two times of day, minus the break.
///
/// `((end - start) in minutes - break_minutes) / 60`, rounded to two
/// decimal places. When `end <= start` or the break exceeds the span the
/// result is zero or negative; no error is raised.
///
/// # Examples
///
/// ```
/// use arbzg_engine::calculation::compute_worked_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
///
/// assert_eq!(compute_worked_hours(start, end, 30), Decimal::new(75, 1)); // 7.5
/// assert_eq!(compute_worked_hours(end, start, 0), Decimal::from(-8));
/// ```
pub fn compute_worked_hours(start: NaiveTime, end: NaiveTime, break_minutes: i64) -> Decimal {
    let span_minutes = (end - start).num_minutes();
    let worked_minutes = span_minutes - break_minutes;

    if worked_minutes <= 0 {
        warn!(
            %start,
            %end,
            break_minutes,
            worked_minutes,
            "Worked time is not positive; passing the value through"
        );
    }

    round_hours(minutes_to_hours(worked_minutes))
}

/// Splits a booked range into whole hours and remaining minutes.
///
/// Hours are floored, so the minute part is always in `0..60`.
pub fn slot_duration(range: TimeRange) -> SlotDuration {
    let total_minutes = range.minutes();
    SlotDuration {
        hours: total_minutes.div_euclid(60),
        minutes: total_minutes.rem_euclid(60),
        total_minutes,
    }
}
