//! Calculation logic for the ArbZG compliance engine.
//!
//! This module contains the pure functions of the evaluator: worked-hours
//! calculation, the daily hours and break checks, the rest-period and weekly
//! limit checks, interval overlap detection, leave-day counting, and the
//! validation run before bookings and leave requests are stored.
//!
//! Nothing here holds state; every function can be called from any thread.

mod booking_validation;
mod daily_compliance;
mod evaluation;
mod leave_days;
mod leave_validation;
mod overlap;
mod rest_period;
mod weekly_limit;
mod worked_hours;

pub use booking_validation::{BookingIssue, validate_time_slot};
pub use daily_compliance::{BREAK_CLAUSE, DAILY_HOURS_CLAUSE, check_daily_compliance};
pub use evaluation::{compliance_stats, evaluate_work_day, evaluate_work_days};
pub use leave_days::{inclusive_day_count, leave_days, remaining_vacation_days};
pub use leave_validation::{LeaveIssue, validate_leave_request};
pub use overlap::{Conflict, Overlap, Scheduled, find_conflicts};
pub use rest_period::{REST_CLAUSE, check_rest_period, rest_hours_between, rest_period_violation};
pub use weekly_limit::{WEEKLY_CLAUSE, check_weekly_limit, weekly_hours, weekly_limit_violation};
pub use worked_hours::{compute_worked_hours, minutes_to_hours, round_hours, slot_duration};
