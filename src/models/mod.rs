//! Core data models for the ArbZG compliance engine.
//!
//! Dates and times use `chrono`'s naive types: `NaiveTime` for a time of
//! day, `NaiveDate` for a calendar date and `NaiveDateTime` for a timestamp.

mod interval;
mod leave;
mod time_slot;
mod violation;
mod work_interval;

pub use interval::{DateInterval, TimeRange};
pub use leave::{HalfDayPeriod, LeaveDuration, LeaveKind, LeaveRequest, LeaveStatus};
pub use time_slot::{SlotDuration, TimeSlot};
pub use violation::{
    ComplianceReport, ComplianceResult, ComplianceStats, RestFinding, Severity, Violation,
    ViolationKind,
};
pub use work_interval::WorkInterval;
