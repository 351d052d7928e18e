//! Time-of-day and calendar-date ranges.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A wall-clock range on a single day, `[start, end)`.
///
/// Used for booking slots. Construction does not check ordering so that
/// validation can report reversed ranges instead of failing early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// The first minute of the range.
    pub start: NaiveTime,
    /// The first minute after the range.
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns `true` when `end` lies strictly after `start`.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Length of the range in minutes; negative for reversed ranges.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// A range of calendar days with both endpoints included.
///
/// Used for vacation and sick-leave periods. A half-day request has
/// `start == end`.
///
/// # Example
///
/// ```
/// use arbzg_engine::models::DateInterval;
/// use chrono::NaiveDate;
///
/// let period = DateInterval::new(
///     NaiveDate::from_ymd_opt(2024, 10, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 10, 18).unwrap(),
/// );
/// assert!(period.is_valid());
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    /// The first day of the period.
    pub start: NaiveDate,
    /// The last day of the period.
    pub end: NaiveDate,
}

impl DateInterval {
    /// Creates a new date interval.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates an interval covering a single day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns `true` when `end >= start`.
    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }

    /// Returns `true` when the period covers exactly one day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` when `date` falls within the period, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
