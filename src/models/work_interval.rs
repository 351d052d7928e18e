//! Work interval model.
//!
//! This module defines the [`WorkInterval`] struct representing one recorded
//! working day: a date, a wall-clock start and end, and the total break taken.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_worked_hours;
use crate::error::{EngineError, EngineResult};

/// A recorded working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The calendar date of the working day.
    pub date: NaiveDate,
    /// The wall-clock start of work.
    pub start: NaiveTime,
    /// The wall-clock end of work.
    pub end: NaiveTime,
    /// Total break taken during the day, in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}

impl WorkInterval {
    /// Creates a new work interval.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Self {
        Self {
            date,
            start,
            end,
            break_minutes,
        }
    }

    /// Minutes between start and end, before breaks are deducted.
    pub fn span_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Calculates the worked hours for the day.
    ///
    /// The break is deducted from the span and the result rounded to two
    /// decimal places. Reversed intervals produce negative hours; use
    /// [`WorkInterval::validate`] first to reject them.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbzg_engine::models::WorkInterval;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let day = WorkInterval::new(
    ///     NaiveDate::from_ymd_opt(2024, 10, 18).unwrap(),
    ///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    ///     45,
    /// );
    /// assert_eq!(day.worked_hours(), Decimal::new(875, 2)); // 8.75 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        compute_worked_hours(self.start, self.end, i64::from(self.break_minutes))
    }

    /// Checks that the interval describes a real working span.
    ///
    /// Fails with [`EngineError::InvalidInterval`] when `end <= start` and
    /// with [`EngineError::InvalidBreak`] when the break is at least as long
    /// as the span.
    pub fn validate(&self) -> EngineResult<()> {
        let span_minutes = self.span_minutes();
        if span_minutes <= 0 {
            return Err(EngineError::InvalidInterval {
                date: self.date,
                start: self.start,
                end: self.end,
            });
        }
        if i64::from(self.break_minutes) >= span_minutes {
            return Err(EngineError::InvalidBreak {
                date: self.date,
                break_minutes: self.break_minutes,
                span_minutes,
            });
        }
        Ok(())
    }

    /// The moment work started on this day.
    pub fn start_timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    /// The moment work ended on this day.
    pub fn end_timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.end)
    }
}
