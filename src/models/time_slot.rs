//! Booked time slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimeRange;
use crate::calculation::slot_duration;

/// Hours-and-minutes breakdown of a booked span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDuration {
    /// Whole hours.
    pub hours: i64,
    /// Remaining minutes after whole hours.
    pub minutes: i64,
    /// The full span in minutes.
    pub total_minutes: i64,
}

impl std::fmt::Display for SlotDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.hours, self.minutes) {
            (0, m) => write!(f, "{}m", m),
            (h, 0) => write!(f, "{}h", h),
            (h, m) => write!(f, "{}h {}m", h, m),
        }
    }
}

/// A time range booked against the current day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique identifier for the slot.
    pub id: Uuid,
    /// The booked range.
    pub range: TimeRange,
    /// Free-text comment; may be empty.
    #[serde(default)]
    pub comment: String,
    /// Length of the booked range.
    pub duration: SlotDuration,
    /// When the slot was booked.
    pub created_at: DateTime<Utc>,
}

impl TimeSlot {
    /// Books a new slot, trimming the comment and deriving its duration.
    pub fn new(range: TimeRange, comment: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            range,
            comment: comment.trim().to_string(),
            duration: slot_duration(range),
            created_at: Utc::now(),
        }
    }
}
