//! Vacation and sick-leave requests.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DateInterval;
use crate::calculation::leave_days;

/// The category of leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Paid vacation, counted against the annual allowance.
    Vacation,
    /// Sick leave, possibly backed by a medical certificate.
    SickLeave,
}

/// Which half of the day a half-day request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfDayPeriod {
    /// Before noon.
    Morning,
    /// After noon.
    Afternoon,
}

/// Whether a request covers whole days or half a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDuration {
    /// Every day of the period, endpoints included.
    FullDay,
    /// Half of a single day.
    HalfDay(HalfDayPeriod),
}

/// Approval state of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Granted.
    Approved,
    /// Declined.
    Rejected,
}

/// A stored vacation or sick-leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// Vacation or sick leave.
    pub kind: LeaveKind,
    /// The requested days.
    pub period: DateInterval,
    /// Full days or half a day.
    pub duration: LeaveDuration,
    /// Days charged for the request (0.5 for half days).
    pub total_days: Decimal,
    /// Whether a medical certificate was supplied.
    #[serde(default)]
    pub has_medical_certificate: bool,
    /// Destination, reason or other free text; may be empty.
    #[serde(default)]
    pub note: String,
    /// Approval state.
    #[serde(default)]
    pub status: LeaveStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Creates a pending request and derives its day count.
    pub fn new(kind: LeaveKind, period: DateInterval, duration: LeaveDuration) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            period,
            duration,
            total_days: leave_days(period, duration),
            has_medical_certificate: false,
            note: String::new(),
            status: LeaveStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Sets the free-text note, trimmed.
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.trim().to_string();
        self
    }

    /// Records whether a medical certificate was supplied.
    pub fn with_certificate(mut self, has_medical_certificate: bool) -> Self {
        self.has_medical_certificate = has_medical_certificate;
        self
    }
}
