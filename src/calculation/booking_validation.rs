//! Validation of new booking slots.

use chrono::NaiveTime;
use thiserror::Error;
use tracing::debug;

use super::overlap::find_conflicts;
use crate::models::{TimeRange, TimeSlot};

/// A reason a booking slot cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingIssue {
    /// The slot ends at or before its start.
    #[error("End time must be after start time")]
    EndNotAfterStart,

    /// The slot clashes with an existing booking.
    #[error(
        "Time slot overlaps with existing booking: {} - {}{}",
        hh_mm(.start),
        hh_mm(.end),
        comment_suffix(.comment)
    )]
    Overlap {
        /// Start of the existing booking.
        start: NaiveTime,
        /// End of the existing booking.
        end: NaiveTime,
        /// Comment of the existing booking.
        comment: String,
    },
}

fn hh_mm(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn comment_suffix(comment: &str) -> String {
    if comment.is_empty() {
        String::new()
    } else {
        format!(" ({})", comment)
    }
}

/// A reversed range clashes when either endpoint lies inside `booked`.
fn endpoint_inside(range: &TimeRange, booked: &TimeRange) -> bool {
    (range.start >= booked.start && range.start < booked.end)
        || (range.end > booked.start && range.end <= booked.end)
}

/// Collects every reason `range` cannot be booked next to `existing`.
///
/// An empty result means the slot may be stored. Each clashing booking
/// produces its own [`BookingIssue::Overlap`], in booking order. A
/// reversed range is reported as [`BookingIssue::EndNotAfterStart`] and is
/// still checked for clashes at its two endpoints.
pub fn validate_time_slot(range: TimeRange, existing: &[TimeSlot]) -> Vec<BookingIssue> {
    let mut issues = Vec::new();

    if !range.is_valid() {
        issues.push(BookingIssue::EndNotAfterStart);
    }

    let clashing: Vec<&TimeSlot> = if range.is_valid() {
        find_conflicts(&range, existing)
            .into_iter()
            .map(|conflict| conflict.record)
            .collect()
    } else {
        existing
            .iter()
            .filter(|slot| endpoint_inside(&range, &slot.range))
            .collect()
    };

    issues.extend(clashing.into_iter().map(|slot| BookingIssue::Overlap {
        start: slot.range.start,
        end: slot.range.end,
        comment: slot.comment.clone(),
    }));

    debug!(
        start = %range.start,
        end = %range.end,
        issues = issues.len(),
        "Validated time slot"
    );

    issues
}
