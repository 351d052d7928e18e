//! Interval overlap detection.
//!
//! Two boundary conventions are in use:
//!
//! - [`TimeRange`] is half-open, so a slot ending at 12:00 does not clash
//!   with one starting at 12:00.
//! - [`DateInterval`] includes both endpoints, so a request ending on a day
//!   clashes with one starting on the same day.

use crate::models::{DateInterval, LeaveRequest, TimeRange, TimeSlot};

/// Intervals that can be tested for a shared instant or day.
pub trait Overlap {
    /// Returns `true` when `self` and `other` share any instant or day.
    fn overlaps(&self, other: &Self) -> bool;
}

impl Overlap for TimeRange {
    fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

impl Overlap for DateInterval {
    fn overlaps(&self, other: &Self) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}

/// Stored records that occupy a span of time.
pub trait Scheduled {
    /// The kind of span the record occupies.
    type Span: Overlap;

    /// Returns the span the record occupies.
    fn span(&self) -> &Self::Span;
}

impl Scheduled for TimeSlot {
    type Span = TimeRange;

    fn span(&self) -> &TimeRange {
        &self.range
    }
}

impl Scheduled for LeaveRequest {
    type Span = DateInterval;

    fn span(&self) -> &DateInterval {
        &self.period
    }
}

/// An existing record that clashes with a candidate span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict<'a, R> {
    /// Position of the record in the searched slice.
    pub index: usize,
    /// The clashing record.
    pub record: &'a R,
}

/// Returns every record whose span overlaps `candidate`, in input order.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::find_conflicts;
/// use arbzg_engine::models::{TimeRange, TimeSlot};
/// use chrono::NaiveTime;
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let existing = vec![
///     TimeSlot::new(TimeRange::new(t(8), t(10)), "a"),
///     TimeSlot::new(TimeRange::new(t(10), t(12)), "b"),
///     TimeSlot::new(TimeRange::new(t(13), t(14)), "c"),
/// ];
///
/// let conflicts = find_conflicts(&TimeRange::new(t(9), t(11)), &existing);
/// assert_eq!(conflicts.len(), 2);
/// assert_eq!(conflicts[0].index, 0);
/// assert_eq!(conflicts[1].record.comment, "b");
/// ```
pub fn find_conflicts<'a, R: Scheduled>(
    candidate: &R::Span,
    existing: &'a [R],
) -> Vec<Conflict<'a, R>> {
    existing
        .iter()
        .enumerate()
        .filter(|(_, record)| candidate.overlaps(record.span()))
        .map(|(index, record)| Conflict { index, record })
        .collect()
}
