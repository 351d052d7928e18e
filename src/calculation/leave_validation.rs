//! Validation of new vacation and sick-leave requests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use super::leave_days::remaining_vacation_days;
use super::overlap::Overlap;
use crate::config::LeavePolicy;
use crate::models::{LeaveDuration, LeaveKind, LeaveRequest};

/// A reason a leave request cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveIssue {
    /// The request carries no destination (vacation) or reason (sick leave).
    #[error("{}", note_required_message(.kind))]
    NoteRequired {
        /// Kind of the request missing its note.
        kind: LeaveKind,
    },

    /// A vacation that would start before today.
    #[error("Start date cannot be in the past")]
    StartInPast,

    /// A full-day request whose last day precedes its first.
    #[error("End date must be after or equal to start date")]
    EndBeforeStart,

    /// A half-day request spanning more than one day.
    #[error("Half-day leave must be on a single day")]
    HalfDayNotSingleDay,

    /// The period clashes with an existing request of the same kind.
    #[error("This period overlaps with an existing {} request: {start} - {end}", kind_label(.kind))]
    Overlap {
        /// Kind of the clashing request.
        kind: LeaveKind,
        /// First day of the clashing request.
        start: NaiveDate,
        /// Last day of the clashing request.
        end: NaiveDate,
    },

    /// A vacation that needs more days than are left.
    #[error(
        "Not enough vacation days. You have {remaining} days remaining, but requesting {requested} days."
    )]
    InsufficientAllowance {
        /// Days left before this request.
        remaining: Decimal,
        /// Days this request would use.
        requested: Decimal,
    },

    /// Sick leave long enough to need a certificate, submitted without one.
    #[error("Medical certificate is required for sick leave longer than {limit} days")]
    CertificateRequired {
        /// Days of sick leave requested.
        days: i64,
        /// Longest sick leave allowed without certificate.
        limit: i64,
    },
}

fn note_required_message(kind: &LeaveKind) -> &'static str {
    match kind {
        LeaveKind::Vacation => "Destination is required",
        LeaveKind::SickLeave => "Reason for sick leave is required",
    }
}

fn kind_label(kind: &LeaveKind) -> &'static str {
    match kind {
        LeaveKind::Vacation => "vacation",
        LeaveKind::SickLeave => "sick leave",
    }
}

/// Collects every reason `candidate` cannot be stored next to `existing`.
///
/// Overlaps are only checked against requests of the same kind. `today`
/// is supplied by the caller so the check stays free of clock access.
pub fn validate_leave_request(
    candidate: &LeaveRequest,
    existing: &[LeaveRequest],
    today: NaiveDate,
    policy: &LeavePolicy,
) -> Vec<LeaveIssue> {
    let mut issues = Vec::new();
    let period = candidate.period;

    if candidate.note.trim().is_empty() {
        issues.push(LeaveIssue::NoteRequired { kind: candidate.kind });
    }

    if candidate.kind == LeaveKind::Vacation && period.start < today {
        issues.push(LeaveIssue::StartInPast);
    }

    match candidate.duration {
        LeaveDuration::FullDay if !period.is_valid() => issues.push(LeaveIssue::EndBeforeStart),
        LeaveDuration::HalfDay(_) if !period.is_single_day() => {
            issues.push(LeaveIssue::HalfDayNotSingleDay)
        }
        _ => {}
    }

    issues.extend(
        existing
            .iter()
            .filter(|request| request.kind == candidate.kind && period.overlaps(&request.period))
            .map(|request| LeaveIssue::Overlap {
                kind: request.kind,
                start: request.period.start,
                end: request.period.end,
            }),
    );

    match candidate.kind {
        LeaveKind::Vacation => {
            let remaining = remaining_vacation_days(existing, policy);
            if candidate.total_days > remaining {
                issues.push(LeaveIssue::InsufficientAllowance {
                    remaining: remaining.normalize(),
                    requested: candidate.total_days.normalize(),
                });
            }
        }
        LeaveKind::SickLeave => {
            // a reversed period still counts its calendar days
            let days = (period.end - period.start).num_days().abs() + 1;
            if days > policy.certificate_required_after_days && !candidate.has_medical_certificate {
                issues.push(LeaveIssue::CertificateRequired {
                    days,
                    limit: policy.certificate_required_after_days,
                });
            }
        }
    }

    debug!(
        kind = ?candidate.kind,
        start = %period.start,
        end = %period.end,
        issues = issues.len(),
        "Validated leave request"
    );

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateInterval, HalfDayPeriod};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn today() -> NaiveDate {
        date("2024-10-15")
    }

    fn vacation(start: &str, end: &str) -> LeaveRequest {
        LeaveRequest::new(
            LeaveKind::Vacation,
            DateInterval::new(date(start), date(end)),
            LeaveDuration::FullDay,
        )
        .with_note("Lisbon")
    }

    fn sick_leave(start: &str, end: &str) -> LeaveRequest {
        LeaveRequest::new(
            LeaveKind::SickLeave,
            DateInterval::new(date(start), date(end)),
            LeaveDuration::FullDay,
        )
        .with_note("Flu")
    }

    fn validate(candidate: &LeaveRequest, existing: &[LeaveRequest]) -> Vec<LeaveIssue> {
        validate_leave_request(candidate, existing, today(), &LeavePolicy::default())
    }

    #[test]
    fn test_valid_vacation() {
        assert!(validate(&vacation("2024-10-16", "2024-10-18"), &[]).is_empty());
    }

    #[test]
    fn test_vacation_in_past() {
        let issues = validate(&vacation("2024-10-14", "2024-10-16"), &[]);
        assert_eq!(issues, vec![LeaveIssue::StartInPast]);
    }

    #[test]
    fn test_vacation_starting_today_is_allowed() {
        assert!(validate(&vacation("2024-10-15", "2024-10-15"), &[]).is_empty());
    }

    #[test]
    fn test_sick_leave_in_past_is_allowed() {
        assert!(validate(&sick_leave("2024-10-10", "2024-10-11"), &[]).is_empty());
    }

    #[test]
    fn test_end_before_start() {
        let issues = validate(&sick_leave("2024-10-18", "2024-10-16"), &[]);
        assert!(issues.contains(&LeaveIssue::EndBeforeStart));
    }

    #[test]
    fn test_half_day_over_several_days() {
        let candidate = LeaveRequest::new(
            LeaveKind::Vacation,
            DateInterval::new(date("2024-10-16"), date("2024-10-17")),
            LeaveDuration::HalfDay(HalfDayPeriod::Morning),
        )
        .with_note("Dentist");
        assert_eq!(validate(&candidate, &[]), vec![LeaveIssue::HalfDayNotSingleDay]);
    }

    #[test]
    fn test_overlap_on_shared_boundary_day() {
        let existing = vec![vacation("2024-10-20", "2024-10-25")];
        let issues = validate(&vacation("2024-10-16", "2024-10-20"), &existing);

        assert_eq!(
            issues,
            vec![LeaveIssue::Overlap {
                kind: LeaveKind::Vacation,
                start: date("2024-10-20"),
                end: date("2024-10-25"),
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "This period overlaps with an existing vacation request: 2024-10-20 - 2024-10-25"
        );
    }

    #[test]
    fn test_overlap_reports_every_conflict() {
        let existing = vec![
            vacation("2024-10-16", "2024-10-17"),
            vacation("2024-10-21", "2024-10-22"),
        ];
        let issues = validate(&vacation("2024-10-17", "2024-10-21"), &existing);
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_other_kind_does_not_overlap() {
        let existing = vec![sick_leave("2024-10-16", "2024-10-18")];
        assert!(validate(&vacation("2024-10-16", "2024-10-18"), &existing).is_empty());
    }

    #[test]
    fn test_insufficient_allowance() {
        let existing = vec![vacation("2024-11-01", "2024-11-28")]; // 28 days
        let issues = validate(&vacation("2024-12-01", "2024-12-03"), &existing);

        assert_eq!(
            issues,
            vec![LeaveIssue::InsufficientAllowance {
                remaining: Decimal::from(2),
                requested: Decimal::from(3),
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "Not enough vacation days. You have 2 days remaining, but requesting 3 days."
        );
    }

    #[test]
    fn test_allowance_exactly_used_up() {
        let existing = vec![vacation("2024-11-01", "2024-11-27")]; // 27 days
        assert!(validate(&vacation("2024-12-01", "2024-12-03"), &existing).is_empty());
    }

    #[test]
    fn test_sick_leave_over_three_days_needs_certificate() {
        let issues = validate(&sick_leave("2024-10-14", "2024-10-17"), &[]);
        assert_eq!(
            issues,
            vec![LeaveIssue::CertificateRequired { days: 4, limit: 3 }]
        );
        assert_eq!(
            issues[0].to_string(),
            "Medical certificate is required for sick leave longer than 3 days"
        );
    }

    #[test]
    fn test_sick_leave_with_certificate() {
        let candidate = sick_leave("2024-10-14", "2024-10-17").with_certificate(true);
        assert!(validate(&candidate, &[]).is_empty());
    }

    #[test]
    fn test_three_day_sick_leave_needs_no_certificate() {
        assert!(validate(&sick_leave("2024-10-14", "2024-10-16"), &[]).is_empty());
    }

    #[test]
    fn test_vacation_without_destination() {
        let candidate = vacation("2024-10-16", "2024-10-18").with_note("   ");
        let issues = validate(&candidate, &[]);

        assert_eq!(
            issues,
            vec![LeaveIssue::NoteRequired { kind: LeaveKind::Vacation }]
        );
        assert_eq!(issues[0].to_string(), "Destination is required");
    }

    #[test]
    fn test_sick_leave_without_reason() {
        let candidate = sick_leave("2024-10-14", "2024-10-15").with_note("");
        let issues = validate(&candidate, &[]);

        assert_eq!(
            issues,
            vec![LeaveIssue::NoteRequired { kind: LeaveKind::SickLeave }]
        );
        assert_eq!(issues[0].to_string(), "Reason for sick leave is required");
    }

    #[test]
    fn test_reversed_sick_leave_still_needs_certificate() {
        let issues = validate(&sick_leave("2024-10-18", "2024-10-15"), &[]);
        assert_eq!(
            issues,
            vec![
                LeaveIssue::EndBeforeStart,
                LeaveIssue::CertificateRequired { days: 4, limit: 3 },
            ]
        );
    }
}
