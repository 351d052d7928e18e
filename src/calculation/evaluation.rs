//! Day and series evaluation.
//!
//! These are the hardened entry points: intervals are validated before any
//! figure is computed, so reversed spans surface as errors instead of
//! negative hours.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::daily_compliance::check_daily_compliance;
use super::rest_period::{rest_hours_between, rest_period_violation};
use super::weekly_limit::{check_weekly_limit, weekly_hours, weekly_limit_violation};
use crate::config::RuleTable;
use crate::error::EngineResult;
use crate::models::{
    ComplianceReport, ComplianceResult, ComplianceStats, RestFinding, WorkInterval,
};

/// Evaluates a single working day.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInterval`] when the day ends
/// at or before its start and [`crate::error::EngineError::InvalidBreak`]
/// when the break fills the whole span.
///
/// # Example
///
/// ```
/// use arbzg_engine::calculation::evaluate_work_day;
/// use arbzg_engine::config::ARBZG_RULES;
/// use arbzg_engine::models::WorkInterval;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let day = WorkInterval::new(
///     NaiveDate::from_ymd_opt(2024, 10, 16).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     30,
/// );
///
/// let result = evaluate_work_day(&day, &ARBZG_RULES)?;
/// assert_eq!(result.worked_hours, Decimal::new(75, 1));
/// assert!(result.is_compliant);
/// # Ok::<(), arbzg_engine::error::EngineError>(())
/// ```
pub fn evaluate_work_day(interval: &WorkInterval, rules: &RuleTable) -> EngineResult<ComplianceResult> {
    interval.validate()?;

    let worked_hours = interval.worked_hours();
    let violations =
        check_daily_compliance(worked_hours, i64::from(interval.break_minutes), rules);

    if !violations.is_empty() {
        warn!(
            date = %interval.date,
            worked_hours = %worked_hours,
            violations = violations.len(),
            "Working day violates ArbZG"
        );
    }

    Ok(ComplianceResult::new(interval.date, worked_hours, violations))
}

/// Evaluates a series of working days given in insertion order.
///
/// - Every day is evaluated on its own; the first invalid day aborts the
///   whole evaluation.
/// - Rest periods are checked between chronologically consecutive days and
///   reported in [`ComplianceReport::rest_findings`], never inside the
///   per-day lists.
/// - The weekly sum covers the most recently inserted days.
pub fn evaluate_work_days(days: &[WorkInterval], rules: &RuleTable) -> EngineResult<ComplianceReport> {
    let results = days
        .iter()
        .map(|day| evaluate_work_day(day, rules))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut chronological: Vec<&WorkInterval> = days.iter().collect();
    chronological.sort_by_key(|day| day.start_timestamp());

    let rest_findings: Vec<RestFinding> = chronological
        .windows(2)
        .filter_map(|pair| {
            let (previous, current) = (pair[0], pair[1]);
            let previous_end = previous.end_timestamp();
            let current_start = current.start_timestamp();
            rest_period_violation(current_start, Some(previous_end), rules).map(|violation| {
                RestFinding {
                    date: current.date,
                    rest_hours: rest_hours_between(previous_end, current_start),
                    violation,
                }
            })
        })
        .collect();

    let hours: Vec<Decimal> = results.iter().map(|r| r.worked_hours).collect();
    let weekly = weekly_hours(&hours, rules);
    let stats = compliance_stats(&results);

    debug!(
        days = stats.total_days,
        compliant = stats.compliant_days,
        rest_findings = rest_findings.len(),
        weekly_hours = %weekly,
        "Evaluated working days"
    );

    Ok(ComplianceReport {
        days: results,
        rest_findings,
        weekly_hours: weekly,
        weekly_limit_ok: check_weekly_limit(weekly, rules),
        weekly_violation: weekly_limit_violation(weekly, rules),
        stats,
    })
}

/// Counts compliant and non-compliant days.
///
/// The rate is the rounded percentage of compliant days (half up), and 100
/// for an empty list.
pub fn compliance_stats(results: &[ComplianceResult]) -> ComplianceStats {
    let total_days = results.len();
    let compliant_days = results.iter().filter(|r| r.is_compliant).count();

    let compliance_rate = if total_days == 0 {
        100
    } else {
        (Decimal::from(compliant_days) * Decimal::ONE_HUNDRED / Decimal::from(total_days))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or_default()
    };

    ComplianceStats {
        total_days,
        compliant_days,
        violation_days: total_days - compliant_days,
        compliance_rate,
    }
}
