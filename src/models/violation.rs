//! Compliance result models.
//!
//! This module contains the [`Violation`] type produced by the rule checks,
//! the per-day [`ComplianceResult`], and the aggregates built over a series
//! of days.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The rule that a violation breaches.
///
/// # Example
///
/// ```
/// use arbzg_engine::models::ViolationKind;
///
/// let kind = ViolationKind::InsufficientBreak;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"INSUFFICIENT_BREAK\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Daily working time above the regular or extended maximum.
    MaxDailyHours,
    /// Break shorter than required for the worked hours.
    InsufficientBreak,
    /// Too little rest since the previous working day.
    InsufficientRest,
    /// Too many hours across the weekly window.
    WeeklyLimit,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::MaxDailyHours => write!(f, "Max Daily Hours"),
            ViolationKind::InsufficientBreak => write!(f, "Insufficient Break"),
            ViolationKind::InsufficientRest => write!(f, "Insufficient Rest"),
            ViolationKind::WeeklyLimit => write!(f, "Weekly Limit"),
        }
    }
}

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A hard breach of the law.
    Critical,
    /// Permitted only under conditions (e.g. later compensation).
    Warning,
}

/// A single rule breach.
///
/// Violations are produced fresh by every evaluation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that was breached.
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    /// Human-readable description including the actual and allowed figures.
    pub message: String,
    /// How serious the breach is.
    pub severity: Severity,
    /// The ArbZG paragraph the rule comes from.
    pub clause_ref: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(
        kind: ViolationKind,
        severity: Severity,
        message: impl Into<String>,
        clause_ref: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
            clause_ref: clause_ref.into(),
        }
    }

    /// Returns `true` for critical violations.
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// The outcome of evaluating one working day.
///
/// `is_compliant` holds exactly when `violations` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// The evaluated date.
    pub date: NaiveDate,
    /// Worked hours after breaks, rounded to two decimals.
    pub worked_hours: Decimal,
    /// Violations in rule order: daily hours first, then breaks.
    pub violations: Vec<Violation>,
    /// Whether the day breaches no rule.
    pub is_compliant: bool,
}

impl ComplianceResult {
    /// Creates a result, deriving `is_compliant` from the violations.
    pub fn new(date: NaiveDate, worked_hours: Decimal, violations: Vec<Violation>) -> Self {
        let is_compliant = violations.is_empty();
        Self {
            date,
            worked_hours,
            violations,
            is_compliant,
        }
    }
}

/// Summary counts over a list of evaluated days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStats {
    /// Number of evaluated days.
    pub total_days: usize,
    /// Days without any violation.
    pub compliant_days: usize,
    /// Days with at least one violation.
    pub violation_days: usize,
    /// Share of compliant days as a rounded percentage; 100 when empty.
    pub compliance_rate: u32,
}

/// A rest-period breach between two consecutive working days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestFinding {
    /// The date of the day that started too early.
    pub date: NaiveDate,
    /// Hours of rest since the previous day ended.
    pub rest_hours: Decimal,
    /// The resulting violation.
    pub violation: Violation,
}

/// The outcome of evaluating a series of working days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// One result per day, in input order.
    pub days: Vec<ComplianceResult>,
    /// Rest-period breaches, kept apart from the per-day violation lists.
    pub rest_findings: Vec<RestFinding>,
    /// Worked hours over the most recent weekly window.
    pub weekly_hours: Decimal,
    /// Whether `weekly_hours` stays within the weekly maximum.
    pub weekly_limit_ok: bool,
    /// The weekly-limit violation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_violation: Option<Violation>,
    /// Summary counts over `days`.
    pub stats: ComplianceStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_result_without_violations_is_compliant() {
        let result = ComplianceResult::new(date("2024-10-16"), Decimal::new(75, 1), vec![]);
        assert!(result.is_compliant);
    }

    #[test]
    fn test_result_with_violation_is_not_compliant() {
        let violation = Violation::new(
            ViolationKind::MaxDailyHours,
            Severity::Warning,
            "Working hours (9h) exceeded standard 8 hours. Compensation required.",
            "ArbZG §3",
        );
        let result = ComplianceResult::new(date("2024-10-16"), Decimal::from(9), vec![violation]);
        assert!(!result.is_compliant);
        assert!(!result.violations[0].is_critical());
    }

    #[test]
    fn test_violation_serialization() {
        let violation = Violation::new(
            ViolationKind::InsufficientBreak,
            Severity::Critical,
            "Break time (30 min) insufficient",
            "ArbZG §4",
        );

        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["type"], "INSUFFICIENT_BREAK");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["clause_ref"], "ArbZG §4");

        let deserialized: Violation = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, violation);
    }

    #[test]
    fn test_violation_kind_display() {
        assert_eq!(ViolationKind::MaxDailyHours.to_string(), "Max Daily Hours");
        assert_eq!(ViolationKind::WeeklyLimit.to_string(), "Weekly Limit");
    }

    #[test]
    fn test_worked_hours_serialized_as_string() {
        let result = ComplianceResult::new(date("2024-10-18"), Decimal::new(875, 2), vec![]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"worked_hours\":\"8.75\""));
        assert!(json.contains("\"is_compliant\":true"));
    }
}
