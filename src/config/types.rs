//! Configuration types for working-time evaluation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! statutory defaults used when no file is loaded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thresholds of the German Working Time Act (ArbZG).
///
/// The table is fixed once constructed; evaluation functions only ever
/// borrow it.
///
/// # Example
///
/// ```
/// use arbzg_engine::config::ARBZG_RULES;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ARBZG_RULES.max_daily_hours, Decimal::from(8));
/// assert_eq!(ARBZG_RULES.min_break_minutes_for_9h, 45);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Regular daily maximum (§3 sentence 1).
    pub max_daily_hours: Decimal,
    /// Extended daily maximum when compensated later (§3 sentence 2).
    pub max_daily_hours_with_compensation: Decimal,
    /// Minimum uninterrupted rest between two working days (§5).
    pub min_rest_hours: Decimal,
    /// Worked hours above which the short break applies (§4).
    pub break_threshold_hours: Decimal,
    /// Worked hours above which the long break applies (§4).
    pub extended_break_threshold_hours: Decimal,
    /// Short break length in minutes.
    pub min_break_minutes_for_6h: u32,
    /// Long break length in minutes.
    pub min_break_minutes_for_9h: u32,
    /// Maximum hours across the weekly window.
    pub max_weekly_hours: Decimal,
    /// Number of most recent entries that make up the weekly window.
    pub weekly_window_entries: usize,
}

/// The statutory ArbZG thresholds.
pub const ARBZG_RULES: RuleTable = RuleTable {
    max_daily_hours: Decimal::from_parts(8, 0, 0, false, 0),
    max_daily_hours_with_compensation: Decimal::from_parts(10, 0, 0, false, 0),
    min_rest_hours: Decimal::from_parts(11, 0, 0, false, 0),
    break_threshold_hours: Decimal::from_parts(6, 0, 0, false, 0),
    extended_break_threshold_hours: Decimal::from_parts(9, 0, 0, false, 0),
    min_break_minutes_for_6h: 30,
    min_break_minutes_for_9h: 45,
    max_weekly_hours: Decimal::from_parts(48, 0, 0, false, 0),
    weekly_window_entries: 7,
};

impl Default for RuleTable {
    fn default() -> Self {
        ARBZG_RULES
    }
}

/// Leave entitlements applied when validating leave requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Vacation days available per year.
    pub annual_vacation_days: Decimal,
    /// Sick leave longer than this many days needs a medical certificate.
    pub certificate_required_after_days: i64,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            annual_vacation_days: Decimal::from(30),
            certificate_required_after_days: 3,
        }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    rules: RuleTable,
    leave_policy: LeavePolicy,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(rules: RuleTable, leave_policy: LeavePolicy) -> Self {
        Self {
            rules,
            leave_policy,
        }
    }

    /// Returns the rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Returns the leave policy.
    pub fn leave_policy(&self) -> &LeavePolicy {
        &self.leave_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_table_matches_constant() {
        assert_eq!(RuleTable::default(), ARBZG_RULES);
    }

    #[test]
    fn test_statutory_values() {
        assert_eq!(ARBZG_RULES.max_daily_hours, Decimal::from(8));
        assert_eq!(ARBZG_RULES.max_daily_hours_with_compensation, Decimal::from(10));
        assert_eq!(ARBZG_RULES.min_rest_hours, Decimal::from(11));
        assert_eq!(ARBZG_RULES.break_threshold_hours, Decimal::from(6));
        assert_eq!(ARBZG_RULES.extended_break_threshold_hours, Decimal::from(9));
        assert_eq!(ARBZG_RULES.min_break_minutes_for_6h, 30);
        assert_eq!(ARBZG_RULES.min_break_minutes_for_9h, 45);
        assert_eq!(ARBZG_RULES.max_weekly_hours, Decimal::from(48));
        assert_eq!(ARBZG_RULES.weekly_window_entries, 7);
    }

    #[test]
    fn test_default_leave_policy() {
        let policy = LeavePolicy::default();
        assert_eq!(policy.annual_vacation_days, Decimal::from(30));
        assert_eq!(policy.certificate_required_after_days, 3);
    }

    #[test]
    fn test_rule_table_deserializes_from_yaml() {
        let yaml = r#"
max_daily_hours: 8
max_daily_hours_with_compensation: 10
min_rest_hours: 11
break_threshold_hours: 6
extended_break_threshold_hours: 9
min_break_minutes_for_6h: 30
min_break_minutes_for_9h: 45
max_weekly_hours: 48
weekly_window_entries: 7
"#;
        let rules: RuleTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules, ARBZG_RULES);
    }
}
