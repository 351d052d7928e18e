//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rule
//! table and leave policy from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, LeavePolicy, RuleTable};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/arbzg/
/// ├── rules.yaml   # Working-time thresholds
/// └── leave.yaml   # Vacation allowance and sick-leave policy
/// ```
///
/// # Example
///
/// ```no_run
/// use arbzg_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/arbzg")?;
/// println!("Daily maximum: {}h", loader.rules().max_daily_hours);
/// # Ok::<(), arbzg_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// holds thresholds that contradict each other.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<RuleTable>(&path.join("rules.yaml"))?;
        validate_rules(&rules)?;

        let leave_policy = Self::load_yaml::<LeavePolicy>(&path.join("leave.yaml"))?;
        validate_leave_policy(&leave_policy)?;

        debug!(path = %path.display(), "Loaded engine configuration");

        Ok(Self {
            config: EngineConfig::new(rules, leave_policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the loaded rule table.
    pub fn rules(&self) -> &RuleTable {
        self.config.rules()
    }

    /// Returns the loaded leave policy.
    pub fn leave_policy(&self) -> &LeavePolicy {
        self.config.leave_policy()
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn validate_rules(rules: &RuleTable) -> EngineResult<()> {
    if rules.max_daily_hours <= Decimal::ZERO {
        return Err(invalid("max_daily_hours", "must be positive"));
    }
    if rules.max_daily_hours > rules.max_daily_hours_with_compensation {
        return Err(invalid(
            "max_daily_hours",
            "must not exceed max_daily_hours_with_compensation",
        ));
    }
    if rules.break_threshold_hours > rules.extended_break_threshold_hours {
        return Err(invalid(
            "break_threshold_hours",
            "must not exceed extended_break_threshold_hours",
        ));
    }
    if rules.min_break_minutes_for_6h > rules.min_break_minutes_for_9h {
        return Err(invalid(
            "min_break_minutes_for_6h",
            "must not exceed min_break_minutes_for_9h",
        ));
    }
    if rules.min_rest_hours < Decimal::ZERO {
        return Err(invalid("min_rest_hours", "must not be negative"));
    }
    if rules.weekly_window_entries == 0 {
        return Err(invalid("weekly_window_entries", "must be at least 1"));
    }
    Ok(())
}

fn validate_leave_policy(policy: &LeavePolicy) -> EngineResult<()> {
    if policy.annual_vacation_days < Decimal::ZERO {
        return Err(invalid("annual_vacation_days", "must not be negative"));
    }
    if policy.certificate_required_after_days < 0 {
        return Err(invalid(
            "certificate_required_after_days",
            "must not be negative",
        ));
    }
    Ok(())
}
