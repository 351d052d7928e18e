//! Error types for the ArbZG compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the hardened evaluation path and for configuration loading.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the ArbZG compliance engine.
///
/// The lenient calculation functions never fail; only the checked entry
/// points ([`crate::calculation::evaluate_work_day`] and friends) and the
/// configuration loader return this error.
///
/// # Example
///
/// ```
/// use arbzg_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contains inconsistent values.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the inconsistency.
        message: String,
    },

    /// A work interval whose end is not after its start.
    #[error("Invalid interval on {date}: end time {end} is not after start time {start}")]
    InvalidInterval {
        /// The date of the work interval.
        date: NaiveDate,
        /// The start time of the interval.
        start: NaiveTime,
        /// The end time of the interval.
        end: NaiveTime,
    },

    /// A break that consumes the whole work interval.
    #[error(
        "Invalid break on {date}: {break_minutes} min break does not fit into {span_minutes} min interval"
    )]
    InvalidBreak {
        /// The date of the work interval.
        date: NaiveDate,
        /// The recorded break length in minutes.
        break_minutes: u32,
        /// The length of the interval in minutes.
        span_minutes: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "max_daily_hours".to_string(),
            message: "must not exceed max_daily_hours_with_compensation".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'max_daily_hours': must not exceed max_daily_hours_with_compensation"
        );
    }

    #[test]
    fn test_invalid_interval_displays_times() {
        let error = EngineError::InvalidInterval {
            date: NaiveDate::from_ymd_opt(2024, 10, 17).unwrap(),
            start: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid interval on 2024-10-17: end time 09:00:00 is not after start time 17:00:00"
        );
    }

    #[test]
    fn test_invalid_break_displays_minutes() {
        let error = EngineError::InvalidBreak {
            date: NaiveDate::from_ymd_opt(2024, 10, 17).unwrap(),
            break_minutes: 90,
            span_minutes: 60,
        };
        assert_eq!(
            error.to_string(),
            "Invalid break on 2024-10-17: 90 min break does not fit into 60 min interval"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
