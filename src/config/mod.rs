//! Configuration loading and management for the ArbZG compliance engine.
//!
//! This module provides the statutory rule table and a loader that reads
//! alternative thresholds and leave policies from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use arbzg_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/arbzg").unwrap();
//! println!("Weekly maximum: {}h", config.rules().max_weekly_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ARBZG_RULES, EngineConfig, LeavePolicy, RuleTable};
