//! Working-time compliance engine for the German Working Time Act (ArbZG)
//!
//! This crate computes worked hours, checks them against the statutory
//! daily, break, rest and weekly limits, detects overlapping bookings and
//! leave periods, and counts leave days.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
