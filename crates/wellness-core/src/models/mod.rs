// ABOUTME: Core data models for the Wellness Tracker health data
// ABOUTME: Re-exports sample, measurement, checkup, treatment and user types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! # Data Models
//!
//! Value records describing what the device health store, the manual
//! measurement log and the lab checkup log hand to the scoring engine.
//!
//! ## Design Principles
//!
//! - **Already normalized**: durations in seconds, mass in kg, lengths in cm,
//!   heart rate in bpm, HRV in ms
//! - **Optional where the source may omit**: HRV, weight, waist, lab bounds
//! - **Serializable**: all models round-trip through the JSON export format
//!
//! Daily records are keyed by calendar date (`NaiveDate`), the user's local day.

mod activity;
mod body;
mod checkup;
mod heart;
mod sleep;
mod treatment;
mod user;

pub use activity::{ActivitySample, WorkoutSummary};
pub use body::BodyMeasurement;
pub use checkup::{HealthCheckup, LabCategory, LabValue};
pub use heart::{HeartRateZone, HeartSample};
pub use sleep::SleepSample;
pub use treatment::{DoseCadence, Glp1Medication, Glp1Treatment};
pub use user::{ActivityGoals, UnitSystem, User, UserProfile, UserSettings};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Custom deserializer for flexible date parsing
/// Accepts both simple date ("2025-11-26") and full ISO 8601 datetime ("2025-11-26T00:00:00Z")
///
/// # Errors
/// Returns a deserialization error when the string matches neither format
pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Ok(date);
    }

    // Full datetimes keep the calendar day they were recorded in
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.date_naive());
    }

    Err(serde::de::Error::custom(format!(
        "Invalid date format: '{s}'. Expected 'YYYY-MM-DD' or 'YYYY-MM-DDTHH:MM:SSZ'"
    )))
}
