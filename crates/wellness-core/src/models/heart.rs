// ABOUTME: Daily heart rate summary, HRV reading and time-in-zone breakdown
// ABOUTME: Values are bpm except HRV which is milliseconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time spent in one heart rate zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// Zone number (1-5)
    pub zone: u8,
    /// Lower bound (bpm)
    pub min_bpm: f64,
    /// Upper bound (bpm)
    pub max_bpm: f64,
    /// Time spent in the zone (seconds)
    pub duration: f64,
}

/// Heart metrics for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartSample {
    /// Calendar day
    #[serde(deserialize_with = "super::deserialize_flexible_date")]
    pub date: NaiveDate,
    /// Resting heart rate (bpm)
    pub resting_heart_rate: f64,
    /// Average heart rate (bpm)
    #[serde(default)]
    pub average_heart_rate: f64,
    /// Highest heart rate (bpm)
    #[serde(default)]
    pub max_heart_rate: f64,
    /// Lowest heart rate (bpm)
    #[serde(default)]
    pub min_heart_rate: f64,
    /// Heart rate variability (ms), absent when the device did not record it
    #[serde(default)]
    pub hrv: Option<f64>,
    /// Zones ordered from 1 to 5
    #[serde(default)]
    pub zones: Vec<HeartRateZone>,
}
