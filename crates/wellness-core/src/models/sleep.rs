// ABOUTME: Nightly sleep sample with stage durations from the device health store
// ABOUTME: Stage durations are seconds and are assumed to sum to at most the total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use crate::constants::time::SECONDS_PER_HOUR;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One night of sleep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSample {
    /// Day the sleep session is attributed to
    #[serde(deserialize_with = "super::deserialize_flexible_date")]
    pub date: NaiveDate,
    /// Total time asleep (seconds)
    pub total_duration: f64,
    /// Deep sleep (seconds)
    #[serde(default)]
    pub deep_sleep: f64,
    /// REM sleep (seconds)
    #[serde(default)]
    pub rem_sleep: f64,
    /// Light/core sleep (seconds)
    #[serde(default)]
    pub light_sleep: f64,
    /// Awake time during the session (seconds)
    #[serde(default)]
    pub awake: f64,
}

impl SleepSample {
    /// Total duration in hours
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_duration / SECONDS_PER_HOUR
    }

    /// Deep plus REM sleep (seconds)
    #[must_use]
    pub fn restorative_duration(&self) -> f64 {
        self.deep_sleep + self.rem_sleep
    }
}
