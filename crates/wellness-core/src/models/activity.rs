// ABOUTME: Daily activity totals and workout summaries from the device health store
// ABOUTME: Steps, energy, distance, exercise and stand counts for one calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout type as reported by the health store (e.g. "running")
    pub workout_type: String,
    /// Duration (seconds)
    pub duration: f64,
    /// Active energy burned (kcal)
    pub calories: f64,
    /// When the workout started
    pub start_time: DateTime<Utc>,
    /// Average heart rate during the workout (bpm)
    #[serde(default)]
    pub average_heart_rate: Option<f64>,
}

/// Activity totals for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySample {
    /// Calendar day
    #[serde(deserialize_with = "super::deserialize_flexible_date")]
    pub date: NaiveDate,
    /// Step count
    #[serde(default)]
    pub steps: u32,
    /// Active energy (kcal)
    #[serde(default)]
    pub active_calories: f64,
    /// Active plus resting energy (kcal)
    #[serde(default)]
    pub total_calories: f64,
    /// Walking/running distance (meters)
    #[serde(default)]
    pub distance: f64,
    /// Exercise minutes
    #[serde(default)]
    pub exercise_minutes: f64,
    /// Hours with at least one minute of standing
    #[serde(default)]
    pub stand_hours: u32,
    /// Workouts recorded this day, in start order
    #[serde(default)]
    pub workouts: Vec<WorkoutSummary>,
}

impl ActivitySample {
    /// Empty sample for a day with no recorded activity
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            active_calories: 0.0,
            total_calories: 0.0,
            distance: 0.0,
            exercise_minutes: 0.0,
            stand_hours: 0,
            workouts: Vec::new(),
        }
    }
}
