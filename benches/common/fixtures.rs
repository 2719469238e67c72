// ABOUTME: Benchmark fixtures for generating realistic daily health data
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Benchmark fixtures for generating realistic health data.

use chrono::{Days, NaiveDate};
use wellness_tracker::constants::time::SECONDS_PER_HOUR;
use wellness_tracker::intelligence::TrendPoint;
use wellness_tracker::models::{ActivitySample, HeartSample, SleepSample};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One week
    Week,
    /// One month, the default dashboard window
    Month,
    /// One year, the longest trend window
    Year,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Fixed end date so runs are comparable
#[must_use]
pub fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

fn date_at(offset: u32) -> NaiveDate {
    end_date()
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or_default()
}

/// Nights with durations between 6 and 9 hours
#[must_use]
pub fn generate_nights(length: HistoryLength) -> Vec<SleepSample> {
    (0..length.days())
        .map(|offset| {
            let hours = 6.0 + f64::from(offset % 13) * 0.25;
            let total = hours * SECONDS_PER_HOUR;
            let share = 0.3 + f64::from(offset % 5) * 0.04;
            SleepSample {
                date: date_at(offset),
                total_duration: total,
                deep_sleep: total * share * 0.45,
                rem_sleep: total * share * 0.55,
                light_sleep: total * (1.0 - share),
                awake: 900.0,
            }
        })
        .collect()
}

/// Activity days from sedentary to very active
#[must_use]
pub fn generate_activity(length: HistoryLength) -> Vec<ActivitySample> {
    (0..length.days())
        .map(|offset| ActivitySample {
            steps: 2_000 + (offset * 733) % 14_000,
            active_calories: f64::from((offset * 37) % 900),
            exercise_minutes: f64::from((offset * 7) % 75),
            ..ActivitySample::empty(date_at(offset))
        })
        .collect()
}

/// Heart days with HRV drifting between 15 and 85 ms
#[must_use]
pub fn generate_heart(length: HistoryLength) -> Vec<HeartSample> {
    (0..length.days())
        .map(|offset| HeartSample {
            date: date_at(offset),
            resting_heart_rate: 48.0 + f64::from(offset % 30),
            average_heart_rate: 70.0,
            max_heart_rate: 170.0,
            min_heart_rate: 45.0,
            hrv: (offset % 9 != 0).then(|| 15.0 + f64::from((offset * 11) % 70)),
            zones: Vec::new(),
        })
        .collect()
}

/// Slowly declining weight series
#[must_use]
pub fn generate_weight_points(length: HistoryLength) -> Vec<TrendPoint> {
    (0..length.days())
        .map(|offset| TrendPoint::new(date_at(offset), 70.0 + f64::from(offset) * 0.05))
        .collect()
}
