// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and builders for health samples and users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `wellness_tracker`

use chrono::NaiveDate;
use std::sync::Once;
use wellness_tracker::constants::time::SECONDS_PER_HOUR;
use wellness_tracker::models::{
    ActivitySample, BodyMeasurement, HealthCheckup, HeartSample, LabCategory, LabValue,
    SleepSample, User,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day helper
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Night with `hours` asleep and `restorative_share` of it in deep + REM
pub fn sleep_night(date: NaiveDate, hours: f64, restorative_share: f64) -> SleepSample {
    let total = hours * SECONDS_PER_HOUR;
    let restorative = total * restorative_share;
    SleepSample {
        date,
        total_duration: total,
        deep_sleep: restorative / 2.0,
        rem_sleep: restorative / 2.0,
        light_sleep: total - restorative,
        awake: 0.0,
    }
}

/// Activity day with the three scored quantities
pub fn activity_day(
    date: NaiveDate,
    steps: u32,
    active_calories: f64,
    exercise_minutes: f64,
) -> ActivitySample {
    ActivitySample {
        steps,
        active_calories,
        exercise_minutes,
        ..ActivitySample::empty(date)
    }
}

/// Heart day with a resting rate and optional HRV
pub fn heart_day(date: NaiveDate, resting: f64, hrv: Option<f64>) -> HeartSample {
    HeartSample {
        date,
        resting_heart_rate: resting,
        average_heart_rate: resting + 15.0,
        max_heart_rate: 170.0,
        min_heart_rate: resting - 5.0,
        hrv,
        zones: Vec::new(),
    }
}

/// Weight-only measurement
pub fn weight(date: NaiveDate, kg: f64) -> BodyMeasurement {
    BodyMeasurement::new(date, Some(kg), None)
}

/// Lab value with both reference bounds
pub fn lab(name: &str, value: f64, min: Option<f64>, max: Option<f64>) -> LabValue {
    LabValue {
        name: name.to_owned(),
        value,
        unit: "mg/dL".to_owned(),
        reference_min: min,
        reference_max: max,
        category: LabCategory::Metabolic,
    }
}

/// Checkup with the given lab values
pub fn checkup(date: NaiveDate, title: &str, values: Vec<LabValue>) -> HealthCheckup {
    let mut checkup = HealthCheckup::new(date, title);
    checkup.lab_values = values;
    checkup
}

/// User with a height set
pub fn user_with_height(height_cm: f64) -> User {
    let mut user = User::new("Test User");
    user.profile.height_cm = Some(height_cm);
    user
}
