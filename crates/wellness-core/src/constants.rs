// ABOUTME: Unit conversion factors and fixed reference values shared across crates
// ABOUTME: Keeps magic numbers out of models and scoring code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Application constants organized by domain

/// Time conversion constants
pub mod time {
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Days in one week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Unit conversion constants
pub mod units {
    /// Pounds per kilogram
    pub const POUNDS_PER_KG: f64 = 2.204_622_621_8;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
}

/// Default personal goals used when a user has not configured their own
pub mod goals {
    /// Daily step goal
    pub const DEFAULT_DAILY_STEPS: u32 = 10_000;
    /// Daily active energy goal (kcal)
    pub const DEFAULT_ACTIVE_CALORIES: f64 = 600.0;
    /// Daily exercise goal (minutes)
    pub const DEFAULT_EXERCISE_MINUTES: f64 = 30.0;
    /// Nightly sleep goal (hours)
    pub const DEFAULT_SLEEP_HOURS: f64 = 8.0;
}
