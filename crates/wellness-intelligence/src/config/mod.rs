// ABOUTME: Scoring configuration with defaults, environment overrides and validation
// ABOUTME: Blend weights and activity caps are tunable parameters, not invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Scoring Configuration
//!
//! Weights and reference values for the sleep, activity and recovery scores.
//! Defaults reproduce the mobile app's behavior: 8 hour sleep goal, 10 000
//! steps / 600 kcal / 30 minutes activity caps, and a 0.6/0.4 sleep/HRV blend
//! for recovery. Every value can be overridden through `WELLNESS_*`
//! environment variables.
//!
//! Status thresholds (sleep quality, recovery status, HRV and resting HR
//! buckets) are not configurable.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use wellness_core::models::ActivityGoals;

/// Maximum drift allowed when checking that a weight group sums to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Sleep score parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepScoringConfig {
    /// Deep+REM share of total sleep that earns full stage credit
    pub restorative_target_ratio: f64,
    /// Sleep duration that earns full duration credit (hours)
    pub duration_goal_hours: f64,
    /// Weight of the stage component
    pub restorative_weight: f64,
    /// Weight of the duration component
    pub duration_weight: f64,
}

impl Default for SleepScoringConfig {
    fn default() -> Self {
        Self {
            restorative_target_ratio: 0.45,
            duration_goal_hours: 8.0,
            restorative_weight: 0.5,
            duration_weight: 0.5,
        }
    }
}

/// Activity score parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityScoringConfig {
    /// Steps that earn full step credit
    pub step_cap: f64,
    /// Active energy that earns full energy credit (kcal)
    pub active_calorie_cap: f64,
    /// Exercise minutes that earn full exercise credit
    pub exercise_minute_cap: f64,
    /// Weight of the step ratio
    pub step_weight: f64,
    /// Weight of the active energy ratio
    pub calorie_weight: f64,
    /// Weight of the exercise ratio
    pub exercise_weight: f64,
}

impl Default for ActivityScoringConfig {
    fn default() -> Self {
        Self {
            step_cap: 10_000.0,
            active_calorie_cap: 600.0,
            exercise_minute_cap: 30.0,
            step_weight: 0.4,
            calorie_weight: 0.3,
            exercise_weight: 0.3,
        }
    }
}

impl ActivityScoringConfig {
    /// Replace the caps with a user's personal goals
    ///
    /// Goals that are zero or negative leave the corresponding cap unchanged.
    #[must_use]
    pub fn with_goals(mut self, goals: &ActivityGoals) -> Self {
        if goals.daily_steps > 0 {
            self.step_cap = f64::from(goals.daily_steps);
        }
        if goals.active_calories > 0.0 {
            self.active_calorie_cap = goals.active_calories;
        }
        if goals.exercise_minutes > 0.0 {
            self.exercise_minute_cap = goals.exercise_minutes;
        }
        self
    }
}

/// Recovery blend weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryScoringConfig {
    /// Weight of the sleep score
    pub sleep_weight: f64,
    /// Weight of the HRV-derived score
    pub hrv_weight: f64,
}

impl Default for RecoveryScoringConfig {
    fn default() -> Self {
        Self {
            sleep_weight: 0.6,
            hrv_weight: 0.4,
        }
    }
}

/// Complete scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Sleep score parameters
    pub sleep: SleepScoringConfig,
    /// Activity score parameters
    pub activity: ActivityScoringConfig,
    /// Recovery blend weights
    pub recovery: RecoveryScoringConfig,
}

impl ScoringConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a cap is not positive or a weight group does not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sleep = &self.sleep;
        if !(sleep.restorative_target_ratio > 0.0 && sleep.restorative_target_ratio <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "restorative_target_ratio must be in (0, 1]",
            ));
        }
        if sleep.duration_goal_hours <= 0.0 || sleep.duration_goal_hours > 24.0 {
            return Err(ConfigError::InvalidRange(
                "duration_goal_hours must be in (0, 24]",
            ));
        }
        check_weights(
            &[sleep.restorative_weight, sleep.duration_weight],
            "Sleep weights must be non-negative and sum to 1.0",
        )?;

        let activity = &self.activity;
        if activity.step_cap <= 0.0
            || activity.active_calorie_cap <= 0.0
            || activity.exercise_minute_cap <= 0.0
        {
            return Err(ConfigError::InvalidRange("Activity caps must be positive"));
        }
        check_weights(
            &[
                activity.step_weight,
                activity.calorie_weight,
                activity.exercise_weight,
            ],
            "Activity weights must be non-negative and sum to 1.0",
        )?;

        check_weights(
            &[self.recovery.sleep_weight, self.recovery.hrv_weight],
            "Recovery weights must be non-negative and sum to 1.0",
        )?;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_f64("WELLNESS_SLEEP_RESTORATIVE_TARGET")? {
            self.sleep.restorative_target_ratio = val;
        }
        if let Some(val) = env_f64("WELLNESS_SLEEP_GOAL_HOURS")? {
            self.sleep.duration_goal_hours = val;
        }
        if let Some(val) = env_f64("WELLNESS_SLEEP_RESTORATIVE_WEIGHT")? {
            self.sleep.restorative_weight = val;
        }
        if let Some(val) = env_f64("WELLNESS_SLEEP_DURATION_WEIGHT")? {
            self.sleep.duration_weight = val;
        }

        if let Some(val) = env_f64("WELLNESS_ACTIVITY_STEP_CAP")? {
            self.activity.step_cap = val;
        }
        if let Some(val) = env_f64("WELLNESS_ACTIVITY_CALORIE_CAP")? {
            self.activity.active_calorie_cap = val;
        }
        if let Some(val) = env_f64("WELLNESS_ACTIVITY_EXERCISE_CAP")? {
            self.activity.exercise_minute_cap = val;
        }
        if let Some(val) = env_f64("WELLNESS_ACTIVITY_STEP_WEIGHT")? {
            self.activity.step_weight = val;
        }
        if let Some(val) = env_f64("WELLNESS_ACTIVITY_CALORIE_WEIGHT")? {
            self.activity.calorie_weight = val;
        }
        if let Some(val) = env_f64("WELLNESS_ACTIVITY_EXERCISE_WEIGHT")? {
            self.activity.exercise_weight = val;
        }

        if let Some(val) = env_f64("WELLNESS_RECOVERY_SLEEP_WEIGHT")? {
            self.recovery.sleep_weight = val;
        }
        if let Some(val) = env_f64("WELLNESS_RECOVERY_HRV_WEIGHT")? {
            self.recovery.hrv_weight = val;
        }

        Ok(self)
    }
}

/// Read an optional numeric environment variable
fn env_f64(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match std::env::var(name) {
        Ok(val) => val
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .map(|parsed| {
                tracing::debug!(var = name, value = parsed, "Scoring override from environment");
                Some(parsed)
            })
            .ok_or_else(|| ConfigError::Parse(format!("Invalid {name}: '{val}'"))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

fn check_weights(weights: &[f64], message: &'static str) -> Result<(), ConfigError> {
    if weights.iter().any(|w| *w < 0.0) {
        return Err(ConfigError::InvalidWeights(message));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::InvalidWeights(message));
    }
    Ok(())
}
