// ABOUTME: Daily activity score from steps, active energy and exercise minutes
// ABOUTME: Each factor is capped before weighting so no single factor dominates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use crate::config::ActivityScoringConfig;
use serde::{Deserialize, Serialize};
use wellness_core::models::{ActivityGoals, ActivitySample};

/// Completion fraction per personal goal (1.0 = goal met, may exceed 1.0)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Steps / step goal
    pub steps: f64,
    /// Active energy / energy goal
    pub active_calories: f64,
    /// Exercise minutes / exercise goal
    pub exercise_minutes: f64,
    /// Number of goals met
    pub goals_met: u8,
}

/// Aggregate of a day's workouts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutTotals {
    /// Number of workouts
    pub count: usize,
    /// Total duration (seconds)
    pub duration: f64,
    /// Total energy (kcal)
    pub calories: f64,
}

/// Activity scorer
pub struct ActivityScorer;

impl ActivityScorer {
    /// Score a day of activity (0-100)
    ///
    /// `steps/cap`, `active_calories/cap` and `exercise_minutes/cap` are each
    /// clamped to [0, 1] before weighting. A day with nothing recorded scores 0
    /// and a day at or above every cap scores 100.
    #[must_use]
    pub fn score(sample: &ActivitySample, config: &ActivityScoringConfig) -> u8 {
        let steps = capped_ratio(f64::from(sample.steps), config.step_cap);
        let calories = capped_ratio(sample.active_calories, config.active_calorie_cap);
        let exercise = capped_ratio(sample.exercise_minutes, config.exercise_minute_cap);

        let weight_sum = config.step_weight + config.calorie_weight + config.exercise_weight;
        if weight_sum <= 0.0 {
            return 0;
        }

        let blended = config.exercise_weight.mul_add(
            exercise,
            config
                .step_weight
                .mul_add(steps, config.calorie_weight * calories),
        ) / weight_sum;

        (blended * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Progress toward personal goals
    #[must_use]
    pub fn goal_progress(sample: &ActivitySample, goals: &ActivityGoals) -> GoalProgress {
        let steps = ratio(f64::from(sample.steps), f64::from(goals.daily_steps));
        let active_calories = ratio(sample.active_calories, goals.active_calories);
        let exercise_minutes = ratio(sample.exercise_minutes, goals.exercise_minutes);
        let goals_met = [steps, active_calories, exercise_minutes]
            .iter()
            .filter(|fraction| **fraction >= 1.0)
            .count() as u8;

        GoalProgress {
            steps,
            active_calories,
            exercise_minutes,
            goals_met,
        }
    }

    /// Sum the day's workouts
    #[must_use]
    pub fn workout_totals(sample: &ActivitySample) -> WorkoutTotals {
        sample
            .workouts
            .iter()
            .fold(WorkoutTotals::default(), |mut totals, workout| {
                totals.count += 1;
                totals.duration += workout.duration.max(0.0);
                totals.calories += workout.calories.max(0.0);
                totals
            })
    }
}

/// value / cap clamped to [0, 1]; non-finite input counts as 0
fn capped_ratio(value: f64, cap: f64) -> f64 {
    ratio(value, cap).min(1.0)
}

fn ratio(value: f64, target: f64) -> f64 {
    if !value.is_finite() || !target.is_finite() || target <= 0.0 {
        return 0.0;
    }
    (value / target).max(0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
    }

    #[test]
    fn test_negative_inputs_count_as_zero() {
        let mut sample = ActivitySample::empty(day());
        sample.active_calories = -250.0;
        sample.exercise_minutes = f64::NAN;
        assert_eq!(
            ActivityScorer::score(&sample, &ActivityScoringConfig::default()),
            0
        );
    }

    #[test]
    fn test_goal_progress_counts_met_goals() {
        let mut sample = ActivitySample::empty(day());
        sample.steps = 12_000;
        sample.active_calories = 300.0;
        sample.exercise_minutes = 30.0;
        let progress = ActivityScorer::goal_progress(&sample, &ActivityGoals::default());
        assert_eq!(progress.goals_met, 2);
        assert!((progress.steps - 1.2).abs() < 1e-9);
        assert!((progress.active_calories - 0.5).abs() < 1e-9);
    }
}
