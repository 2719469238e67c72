// ABOUTME: Integration tests for daily activity scoring and goal progress
// ABOUTME: Covers empty days, capped factors, personal goals and workout totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::{activity_day, day};
use wellness_tracker::intelligence::{ActivityScorer, ActivityScoringConfig, ScoringConfig};
use wellness_tracker::models::{ActivityGoals, WorkoutSummary};

fn test_config() -> ActivityScoringConfig {
    ScoringConfig::default().activity
}

#[test]
fn test_empty_day_scores_zero() {
    let sample = activity_day(day(2025, 3, 1), 0, 0.0, 0.0);
    assert_eq!(ActivityScorer::score(&sample, &test_config()), 0);
}

#[test]
fn test_all_caps_met_scores_hundred() {
    let sample = activity_day(day(2025, 3, 1), 10_000, 600.0, 30.0);
    assert_eq!(ActivityScorer::score(&sample, &test_config()), 100);
}

#[test]
fn test_huge_step_count_never_exceeds_hundred() {
    let sample = activity_day(day(2025, 3, 1), 50_000, 0.0, 0.0);
    let score = ActivityScorer::score(&sample, &test_config());
    assert!(score <= 100);
    // Steps alone carry 40% of the weight
    assert_eq!(score, 40);
}

#[test]
fn test_half_of_every_cap_scores_fifty() {
    let sample = activity_day(day(2025, 3, 1), 5_000, 300.0, 15.0);
    assert_eq!(ActivityScorer::score(&sample, &test_config()), 50);
}

#[test]
fn test_negative_inputs_count_as_zero() {
    let sample = activity_day(day(2025, 3, 1), 0, -500.0, f64::NAN);
    assert_eq!(ActivityScorer::score(&sample, &test_config()), 0);
}

#[test]
fn test_personal_goals_change_caps() {
    let goals = ActivityGoals {
        daily_steps: 5_000,
        active_calories: 300.0,
        exercise_minutes: 15.0,
        sleep_hours: 8.0,
    };
    let config = test_config().with_goals(&goals);
    let sample = activity_day(day(2025, 3, 1), 5_000, 300.0, 15.0);
    assert_eq!(ActivityScorer::score(&sample, &config), 100);
}

#[test]
fn test_zero_goals_keep_default_caps() {
    let goals = ActivityGoals {
        daily_steps: 0,
        active_calories: 0.0,
        exercise_minutes: 0.0,
        sleep_hours: 0.0,
    };
    let config = test_config().with_goals(&goals);
    assert!((config.step_cap - 10_000.0).abs() < f64::EPSILON);
    assert!((config.active_calorie_cap - 600.0).abs() < f64::EPSILON);
}

#[test]
fn test_goal_progress_counts_met_goals() {
    let sample = activity_day(day(2025, 3, 1), 12_000, 300.0, 45.0);
    let progress = ActivityScorer::goal_progress(&sample, &ActivityGoals::default());
    assert_eq!(progress.goals_met, 2);
    assert!((progress.steps - 1.2).abs() < 1e-9);
    assert!((progress.active_calories - 0.5).abs() < 1e-9);
}

#[test]
fn test_workout_totals() {
    let mut sample = activity_day(day(2025, 3, 1), 8_000, 400.0, 40.0);
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap();
    sample.workouts = vec![
        WorkoutSummary {
            workout_type: "running".into(),
            duration: 1_800.0,
            calories: 300.0,
            start_time: start,
            average_heart_rate: Some(150.0),
        },
        WorkoutSummary {
            workout_type: "yoga".into(),
            duration: 2_400.0,
            calories: 120.0,
            start_time: start,
            average_heart_rate: None,
        },
    ];
    let totals = ActivityScorer::workout_totals(&sample);
    assert_eq!(totals.count, 2);
    assert!((totals.duration - 4_200.0).abs() < f64::EPSILON);
    assert!((totals.calories - 420.0).abs() < f64::EPSILON);
}
