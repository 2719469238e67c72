// ABOUTME: Integration tests for BMI, waist-to-height ratio and trend projections
// ABOUTME: Covers missing inputs, category cut-offs, 30-day projections and stable outlooks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, weight};
use wellness_tracker::intelligence::{
    BmiCategory, BodyComposition, TrendMetric, TrendOutlook, TrendPoint, TrendSeries,
};
use wellness_tracker::models::BodyMeasurement;

#[test]
fn test_bmi_normal_weight() {
    let bmi = BodyComposition::bmi(Some(70.0), Some(175.0)).unwrap();
    assert!((bmi - 22.857).abs() < 0.01);

    let assessment = BodyComposition::assess(Some(70.0), Some(175.0)).unwrap();
    assert_eq!(assessment.category, BmiCategory::Normal);
}

#[test]
fn test_bmi_missing_inputs_is_no_data() {
    assert!(BodyComposition::bmi(None, Some(175.0)).is_none());
    assert!(BodyComposition::bmi(Some(70.0), None).is_none());
    assert!(BodyComposition::bmi(Some(70.0), Some(0.0)).is_none());
    assert!(BodyComposition::bmi(Some(-70.0), Some(175.0)).is_none());
    assert!(BodyComposition::bmi(Some(f64::NAN), Some(175.0)).is_none());
}

#[test]
fn test_bmi_category_cutoffs() {
    assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_waist_to_height_ratio() {
    let ratio = BodyComposition::waist_to_height_ratio(Some(87.5), Some(175.0)).unwrap();
    assert!((ratio - 0.5).abs() < 1e-9);
    assert!(BodyComposition::waist_to_height_ratio(None, Some(175.0)).is_none());
}

#[test]
fn test_thirty_day_projection() {
    let series = TrendSeries::from_points([
        TrendPoint::new(day(2025, 1, 1), 80.0),
        TrendPoint::new(day(2025, 1, 31), 77.0),
    ]);
    let projection = series.projection(30.0).unwrap();
    assert!((projection - -3.0).abs() < 1e-9);
    assert_eq!(
        series.outlook_for(TrendMetric::Weight),
        TrendOutlook::Changing {
            per_thirty_days: projection
        }
    );
}

#[test]
fn test_single_point_is_no_data() {
    let series = TrendSeries::from_points([TrendPoint::new(day(2025, 1, 1), 80.0)]);
    assert!(series.projection(30.0).is_none());
    assert!(series.delta().is_none());
    assert_eq!(series.outlook(0.1), TrendOutlook::InsufficientData);
}

#[test]
fn test_same_day_points_have_no_rate() {
    let series = TrendSeries::from_points([
        TrendPoint::new(day(2025, 1, 1), 80.0),
        TrendPoint::new(day(2025, 1, 1), 79.0),
    ]);
    assert!(series.daily_rate().is_none());
}

#[test]
fn test_small_change_is_stable() {
    let series = TrendSeries::from_points([
        TrendPoint::new(day(2025, 1, 1), 80.0),
        TrendPoint::new(day(2025, 1, 31), 80.05),
    ]);
    assert_eq!(series.outlook_for(TrendMetric::Weight), TrendOutlook::Stable);
}

#[test]
fn test_unsorted_points_are_ordered() {
    let series = TrendSeries::from_points([
        TrendPoint::new(day(2025, 1, 15), 78.0),
        TrendPoint::new(day(2025, 1, 1), 80.0),
        TrendPoint::new(day(2025, 1, 8), f64::NAN),
    ]);
    assert_eq!(series.len(), 2);
    assert_eq!(series.points()[0].date, day(2025, 1, 1));
    assert!((series.delta().unwrap() - -2.0).abs() < 1e-9);
    assert!((series.weekly_rate().unwrap() - -1.0).abs() < 1e-9);
}

#[test]
fn test_measurement_series_skip_missing_fields() {
    let measurements = vec![
        weight(day(2025, 1, 1), 82.0),
        BodyMeasurement::new(day(2025, 1, 5), None, Some(95.0)),
        weight(day(2025, 1, 11), 81.0),
    ];
    let weights = TrendSeries::weight_from_measurements(&measurements);
    let waists = TrendSeries::waist_from_measurements(&measurements);
    assert_eq!(weights.len(), 2);
    assert_eq!(waists.len(), 1);
    assert!((weights.daily_rate().unwrap() - -0.1).abs() < 1e-9);
}

#[test]
fn test_window_and_average() {
    let series = TrendSeries::from_points([
        TrendPoint::new(day(2025, 1, 1), 10.0),
        TrendPoint::new(day(2025, 1, 10), 20.0),
        TrendPoint::new(day(2025, 1, 20), 30.0),
    ]);
    let recent = series.window(day(2025, 1, 10));
    assert_eq!(recent.len(), 2);
    assert!((recent.average().unwrap() - 25.0).abs() < 1e-9);
    assert!(TrendSeries::default().average().is_none());
}
