// ABOUTME: Integration tests for lab value flagging and GLP-1 treatment scheduling
// ABOUTME: Covers reference-range checks, analyte history, dose reminders and treatment progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDateTime, Weekday};
use common::{checkup, day, lab};
use wellness_tracker::intelligence::{LabAnalyzer, LabFlag, TreatmentPlanner};
use wellness_tracker::models::{Glp1Medication, Glp1Treatment, LabCategory};

fn at(year: i32, month: u32, date: u32, hour: u32, minute: u32) -> NaiveDateTime {
    day(year, month, date).and_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_value_above_range_is_flagged() {
    let value = lab("Glucose", 105.0, Some(70.0), Some(100.0));
    assert!(value.is_out_of_range());
    assert_eq!(LabFlag::classify(&value), LabFlag::High);
}

#[test]
fn test_value_with_one_bound_is_not_flagged() {
    let value = lab("LDL", 90.0, None, Some(100.0));
    assert!(!value.is_out_of_range());
    assert_eq!(LabFlag::classify(&value), LabFlag::NoReference);

    let high_with_one_bound = lab("LDL", 190.0, None, Some(100.0));
    assert!(!high_with_one_bound.is_out_of_range());
}

#[test]
fn test_bounds_are_inclusive() {
    assert!(!lab("Glucose", 70.0, Some(70.0), Some(100.0)).is_out_of_range());
    assert!(!lab("Glucose", 100.0, Some(70.0), Some(100.0)).is_out_of_range());
    assert_eq!(
        LabFlag::classify(&lab("Glucose", 69.0, Some(70.0), Some(100.0))),
        LabFlag::Low
    );
}

#[test]
fn test_flag_agrees_with_value_range_check() {
    let bounds = [
        (Some(70.0), Some(100.0)),
        (None, Some(100.0)),
        (Some(70.0), None),
        (None, None),
    ];
    let readings = [f64::NAN, 0.0, 69.9, 70.0, 85.0, 100.0, 100.1, 1e6];
    for (min, max) in bounds {
        for reading in readings {
            let value = lab("TSH", reading, min, max);
            let flag = LabFlag::classify(&value);
            assert_eq!(
                flag.is_out_of_range(),
                value.is_out_of_range(),
                "{reading} in {min:?}..{max:?}"
            );
            match flag {
                LabFlag::Low => assert!(reading < 70.0),
                LabFlag::High => assert!(reading > 100.0),
                LabFlag::Normal | LabFlag::NoReference => {}
            }
        }
    }
}

#[test]
fn test_checkup_out_of_range_count_and_flagged() {
    let mut values = vec![
        lab("Glucose", 105.0, Some(70.0), Some(100.0)),
        lab("HbA1c", 5.2, Some(4.0), Some(5.6)),
        lab("Ferritin", 10.0, Some(15.0), Some(150.0)),
    ];
    values[2].category = LabCategory::BloodCount;
    let report = checkup(day(2025, 2, 1), "Annual", values);

    assert_eq!(report.out_of_range_count(), 2);
    let flagged = LabAnalyzer::flagged(&report);
    assert_eq!(flagged.len(), 2);
    assert_eq!(flagged[0].0.name, "Glucose");
    assert_eq!(flagged[1].1, LabFlag::Low);

    let grouped = LabAnalyzer::by_category(&report);
    assert_eq!(grouped[&LabCategory::Metabolic].len(), 2);
    assert_eq!(grouped[&LabCategory::BloodCount].len(), 1);
}

#[test]
fn test_lab_history_matches_name_case_insensitively() {
    let checkups = vec![
        checkup(
            day(2025, 3, 1),
            "Follow-up",
            vec![lab("glucose", 95.0, Some(70.0), Some(100.0))],
        ),
        checkup(
            day(2025, 1, 1),
            "Annual",
            vec![lab("Glucose", 110.0, Some(70.0), Some(100.0))],
        ),
    ];
    let history = LabAnalyzer::history(&checkups, " GLUCOSE ");
    assert_eq!(history.len(), 2);
    assert_eq!(history.points()[0].date, day(2025, 1, 1));
    assert!((history.delta().unwrap() - -15.0).abs() < 1e-9);
}

#[test]
fn test_dose_ladders_and_cadence() {
    assert!((Glp1Medication::Ozempic.starting_dose() - 0.25).abs() < f64::EPSILON);
    assert_eq!(Glp1Medication::Mounjaro.next_dose_after(5.0), Some(7.5));
    assert_eq!(Glp1Medication::Wegovy.next_dose_after(2.4), None);
    assert_eq!(Glp1Medication::Saxenda.generic_name(), "liraglutide");
}

#[test]
fn test_first_dose_is_on_start_date() {
    // 2025-03-03 is a Monday
    let treatment = Glp1Treatment::start(Glp1Medication::Ozempic, day(2025, 3, 3), 100.0);
    let next = TreatmentPlanner::next_dose_at(&treatment, at(2025, 3, 1, 12, 0)).unwrap();
    assert_eq!(next, at(2025, 3, 3, 9, 0));
}

#[test]
fn test_weekly_dose_uses_preferred_weekday_and_time() {
    let mut treatment = Glp1Treatment::start(Glp1Medication::Ozempic, day(2025, 3, 3), 100.0);
    treatment.injection_weekday = Some(Weekday::Fri);
    treatment.injection_hour = Some(20);
    treatment.injection_minute = Some(30);

    // Wednesday
    let next = TreatmentPlanner::next_dose_at(&treatment, at(2025, 3, 12, 8, 0)).unwrap();
    assert_eq!(next, at(2025, 3, 14, 20, 30));

    // Friday after the injection time rolls to next week
    let next = TreatmentPlanner::next_dose_at(&treatment, at(2025, 3, 14, 21, 0)).unwrap();
    assert_eq!(next, at(2025, 3, 21, 20, 30));
}

#[test]
fn test_weekly_dose_is_strictly_after_now() {
    let treatment = Glp1Treatment::start(Glp1Medication::Mounjaro, day(2025, 3, 3), 100.0);
    let now = at(2025, 3, 10, 9, 0);
    let next = TreatmentPlanner::next_dose_at(&treatment, now).unwrap();
    assert!(next > now);
    assert_eq!(next, at(2025, 3, 17, 9, 0));
}

#[test]
fn test_daily_dose_schedule() {
    let mut treatment = Glp1Treatment::start(Glp1Medication::Saxenda, day(2025, 3, 1), 95.0);
    treatment.injection_hour = Some(7);

    let next = TreatmentPlanner::next_dose_at(&treatment, at(2025, 3, 5, 6, 0)).unwrap();
    assert_eq!(next, at(2025, 3, 5, 7, 0));

    let next = TreatmentPlanner::next_dose_at(&treatment, at(2025, 3, 5, 7, 0)).unwrap();
    assert_eq!(next, at(2025, 3, 6, 7, 0));
}

#[test]
fn test_reminder_disabled_returns_none() {
    let mut treatment = Glp1Treatment::start(Glp1Medication::Wegovy, day(2025, 3, 3), 100.0);
    treatment.notifications_enabled = false;
    assert!(TreatmentPlanner::next_reminder_at(&treatment, at(2025, 3, 4, 9, 0)).is_none());
    assert!(TreatmentPlanner::next_dose_at(&treatment, at(2025, 3, 4, 9, 0)).is_some());
}

#[test]
fn test_treatment_progress() {
    let mut treatment = Glp1Treatment::start(Glp1Medication::Wegovy, day(2025, 1, 1), 100.0);
    treatment.target_weight = Some(80.0);

    let progress = TreatmentPlanner::progress(&treatment, Some(90.0), day(2025, 3, 1));
    assert_eq!(progress.weeks_on_treatment, 8);
    assert!((progress.weight_lost_kg.unwrap() - 10.0).abs() < 1e-9);
    assert!((progress.weight_lost_percent.unwrap() - 10.0).abs() < 1e-9);
    assert!((progress.target_progress_percent.unwrap() - 50.0).abs() < 1e-9);
    assert_eq!(progress.next_titration_dose, Some(0.5));
}

#[test]
fn test_treatment_progress_without_target_or_weight() {
    let treatment = Glp1Treatment::start(Glp1Medication::Ozempic, day(2025, 1, 1), 100.0);
    let progress = TreatmentPlanner::progress(&treatment, None, day(2024, 12, 1));
    assert_eq!(progress.weeks_on_treatment, 0);
    assert!(progress.weight_lost_kg.is_none());
    assert!(progress.target_progress_percent.is_none());
}
