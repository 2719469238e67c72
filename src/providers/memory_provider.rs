// ABOUTME: In-memory health store implementing every collaborator interface
// ABOUTME: Backs the report binary, tests and benchmarks without a device store or database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

// RwLock poisoning errors are converted to AppError storage errors

//! # In-Memory Health Store
//!
//! Holds device samples, manual measurements, lab checkups and the active
//! treatment in ordered maps keyed by calendar day. One record per day per
//! sample kind: recording a second sample for the same day replaces the first.
//!
//! ## Validation
//!
//! Writes through the store traits are validated the way the app's entry forms
//! validate them: weights must be in (0, 700] kg, waists in (0, 400] cm, lab
//! values finite with ordered reference bounds, and treatments need a positive
//! start weight and dose.
//!
//! ## Thread Safety
//!
//! All data access is protected by `RwLock`. Guards are never held across an
//! `.await`, so the trait futures stay `Send`.

use crate::providers::core::{
    CheckupStore, DateRange, HealthDataProvider, MeasurementStore, TreatmentStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::debug;
use uuid::Uuid;
use wellness_core::constants::time::SECONDS_PER_HOUR;
use wellness_core::errors::{AppError, AppResult};
use wellness_core::models::{
    ActivitySample, BodyMeasurement, Glp1Treatment, HealthCheckup, HeartRateZone, HeartSample,
    SleepSample, WorkoutSummary,
};

/// Heaviest accepted body weight (kg)
pub const MAX_WEIGHT_KG: f64 = 700.0;

/// Largest accepted waist circumference (cm)
pub const MAX_WAIST_CM: f64 = 400.0;

fn poisoned(lock: &str) -> AppError {
    AppError::storage(format!("RwLock poisoned: {lock} lock"))
}

fn in_range<T: Clone>(map: &BTreeMap<NaiveDate, T>, range: DateRange) -> Vec<T> {
    if range.start > range.end {
        return Vec::new();
    }
    map.range(range.start..=range.end)
        .map(|(_, value)| value.clone())
        .collect()
}

/// In-memory implementation of all collaborator interfaces
#[derive(Debug, Default, Clone)]
pub struct InMemoryHealthStore {
    sleep: Arc<RwLock<BTreeMap<NaiveDate, SleepSample>>>,
    activity: Arc<RwLock<BTreeMap<NaiveDate, ActivitySample>>>,
    heart: Arc<RwLock<BTreeMap<NaiveDate, HeartSample>>>,
    measurements: Arc<RwLock<BTreeMap<NaiveDate, BodyMeasurement>>>,
    checkups: Arc<RwLock<Vec<HealthCheckup>>>,
    treatment: Arc<RwLock<Option<Glp1Treatment>>>,
}

impl InMemoryHealthStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the sleep sample for its day
    ///
    /// # Errors
    ///
    /// Returns a storage error if the internal `RwLock` is poisoned.
    pub fn record_sleep(&self, sample: SleepSample) -> AppResult<()> {
        self.sleep
            .write()
            .map_err(|_| poisoned("sleep"))?
            .insert(sample.date, sample);
        Ok(())
    }

    /// Record (or replace) the activity sample for its day
    ///
    /// # Errors
    ///
    /// Returns a storage error if the internal `RwLock` is poisoned.
    pub fn record_activity(&self, sample: ActivitySample) -> AppResult<()> {
        self.activity
            .write()
            .map_err(|_| poisoned("activity"))?
            .insert(sample.date, sample);
        Ok(())
    }

    /// Record (or replace) the heart sample for its day
    ///
    /// # Errors
    ///
    /// Returns a storage error if the internal `RwLock` is poisoned.
    pub fn record_heart(&self, sample: HeartSample) -> AppResult<()> {
        self.heart
            .write()
            .map_err(|_| poisoned("heart"))?
            .insert(sample.date, sample);
        Ok(())
    }

    /// Number of days with any device sample
    ///
    /// # Errors
    ///
    /// Returns a storage error if an internal `RwLock` is poisoned.
    pub fn device_day_count(&self) -> AppResult<usize> {
        let sleep = self.sleep.read().map_err(|_| poisoned("sleep"))?;
        let activity = self.activity.read().map_err(|_| poisoned("activity"))?;
        let heart = self.heart.read().map_err(|_| poisoned("heart"))?;
        let mut days: Vec<&NaiveDate> = sleep
            .keys()
            .chain(activity.keys())
            .chain(heart.keys())
            .collect();
        days.sort_unstable();
        days.dedup();
        Ok(days.len())
    }

    /// Store pre-populated with `days` days of plausible device data ending on `end`
    ///
    /// Values vary deterministically with the day index so trends are
    /// non-flat. Used by demos and benchmarks.
    ///
    /// # Errors
    ///
    /// Returns a storage error if an internal `RwLock` is poisoned.
    pub fn with_synthetic_history(end: NaiveDate, days: u32) -> AppResult<Self> {
        let store = Self::new();
        for offset in 0..days {
            let Some(date) = end.checked_sub_days(Days::new(u64::from(offset))) else {
                break;
            };
            let (sleep, activity, heart) = synthetic_day(date, offset);
            store.record_sleep(sleep)?;
            store.record_activity(activity)?;
            store.record_heart(heart)?;
            if offset % 7 == 0 {
                let weight = f64::from(offset).mul_add(0.05, 82.0);
                let waist = f64::from(offset).mul_add(0.1, 94.0);
                store.insert_measurement(BodyMeasurement::new(date, Some(weight), Some(waist)))?;
            }
        }
        debug!(days, %end, "Generated synthetic health history");
        Ok(store)
    }

    fn insert_measurement(&self, measurement: BodyMeasurement) -> AppResult<BodyMeasurement> {
        let mut map = self
            .measurements
            .write()
            .map_err(|_| poisoned("measurements"))?;
        let stored = map
            .entry(measurement.date)
            .and_modify(|existing| existing.merge(&measurement))
            .or_insert_with(|| measurement.clone());
        Ok(stored.clone())
    }
}

#[allow(clippy::cast_precision_loss)]
fn synthetic_day(date: NaiveDate, offset: u32) -> (SleepSample, ActivitySample, HeartSample) {
    let wobble = f64::from(offset % 5);
    let total = (7.0 + wobble * 0.25) * SECONDS_PER_HOUR;
    let deep = total * 0.18;
    let rem = total * 0.22;
    let sleep = SleepSample {
        date,
        total_duration: total,
        deep_sleep: deep,
        rem_sleep: rem,
        light_sleep: total - deep - rem,
        awake: 1_200.0,
    };

    let start_time = date
        .and_hms_opt(7, 30, 0)
        .map_or_else(Utc::now, |naive| DateTime::from_naive_utc_and_offset(naive, Utc));
    let activity = ActivitySample {
        date,
        steps: 6_000 + (offset % 7) * 900,
        active_calories: wobble.mul_add(60.0, 350.0),
        total_calories: wobble.mul_add(60.0, 2_150.0),
        distance: f64::from(6_000 + (offset % 7) * 900) * 0.75,
        exercise_minutes: wobble.mul_add(8.0, 15.0),
        stand_hours: 8 + offset % 4,
        workouts: if offset % 2 == 0 {
            vec![WorkoutSummary {
                workout_type: "running".to_owned(),
                duration: 1_800.0,
                calories: 280.0,
                start_time,
                average_heart_rate: Some(146.0),
            }]
        } else {
            Vec::new()
        },
    };

    let heart = HeartSample {
        date,
        resting_heart_rate: 56.0 + wobble,
        average_heart_rate: 72.0 + wobble,
        max_heart_rate: 165.0,
        min_heart_rate: 50.0,
        hrv: Some(wobble.mul_add(4.0, 42.0)),
        zones: (1..=5)
            .map(|zone| HeartRateZone {
                zone,
                min_bpm: 90.0 + f64::from(zone) * 15.0,
                max_bpm: 105.0 + f64::from(zone) * 15.0,
                duration: 1_500.0 / f64::from(zone),
            })
            .collect(),
    };

    (sleep, activity, heart)
}

fn validate_measurement(measurement: &BodyMeasurement) -> AppResult<()> {
    if measurement.is_empty() {
        return Err(AppError::missing_field(
            "measurement needs a weight or a waist circumference",
        ));
    }
    if let Some(weight) = measurement.weight {
        if !weight.is_finite() || weight <= 0.0 || weight > MAX_WEIGHT_KG {
            return Err(AppError::out_of_range(format!(
                "Weight must be between 0 and {MAX_WEIGHT_KG} kg, got {weight}"
            )));
        }
    }
    if let Some(waist) = measurement.waist_circumference {
        if !waist.is_finite() || waist <= 0.0 || waist > MAX_WAIST_CM {
            return Err(AppError::out_of_range(format!(
                "Waist circumference must be between 0 and {MAX_WAIST_CM} cm, got {waist}"
            )));
        }
    }
    Ok(())
}

fn validate_checkup(checkup: &HealthCheckup) -> AppResult<()> {
    if checkup.title.trim().is_empty() {
        return Err(AppError::missing_field("checkup title"));
    }
    for lab in &checkup.lab_values {
        if lab.name.trim().is_empty() {
            return Err(AppError::missing_field("lab value name"));
        }
        if !lab.value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Lab value '{}' is not a finite number",
                lab.name
            )));
        }
        if let (Some(min), Some(max)) = (lab.reference_min, lab.reference_max) {
            if min > max {
                return Err(AppError::invalid_input(format!(
                    "Lab value '{}' has reference minimum {min} above maximum {max}",
                    lab.name
                )));
            }
        }
    }
    Ok(())
}

fn validate_treatment(treatment: &Glp1Treatment) -> AppResult<()> {
    if !treatment.start_weight.is_finite() || treatment.start_weight <= 0.0 {
        return Err(AppError::out_of_range("Start weight must be positive"));
    }
    if !treatment.current_dose.is_finite() || treatment.current_dose <= 0.0 {
        return Err(AppError::out_of_range("Current dose must be positive"));
    }
    if treatment.injection_hour.is_some_and(|hour| hour >= 24) {
        return Err(AppError::out_of_range("Injection hour must be 0-23"));
    }
    if treatment.injection_minute.is_some_and(|minute| minute >= 60) {
        return Err(AppError::out_of_range("Injection minute must be 0-59"));
    }
    Ok(())
}

#[async_trait]
impl HealthDataProvider for InMemoryHealthStore {
    async fn sleep_range(&self, range: DateRange) -> AppResult<Vec<SleepSample>> {
        let map = self.sleep.read().map_err(|_| poisoned("sleep"))?;
        Ok(in_range(&map, range))
    }

    async fn activity_range(&self, range: DateRange) -> AppResult<Vec<ActivitySample>> {
        let map = self.activity.read().map_err(|_| poisoned("activity"))?;
        Ok(in_range(&map, range))
    }

    async fn heart_range(&self, range: DateRange) -> AppResult<Vec<HeartSample>> {
        let map = self.heart.read().map_err(|_| poisoned("heart"))?;
        Ok(in_range(&map, range))
    }
}

#[async_trait]
impl MeasurementStore for InMemoryHealthStore {
    async fn upsert_measurement(&self, measurement: BodyMeasurement) -> AppResult<BodyMeasurement> {
        validate_measurement(&measurement)?;
        self.insert_measurement(measurement)
    }

    async fn measurements_in_range(&self, range: DateRange) -> AppResult<Vec<BodyMeasurement>> {
        let map = self
            .measurements
            .read()
            .map_err(|_| poisoned("measurements"))?;
        Ok(in_range(&map, range))
    }

    async fn delete_measurement(&self, date: NaiveDate) -> AppResult<()> {
        self.measurements
            .write()
            .map_err(|_| poisoned("measurements"))?
            .remove(&date)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Measurement for {date}")))
    }
}

#[async_trait]
impl CheckupStore for InMemoryHealthStore {
    async fn save_checkup(&self, checkup: HealthCheckup) -> AppResult<()> {
        validate_checkup(&checkup)?;
        let mut checkups = self.checkups.write().map_err(|_| poisoned("checkups"))?;
        if let Some(existing) = checkups.iter_mut().find(|c| c.id == checkup.id) {
            *existing = checkup;
        } else {
            checkups.push(checkup);
        }
        Ok(())
    }

    async fn list_checkups(&self) -> AppResult<Vec<HealthCheckup>> {
        let mut checkups = self
            .checkups
            .read()
            .map_err(|_| poisoned("checkups"))?
            .clone();
        checkups.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(checkups)
    }

    async fn delete_checkup(&self, id: Uuid) -> AppResult<()> {
        let mut checkups = self.checkups.write().map_err(|_| poisoned("checkups"))?;
        let before = checkups.len();
        checkups.retain(|c| c.id != id);
        if checkups.len() == before {
            return Err(AppError::not_found(format!("Checkup {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl TreatmentStore for InMemoryHealthStore {
    async fn save_treatment(&self, treatment: Glp1Treatment) -> AppResult<()> {
        validate_treatment(&treatment)?;
        *self.treatment.write().map_err(|_| poisoned("treatment"))? = Some(treatment);
        Ok(())
    }

    async fn active_treatment(&self) -> AppResult<Option<Glp1Treatment>> {
        Ok(self
            .treatment
            .read()
            .map_err(|_| poisoned("treatment"))?
            .clone())
    }

    async fn clear_treatment(&self) -> AppResult<()> {
        *self.treatment.write().map_err(|_| poisoned("treatment"))? = None;
        Ok(())
    }
}
