// ABOUTME: Collaborator interfaces the scoring engine's inputs are fetched through
// ABOUTME: Health data provider, measurement store, lab checkup store and treatment store traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! # Collaborator Interfaces
//!
//! The device health store, the manual measurement log, the lab checkup log
//! and the treatment plan live outside the scoring engine. These traits are
//! the seams through which already-fetched, unit-normalized values reach it.
//! Implementations are injected into [`crate::services::DashboardService`].

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wellness_core::errors::{AppError, AppResult};
use wellness_core::models::{
    ActivitySample, BodyMeasurement, Glp1Treatment, HealthCheckup, HeartSample, SleepSample,
};

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive)
    pub start: NaiveDate,
    /// Last day (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "Date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The `days` days ending on (and including) `end`
    ///
    /// `days` of 0 is treated as 1.
    #[must_use]
    pub fn last_days(end: NaiveDate, days: u32) -> Self {
        let span = u64::from(days.max(1) - 1);
        let start = end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Single day
    #[must_use]
    pub const fn day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// True if `date` lies within the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Device health store: sleep, activity and heart readings per day
#[async_trait]
pub trait HealthDataProvider: Send + Sync {
    /// Sleep samples within the range, ordered by date
    async fn sleep_range(&self, range: DateRange) -> AppResult<Vec<SleepSample>>;

    /// Activity samples within the range, ordered by date
    async fn activity_range(&self, range: DateRange) -> AppResult<Vec<ActivitySample>>;

    /// Heart samples within the range, ordered by date
    async fn heart_range(&self, range: DateRange) -> AppResult<Vec<HeartSample>>;

    /// Sleep sample for one day
    async fn sleep_for_day(&self, day: NaiveDate) -> AppResult<Option<SleepSample>> {
        Ok(self.sleep_range(DateRange::day(day)).await?.into_iter().next())
    }

    /// Activity sample for one day
    async fn activity_for_day(&self, day: NaiveDate) -> AppResult<Option<ActivitySample>> {
        Ok(self
            .activity_range(DateRange::day(day))
            .await?
            .into_iter()
            .next())
    }

    /// Heart sample for one day
    async fn heart_for_day(&self, day: NaiveDate) -> AppResult<Option<HeartSample>> {
        Ok(self.heart_range(DateRange::day(day)).await?.into_iter().next())
    }
}

/// Manual body measurement log
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Create or update the record for the measurement's date
    ///
    /// Fields absent from `measurement` keep their stored value. Returns the
    /// record as stored.
    async fn upsert_measurement(&self, measurement: BodyMeasurement) -> AppResult<BodyMeasurement>;

    /// Records within the range, ordered by date
    async fn measurements_in_range(&self, range: DateRange) -> AppResult<Vec<BodyMeasurement>>;

    /// Delete the record for a date
    async fn delete_measurement(&self, date: NaiveDate) -> AppResult<()>;
}

/// Lab checkup log
#[async_trait]
pub trait CheckupStore: Send + Sync {
    /// Insert or replace a checkup (matched by id)
    async fn save_checkup(&self, checkup: HealthCheckup) -> AppResult<()>;

    /// All checkups, newest first
    async fn list_checkups(&self) -> AppResult<Vec<HealthCheckup>>;

    /// Delete a checkup by id
    async fn delete_checkup(&self, id: Uuid) -> AppResult<()>;
}

/// Active treatment plan (at most one)
#[async_trait]
pub trait TreatmentStore: Send + Sync {
    /// Replace the active treatment
    async fn save_treatment(&self, treatment: Glp1Treatment) -> AppResult<()>;

    /// Active treatment, if any
    async fn active_treatment(&self) -> AppResult<Option<Glp1Treatment>>;

    /// Remove the active treatment
    async fn clear_treatment(&self) -> AppResult<()>;
}
