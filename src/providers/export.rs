// ABOUTME: JSON health data export loaded into the in-memory store
// ABOUTME: Mirrors the app's data dump: user, device samples, measurements, checkups, treatment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use crate::providers::core::{CheckupStore, MeasurementStore, TreatmentStore};
use crate::providers::memory_provider::InMemoryHealthStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use wellness_core::errors::{AppError, AppResult, ErrorCode};
use wellness_core::models::{
    ActivitySample, BodyMeasurement, Glp1Treatment, HealthCheckup, HeartSample, SleepSample, User,
};

/// Full export of one user's health data
///
/// Every collection is optional in the file and defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthExport {
    /// Account, profile and goals
    pub user: User,
    /// Nightly sleep samples
    #[serde(default)]
    pub sleep: Vec<SleepSample>,
    /// Daily activity samples
    #[serde(default)]
    pub activity: Vec<ActivitySample>,
    /// Daily heart samples
    #[serde(default)]
    pub heart: Vec<HeartSample>,
    /// Manual body measurements
    #[serde(default)]
    pub measurements: Vec<BodyMeasurement>,
    /// Lab checkups
    #[serde(default)]
    pub checkups: Vec<HealthCheckup>,
    /// Active treatment plan
    #[serde(default)]
    pub treatment: Option<Glp1Treatment>,
}

impl HealthExport {
    /// Export with a user and no data
    #[must_use]
    pub const fn empty(user: User) -> Self {
        Self {
            user,
            sleep: Vec::new(),
            activity: Vec::new(),
            heart: Vec::new(),
            measurements: Vec::new(),
            checkups: Vec::new(),
            treatment: None,
        }
    }

    /// Parse an export from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an invalid-format error if the JSON does not match the export format
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Malformed health export: {e}"))
                .with_source(e)
        })
    }

    /// Read and parse an export file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read export {}", path.display())).with_source(e)
        })?;
        let export = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            sleep = export.sleep.len(),
            activity = export.activity.len(),
            heart = export.heart.len(),
            measurements = export.measurements.len(),
            checkups = export.checkups.len(),
            "Loaded health export"
        );
        Ok(export)
    }

    /// Write the export as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await.map_err(|e| {
            AppError::storage(format!("Failed to write export {}", path.display())).with_source(e)
        })
    }

    /// Populate a fresh in-memory store, returning it with the user
    ///
    /// Measurements, checkups and the treatment go through the store's
    /// validation, so an export with invalid entries is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first validation or storage error encountered
    pub async fn into_store(self) -> AppResult<(User, InMemoryHealthStore)> {
        let store = InMemoryHealthStore::new();
        for sample in self.sleep {
            store.record_sleep(sample)?;
        }
        for sample in self.activity {
            store.record_activity(sample)?;
        }
        for sample in self.heart {
            store.record_heart(sample)?;
        }
        for measurement in self.measurements {
            store.upsert_measurement(measurement).await?;
        }
        for checkup in self.checkups {
            store.save_checkup(checkup).await?;
        }
        if let Some(treatment) = self.treatment {
            store.save_treatment(treatment).await?;
        }
        debug!(user_id = %self.user.id, "Health export loaded into memory store");
        Ok((self.user, store))
    }
}
