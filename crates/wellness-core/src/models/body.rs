// ABOUTME: Manually logged body measurements (weight and waist circumference)
// ABOUTME: One record per calendar day, either field may be absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User-entered body measurement for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Calendar day the measurement belongs to
    #[serde(deserialize_with = "super::deserialize_flexible_date")]
    pub date: NaiveDate,
    /// Body weight (kg)
    #[serde(default)]
    pub weight: Option<f64>,
    /// Waist circumference (cm)
    #[serde(default)]
    pub waist_circumference: Option<f64>,
}

impl BodyMeasurement {
    /// Create a measurement with the given values
    #[must_use]
    pub const fn new(date: NaiveDate, weight: Option<f64>, waist_circumference: Option<f64>) -> Self {
        Self {
            date,
            weight,
            waist_circumference,
        }
    }

    /// True when neither weight nor waist is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.weight.is_none() && self.waist_circumference.is_none()
    }

    /// Overlay the fields present in `newer` onto this record
    ///
    /// A later entry for the same day only replaces the values it carries.
    pub fn merge(&mut self, newer: &Self) {
        if newer.weight.is_some() {
            self.weight = newer.weight;
        }
        if newer.waist_circumference.is_some() {
            self.waist_circumference = newer.waist_circumference;
        }
    }
}
