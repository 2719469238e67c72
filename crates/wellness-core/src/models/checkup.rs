// ABOUTME: Medical lab checkup records parsed from uploaded lab reports
// ABOUTME: Lab values carry optional clinical reference intervals and a category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Panel a lab value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabCategory {
    /// Complete blood count
    BloodCount,
    /// Glucose, HbA1c, electrolytes
    Metabolic,
    /// Cholesterol and triglycerides
    Lipids,
    /// Liver enzymes
    Liver,
    /// Creatinine, eGFR, urea
    Kidney,
    /// TSH, T3, T4
    Thyroid,
    /// Vitamin and mineral levels
    Vitamins,
    /// Sex and stress hormones
    Hormones,
    /// Anything not matching a known panel
    Other,
}

/// A single measured lab value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabValue {
    /// Analyte name as printed on the report (e.g. "Glucose")
    pub name: String,
    /// Measured value
    pub value: f64,
    /// Unit as printed on the report (e.g. "mg/dL")
    pub unit: String,
    /// Lower bound of the reference interval
    #[serde(default)]
    pub reference_min: Option<f64>,
    /// Upper bound of the reference interval
    #[serde(default)]
    pub reference_max: Option<f64>,
    /// Panel category
    #[serde(default = "default_category")]
    pub category: LabCategory,
}

const fn default_category() -> LabCategory {
    LabCategory::Other
}

impl LabValue {
    /// True when both reference bounds are present and the value lies outside them
    ///
    /// Values missing either bound are never flagged.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        match (self.reference_min, self.reference_max) {
            (Some(min), Some(max)) => self.value < min || self.value > max,
            _ => false,
        }
    }
}

/// A lab checkup, typically one visit or one uploaded report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckup {
    /// Stable identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Date the samples were taken
    #[serde(deserialize_with = "super::deserialize_flexible_date")]
    pub date: NaiveDate,
    /// Display title (e.g. "Annual physical")
    pub title: String,
    /// Lab or clinic name
    #[serde(default)]
    pub provider: Option<String>,
    /// Measured values in report order
    #[serde(default)]
    pub lab_values: Vec<LabValue>,
    /// Summary produced by the document parser, if any
    #[serde(default)]
    pub ai_summary: Option<String>,
}

impl HealthCheckup {
    /// Create an empty checkup with a fresh id
    #[must_use]
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            title: title.into(),
            provider: None,
            lab_values: Vec::new(),
            ai_summary: None,
        }
    }

    /// Number of values outside their reference interval, across all categories
    #[must_use]
    pub fn out_of_range_count(&self) -> usize {
        self.lab_values
            .iter()
            .filter(|value| value.is_out_of_range())
            .count()
    }
}
