// ABOUTME: Reference-interval checks for lab values parsed from checkup reports
// ABOUTME: Flags low/high values, groups by panel, and tracks one analyte across checkups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use crate::trend_analysis::{TrendPoint, TrendSeries};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wellness_core::models::{HealthCheckup, LabCategory, LabValue};

/// Position of a value relative to its reference interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabFlag {
    /// Below the lower bound
    Low,
    /// Within [min, max]
    Normal,
    /// Above the upper bound
    High,
    /// At least one bound missing; never counted as out of range
    NoReference,
}

impl LabFlag {
    /// Classify a lab value against its reference interval
    ///
    /// Whether a value is out of range is decided by
    /// [`LabValue::is_out_of_range`]; this only adds the direction.
    #[must_use]
    pub fn classify(value: &LabValue) -> Self {
        match (value.reference_min, value.reference_max) {
            (Some(min), Some(_)) if value.is_out_of_range() => {
                if value.value < min {
                    Self::Low
                } else {
                    Self::High
                }
            }
            (Some(_), Some(_)) => Self::Normal,
            _ => Self::NoReference,
        }
    }

    /// True for `Low` and `High`
    #[must_use]
    pub const fn is_out_of_range(self) -> bool {
        matches!(self, Self::Low | Self::High)
    }
}

/// Lab checkup analysis
pub struct LabAnalyzer;

impl LabAnalyzer {
    /// Values outside their reference interval, with their flag, in report order
    #[must_use]
    pub fn flagged(checkup: &HealthCheckup) -> Vec<(&LabValue, LabFlag)> {
        checkup
            .lab_values
            .iter()
            .map(|value| (value, LabFlag::classify(value)))
            .filter(|(_, flag)| flag.is_out_of_range())
            .collect()
    }

    /// Values grouped by panel
    #[must_use]
    pub fn by_category(checkup: &HealthCheckup) -> BTreeMap<LabCategory, Vec<&LabValue>> {
        let mut grouped: BTreeMap<LabCategory, Vec<&LabValue>> = BTreeMap::new();
        for value in &checkup.lab_values {
            grouped.entry(value.category).or_default().push(value);
        }
        grouped
    }

    /// History of one analyte across checkups (name match ignores case and surrounding spaces)
    #[must_use]
    pub fn history(checkups: &[HealthCheckup], name: &str) -> TrendSeries {
        let wanted = name.trim();
        TrendSeries::from_points(checkups.iter().flat_map(|checkup| {
            checkup
                .lab_values
                .iter()
                .filter(move |value| value.name.trim().eq_ignore_ascii_case(wanted))
                .map(move |value| TrendPoint::new(checkup.date, value.value))
        }))
    }
}
