// ABOUTME: Deltas, daily rates and linear 30-day projections over dated value series
// ABOUTME: Used for weight, waist, HRV, recovery score, steps and lab value histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Trend Analysis Module
//!
//! A [`TrendSeries`] is a date-ordered list of values. Rates use only the
//! first and last points: `daily_rate = (last - first) / days_between`.
//! Fewer than two points, or zero days between first and last, means there
//! is no trend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wellness_core::constants::time::DAYS_PER_WEEK;
use wellness_core::models::BodyMeasurement;

/// Horizon of the headline projection (days)
pub const PROJECTION_DAYS: f64 = 30.0;

/// One dated value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Value on that day
    pub value: f64,
}

impl TrendPoint {
    /// Create a point
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Summary of where a series is heading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendOutlook {
    /// Fewer than two points or zero elapsed days
    InsufficientData,
    /// Projected 30-day change is below the display threshold
    Stable,
    /// Projected change over the next 30 days
    Changing {
        /// Projected change over 30 days, in the series' unit
        per_thirty_days: f64,
    },
}

/// Metrics tracked as trends, with the change below which they read as "stable"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Body weight (kg)
    Weight,
    /// Waist circumference (cm)
    Waist,
    /// Heart rate variability (ms)
    Hrv,
    /// Recovery score (points)
    Recovery,
    /// Daily steps
    Steps,
}

impl TrendMetric {
    /// Stable identifier used as a map key in reports
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Waist => "waist",
            Self::Hrv => "hrv",
            Self::Recovery => "recovery",
            Self::Steps => "steps",
        }
    }

    /// Absolute 30-day change below which the metric is shown as stable
    #[must_use]
    pub const fn stable_threshold(self) -> f64 {
        match self {
            Self::Weight => 0.1,
            Self::Waist => 0.5,
            Self::Hrv | Self::Recovery => 1.0,
            Self::Steps => 100.0,
        }
    }
}

/// Date-ordered series of values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Build a series, sorting by date and dropping non-finite values
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = TrendPoint>) -> Self {
        let mut points: Vec<TrendPoint> = points
            .into_iter()
            .filter(|point| point.value.is_finite())
            .collect();
        points.sort_by_key(|point| point.date);
        Self { points }
    }

    /// Weight series from body measurements, skipping days without weight
    #[must_use]
    pub fn weight_from_measurements(measurements: &[BodyMeasurement]) -> Self {
        Self::from_points(
            measurements
                .iter()
                .filter_map(|m| m.weight.map(|w| TrendPoint::new(m.date, w))),
        )
    }

    /// Waist series from body measurements, skipping days without waist
    #[must_use]
    pub fn waist_from_measurements(measurements: &[BodyMeasurement]) -> Self {
        Self::from_points(
            measurements
                .iter()
                .filter_map(|m| m.waist_circumference.map(|w| TrendPoint::new(m.date, w))),
        )
    }

    /// Points in date order
    #[must_use]
    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point
    #[must_use]
    pub fn latest(&self) -> Option<TrendPoint> {
        self.points.last().copied()
    }

    /// Points on or after `since`
    #[must_use]
    pub fn window(&self, since: NaiveDate) -> Self {
        Self {
            points: self
                .points
                .iter()
                .filter(|point| point.date >= since)
                .copied()
                .collect(),
        }
    }

    /// Mean of all values
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().map(|p| p.value).sum::<f64>() / self.points.len() as f64)
    }

    fn endpoints(&self) -> Option<(TrendPoint, TrendPoint)> {
        if self.points.len() < 2 {
            return None;
        }
        Some((*self.points.first()?, *self.points.last()?))
    }

    /// Last value minus first value
    #[must_use]
    pub fn delta(&self) -> Option<f64> {
        self.endpoints().map(|(first, last)| last.value - first.value)
    }

    /// Change per day between first and last point
    #[must_use]
    pub fn daily_rate(&self) -> Option<f64> {
        let (first, last) = self.endpoints()?;
        let days = (last.date - first.date).num_days();
        if days == 0 {
            return None;
        }
        Some((last.value - first.value) / days as f64)
    }

    /// Linear projection of the daily rate over `days`
    #[must_use]
    pub fn projection(&self, days: f64) -> Option<f64> {
        self.daily_rate().map(|rate| rate * days)
    }

    /// Change per week at the current daily rate
    #[must_use]
    pub fn weekly_rate(&self) -> Option<f64> {
        self.daily_rate().map(|rate| rate * DAYS_PER_WEEK)
    }

    /// 30-day outlook with a "stable" band of `threshold`
    #[must_use]
    pub fn outlook(&self, threshold: f64) -> TrendOutlook {
        match self.projection(PROJECTION_DAYS) {
            None => TrendOutlook::InsufficientData,
            Some(change) if change.abs() < threshold => TrendOutlook::Stable,
            Some(change) => TrendOutlook::Changing {
                per_thirty_days: change,
            },
        }
    }

    /// 30-day outlook using the metric's display threshold
    #[must_use]
    pub fn outlook_for(&self, metric: TrendMetric) -> TrendOutlook {
        self.outlook(metric.stable_threshold())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset)
    }

    #[test]
    fn test_points_are_sorted_and_nan_dropped() {
        let series = TrendSeries::from_points([
            TrendPoint::new(day(5), 79.0),
            TrendPoint::new(day(2), f64::NAN),
            TrendPoint::new(day(0), 80.0),
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].date, day(0));
    }

    #[test]
    fn test_same_day_points_have_no_rate() {
        let series = TrendSeries::from_points([
            TrendPoint::new(day(3), 80.0),
            TrendPoint::new(day(3), 79.0),
        ]);
        assert_eq!(series.delta(), Some(-1.0));
        assert_eq!(series.daily_rate(), None);
        assert_eq!(series.outlook(0.1), TrendOutlook::InsufficientData);
    }
}
