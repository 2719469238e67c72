// ABOUTME: HRV and resting heart rate classification into ordinal status ladders
// ABOUTME: Total functions: every input, including absent or absurd values, maps to one status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Heart Status Classification
//!
//! | HRV (ms)    | Status    |   | Resting HR (bpm) | Status    |
//! |-------------|-----------|---|------------------|-----------|
//! | ≥ 60        | Excellent |   | < 50             | Athletic  |
//! | 40 – 59.9   | Good      |   | 50 – 59.9        | Excellent |
//! | 20 – 39.9   | Fair      |   | 60 – 69.9        | Good      |
//! | < 20        | Low       |   | 70 – 79.9        | Average   |
//! | absent/NaN  | Unknown   |   | ≥ 80 or NaN      | Elevated  |

use serde::{Deserialize, Serialize};
use wellness_core::models::HeartRateZone;

/// Recovery term used when HRV is unavailable
pub const NEUTRAL_HRV_SCORE: f64 = 50.0;

/// HRV status ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HrvStatus {
    /// 60 ms and above
    Excellent,
    /// 40 ms up to 60 ms
    Good,
    /// 20 ms up to 40 ms
    Fair,
    /// Below 20 ms, including negative readings
    Low,
    /// No reading, or a non-finite one
    Unknown,
}

impl HrvStatus {
    /// Classify an optional HRV reading (ms)
    #[must_use]
    pub fn from_hrv(hrv: Option<f64>) -> Self {
        match hrv {
            Some(ms) if !ms.is_finite() => Self::Unknown,
            Some(ms) if ms >= 60.0 => Self::Excellent,
            Some(ms) if ms >= 40.0 => Self::Good,
            Some(ms) if ms >= 20.0 => Self::Fair,
            Some(_) => Self::Low,
            None => Self::Unknown,
        }
    }

    /// Recovery term contributed by this status (0-100)
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Excellent => 100.0,
            Self::Good => 80.0,
            Self::Fair => 60.0,
            Self::Low => 30.0,
            Self::Unknown => NEUTRAL_HRV_SCORE,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }
}

/// Resting heart rate status ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestingHrStatus {
    /// Below 50 bpm
    Athletic,
    /// 50 bpm up to 60 bpm
    Excellent,
    /// 60 bpm up to 70 bpm
    Good,
    /// 70 bpm up to 80 bpm
    Average,
    /// 80 bpm and above
    Elevated,
}

impl RestingHrStatus {
    /// Classify a resting heart rate (bpm)
    ///
    /// Values below the lowest bucket clamp to `Athletic`; values above the
    /// highest bucket, and NaN, land in `Elevated`.
    #[must_use]
    pub fn from_bpm(bpm: f64) -> Self {
        if bpm < 50.0 {
            Self::Athletic
        } else if bpm < 60.0 {
            Self::Excellent
        } else if bpm < 70.0 {
            Self::Good
        } else if bpm < 80.0 {
            Self::Average
        } else {
            Self::Elevated
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Athletic => "Athletic",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Elevated => "Elevated",
        }
    }
}

/// Share of recorded zone time spent in one zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneShare {
    /// Zone number (1-5)
    pub zone: u8,
    /// Time in zone (seconds)
    pub duration: f64,
    /// Fraction of total zone time (0-1)
    pub share: f64,
}

/// Heart rate zone helpers
pub struct HeartAnalyzer;

impl HeartAnalyzer {
    /// Fraction of time spent in each zone
    ///
    /// Returns an empty list when no zone time was recorded.
    #[must_use]
    pub fn zone_distribution(zones: &[HeartRateZone]) -> Vec<ZoneShare> {
        let total: f64 = zones
            .iter()
            .map(|zone| zone.duration)
            .filter(|duration| duration.is_finite() && *duration > 0.0)
            .sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut shares: Vec<ZoneShare> = zones
            .iter()
            .map(|zone| {
                let duration = if zone.duration.is_finite() {
                    zone.duration.max(0.0)
                } else {
                    0.0
                };
                ZoneShare {
                    zone: zone.zone,
                    duration,
                    share: duration / total,
                }
            })
            .collect();
        shares.sort_by_key(|share| share.zone);
        shares
    }
}
