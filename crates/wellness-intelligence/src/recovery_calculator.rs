// ABOUTME: Composite recovery score blending last night's sleep score with HRV status
// ABOUTME: Falls back to a neutral HRV term when the device recorded no HRV
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Recovery Calculator Module
//!
//! `score = round(sleep_score × sleep_weight + hrv_score × hrv_weight)` with
//! default weights 0.6 / 0.4. The HRV term comes from [`HrvStatus::score`]
//! and is [`NEUTRAL_HRV_SCORE`] when HRV is absent.
//!
//! Status thresholds are fixed inclusive lower bounds:
//! 80 optimal, 65 good, 50 fair, anything lower needs rest.

use crate::config::ScoringConfig;
use crate::heart_status::{HrvStatus, NEUTRAL_HRV_SCORE};
use crate::sleep_analysis::SleepAnalyzer;
use serde::{Deserialize, Serialize};
use wellness_core::models::{HeartSample, SleepSample};

/// Recovery status ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// 80 and above
    Optimal,
    /// 65-79
    Good,
    /// 50-64
    Fair,
    /// Below 50
    NeedsRest,
}

impl RecoveryStatus {
    /// Classify a recovery score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Optimal,
            65..=79 => Self::Good,
            50..=64 => Self::Fair,
            _ => Self::NeedsRest,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsRest => "Needs Rest",
        }
    }
}

/// Which inputs contributed to a recovery score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCompleteness {
    /// Sleep and HRV
    Full,
    /// Sleep only, HRV term was neutral
    SleepOnly,
}

/// Composite recovery result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryScore {
    /// Overall score (0-100)
    pub score: u8,
    /// Status bucket for `score`
    pub status: RecoveryStatus,
    /// Sleep component (0-100)
    pub sleep_score: u8,
    /// HRV component (0-100)
    pub hrv_score: f64,
    /// HRV status that produced `hrv_score`
    pub hrv_status: HrvStatus,
    /// Inputs used
    pub completeness: DataCompleteness,
}

/// Recovery calculator
pub struct RecoveryCalculator;

impl RecoveryCalculator {
    /// Calculate the recovery score for a day
    ///
    /// Returns `None` when there is no sleep sample. A missing heart sample or
    /// a heart sample without HRV uses the neutral HRV term.
    #[must_use]
    pub fn calculate(
        sleep: Option<&SleepSample>,
        heart: Option<&HeartSample>,
        config: &ScoringConfig,
    ) -> Option<RecoveryScore> {
        let sleep = sleep?;
        let sleep_score = SleepAnalyzer::score(sleep, &config.sleep).score;
        let hrv_status = HrvStatus::from_hrv(heart.and_then(|h| h.hrv));
        Some(Self::from_components(sleep_score, hrv_status, config))
    }

    /// Blend an already computed sleep score with an HRV status
    #[must_use]
    pub fn from_components(
        sleep_score: u8,
        hrv_status: HrvStatus,
        config: &ScoringConfig,
    ) -> RecoveryScore {
        let hrv_score = hrv_status.score();
        let score = Self::blend(f64::from(sleep_score), hrv_score, config);
        let completeness = if hrv_status == HrvStatus::Unknown {
            DataCompleteness::SleepOnly
        } else {
            DataCompleteness::Full
        };

        RecoveryScore {
            score,
            status: RecoveryStatus::from_score(score),
            sleep_score,
            hrv_score,
            hrv_status,
            completeness,
        }
    }

    /// Weighted blend of the two terms, rounded and clamped to 0-100
    #[must_use]
    pub fn blend(sleep_score: f64, hrv_score: f64, config: &ScoringConfig) -> u8 {
        let weights = &config.recovery;
        let hrv_score = if hrv_score.is_finite() {
            hrv_score
        } else {
            NEUTRAL_HRV_SCORE
        };
        sleep_score
            .mul_add(weights.sleep_weight, hrv_score * weights.hrv_weight)
            .round()
            .clamp(0.0, 100.0) as u8
    }
}
