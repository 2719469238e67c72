// ABOUTME: Sleep scoring from stage composition and duration against a nightly goal
// ABOUTME: Maps a night of sleep to a 0-100 score and a four-level quality ladder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Sleep Quality Analysis Module
//!
//! The score blends two capped ratios:
//!
//! - **Restorative share**: (deep + REM) / total, relative to a target share
//! - **Duration**: total sleep relative to the nightly goal
//!
//! Each ratio is capped at 1.0, weighted, and scaled to 0-100. The result is
//! truncated, so only a night meeting both references reaches 100.

use crate::config::SleepScoringConfig;
use serde::{Deserialize, Serialize};
use wellness_core::constants::time::SECONDS_PER_HOUR;
use wellness_core::models::SleepSample;

/// Sleep quality ladder, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    /// Score 85 and above
    Excellent,
    /// Score 70-84
    Good,
    /// Score 50-69
    Fair,
    /// Score below 50
    Poor,
}

impl SleepQuality {
    /// Classify a sleep score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Scored night of sleep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepScore {
    /// Overall score (0-100)
    pub score: u8,
    /// Quality bucket for `score`
    pub quality: SleepQuality,
    /// (deep + REM) / total, uncapped
    pub restorative_ratio: f64,
    /// total / goal, uncapped
    pub duration_ratio: f64,
}

impl SleepScore {
    const fn empty() -> Self {
        Self {
            score: 0,
            quality: SleepQuality::Poor,
            restorative_ratio: 0.0,
            duration_ratio: 0.0,
        }
    }
}

/// Averages over several nights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepSummary {
    /// Nights included
    pub nights: usize,
    /// Mean score
    pub average_score: f64,
    /// Mean total sleep (hours)
    pub average_hours: f64,
    /// Quality bucket of the rounded mean score
    pub average_quality: SleepQuality,
}

/// Sleep analyzer for calculating sleep quality scores
pub struct SleepAnalyzer;

impl SleepAnalyzer {
    /// Score one night of sleep
    ///
    /// A zero, negative or non-finite total duration scores 0 (`Poor`).
    #[must_use]
    pub fn score(sleep: &SleepSample, config: &SleepScoringConfig) -> SleepScore {
        let total = sleep.total_duration;
        if !total.is_finite() || total <= 0.0 {
            return SleepScore::empty();
        }

        let restorative_ratio = non_negative(sleep.restorative_duration()) / total;
        let duration_ratio = total / (config.duration_goal_hours * SECONDS_PER_HOUR);

        let restorative_credit = (restorative_ratio / config.restorative_target_ratio).min(1.0);
        let duration_credit = duration_ratio.min(1.0);

        let weight_sum = config.restorative_weight + config.duration_weight;
        if weight_sum <= 0.0 {
            return SleepScore::empty();
        }
        let blend = config
            .restorative_weight
            .mul_add(restorative_credit, config.duration_weight * duration_credit)
            / weight_sum;

        let score = (blend * 100.0).floor().clamp(0.0, 100.0) as u8;

        SleepScore {
            score,
            quality: SleepQuality::from_score(score),
            restorative_ratio,
            duration_ratio,
        }
    }

    /// Average score and duration over a set of nights
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn summarize(nights: &[SleepSample], config: &SleepScoringConfig) -> Option<SleepSummary> {
        if nights.is_empty() {
            return None;
        }
        let count = nights.len() as f64;
        let total_score: f64 = nights
            .iter()
            .map(|night| f64::from(Self::score(night, config).score))
            .sum();
        let total_hours: f64 = nights
            .iter()
            .map(|night| non_negative(night.total_hours()))
            .sum();

        let average_score = total_score / count;
        Some(SleepSummary {
            nights: nights.len(),
            average_score,
            average_hours: total_hours / count,
            average_quality: SleepQuality::from_score(average_score.round() as u8),
        })
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
