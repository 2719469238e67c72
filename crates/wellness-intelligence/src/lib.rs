// ABOUTME: Health scoring and trend projection engine for Wellness Tracker
// ABOUTME: Pure, synchronous functions over already-fetched health samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

#![deny(unsafe_code)]

//! # Wellness Intelligence
//!
//! Turns raw daily health samples into 0-100 scores, ordinal statuses and
//! trend projections. Every function here is total: missing or degenerate
//! input yields an explicit "no data" result (`None`, `Unknown`,
//! `TrendOutlook::InsufficientData`) rather than an error. Nothing holds
//! shared mutable state, so all of it may be called from any thread.
//!
//! ## Modules
//!
//! - **`sleep_analysis`**: sleep score and quality ladder
//! - **`activity_scoring`**: steps/energy/exercise blend and goal progress
//! - **`heart_status`**: HRV and resting heart rate classification
//! - **`recovery_calculator`**: sleep + HRV composite readiness
//! - **`body_composition`**: BMI and waist-to-height ratio
//! - **`trend_analysis`**: deltas, daily rates and 30-day projections
//! - **`lab_analysis`**: reference-interval flags for lab values
//! - **`treatment_schedule`**: GLP-1 dose reminders and progress

/// Scoring weights, caps and reference values
pub mod config;

/// Sleep quality scoring
pub mod sleep_analysis;

/// Daily activity scoring
pub mod activity_scoring;

/// HRV and resting heart rate status classification
pub mod heart_status;

/// Composite recovery score
pub mod recovery_calculator;

/// BMI and body shape metrics
pub mod body_composition;

/// Time series deltas and projections
pub mod trend_analysis;

/// Lab value reference checks
pub mod lab_analysis;

/// GLP-1 treatment scheduling
pub mod treatment_schedule;

pub use activity_scoring::{ActivityScorer, GoalProgress, WorkoutTotals};
pub use body_composition::{BmiAssessment, BmiCategory, BodyComposition};
pub use config::{
    ActivityScoringConfig, ConfigError, RecoveryScoringConfig, ScoringConfig, SleepScoringConfig,
};
pub use heart_status::{HeartAnalyzer, HrvStatus, RestingHrStatus, ZoneShare, NEUTRAL_HRV_SCORE};
pub use lab_analysis::{LabAnalyzer, LabFlag};
pub use recovery_calculator::{DataCompleteness, RecoveryCalculator, RecoveryScore, RecoveryStatus};
pub use sleep_analysis::{SleepAnalyzer, SleepQuality, SleepScore, SleepSummary};
pub use treatment_schedule::{TreatmentPlanner, TreatmentProgress};
pub use trend_analysis::{TrendMetric, TrendOutlook, TrendPoint, TrendSeries};
