// ABOUTME: Service layer composing collaborator data with the scoring engine
// ABOUTME: Reusable by the report binary and any host application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Domain service layer
//!
//! Services hold collaborator handles and scoring configuration; they carry no
//! presentation logic.

/// Per-day dashboard snapshot
pub mod dashboard;

pub use dashboard::{
    ActivityCard, BodyCard, CheckupCard, DashboardService, DashboardSnapshot, HeartCard,
    LabFinding, SleepCard, TreatmentCard, TrendCard,
};
