// ABOUTME: Health data collaborators the dashboard service reads from
// ABOUTME: Trait seams plus the in-memory store and JSON export used to populate it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

/// Collaborator traits and date ranges
pub mod core;
/// JSON export format
pub mod export;
/// In-memory implementation of every collaborator trait
pub mod memory_provider;

pub use self::core::{
    CheckupStore, DateRange, HealthDataProvider, MeasurementStore, TreatmentStore,
};
pub use export::HealthExport;
pub use memory_provider::InMemoryHealthStore;
