// ABOUTME: Core types and constants for the Wellness Tracker workspace
// ABOUTME: Foundation crate with health sample models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

#![deny(unsafe_code)]

//! # Wellness Core
//!
//! Foundation crate providing the shared health data model for the Wellness
//! Tracker workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors and physiological reference values
//! - **models**: Sleep, activity, heart, body measurement, lab checkup and treatment records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (samples, measurements, checkups, treatment, user)
pub mod models;
