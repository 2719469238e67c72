// ABOUTME: Application error types re-exported from the core crate
// ABOUTME: Single error vocabulary shared by the engine, stores, services and binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! # Unified Error Handling
//!
//! Scoring functions are total and never fail; errors come only from
//! configuration, input validation in the stores, and file I/O.

pub use wellness_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
