// ABOUTME: Configuration module for the wellness tracker application layer
// ABOUTME: Re-exports environment configuration and the engine's scoring configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Configuration is environment-only: defaults, then `WELLNESS_*` overrides,
//! then validation.

/// Environment and application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
pub use wellness_intelligence::config::{ConfigError, ScoringConfig};
