// ABOUTME: Main library entry point for the wellness tracker scoring and trend engine
// ABOUTME: Wires collaborator stores, configuration and logging around the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

#![deny(unsafe_code)]

//! # Wellness Tracker
//!
//! Health scoring and trend engine for a personal wellness app. Turns nightly
//! sleep, daily activity, heart metrics, manual body measurements, lab
//! checkups and a GLP-1 treatment plan into scores, status buckets, trends and
//! dose reminders.
//!
//! ## Architecture
//!
//! - **`wellness-core`**: data model, constants and the shared error type
//! - **`wellness-intelligence`**: pure scoring functions and their configuration
//! - **Providers**: collaborator traits plus an in-memory store and JSON export
//! - **Services**: the dashboard snapshot composed from providers and engine
//! - **Config / Logging**: environment configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use wellness_tracker::config::AppConfig;
//! use wellness_tracker::errors::AppResult;
//! use wellness_tracker::providers::HealthExport;
//! use wellness_tracker::services::DashboardService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let (user, store) = HealthExport::load("export.json").await?.into_store().await?;
//!     let service = DashboardService::from_store(&store, config.scoring, config.trend_window_days);
//!     let now = Local::now().naive_local();
//!     let snapshot = service.snapshot(&user, now.date(), now).await?;
//!     println!("{:?}", snapshot.recovery.map(|r| r.score));
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Collaborator traits, in-memory store and export loader
pub mod providers;

/// Dashboard composition
pub mod services;

pub use wellness_core::{constants, models};
pub use wellness_intelligence as intelligence;
