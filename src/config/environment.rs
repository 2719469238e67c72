// ABOUTME: Environment configuration for the report binary and dashboard service
// ABOUTME: Parses deployment mode, log level, display units, trend window and scoring overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Environment-based configuration

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};
use wellness_core::errors::{AppError, AppResult};
use wellness_core::models::UnitSystem;
use wellness_intelligence::config::ScoringConfig;

/// Default number of days covered by dashboard trends
pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 30;

/// Longest trend window accepted (days)
pub const MAX_TREND_WINDOW_DAYS: u32 = 365;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Units used when rendering reports
    pub unit_system: UnitSystem,
    /// Days of history included in dashboard trends
    pub trend_window_days: u32,
    /// Scoring weights and caps
    pub scoring: ScoringConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            unit_system: UnitSystem::default(),
            trend_window_days: DEFAULT_TREND_WINDOW_DAYS,
            scoring: ScoringConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `WELLNESS_TREND_WINDOW_DAYS` is not a number in
    /// 2..=365 or the scoring overrides fail validation
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );
        let log_level =
            LogLevel::from_str_or_default(&env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));
        let unit_system = env::var("WELLNESS_UNITS")
            .map(|value| UnitSystem::from_str_or_default(&value))
            .unwrap_or_default();

        let trend_window_days = match env::var("WELLNESS_TREND_WINDOW_DAYS") {
            Ok(value) => parse_window_days(&value)?,
            Err(_) => DEFAULT_TREND_WINDOW_DAYS,
        };

        let scoring = ScoringConfig::load()?;

        let config = Self {
            environment,
            log_level,
            unit_system,
            trend_window_days,
            scoring,
        };
        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        if self.environment.is_production() && self.log_level == LogLevel::Trace {
            warn!("Trace logging enabled in production");
        }
        info!(
            environment = %self.environment,
            units = ?self.unit_system,
            trend_window_days = self.trend_window_days,
            "Configuration loaded"
        );
    }
}

/// Parse a trend window length in days
///
/// # Errors
///
/// Returns an error unless the value is an integer in 2..=365
pub fn parse_window_days(value: &str) -> AppResult<u32> {
    let days: u32 = value.trim().parse().map_err(|_| {
        AppError::config(format!(
            "Invalid WELLNESS_TREND_WINDOW_DAYS: '{value}' is not a whole number"
        ))
    })?;
    if !(2..=MAX_TREND_WINDOW_DAYS).contains(&days) {
        return Err(AppError::out_of_range(format!(
            "Trend window must be between 2 and {MAX_TREND_WINDOW_DAYS} days, got {days}"
        )));
    }
    Ok(days)
}
