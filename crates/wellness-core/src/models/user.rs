// ABOUTME: User identity, body profile and preference settings
// ABOUTME: The scoring engine only reads height and personal activity goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use crate::constants::{goals, units};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Measurement unit preference for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "imperial" | "us" | "lb" => Self::Imperial,
            _ => Self::Metric,
        }
    }

    /// Convert a mass in kilograms to this unit system
    #[must_use]
    pub fn mass_from_kg(self, kg: f64) -> f64 {
        match self {
            Self::Metric => kg,
            Self::Imperial => kg * units::POUNDS_PER_KG,
        }
    }

    /// Convert a mass in this unit system to kilograms
    #[must_use]
    pub fn mass_to_kg(self, value: f64) -> f64 {
        match self {
            Self::Metric => value,
            Self::Imperial => value / units::POUNDS_PER_KG,
        }
    }

    /// Convert a length in centimeters to this unit system
    #[must_use]
    pub fn length_from_cm(self, cm: f64) -> f64 {
        match self {
            Self::Metric => cm,
            Self::Imperial => cm / units::CM_PER_INCH,
        }
    }

    /// Mass unit label
    #[must_use]
    pub const fn mass_label(self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lb",
        }
    }

    /// Length unit label
    #[must_use]
    pub const fn length_label(self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Imperial => "in",
        }
    }
}

/// Personal daily goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityGoals {
    /// Daily steps
    pub daily_steps: u32,
    /// Active energy (kcal)
    pub active_calories: f64,
    /// Exercise minutes
    pub exercise_minutes: f64,
    /// Nightly sleep (hours)
    pub sleep_hours: f64,
}

impl Default for ActivityGoals {
    fn default() -> Self {
        Self {
            daily_steps: goals::DEFAULT_DAILY_STEPS,
            active_calories: goals::DEFAULT_ACTIVE_CALORIES,
            exercise_minutes: goals::DEFAULT_EXERCISE_MINUTES,
            sleep_hours: goals::DEFAULT_SLEEP_HOURS,
        }
    }
}

/// Body profile entered during onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Birth date
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Height (cm)
    #[serde(default)]
    pub height_cm: Option<f64>,
}

impl UserProfile {
    /// Age in whole years on the given day
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

/// User preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Display units
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Whether reminders are enabled at all
    #[serde(default)]
    pub notifications_enabled: bool,
    /// Personal goals
    #[serde(default)]
    pub goals: ActivityGoals,
}

/// Authenticated user as handed over by the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Body profile
    #[serde(default)]
    pub profile: UserProfile,
    /// Preferences
    #[serde(default)]
    pub settings: UserSettings,
}

impl User {
    /// Create a user with default profile and settings
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: None,
            display_name: Some(display_name.into()),
            profile: UserProfile::default(),
            settings: UserSettings::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_age_before_and_after_birthday() {
        let profile = UserProfile {
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15),
            height_cm: Some(175.0),
        };
        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()), Some(34));
        assert_eq!(profile.age_on(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()), Some(35));
    }

    #[test]
    fn test_imperial_mass_conversion() {
        let lb = UnitSystem::Imperial.mass_from_kg(100.0);
        assert!((lb - 220.462).abs() < 0.01);
        assert!((UnitSystem::Imperial.mass_to_kg(lb) - 100.0).abs() < 1e-9);
    }
}
