// ABOUTME: GLP-1 medication treatment plan with per-medication dose ladders
// ABOUTME: One active treatment per user, replaced wholesale when saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How often a medication is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseCadence {
    /// Once per week on a fixed weekday
    Weekly,
    /// Once per day
    Daily,
}

/// Supported GLP-1 medications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glp1Medication {
    /// Semaglutide injection for type 2 diabetes
    Ozempic,
    /// Semaglutide injection for weight management
    Wegovy,
    /// Tirzepatide injection for type 2 diabetes
    Mounjaro,
    /// Tirzepatide injection for weight management
    Zepbound,
    /// Liraglutide daily injection
    Saxenda,
    /// Oral semaglutide tablet
    Rybelsus,
}

impl Glp1Medication {
    /// Titration ladder in milligrams, lowest (starting) dose first
    #[must_use]
    pub const fn dose_ladder(self) -> &'static [f64] {
        match self {
            Self::Ozempic => &[0.25, 0.5, 1.0, 2.0],
            Self::Wegovy => &[0.25, 0.5, 1.0, 1.7, 2.4],
            Self::Mounjaro | Self::Zepbound => &[2.5, 5.0, 7.5, 10.0, 12.5, 15.0],
            Self::Saxenda => &[0.6, 1.2, 1.8, 2.4, 3.0],
            Self::Rybelsus => &[3.0, 7.0, 14.0],
        }
    }

    /// Dosing cadence
    #[must_use]
    pub const fn cadence(self) -> DoseCadence {
        match self {
            Self::Ozempic | Self::Wegovy | Self::Mounjaro | Self::Zepbound => DoseCadence::Weekly,
            Self::Saxenda | Self::Rybelsus => DoseCadence::Daily,
        }
    }

    /// Active ingredient
    #[must_use]
    pub const fn generic_name(self) -> &'static str {
        match self {
            Self::Ozempic | Self::Wegovy | Self::Rybelsus => "semaglutide",
            Self::Mounjaro | Self::Zepbound => "tirzepatide",
            Self::Saxenda => "liraglutide",
        }
    }

    /// Starting dose (mg)
    #[must_use]
    pub fn starting_dose(self) -> f64 {
        self.dose_ladder().first().copied().unwrap_or_default()
    }

    /// Next step on the titration ladder above `current` (mg), `None` at the top
    #[must_use]
    pub fn next_dose_after(self, current: f64) -> Option<f64> {
        self.dose_ladder()
            .iter()
            .copied()
            .find(|dose| *dose > current + 1e-6)
    }
}

/// The user's active GLP-1 treatment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glp1Treatment {
    /// Medication being taken
    pub medication: Glp1Medication,
    /// First dose date
    #[serde(deserialize_with = "super::deserialize_flexible_date")]
    pub start_date: NaiveDate,
    /// Weight at treatment start (kg)
    pub start_weight: f64,
    /// Goal weight (kg)
    #[serde(default)]
    pub target_weight: Option<f64>,
    /// Current dose (mg)
    pub current_dose: f64,
    /// Preferred injection weekday for weekly medications
    #[serde(default)]
    pub injection_weekday: Option<Weekday>,
    /// Preferred reminder hour (0-23)
    #[serde(default)]
    pub injection_hour: Option<u32>,
    /// Preferred reminder minute (0-59)
    #[serde(default)]
    pub injection_minute: Option<u32>,
    /// Whether dose reminders are enabled
    #[serde(default)]
    pub notifications_enabled: bool,
}

impl Glp1Treatment {
    /// Start a treatment at the medication's starting dose
    #[must_use]
    pub fn start(medication: Glp1Medication, start_date: NaiveDate, start_weight: f64) -> Self {
        Self {
            medication,
            start_date,
            start_weight,
            target_weight: None,
            current_dose: medication.starting_dose(),
            injection_weekday: None,
            injection_hour: None,
            injection_minute: None,
            notifications_enabled: true,
        }
    }
}
