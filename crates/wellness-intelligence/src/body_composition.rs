// ABOUTME: Body mass index and waist-to-height ratio from logged measurements
// ABOUTME: Missing or non-positive inputs are a "no data" state, not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

use serde::{Deserialize, Serialize};
use wellness_core::constants::units::CM_PER_METER;

/// WHO adult BMI categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// BMI value with its category
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// kg/m²
    pub bmi: f64,
    /// Category for `bmi`
    pub category: BmiCategory,
}

/// Body composition calculations
pub struct BodyComposition;

impl BodyComposition {
    /// BMI = weight / height_m²
    ///
    /// `None` when either input is missing, non-finite, or not positive.
    #[must_use]
    pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
        let weight = positive(weight_kg)?;
        let height_m = positive(height_cm)? / CM_PER_METER;
        Some(weight / (height_m * height_m))
    }

    /// BMI with its category
    #[must_use]
    pub fn assess(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<BmiAssessment> {
        Self::bmi(weight_kg, height_cm).map(|bmi| BmiAssessment {
            bmi,
            category: BmiCategory::from_bmi(bmi),
        })
    }

    /// Waist circumference divided by height (both cm)
    #[must_use]
    pub fn waist_to_height_ratio(waist_cm: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
        Some(positive(waist_cm)? / positive(height_cm)?)
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
