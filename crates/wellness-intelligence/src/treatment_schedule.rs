// ABOUTME: GLP-1 dose reminder scheduling and treatment progress tracking
// ABOUTME: Weekly medications repeat on a preferred weekday, daily ones at a preferred time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Treatment Schedule Module
//!
//! All times are local wall-clock (`NaiveDateTime`); the device decides the
//! time zone.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use wellness_core::models::{DoseCadence, Glp1Treatment};

/// Reminder hour used when the user has not picked one
pub const DEFAULT_REMINDER_HOUR: u32 = 9;

/// Progress since treatment start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentProgress {
    /// Whole weeks since the first dose (0 before start)
    pub weeks_on_treatment: i64,
    /// Start weight minus latest weight (kg); positive means weight lost
    pub weight_lost_kg: Option<f64>,
    /// `weight_lost_kg` as a percentage of start weight
    pub weight_lost_percent: Option<f64>,
    /// Share of the start→target distance covered (0-100)
    pub target_progress_percent: Option<f64>,
    /// Next step on the titration ladder, `None` at the maximum dose
    pub next_titration_dose: Option<f64>,
}

/// Treatment scheduling and progress
pub struct TreatmentPlanner;

impl TreatmentPlanner {
    /// Preferred reminder time, falling back to 09:00 for missing or invalid values
    #[must_use]
    pub fn reminder_time(treatment: &Glp1Treatment) -> NaiveTime {
        let hour = treatment.injection_hour.unwrap_or(DEFAULT_REMINDER_HOUR);
        let minute = treatment.injection_minute.unwrap_or(0);
        NaiveTime::from_hms_opt(hour, minute, 0)
            .or_else(|| NaiveTime::from_hms_opt(DEFAULT_REMINDER_HOUR, 0, 0))
            .unwrap_or(NaiveTime::MIN)
    }

    /// Next scheduled dose strictly after `now`
    ///
    /// Before the start date the first dose is on the start date. Weekly
    /// medications use the preferred weekday (default: the start date's
    /// weekday). Returns `None` only on calendar overflow.
    #[must_use]
    pub fn next_dose_at(treatment: &Glp1Treatment, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let time = Self::reminder_time(treatment);
        let first_dose = treatment.start_date.and_time(time);
        if now < first_dose {
            return Some(first_dose);
        }

        let today = now.date();
        let (candidate, period) = match treatment.medication.cadence() {
            DoseCadence::Daily => (today.and_time(time), 1),
            DoseCadence::Weekly => {
                let weekday = treatment
                    .injection_weekday
                    .unwrap_or_else(|| treatment.start_date.weekday());
                let ahead = (7 + weekday.num_days_from_monday()
                    - today.weekday().num_days_from_monday())
                    % 7;
                (
                    today
                        .checked_add_days(Days::new(u64::from(ahead)))?
                        .and_time(time),
                    7,
                )
            }
        };

        if candidate > now {
            Some(candidate)
        } else {
            candidate.checked_add_days(Days::new(period))
        }
    }

    /// Next reminder, or `None` when reminders are disabled
    #[must_use]
    pub fn next_reminder_at(
        treatment: &Glp1Treatment,
        now: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        if !treatment.notifications_enabled {
            return None;
        }
        Self::next_dose_at(treatment, now)
    }

    /// Next dose on the medication's titration ladder above the current dose
    #[must_use]
    pub fn next_titration_dose(treatment: &Glp1Treatment) -> Option<f64> {
        treatment.medication.next_dose_after(treatment.current_dose)
    }

    /// Progress as of `today` given the latest logged weight
    #[must_use]
    pub fn progress(
        treatment: &Glp1Treatment,
        latest_weight: Option<f64>,
        today: NaiveDate,
    ) -> TreatmentProgress {
        let weeks_on_treatment = (today - treatment.start_date).num_days().max(0) / 7;
        let start = treatment.start_weight;
        let latest_weight = latest_weight.filter(|w| w.is_finite() && *w > 0.0);

        let weight_lost_kg = latest_weight.map(|w| start - w);
        let weight_lost_percent = weight_lost_kg
            .filter(|_| start > 0.0)
            .map(|lost| lost / start * 100.0);
        let target_progress_percent = match (latest_weight, treatment.target_weight) {
            (Some(current), Some(target)) if target < start => {
                Some(((start - current) / (start - target) * 100.0).clamp(0.0, 100.0))
            }
            _ => None,
        };

        TreatmentProgress {
            weeks_on_treatment,
            weight_lost_kg,
            weight_lost_percent,
            target_progress_percent,
            next_titration_dose: Self::next_titration_dose(treatment),
        }
    }
}
