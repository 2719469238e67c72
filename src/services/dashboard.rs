// ABOUTME: Dashboard composition service combining collaborator data with the scoring engine
// ABOUTME: Produces a per-day snapshot of scores, statuses, trends, lab flags and treatment progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! # Dashboard Service
//!
//! Fetches everything a day's dashboard needs through the collaborator traits
//! and runs it through the scoring engine. Missing inputs leave the matching
//! card empty (`None`); only collaborator failures are returned as errors.

use crate::providers::{
    CheckupStore, DateRange, HealthDataProvider, InMemoryHealthStore, MeasurementStore,
    TreatmentStore,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;
use wellness_core::errors::AppResult;
use wellness_core::models::{
    ActivitySample, BodyMeasurement, Glp1Medication, HealthCheckup, HeartSample, SleepSample,
    User,
};
use wellness_intelligence::{
    ActivityScorer, BmiAssessment, BodyComposition, GoalProgress, HeartAnalyzer, HrvStatus,
    LabAnalyzer, LabFlag, RecoveryCalculator, RecoveryScore, RestingHrStatus, ScoringConfig,
    SleepAnalyzer, SleepScore, SleepSummary, TreatmentPlanner, TreatmentProgress, TrendMetric,
    TrendOutlook, TrendPoint, TrendSeries, WorkoutTotals, ZoneShare,
};

/// Sleep card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepCard {
    /// Night attributed to the snapshot day
    pub score: SleepScore,
    /// Hours asleep
    pub hours: f64,
    /// Averages over the trend window
    pub window_summary: Option<SleepSummary>,
}

/// Activity card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCard {
    /// Activity score against the user's goals (0-100)
    pub score: u8,
    /// Per-goal completion
    pub goals: GoalProgress,
    /// Workout totals for the day
    pub workouts: WorkoutTotals,
    /// Steps taken
    pub steps: u32,
}

/// Heart card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartCard {
    /// Resting heart rate (bpm)
    pub resting_heart_rate: f64,
    /// Resting heart rate bucket
    pub resting_status: RestingHrStatus,
    /// HRV (ms), when recorded
    pub hrv: Option<f64>,
    /// HRV bucket
    pub hrv_status: HrvStatus,
    /// Time-in-zone shares
    pub zones: Vec<ZoneShare>,
}

/// Body card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCard {
    /// Most recent weight on or before the snapshot day (kg)
    pub latest_weight: Option<f64>,
    /// Most recent waist circumference on or before the snapshot day (cm)
    pub latest_waist: Option<f64>,
    /// BMI from latest weight and profile height
    pub bmi: Option<BmiAssessment>,
    /// Waist-to-height ratio
    pub waist_to_height: Option<f64>,
}

/// Trend of one metric over the window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendCard {
    /// Metric the trend tracks
    pub metric: TrendMetric,
    /// Latest point in the window
    pub latest: Option<TrendPoint>,
    /// Mean over the window
    pub average: Option<f64>,
    /// Last minus first value
    pub delta: Option<f64>,
    /// Projected change per week
    pub weekly_rate: Option<f64>,
    /// Stable / changing verdict
    pub outlook: TrendOutlook,
}

impl TrendCard {
    fn from_series(metric: TrendMetric, series: &TrendSeries) -> Self {
        Self {
            metric,
            latest: series.latest(),
            average: series.average(),
            delta: series.delta(),
            weekly_rate: series.weekly_rate(),
            outlook: series.outlook_for(metric),
        }
    }
}

/// A lab value outside its reference range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabFinding {
    /// Lab value name
    pub name: String,
    /// Measured value
    pub value: f64,
    /// Unit
    pub unit: String,
    /// Low or high
    pub flag: LabFlag,
}

/// Latest checkup card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckupCard {
    /// Checkup id
    pub id: Uuid,
    /// Checkup date
    pub date: NaiveDate,
    /// Checkup title
    pub title: String,
    /// Number of lab values recorded
    pub total_values: usize,
    /// Out-of-range values
    pub findings: Vec<LabFinding>,
}

/// Treatment card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentCard {
    /// Medication
    pub medication: Glp1Medication,
    /// Active ingredient
    pub generic_name: String,
    /// Current dose (mg)
    pub current_dose: f64,
    /// Progress figures
    pub progress: TreatmentProgress,
    /// Next scheduled dose
    pub next_dose_at: Option<NaiveDateTime>,
    /// Next reminder, `None` when reminders are off
    pub next_reminder_at: Option<NaiveDateTime>,
}

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// User the snapshot belongs to
    pub user_id: Uuid,
    /// Snapshot day
    pub date: NaiveDate,
    /// First day of the trend window
    pub window_start: NaiveDate,
    /// Sleep card
    pub sleep: Option<SleepCard>,
    /// Activity card
    pub activity: Option<ActivityCard>,
    /// Heart card
    pub heart: Option<HeartCard>,
    /// Recovery score
    pub recovery: Option<RecoveryScore>,
    /// Body card
    pub body: BodyCard,
    /// Trends keyed by metric
    pub trends: BTreeMap<String, TrendCard>,
    /// Most recent checkup on or before the snapshot day
    pub latest_checkup: Option<CheckupCard>,
    /// Active treatment
    pub treatment: Option<TreatmentCard>,
}

/// Composes collaborator data and the scoring engine into dashboard snapshots
#[derive(Clone)]
pub struct DashboardService {
    health: Arc<dyn HealthDataProvider>,
    measurements: Arc<dyn MeasurementStore>,
    checkups: Arc<dyn CheckupStore>,
    treatments: Arc<dyn TreatmentStore>,
    scoring: ScoringConfig,
    trend_window_days: u32,
}

impl DashboardService {
    /// Create a service over separate collaborators
    #[must_use]
    pub fn new(
        health: Arc<dyn HealthDataProvider>,
        measurements: Arc<dyn MeasurementStore>,
        checkups: Arc<dyn CheckupStore>,
        treatments: Arc<dyn TreatmentStore>,
        scoring: ScoringConfig,
        trend_window_days: u32,
    ) -> Self {
        Self {
            health,
            measurements,
            checkups,
            treatments,
            scoring,
            trend_window_days: trend_window_days.max(2),
        }
    }

    /// Create a service where one in-memory store plays every role
    #[must_use]
    pub fn from_store(
        store: &InMemoryHealthStore,
        scoring: ScoringConfig,
        trend_window_days: u32,
    ) -> Self {
        let store = Arc::new(store.clone());
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            scoring,
            trend_window_days,
        )
    }

    /// Trend window length (days)
    #[must_use]
    pub const fn trend_window_days(&self) -> u32 {
        self.trend_window_days
    }

    /// Build the dashboard for `day`
    ///
    /// `now` is the local wall-clock time used for dose scheduling.
    ///
    /// # Errors
    ///
    /// Returns an error only if a collaborator fails
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn snapshot(
        &self,
        user: &User,
        day: NaiveDate,
        now: NaiveDateTime,
    ) -> AppResult<DashboardSnapshot> {
        let window = DateRange::last_days(day, self.trend_window_days);
        let scoring = self.scoring_for(user);

        let sleep_history = self.health.sleep_range(window).await?;
        let activity_history = self.health.activity_range(window).await?;
        let heart_history = self.health.heart_range(window).await?;
        let measurements = self.measurements.measurements_in_range(window).await?;
        let measurement_history = self
            .measurements
            .measurements_in_range(DateRange::last_days(day, u32::MAX))
            .await?;

        let sleep_today = sleep_history.iter().find(|s| s.date == day);
        let activity_today = activity_history.iter().find(|a| a.date == day);
        let heart_today = heart_history.iter().find(|h| h.date == day);

        let sleep = Self::sleep_card(&scoring, sleep_today, &sleep_history);
        let activity = Self::activity_card(&scoring, user, activity_today);
        let heart = heart_today.map(Self::heart_card);
        let recovery = RecoveryCalculator::calculate(sleep_today, heart_today, &scoring);
        debug!(
            sleep = sleep.is_some(),
            activity = activity.is_some(),
            heart = heart.is_some(),
            recovery = recovery.as_ref().map(|r| r.score),
            "Scored daily cards"
        );

        let body = Self::body_card(user, &measurement_history);
        debug!(bmi = ?body.bmi.map(|b| b.bmi), "Computed body card");

        let trends = Self::trend_cards(
            &scoring,
            &measurements,
            &sleep_history,
            &activity_history,
            &heart_history,
        );
        debug!(trends = trends.len(), "Computed trends");

        let latest_checkup = self
            .checkups
            .list_checkups()
            .await?
            .iter()
            .find(|c| c.date <= day)
            .map(Self::checkup_card);
        debug!(
            findings = latest_checkup.as_ref().map(|c| c.findings.len()),
            "Evaluated latest checkup"
        );

        let treatment = self.treatments.active_treatment().await?.map(|treatment| {
            let progress = TreatmentPlanner::progress(&treatment, body.latest_weight, day);
            TreatmentCard {
                medication: treatment.medication,
                generic_name: treatment.medication.generic_name().to_owned(),
                current_dose: treatment.current_dose,
                progress,
                next_dose_at: TreatmentPlanner::next_dose_at(&treatment, now),
                next_reminder_at: TreatmentPlanner::next_reminder_at(&treatment, now),
            }
        });

        info!(
            %day,
            window_days = self.trend_window_days,
            sleep_score = sleep.as_ref().map(|s| s.score.score),
            activity_score = activity.as_ref().map(|a| a.score),
            recovery_score = recovery.as_ref().map(|r| r.score),
            treatment = treatment.is_some(),
            "Dashboard snapshot ready"
        );

        Ok(DashboardSnapshot {
            user_id: user.id,
            date: day,
            window_start: window.start,
            sleep,
            activity,
            heart,
            recovery,
            body,
            trends,
            latest_checkup,
            treatment,
        })
    }

    /// Scoring config with the user's personal sleep and activity goals applied
    ///
    /// Recovery must blend the same sleep score the sleep card shows.
    fn scoring_for(&self, user: &User) -> ScoringConfig {
        let mut scoring = self.scoring.clone();
        let goals = &user.settings.goals;
        if goals.sleep_hours.is_finite() && goals.sleep_hours > 0.0 {
            scoring.sleep.duration_goal_hours = goals.sleep_hours;
        }
        scoring.activity = scoring.activity.with_goals(goals);
        scoring
    }

    fn sleep_card(
        scoring: &ScoringConfig,
        tonight: Option<&SleepSample>,
        history: &[SleepSample],
    ) -> Option<SleepCard> {
        tonight.map(|sample| SleepCard {
            score: SleepAnalyzer::score(sample, &scoring.sleep),
            hours: sample.total_hours(),
            window_summary: SleepAnalyzer::summarize(history, &scoring.sleep),
        })
    }

    fn activity_card(
        scoring: &ScoringConfig,
        user: &User,
        today: Option<&ActivitySample>,
    ) -> Option<ActivityCard> {
        today.map(|sample| ActivityCard {
            score: ActivityScorer::score(sample, &scoring.activity),
            goals: ActivityScorer::goal_progress(sample, &user.settings.goals),
            workouts: ActivityScorer::workout_totals(sample),
            steps: sample.steps,
        })
    }

    fn heart_card(sample: &HeartSample) -> HeartCard {
        HeartCard {
            resting_heart_rate: sample.resting_heart_rate,
            resting_status: RestingHrStatus::from_bpm(sample.resting_heart_rate),
            hrv: sample.hrv,
            hrv_status: HrvStatus::from_hrv(sample.hrv),
            zones: HeartAnalyzer::zone_distribution(&sample.zones),
        }
    }

    fn body_card(user: &User, history: &[BodyMeasurement]) -> BodyCard {
        let latest_weight = history.iter().rev().find_map(|m| m.weight);
        let latest_waist = history.iter().rev().find_map(|m| m.waist_circumference);
        let height = user.profile.height_cm;
        BodyCard {
            latest_weight,
            latest_waist,
            bmi: BodyComposition::assess(latest_weight, height),
            waist_to_height: BodyComposition::waist_to_height_ratio(latest_waist, height),
        }
    }

    fn trend_cards(
        scoring: &ScoringConfig,
        measurements: &[BodyMeasurement],
        sleep: &[SleepSample],
        activity: &[ActivitySample],
        heart: &[HeartSample],
    ) -> BTreeMap<String, TrendCard> {
        let hrv = TrendSeries::from_points(
            heart
                .iter()
                .filter_map(|h| h.hrv.map(|v| TrendPoint::new(h.date, v))),
        );
        let steps = TrendSeries::from_points(
            activity
                .iter()
                .map(|a| TrendPoint::new(a.date, f64::from(a.steps))),
        );
        let recovery = TrendSeries::from_points(sleep.iter().filter_map(|night| {
            let heart_that_day = heart.iter().find(|h| h.date == night.date);
            RecoveryCalculator::calculate(Some(night), heart_that_day, scoring)
                .map(|r| TrendPoint::new(night.date, f64::from(r.score)))
        }));

        [
            (
                TrendMetric::Weight,
                TrendSeries::weight_from_measurements(measurements),
            ),
            (
                TrendMetric::Waist,
                TrendSeries::waist_from_measurements(measurements),
            ),
            (TrendMetric::Hrv, hrv),
            (TrendMetric::Recovery, recovery),
            (TrendMetric::Steps, steps),
        ]
        .into_iter()
        .map(|(metric, series)| {
            (
                metric.key().to_owned(),
                TrendCard::from_series(metric, &series),
            )
        })
        .collect()
    }

    fn checkup_card(checkup: &HealthCheckup) -> CheckupCard {
        CheckupCard {
            id: checkup.id,
            date: checkup.date,
            title: checkup.title.clone(),
            total_values: checkup.lab_values.len(),
            findings: LabAnalyzer::flagged(checkup)
                .into_iter()
                .map(|(lab, flag)| LabFinding {
                    name: lab.name.clone(),
                    value: lab.value,
                    unit: lab.unit.clone(),
                    flag,
                })
                .collect(),
        }
    }
}
