// ABOUTME: Command-line dashboard report over a JSON health export
// ABOUTME: Loads the export into the in-memory store and prints one day's snapshot as JSON or text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Wellness dashboard report.
//!
//! Usage:
//! ```bash
//! # Today's dashboard from an export
//! wellness-report --input export.json
//!
//! # A specific day as plain text with a 14-day trend window
//! wellness-report --input export.json --date 2025-03-01 --window-days 14 --format text
//!
//! # Synthetic data, no export needed
//! wellness-report --demo 60 --format text
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;
use wellness_tracker::config::environment::parse_window_days;
use wellness_tracker::config::AppConfig;
use wellness_tracker::logging::LoggingConfig;
use wellness_tracker::models::{UnitSystem, User};
use wellness_tracker::providers::{HealthExport, InMemoryHealthStore};
use wellness_tracker::services::{DashboardService, DashboardSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser)]
#[command(
    name = "wellness-report",
    about = "Wellness dashboard report",
    long_about = "Score sleep, activity, heart and recovery for one day and show trends from a health export"
)]
struct ReportArgs {
    /// Health export JSON file
    #[arg(long, required_unless_present = "demo", conflicts_with = "demo")]
    input: Option<PathBuf>,

    /// Generate this many days of synthetic data instead of reading an export
    #[arg(long)]
    demo: Option<u32>,

    /// Day to report on (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Trend window in days (2-365), overrides WELLNESS_TREND_WINDOW_DAYS
    #[arg(long, value_parser = window_days)]
    window_days: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn window_days(value: &str) -> Result<u32, String> {
    parse_window_days(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ReportArgs::parse();

    let logging = LoggingConfig::from_env();
    let logging = if args.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let now = Local::now().naive_local();
    let day = args.date.unwrap_or_else(|| now.date());
    // Reports for past days schedule doses from the end of that day
    let now = if day < now.date() {
        day.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
    } else {
        now
    };
    let window = args.window_days.unwrap_or(config.trend_window_days);

    let (user, store) = match (&args.input, args.demo) {
        (Some(path), _) => HealthExport::load(path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?
            .into_store()
            .await
            .context("Export contains invalid entries")?,
        (None, Some(days)) => (
            User::new("Demo User"),
            InMemoryHealthStore::with_synthetic_history(day, days)?,
        ),
        (None, None) => anyhow::bail!("Either --input or --demo is required"),
    };
    info!(user_id = %user.id, %day, window_days = window, "Building dashboard report");

    let service = DashboardService::from_store(&store, config.scoring.clone(), window);
    let snapshot = service.snapshot(&user, day, now).await?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&snapshot)?,
        OutputFormat::Text => {
            let units = if user.settings.unit_system == UnitSystem::default() {
                config.unit_system
            } else {
                user.settings.unit_system
            };
            render_text(&user, &snapshot, units)?
        }
    };
    println!("{output}");
    Ok(())
}

fn render_text(user: &User, snapshot: &DashboardSnapshot, units: UnitSystem) -> Result<String> {
    let mut out = String::new();
    let name = user.display_name.as_deref().unwrap_or("User");
    writeln!(out, "{name} - {}", snapshot.date)?;
    writeln!(out, "Trend window from {}", snapshot.window_start)?;
    writeln!(out)?;

    match &snapshot.sleep {
        Some(sleep) => writeln!(
            out,
            "Sleep     {:>3}  {} ({:.1} h)",
            sleep.score.score,
            sleep.score.quality.label(),
            sleep.hours
        )?,
        None => writeln!(out, "Sleep     no data")?,
    }
    match &snapshot.activity {
        Some(activity) => writeln!(
            out,
            "Activity  {:>3}  {} steps, {} of 3 goals met",
            activity.score, activity.steps, activity.goals.goals_met
        )?,
        None => writeln!(out, "Activity  no data")?,
    }
    match &snapshot.recovery {
        Some(recovery) => writeln!(
            out,
            "Recovery  {:>3}  {}",
            recovery.score,
            recovery.status.label()
        )?,
        None => writeln!(out, "Recovery  no data")?,
    }
    if let Some(heart) = &snapshot.heart {
        writeln!(
            out,
            "Heart     resting {:.0} bpm ({}), HRV {}",
            heart.resting_heart_rate,
            heart.resting_status.label(),
            heart.hrv_status.label()
        )?;
    }

    let body = &snapshot.body;
    if let Some(weight) = body.latest_weight {
        writeln!(
            out,
            "Weight    {:.1} {}",
            units.mass_from_kg(weight),
            units.mass_label()
        )?;
    }
    if let Some(waist) = body.latest_waist {
        writeln!(
            out,
            "Waist     {:.1} {}",
            units.length_from_cm(waist),
            units.length_label()
        )?;
    }
    if let Some(bmi) = body.bmi {
        writeln!(out, "BMI       {:.1} ({})", bmi.bmi, bmi.category.label())?;
    }

    writeln!(out)?;
    for (key, trend) in &snapshot.trends {
        match trend.weekly_rate {
            Some(rate) => writeln!(out, "Trend {key:<9} {rate:+.2}/week  {:?}", trend.outlook)?,
            None => writeln!(out, "Trend {key:<9} not enough data")?,
        }
    }

    if let Some(checkup) = &snapshot.latest_checkup {
        writeln!(out)?;
        writeln!(
            out,
            "Checkup {} ({}): {} of {} values out of range",
            checkup.title,
            checkup.date,
            checkup.findings.len(),
            checkup.total_values
        )?;
        for finding in &checkup.findings {
            writeln!(
                out,
                "  {:?} {} {} {}",
                finding.flag, finding.name, finding.value, finding.unit
            )?;
        }
    }

    if let Some(treatment) = &snapshot.treatment {
        writeln!(out)?;
        writeln!(
            out,
            "Treatment {:?} ({}) {} mg, week {}",
            treatment.medication,
            treatment.generic_name,
            treatment.current_dose,
            treatment.progress.weeks_on_treatment
        )?;
        if let Some(next) = treatment.next_dose_at {
            writeln!(out, "  Next dose {}", next.format("%Y-%m-%d %H:%M"))?;
        }
    }
    Ok(out)
}
