// ABOUTME: Criterion benchmarks for the scoring engine and dashboard composition
// ABOUTME: Measures sleep, activity and recovery scoring, trend projection and full snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellness Tracker Contributors

//! Criterion benchmarks for the scoring engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    end_date, generate_activity, generate_heart, generate_nights, generate_weight_points,
    HistoryLength,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wellness_tracker::intelligence::{
    ActivityScorer, RecoveryCalculator, ScoringConfig, SleepAnalyzer, TrendSeries,
};
use wellness_tracker::models::User;
use wellness_tracker::providers::InMemoryHealthStore;
use wellness_tracker::services::DashboardService;

const LENGTHS: [HistoryLength; 3] = [
    HistoryLength::Week,
    HistoryLength::Month,
    HistoryLength::Year,
];

fn bench_sleep_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("sleep_scoring");
    let config = ScoringConfig::default();

    for length in LENGTHS {
        let nights = generate_nights(length);
        group.throughput(Throughput::Elements(u64::from(length.days())));
        group.bench_with_input(
            BenchmarkId::new("score_nights", length.label()),
            &nights,
            |b, nights| {
                b.iter(|| {
                    for night in nights {
                        black_box(SleepAnalyzer::score(black_box(night), &config.sleep));
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("summarize", length.label()),
            &nights,
            |b, nights| {
                b.iter(|| black_box(SleepAnalyzer::summarize(black_box(nights), &config.sleep)));
            },
        );
    }
    group.finish();
}

fn bench_activity_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity_scoring");
    let config = ScoringConfig::default();
    let days = generate_activity(HistoryLength::Year);

    group.throughput(Throughput::Elements(days.len() as u64));
    group.bench_function("score_year", |b| {
        b.iter(|| {
            days.iter()
                .map(|day| u32::from(ActivityScorer::score(black_box(day), &config.activity)))
                .sum::<u32>()
        });
    });
    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("recovery");
    let config = ScoringConfig::default();
    let nights = generate_nights(HistoryLength::Month);
    let hearts = generate_heart(HistoryLength::Month);

    group.throughput(Throughput::Elements(nights.len() as u64));
    group.bench_function("calculate_month", |b| {
        b.iter(|| {
            for (night, heart) in nights.iter().zip(&hearts) {
                black_box(RecoveryCalculator::calculate(
                    Some(night),
                    Some(heart),
                    &config,
                ));
            }
        });
    });
    group.finish();
}

fn bench_trends(c: &mut Criterion) {
    let mut group = c.benchmark_group("trends");

    for length in LENGTHS {
        let points = generate_weight_points(length);
        group.bench_with_input(
            BenchmarkId::new("build_and_project", length.label()),
            &points,
            |b, points| {
                b.iter(|| {
                    let series = TrendSeries::from_points(black_box(points.iter().copied()));
                    black_box(series.projection(30.0))
                });
            },
        );
    }
    group.finish();
}

fn bench_dashboard_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    group.sample_size(50);

    let Ok(runtime) = tokio::runtime::Builder::new_current_thread().build() else {
        return;
    };
    let Ok(store) = InMemoryHealthStore::with_synthetic_history(end_date(), 365) else {
        return;
    };
    let user = User::new("Bench");
    let now = end_date().and_hms_opt(12, 0, 0).unwrap_or_default();

    for length in [HistoryLength::Month, HistoryLength::Year] {
        let service =
            DashboardService::from_store(&store, ScoringConfig::default(), length.days());
        group.bench_with_input(
            BenchmarkId::new("snapshot", length.label()),
            &service,
            |b, service| {
                b.iter(|| runtime.block_on(service.snapshot(&user, end_date(), now)));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sleep_scoring,
    bench_activity_scoring,
    bench_recovery,
    bench_trends,
    bench_dashboard_snapshot
);
criterion_main!(benches);
