// ABOUTME: Criterion benchmarks for the metrics chain and the advice engine
// ABOUTME: Measures derived metrics, single-day advice and month-long advice sweeps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for metrics derivation and advice generation.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitbalance_core::models::{
    DailyExerciseRecord, ExerciseEntry, FitnessGoal, Gender, Intensity, UserProfile,
};
use fitbalance_intelligence::{AdviceEngine, AdviceRequest, DerivedMetrics, IntelligenceConfig};

const EXERCISE_TYPES: [&str; 6] = ["running", "swimming", "weightlifting", "yoga", "hiit", "跑步"];

fn bench_profile(goal: FitnessGoal) -> UserProfile {
    UserProfile {
        name: "Bench".into(),
        gender: Gender::Male,
        age: 34.0,
        height_cm: 178.0,
        weight_kg: 74.0,
        goal,
        ..UserProfile::default()
    }
}

#[allow(clippy::cast_precision_loss)]
fn bench_record(date: NaiveDate, entries: usize) -> DailyExerciseRecord {
    let intensities = [Intensity::Low, Intensity::Moderate, Intensity::High];
    let exercises = (0..entries)
        .map(|i| {
            let kind = EXERCISE_TYPES[i % EXERCISE_TYPES.len()];
            ExerciseEntry::new(
                kind,
                kind,
                20.0 + (i % 5) as f64 * 10.0,
                150.0 + (i % 7) as f64 * 25.0,
                intensities[i % intensities.len()],
            )
        })
        .collect();
    DailyExerciseRecord { date, exercises }
}

fn bench_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

fn bench_derived_metrics(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let profile = bench_profile(FitnessGoal::WeightLoss);

    c.bench_function("derived_metrics_compute", |b| {
        b.iter(|| {
            DerivedMetrics::compute(
                black_box(&profile),
                black_box(412.5),
                black_box(1830.0),
                &config.metrics,
            )
        });
    });
}

fn bench_advice_generation(c: &mut Criterion) {
    let engine = AdviceEngine::with_config(&IntelligenceConfig::default());
    let mut group = c.benchmark_group("advice_generate");

    for goal in [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Maintain,
    ] {
        let profile = bench_profile(goal);
        for entries in [0_usize, 3, 12] {
            let record = bench_record(bench_date(), entries);
            group.bench_with_input(
                BenchmarkId::new(format!("{goal:?}"), entries),
                &record,
                |b, record| {
                    b.iter(|| {
                        engine.generate(black_box(&AdviceRequest {
                            profile: Some(&profile),
                            exercise: record,
                            diet_calories: Some(2100.0),
                        }))
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_month_sweep(c: &mut Criterion) {
    let engine = AdviceEngine::with_config(&IntelligenceConfig::default());
    let profile = bench_profile(FitnessGoal::Maintain);
    let records: Vec<DailyExerciseRecord> = (0..30)
        .map(|day| bench_record(bench_date() + Duration::days(day), (day as usize % 4) + 1))
        .collect();

    let mut group = c.benchmark_group("advice_month");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("thirty_days", |b| {
        b.iter(|| {
            records
                .iter()
                .map(|record| {
                    engine.generate(&AdviceRequest {
                        profile: Some(&profile),
                        exercise: record,
                        diet_calories: None,
                    })
                })
                .count()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_derived_metrics,
    bench_advice_generation,
    bench_month_sweep
);
criterion_main!(benches);
