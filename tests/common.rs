// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup plus profile, record and ledger builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitbalance`

use chrono::NaiveDate;
use fitbalance::ledger::FitnessLedger;
use fitbalance::storage::memory::InMemoryRecordStore;
use fitbalance_core::models::{
    DailyExerciseRecord, ExerciseEntry, FitnessGoal, Gender, Intensity, UserProfile,
};
use fitbalance_intelligence::IntelligenceConfig;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed calendar date used by most tests
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// Complete profile: 70 kg, 175 cm, 30 y male
pub fn male_profile(goal: FitnessGoal) -> UserProfile {
    UserProfile {
        name: "Alex".into(),
        gender: Gender::Male,
        age: 30.0,
        height_cm: 175.0,
        weight_kg: 70.0,
        goal,
        ..UserProfile::default()
    }
}

/// Complete profile: 60 kg, 165 cm, 25 y female
pub fn female_profile(goal: FitnessGoal) -> UserProfile {
    UserProfile {
        name: "Mina".into(),
        gender: Gender::Female,
        age: 25.0,
        height_cm: 165.0,
        weight_kg: 60.0,
        goal,
        ..UserProfile::default()
    }
}

/// Exercise entry without a recorded calorie value
pub fn entry(exercise_type: &str, minutes: f64, intensity: Intensity) -> ExerciseEntry {
    ExerciseEntry::new(exercise_type, exercise_type, minutes, 0.0, intensity)
}

/// Exercise record for [`test_date`]
pub fn record(entries: Vec<ExerciseEntry>) -> DailyExerciseRecord {
    DailyExerciseRecord {
        date: test_date(),
        exercises: entries,
    }
}

/// Ledger over an unlimited in-memory store with default engine settings
pub fn memory_ledger() -> FitnessLedger {
    init_test_logging();
    FitnessLedger::with_config(
        Box::new(InMemoryRecordStore::new()),
        &IntelligenceConfig::default(),
    )
}

/// Ledger over an in-memory store with a byte quota
pub fn quota_ledger(quota_bytes: usize) -> FitnessLedger {
    init_test_logging();
    FitnessLedger::with_config(
        Box::new(InMemoryRecordStore::with_quota(Some(quota_bytes))),
        &IntelligenceConfig::default(),
    )
}
