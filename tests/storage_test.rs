// ABOUTME: Integration tests for record store backends and the store factory
// ABOUTME: Exercises typed fetch/put, quota accounting, key listing and configuration-driven selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fitbalance::config::{AppConfig, StorageBackend};
use fitbalance::storage::file::JsonFileRecordStore;
use fitbalance::storage::memory::InMemoryRecordStore;
use fitbalance::storage::{open_store, RecordStore, RecordStoreExt};
use fitbalance_core::errors::ErrorCode;
use fitbalance_core::keys::StorageKey;
use fitbalance_core::models::{DailyExerciseRecord, ExerciseEntry, FitnessGoal, Intensity};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

mod common;

fn sample_record() -> DailyExerciseRecord {
    DailyExerciseRecord {
        date: NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
        exercises: vec![ExerciseEntry::new(
            "Run",
            "running",
            30.0,
            280.0,
            Intensity::Moderate,
        )],
    }
}

fn exercise_typed_round_trip(store: &mut dyn RecordStore) {
    let record = sample_record();
    let key = StorageKey::Exercise(record.date);

    assert!(store.fetch::<DailyExerciseRecord>(&key).unwrap().is_none());
    store.put(&key, &record).unwrap();
    assert_eq!(store.fetch::<DailyExerciseRecord>(&key).unwrap(), Some(record));

    let profile = common::male_profile(FitnessGoal::Maintain);
    store.put(&StorageKey::UserInfo, &profile).unwrap();
    assert_eq!(store.keys().unwrap(), vec![StorageKey::UserInfo, key]);
}

#[test]
fn test_memory_store_typed_round_trip() {
    let mut store = InMemoryRecordStore::new();
    exercise_typed_round_trip(&mut store);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_file_store_typed_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileRecordStore::open(dir.path(), None).unwrap();
    exercise_typed_round_trip(&mut store);
}

#[test]
fn test_file_store_reads_browser_shaped_records() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("exercise_2025-02-14.json"),
        r#"{"date":"2025-02-14","exercises":[{"id":"e1","name":"跑步","type":"running","duration":30,"calories":280,"intensity":"medium"}]}"#,
    )
    .unwrap();
    let store = JsonFileRecordStore::open(dir.path(), None).unwrap();
    let record: DailyExerciseRecord = store
        .fetch(&StorageKey::Exercise(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()))
        .unwrap()
        .unwrap();
    assert_eq!(record.exercises[0].intensity, Intensity::Moderate);
    assert!((record.exercises[0].duration_minutes - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("user_info.json"), b"{not json").unwrap();
    let store = JsonFileRecordStore::open(dir.path(), None).unwrap();
    let err = store.get(&StorageKey::UserInfo).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_memory_quota_frees_space_on_remove() {
    let mut store = InMemoryRecordStore::with_quota(Some(64));
    let key = StorageKey::UserInfo;
    store.set(&key, json!({"name": "a".repeat(30)})).unwrap();

    let other = StorageKey::Diet(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let err = store.set(&other, json!({"foods": ["b".repeat(20)]})).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageQuotaExceeded);

    assert!(store.remove(&key).unwrap());
    store.set(&other, json!({"foods": ["b".repeat(20)]})).unwrap();
}

#[test]
fn test_open_store_follows_configuration() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();

    let mut memory = open_store(&AppConfig {
        storage_backend: StorageBackend::Memory,
        data_dir: dir.path().join("unused"),
        ..AppConfig::default()
    })
    .unwrap();
    memory.set(&StorageKey::UserInfo, json!({})).unwrap();
    assert!(!dir.path().join("unused").exists());

    let mut file = open_store(&AppConfig {
        storage_backend: StorageBackend::File,
        data_dir: dir.path().join("records"),
        ..AppConfig::default()
    })
    .unwrap();
    file.set(&StorageKey::UserInfo, json!({})).unwrap();
    assert!(dir.path().join("records").join("user_info.json").exists());
}
