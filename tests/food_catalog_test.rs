// ABOUTME: Integration tests for the food catalog
// ABOUTME: Bundled data, file loading, case-insensitive substring search and catalog-to-diet flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitbalance::config::AppConfig;
use fitbalance::foods::FoodCatalog;
use fitbalance_core::errors::ErrorCode;
use std::fs;
use tempfile::TempDir;

mod common;

#[test]
fn test_bundled_catalog_substring_search() {
    let catalog = FoodCatalog::bundled().unwrap();
    let hits = catalog.search("沙县");
    assert!(hits.len() >= 2);
    assert!(hits.iter().all(|f| f.name.contains("沙县")));
    assert!(hits.iter().all(|f| f.category == "沙县小吃"));
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = FoodCatalog::bundled().unwrap();
    let lower = catalog.search("chicken");
    let upper = catalog.search("CHICKEN");
    assert_eq!(lower.len(), upper.len());
    assert!(!lower.is_empty());
    assert!((lower[0].calories - 165.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_keyword_returns_everything() {
    let catalog = FoodCatalog::bundled().unwrap();
    assert_eq!(catalog.search("").len(), catalog.len());
}

#[test]
fn test_load_from_file_and_config() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foods.json");
    fs::write(
        &path,
        r#"[{"name":"Tofu","calorie":82,"category":"Soy"},{"name":"Tempeh","calories":193}]"#,
    )
    .unwrap();

    let catalog = FoodCatalog::from_config(&AppConfig {
        food_db_path: Some(path),
        ..AppConfig::default()
    })
    .unwrap();
    assert_eq!(catalog.len(), 2);
    let hits = catalog.search("te");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Tempeh");
    assert!(hits[0].category.is_empty());
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = FoodCatalog::load(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_search_result_feeds_the_ledger() {
    let mut ledger = common::memory_ledger();
    let rice = FoodCatalog::bundled().unwrap().search("米饭").remove(0);
    assert!(ledger.add_food(common::test_date(), rice));
    assert!((ledger.daily_food_calories(common::test_date()) - 116.0).abs() < 1e-9);
}
