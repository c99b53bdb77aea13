// ABOUTME: Main library entry point for FitBalance energy-balance tracking
// ABOUTME: Record stores, daily ledger, food catalog, logging and configuration over the metrics and advice engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitBalance
//!
//! Personal energy-balance tracking: a user profile, daily diet and exercise
//! records, BMR/TDEE/calorie-balance metrics and rule-based exercise advice.
//!
//! ## Architecture
//!
//! - **fitbalance-core**: errors, models, storage keys, dates
//! - **fitbalance-intelligence**: metrics calculator, exercise catalog, advice engine
//! - **storage**: `RecordStore` trait with in-memory and JSON-file backends
//! - **ledger**: `FitnessLedger`, the data manager the front-end talks to
//! - **foods**: searchable food catalog
//!
//! ## Example Usage
//!
//! ```rust
//! use fitbalance::ledger::FitnessLedger;
//! use fitbalance::storage::memory::InMemoryRecordStore;
//! use fitbalance_core::dates::today;
//! use fitbalance_core::models::{FoodEntry, Gender, UserProfile};
//!
//! let mut ledger = FitnessLedger::new(Box::new(InMemoryRecordStore::new()));
//! let saved = ledger.save_profile(UserProfile {
//!     name: "Sam".to_owned(),
//!     gender: Gender::Male,
//!     age: 30.0,
//!     height_cm: 175.0,
//!     weight_kg: 70.0,
//!     ..UserProfile::default()
//! });
//! assert!(saved);
//! assert!(ledger.add_food(today(), FoodEntry::new("Rice", 232.0, "staple")));
//! assert!(ledger.calorie_deficit(today()) > 0.0);
//! ```

/// Environment-driven configuration
pub mod config;

/// Error re-exports
pub mod errors;

/// Searchable food catalog
pub mod foods;

/// Daily fitness ledger (data manager)
pub mod ledger;

/// Logging configuration
pub mod logging;

/// Change notification for record writes
pub mod notifications;

/// Record store abstraction and backends
pub mod storage;
