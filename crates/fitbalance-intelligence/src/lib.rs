// ABOUTME: Energy-balance metrics and rule-based exercise advice for FitBalance
// ABOUTME: Metrics calculator, exercise catalog, advice engine and their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitBalance Intelligence
//!
//! Pure computation on top of `fitbalance-core` models:
//!
//! - **metrics**: BMR (Mifflin-St Jeor), TDEE, exercise energy, calorie balance
//! - **`exercise_catalog`**: bilingual exercise classification with MET values
//! - **advice**: combination scoring, text guidance, goal calorie guidance
//! - **config**: tunable thresholds with environment overrides
//!
//! Nothing here performs I/O; persistence lives in the application crate.

/// Intelligence configuration
pub mod config;

/// Exercise classification and MET lookup
pub mod exercise_catalog;

/// BMR, TDEE and calorie balance
pub mod metrics;

/// Rule-based advice engine
pub mod advice;

pub use advice::{AdviceEngine, AdviceOutcome, AdvicePayload, AdviceRequest, ScoreRating};
pub use config::IntelligenceConfig;
pub use exercise_catalog::{ExerciseCategory, ExerciseProfile};
pub use metrics::{CalorieBalance, DerivedMetrics, MetricsCalculator};
