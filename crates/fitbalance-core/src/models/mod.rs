// ABOUTME: Core data models for profiles, diet logs, and exercise logs
// ABOUTME: Re-exports the model types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Plain serde structs constructed by the presentation layer and passed by
//! value into the metrics and advice engines. The serialized shape matches the
//! records persisted under the `user_info`, `diet_*` and `exercise_*` keys.

/// Daily food intake records
pub mod diet;
/// Daily exercise records
pub mod exercise;
/// User profile and goals
pub mod profile;

pub use diet::{DailyDietRecord, FoodEntry};
pub use exercise::{DailyExerciseRecord, ExerciseEntry, Intensity};
pub use profile::{ExperienceLevel, FitnessGoal, Gender, UserProfile};
