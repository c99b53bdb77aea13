// ABOUTME: Exercise log models for daily workout tracking
// ABOUTME: Intensity, ExerciseEntry, and DailyExerciseRecord definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Recorded effort level of an exercise entry
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy, conversational effort
    Low,
    /// Steady effort
    #[default]
    #[serde(alias = "medium")]
    Moderate,
    /// Hard effort
    High,
    /// Near-maximal effort
    VeryHigh,
}

impl Intensity {
    /// One level easier, saturating at `Low`
    #[must_use]
    pub const fn downgrade(self) -> Self {
        match self {
            Self::VeryHigh => Self::High,
            Self::High => Self::Moderate,
            Self::Moderate | Self::Low => Self::Low,
        }
    }

    /// Label used in advice text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }

    /// Parse an intensity from free text
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown intensities
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "low" | "light" | "低" => Ok(Self::Low),
            "moderate" | "medium" | "中" => Ok(Self::Moderate),
            "high" | "hard" | "高" => Ok(Self::High),
            "very_high" | "max" | "极高" => Ok(Self::VeryHigh),
            other => Err(AppError::invalid_input(format!(
                "unknown intensity '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// A single exercise logged for a day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseEntry {
    /// Identifier used for removal
    #[serde(default = "new_entry_id")]
    pub id: String,
    /// Display name as entered by the user
    pub name: String,
    /// Catalog key (`running`, `chest`, ...) or free text
    #[serde(default, rename = "type")]
    pub exercise_type: String,
    /// Duration in minutes
    #[serde(alias = "duration")]
    pub duration_minutes: f64,
    /// Energy burned in kcal
    #[serde(default, alias = "calories")]
    pub calories_burned: f64,
    /// Recorded effort level
    #[serde(default)]
    pub intensity: Intensity,
}

impl ExerciseEntry {
    /// Create an entry with a fresh id
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        exercise_type: impl Into<String>,
        duration_minutes: f64,
        calories_burned: f64,
        intensity: Intensity,
    ) -> Self {
        Self {
            id: new_entry_id(),
            name: name.into(),
            exercise_type: exercise_type.into(),
            duration_minutes,
            calories_burned,
            intensity,
        }
    }

    /// Reject negative or non-finite durations and calories
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        if !self.duration_minutes.is_finite() || self.duration_minutes < 0.0 {
            return Err(AppError::out_of_range(format!(
                "exercise '{}' has an invalid duration",
                self.name
            )));
        }
        if !self.calories_burned.is_finite() || self.calories_burned < 0.0 {
            return Err(AppError::out_of_range(format!(
                "exercise '{}' has invalid calories",
                self.name
            )));
        }
        Ok(())
    }
}

/// All exercise entries for one calendar date; empty means a rest day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyExerciseRecord {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Entries in insertion order
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl DailyExerciseRecord {
    /// Empty record for a date
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            exercises: Vec::new(),
        }
    }

    /// Whether nothing was logged
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Sum of entry durations in minutes
    #[must_use]
    pub fn total_minutes(&self) -> f64 {
        self.exercises.iter().map(|e| e.duration_minutes).sum()
    }

    /// Sum of calories burned
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.exercises.iter().map(|e| e.calories_burned).sum()
    }

    /// Remove an entry by id, returning whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id != id);
        self.exercises.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_downgrade_saturates() {
        assert_eq!(Intensity::VeryHigh.downgrade(), Intensity::High);
        assert_eq!(Intensity::Low.downgrade(), Intensity::Low);
    }

    #[test]
    fn test_entry_accepts_stored_field_names() {
        let entry: ExerciseEntry = serde_json::from_str(
            r#"{"id":"e1","name":"Morning run","type":"running","duration":30,"calories":280,"intensity":"high"}"#,
        )
        .unwrap();
        assert_eq!(entry.exercise_type, "running");
        assert_eq!(entry.intensity, Intensity::High);
        assert!((entry.calories_burned - 280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_negative_duration() {
        let entry = ExerciseEntry::new("Run", "running", -5.0, 0.0, Intensity::Moderate);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_record_totals_and_remove() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut record = DailyExerciseRecord::empty(date);
        assert!(record.is_rest_day());
        let run = ExerciseEntry::new("Run", "running", 30.0, 280.0, Intensity::Moderate);
        let id = run.id.clone();
        record.exercises.push(run);
        record
            .exercises
            .push(ExerciseEntry::new("Yoga", "yoga", 20.0, 50.0, Intensity::Low));
        assert!((record.total_minutes() - 50.0).abs() < f64::EPSILON);
        assert!((record.total_calories() - 330.0).abs() < f64::EPSILON);
        assert!(record.remove(&id));
        assert!(!record.remove(&id));
    }
}
