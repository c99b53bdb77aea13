// ABOUTME: Aggregates a day's exercise entries into the summary the advice engine scores
// ABOUTME: Per-category minutes, duration-weighted MET, dominant category, peak intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::MetricsConfig;
use crate::exercise_catalog::{self, ExerciseCategory, HIIT, WEIGHTLIFTING};
use crate::metrics::adjusted_met;
use fitbalance_core::models::{DailyExerciseRecord, Intensity};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const MINUTE_EPSILON: f64 = 1e-9;

/// Category holding the most minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantCategory {
    /// One category has strictly the most minutes
    Single(ExerciseCategory),
    /// Two or more categories tie for the most minutes
    Mixed,
    /// No minutes recorded
    Rest,
}

impl fmt::Display for DominantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(category) => write!(f, "{category}"),
            Self::Mixed => f.write_str("mixed"),
            Self::Rest => f.write_str("rest"),
        }
    }
}

/// Aggregate view of one day's exercise
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Minutes per category; only categories with minutes are present
    pub minutes_by_category: BTreeMap<ExerciseCategory, f64>,
    /// Total minutes
    pub total_minutes: f64,
    /// Total energy (recorded, or estimated from MET when not recorded)
    pub total_calories: f64,
    /// Duration-weighted average of adjusted MET
    pub average_met: f64,
    /// Category with the most minutes
    pub dominant: DominantCategory,
    /// Any HIIT entry present
    pub has_hiit: bool,
    /// Any weightlifting entry present
    pub has_weightlifting: bool,
    /// Highest recorded intensity among entries with minutes
    pub peak_intensity: Option<Intensity>,
    /// Distinct activity labels in first-seen order
    pub activity_labels: Vec<&'static str>,
}

impl SessionSummary {
    /// Summarize a record for a user of `weight_kg`
    #[must_use]
    pub fn from_record(record: &DailyExerciseRecord, weight_kg: f64, config: &MetricsConfig) -> Self {
        let mut minutes_by_category = BTreeMap::new();
        let mut total_minutes = 0.0;
        let mut total_calories = 0.0;
        let mut weighted_met = 0.0;
        let mut has_hiit = false;
        let mut has_weightlifting = false;
        let mut peak_intensity: Option<Intensity> = None;
        let mut activity_labels = Vec::new();

        for entry in &record.exercises {
            let profile = exercise_catalog::classify(entry, config.default_met);
            let minutes = entry.duration_minutes.max(0.0);

            total_calories += if entry.calories_burned > 0.0 {
                entry.calories_burned
            } else {
                profile.base_met * weight_kg * (minutes / 60.0)
            };

            if minutes <= 0.0 {
                continue;
            }

            *minutes_by_category.entry(profile.category).or_insert(0.0) += minutes;
            total_minutes += minutes;
            weighted_met += adjusted_met(profile.base_met, entry.intensity, weight_kg, config) * minutes;
            has_hiit |= profile.subcategory == HIIT;
            has_weightlifting |= profile.subcategory == WEIGHTLIFTING;
            peak_intensity = peak_intensity.max(Some(entry.intensity));
            if !activity_labels.contains(&profile.label) {
                activity_labels.push(profile.label);
            }
        }

        let average_met = if total_minutes > 0.0 {
            weighted_met / total_minutes
        } else {
            0.0
        };

        Self {
            dominant: dominant_category(&minutes_by_category),
            minutes_by_category,
            total_minutes,
            total_calories,
            average_met,
            has_hiit,
            has_weightlifting,
            peak_intensity,
            activity_labels,
        }
    }

    /// Minutes spent in a category
    #[must_use]
    pub fn minutes_in(&self, category: ExerciseCategory) -> f64 {
        self.minutes_by_category.get(&category).copied().unwrap_or(0.0)
    }

    /// Share of total minutes spent in a category, 0 when nothing was recorded
    #[must_use]
    pub fn share(&self, category: ExerciseCategory) -> f64 {
        if self.total_minutes > 0.0 {
            self.minutes_in(category) / self.total_minutes
        } else {
            0.0
        }
    }

    /// Number of distinct categories trained
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.minutes_by_category.len()
    }

    /// Whether any minutes were recorded
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.total_minutes <= 0.0
    }
}

fn dominant_category(minutes: &BTreeMap<ExerciseCategory, f64>) -> DominantCategory {
    let Some(max) = minutes.values().copied().reduce(f64::max) else {
        return DominantCategory::Rest;
    };
    let mut leaders = minutes
        .iter()
        .filter(|(_, m)| (max - **m).abs() < MINUTE_EPSILON)
        .map(|(category, _)| *category);

    match (leaders.next(), leaders.next()) {
        (Some(category), None) => DominantCategory::Single(category),
        (Some(_), Some(_)) => DominantCategory::Mixed,
        (None, _) => DominantCategory::Rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fitbalance_core::models::ExerciseEntry;

    fn record(entries: Vec<ExerciseEntry>) -> DailyExerciseRecord {
        DailyExerciseRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            exercises: entries,
        }
    }

    #[test]
    fn test_single_running_entry() {
        let summary = SessionSummary::from_record(
            &record(vec![ExerciseEntry::new(
                "Run",
                "running",
                30.0,
                0.0,
                Intensity::Moderate,
            )]),
            70.0,
            &MetricsConfig::default(),
        );
        assert!((summary.average_met - 8.0).abs() < 1e-9);
        assert!((summary.total_calories - 280.0).abs() < 1e-9);
        assert_eq!(summary.dominant, DominantCategory::Single(ExerciseCategory::Cardio));
        assert_eq!(summary.peak_intensity, Some(Intensity::Moderate));
    }

    #[test]
    fn test_weighted_average_and_tie() {
        let summary = SessionSummary::from_record(
            &record(vec![
                ExerciseEntry::new("Run", "running", 30.0, 300.0, Intensity::Moderate),
                ExerciseEntry::new("Squats", "legs", 30.0, 200.0, Intensity::High),
            ]),
            70.0,
            &MetricsConfig::default(),
        );
        // (8.0 * 30 + 7.0 * 1.3 * 30) / 60
        assert!((summary.average_met - 8.55).abs() < 1e-9);
        assert_eq!(summary.dominant, DominantCategory::Mixed);
        assert_eq!(summary.category_count(), 2);
        assert!((summary.share(ExerciseCategory::Strength) - 0.5).abs() < 1e-9);
        assert_eq!(summary.peak_intensity, Some(Intensity::High));
    }

    #[test]
    fn test_empty_record_is_rest() {
        let summary = SessionSummary::from_record(&record(Vec::new()), 70.0, &MetricsConfig::default());
        assert!(summary.is_rest_day());
        assert_eq!(summary.dominant, DominantCategory::Rest);
        assert!(summary.average_met.abs() < f64::EPSILON);
        assert!(summary.peak_intensity.is_none());
    }

    #[test]
    fn test_subcategory_flags() {
        let summary = SessionSummary::from_record(
            &record(vec![
                ExerciseEntry::new("Intervals", "hiit", 20.0, 0.0, Intensity::VeryHigh),
                ExerciseEntry::new("举重", "", 10.0, 0.0, Intensity::High),
            ]),
            70.0,
            &MetricsConfig::default(),
        );
        assert!(summary.has_hiit);
        assert!(summary.has_weightlifting);
        assert_eq!(summary.activity_labels, vec!["HIIT", "Weightlifting"]);
    }
}
