// ABOUTME: Rule-based exercise advice engine producing a scored, templated payload for one day
// ABOUTME: Combines session summary, combination score, text decision trees and calorie guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Advice Engine
//!
//! Turns a profile and one day's exercise record into an [`AdvicePayload`].
//! Every call recomputes everything from its inputs; there is no hidden state
//! and no randomness, so repeated calls with the same inputs are identical.
//!
//! Missing profile yields [`AdviceOutcome::ProfileRequired`]; an empty
//! record yields the goal's rest-day templates with a score of 0.

/// Goal calorie guidance lists
pub mod calorie;
/// Text decision trees
pub mod guidance;
/// Combination scoring
pub mod scoring;
/// Session aggregation
pub mod summary;

pub use calorie::{calorie_guidance, CalorieDay};
pub use guidance::{plan_next_session, primary_category, NextSession, RestDayTemplates};
pub use scoring::{
    score_session, DurationBand, IntensityBand, ScoreBreakdown, ScoreRating, TypeTier,
};
pub use summary::{DominantCategory, SessionSummary};

use crate::config::intelligence::{AdviceConfig, IntelligenceConfig, MetricsConfig};
use crate::metrics::{calculate_bmr, calculate_tdee, round1};
use fitbalance_core::constants::reference_body::GUIDANCE_FALLBACK_WEIGHT_KG;
use fitbalance_core::models::{DailyExerciseRecord, UserProfile};
use serde::Serialize;
use tracing::debug;

/// Message returned instead of advice when no profile exists
pub const PROFILE_REQUIRED_MESSAGE: &str =
    "Please complete your profile (age, height, weight and goal) to receive exercise advice.";

/// Everything the engine reads for one day
#[derive(Debug, Clone, Copy)]
pub struct AdviceRequest<'a> {
    /// Saved profile, if any
    pub profile: Option<&'a UserProfile>,
    /// The day's exercise record
    pub exercise: &'a DailyExerciseRecord,
    /// The day's food intake, when known
    pub diet_calories: Option<f64>,
}

/// Advice for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvicePayload {
    /// Combined score (0-100)
    pub combination_score: u8,
    /// Qualitative rating of the score
    pub rating: ScoreRating,
    /// How the exercise mix fits the goal
    pub combination_analysis: String,
    /// Total minutes trained
    pub total_duration: f64,
    /// Session length against the goal windows
    pub duration_analysis: String,
    /// Total kcal burned
    pub total_calories: f64,
    /// Average intensity against the goal band
    pub intensity_analysis: String,
    /// What to eat
    pub diet_suggestion: String,
    /// How to recover
    pub recovery_tips: String,
    /// What to train tomorrow
    pub tomorrow_exercise: String,
    /// Intake-versus-TDEE advice; empty when intake is unknown
    pub calorie_guidance: Vec<String>,
}

/// Result of asking for advice
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdviceOutcome {
    /// No profile saved; only a completion request is returned
    ProfileRequired {
        /// The completion request
        message: String,
    },
    /// Advice was generated
    Generated(AdvicePayload),
}

impl AdviceOutcome {
    /// The payload, if advice was generated
    #[must_use]
    pub const fn payload(&self) -> Option<&AdvicePayload> {
        match self {
            Self::Generated(payload) => Some(payload),
            Self::ProfileRequired { .. } => None,
        }
    }
}

/// Stateless advice engine bound to one configuration
#[derive(Debug, Clone)]
pub struct AdviceEngine {
    metrics: MetricsConfig,
    advice: AdviceConfig,
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceEngine {
    /// Engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global())
    }

    /// Engine using an explicit configuration
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig) -> Self {
        Self {
            metrics: config.metrics.clone(),
            advice: config.advice.clone(),
        }
    }

    /// Generate advice for one day
    #[must_use]
    pub fn generate(&self, request: &AdviceRequest<'_>) -> AdviceOutcome {
        let Some(profile) = request.profile else {
            debug!("advice requested without a profile");
            return AdviceOutcome::ProfileRequired {
                message: PROFILE_REQUIRED_MESSAGE.to_owned(),
            };
        };

        let summary =
            SessionSummary::from_record(request.exercise, profile.effective_weight(), &self.metrics);
        let tdee = self.day_tdee(profile, summary.total_calories);
        let calorie_guidance =
            self.guidance_for_intake(profile, tdee, request.diet_calories, &summary);

        let payload = if summary.is_rest_day() {
            self.rest_day_payload(profile, &summary, calorie_guidance)
        } else {
            self.session_payload(profile, &summary, tdee, calorie_guidance)
        };

        debug!(
            date = %request.exercise.date,
            goal = %profile.goal,
            score = payload.combination_score,
            "advice generated"
        );
        AdviceOutcome::Generated(payload)
    }

    /// TDEE for the day: recomputed when the profile is complete, else the cached value
    fn day_tdee(&self, profile: &UserProfile, exercise_kcal: f64) -> Option<f64> {
        calculate_bmr(
            profile.gender,
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            &self.metrics.bmr,
        )
        .ok()
        .map(|bmr| calculate_tdee(bmr, exercise_kcal, &self.metrics))
        .or_else(|| profile.known_tdee())
    }

    fn guidance_for_intake(
        &self,
        profile: &UserProfile,
        tdee: Option<f64>,
        diet_calories: Option<f64>,
        summary: &SessionSummary,
    ) -> Vec<String> {
        match (tdee, diet_calories) {
            (Some(tdee), Some(intake)) => calorie_guidance(
                &CalorieDay {
                    goal: profile.goal,
                    weight_kg: profile.weight_or(GUIDANCE_FALLBACK_WEIGHT_KG),
                    tdee,
                    intake_kcal: intake,
                    exercise_kcal: summary.total_calories,
                },
                &self.advice.calories,
            ),
            (None, Some(_)) => vec![
                "Complete your age, height and weight to compare intake against your TDEE."
                    .to_owned(),
            ],
            (_, None) => Vec::new(),
        }
    }

    fn rest_day_payload(
        &self,
        profile: &UserProfile,
        summary: &SessionSummary,
        calorie_guidance: Vec<String>,
    ) -> AdvicePayload {
        let templates = guidance::rest_day_templates(profile.goal, &self.advice);
        AdvicePayload {
            combination_score: 0,
            rating: ScoreRating::Poor,
            combination_analysis: templates.combination,
            total_duration: 0.0,
            duration_analysis: templates.duration,
            total_calories: round1(summary.total_calories),
            intensity_analysis: templates.intensity,
            diet_suggestion: templates.diet,
            recovery_tips: templates.recovery,
            tomorrow_exercise: templates.tomorrow,
            calorie_guidance,
        }
    }

    fn session_payload(
        &self,
        profile: &UserProfile,
        summary: &SessionSummary,
        tdee: Option<f64>,
        calorie_guidance: Vec<String>,
    ) -> AdvicePayload {
        let goal = profile.goal;
        let targets = self.advice.goals.for_goal(goal);
        let breakdown = score_session(summary, goal, &self.advice);
        let score = breakdown.total();
        let rating = ScoreRating::from_score(score, &self.advice.rating);
        let plan = plan_next_session(summary, goal, profile.age, &self.advice);

        AdvicePayload {
            combination_score: score,
            rating,
            combination_analysis: guidance::combination_analysis(summary, goal, &breakdown, rating),
            total_duration: round1(summary.total_minutes),
            duration_analysis: guidance::duration_analysis(
                summary,
                goal,
                targets,
                breakdown.duration_band,
            ),
            total_calories: round1(summary.total_calories),
            intensity_analysis: guidance::intensity_analysis(
                summary,
                goal,
                targets,
                breakdown.intensity_band,
            ),
            diet_suggestion: guidance::diet_suggestion(
                summary,
                goal,
                profile.effective_weight(),
                tdee,
                &self.advice.calories,
            ),
            recovery_tips: guidance::recovery_tips(summary, targets),
            tomorrow_exercise: guidance::tomorrow_text(&plan, goal, &self.advice),
            calorie_guidance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fitbalance_core::models::{ExerciseEntry, FitnessGoal, Gender, Intensity};

    fn profile(goal: FitnessGoal) -> UserProfile {
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

    fn record(entries: Vec<ExerciseEntry>) -> DailyExerciseRecord {
        DailyExerciseRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            exercises: entries,
        }
    }

    fn engine() -> AdviceEngine {
        AdviceEngine::with_config(&IntelligenceConfig::default())
    }

    #[test]
    fn test_profile_required() {
        let day = record(Vec::new());
        let outcome = engine().generate(&AdviceRequest {
            profile: None,
            exercise: &day,
            diet_calories: Some(1500.0),
        });
        assert_eq!(
            outcome,
            AdviceOutcome::ProfileRequired {
                message: PROFILE_REQUIRED_MESSAGE.to_owned()
            }
        );
        assert!(outcome.payload().is_none());
    }

    #[test]
    fn test_rest_day_scores_zero() {
        let user = profile(FitnessGoal::MuscleGain);
        let day = record(Vec::new());
        let outcome = engine().generate(&AdviceRequest {
            profile: Some(&user),
            exercise: &day,
            diet_calories: None,
        });
        let payload = outcome.payload().unwrap();
        assert_eq!(payload.combination_score, 0);
        assert_eq!(payload.rating, ScoreRating::Poor);
        assert!(payload.calorie_guidance.is_empty());
        assert!(payload.total_duration.abs() < f64::EPSILON);
    }

    #[test]
    fn test_running_session_payload() {
        let user = profile(FitnessGoal::WeightLoss);
        let day = record(vec![ExerciseEntry::new(
            "Run",
            "running",
            30.0,
            0.0,
            Intensity::Moderate,
        )]);
        let outcome = engine().generate(&AdviceRequest {
            profile: Some(&user),
            exercise: &day,
            diet_calories: Some(1800.0),
        });
        let payload = outcome.payload().unwrap();
        assert_eq!(payload.combination_score, 100);
        assert_eq!(payload.rating, ScoreRating::Excellent);
        assert!((payload.total_calories - 280.0).abs() < 1e-9);
        assert!((payload.total_duration - 30.0).abs() < f64::EPSILON);
        assert!(payload.tomorrow_exercise.contains("strength"));
        assert!(!payload.calorie_guidance.is_empty());
    }
}
