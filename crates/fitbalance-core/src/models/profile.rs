// ABOUTME: User profile model holding biometrics, goal, and cached derived metrics
// ABOUTME: Gender, FitnessGoal, ExperienceLevel, and UserProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::reference_body::REFERENCE_WEIGHT_KG;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    #[default]
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Parse gender from free text; anything that is not recognisably male is female
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "男" => Self::Male,
            _ => Self::Female,
        }
    }
}

/// Training goal that drives scoring windows and advice templates
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Fat loss through a moderate calorie deficit
    #[default]
    WeightLoss,
    /// Muscle gain through a small calorie surplus
    MuscleGain,
    /// Keep current body composition
    #[serde(alias = "maintenance")]
    Maintain,
}

impl FitnessGoal {
    /// Human-readable goal label used inside advice text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Maintain => "maintenance",
        }
    }

    /// Parse a goal from its storage key or label
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown goals
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "weight_loss" | "lose" | "cut" => Ok(Self::WeightLoss),
            "muscle_gain" | "gain" | "bulk" => Ok(Self::MuscleGain),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            other => Err(AppError::invalid_input(format!("unknown goal '{other}'"))),
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than six months of regular training
    Beginner,
    /// Six months to two years
    Intermediate,
    /// More than two years
    Advanced,
}

/// The single persisted user profile
///
/// Saved wholesale; `bmr` and `tdee` are cache values refreshed on every save
/// and never treated as a source of truth.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Biological sex for the BMR equation
    #[serde(default)]
    pub gender: Gender,
    /// Age in years
    #[serde(default)]
    pub age: f64,
    /// Height in centimeters
    #[serde(default, alias = "height")]
    pub height_cm: f64,
    /// Body weight in kilograms
    #[serde(default, alias = "weight")]
    pub weight_kg: f64,
    /// Training goal
    #[serde(default)]
    pub goal: FitnessGoal,
    /// Cached basal metabolic rate (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    /// Cached total daily energy expenditure (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdee: Option<f64>,
    /// Training experience, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    /// Avatar image as a data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Check the fields the profile form marks as required
    ///
    /// # Errors
    ///
    /// Returns `IncompleteProfile` naming the first missing field
    pub fn validate_required(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::new(
                crate::errors::ErrorCode::IncompleteProfile,
                "name is required",
            ));
        }
        for (field, value) in [
            ("age", self.age),
            ("height", self.height_cm),
            ("weight", self.weight_kg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::incomplete_profile(field));
            }
        }
        Ok(())
    }

    /// Weight to use in calculations, falling back to `fallback` when unset
    #[must_use]
    pub fn weight_or(&self, fallback: f64) -> f64 {
        if self.weight_kg.is_finite() && self.weight_kg > 0.0 {
            self.weight_kg
        } else {
            fallback
        }
    }

    /// Weight to use in MET normalisation (70 kg reference when unset)
    #[must_use]
    pub fn effective_weight(&self) -> f64 {
        self.weight_or(REFERENCE_WEIGHT_KG)
    }

    /// Positive cached TDEE, if any
    #[must_use]
    pub fn known_tdee(&self) -> Option<f64> {
        self.tdee.filter(|t| t.is_finite() && *t > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_browser_record_shape() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"name":"Li","gender":"female","age":28,"height":165,"weight":58.5,"goal":"muscle_gain"}"#,
        )
        .unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.goal, FitnessGoal::MuscleGain);
        assert!((profile.height_cm - 165.0).abs() < f64::EPSILON);
        assert!(profile.tdee.is_none());
    }

    #[test]
    fn test_validate_required_reports_first_missing_field() {
        let profile = UserProfile {
            name: "Sam".into(),
            age: 30.0,
            height_cm: 0.0,
            weight_kg: 70.0,
            ..UserProfile::default()
        };
        let err = profile.validate_required().unwrap_err();
        assert!(err.message.contains("height"));
    }

    #[test]
    fn test_effective_weight_falls_back_to_reference() {
        assert!((UserProfile::default().effective_weight() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_parse_accepts_aliases() {
        assert_eq!(FitnessGoal::parse("weight-loss").unwrap(), FitnessGoal::WeightLoss);
        assert_eq!(FitnessGoal::parse("maintenance").unwrap(), FitnessGoal::Maintain);
        assert!(FitnessGoal::parse("fly").is_err());
    }
}
