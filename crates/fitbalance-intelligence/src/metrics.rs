// ABOUTME: Energy metrics calculator for BMR, TDEE, exercise energy and calorie balance
// ABOUTME: Implements Mifflin-St Jeor BMR and MET-based exercise expenditure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy metrics
//!
//! The derived-metrics chain is BMR -> TDEE -> calorie balance. Every function
//! here is pure; rounding to one decimal happens only in [`DerivedMetrics`]
//! and [`calculate_calorie_balance`], which are output boundaries.

use crate::config::intelligence::{BmrConfig, IntelligenceConfig, MetricsConfig};
use crate::exercise_catalog;
use fitbalance_core::errors::{AppError, AppResult};
use fitbalance_core::models::{ExerciseEntry, Gender, Intensity, UserProfile};
use serde::Serialize;
use tracing::{debug, warn};

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn require_positive(field: &'static str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::incomplete_profile(field))
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// - Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// Reference: Mifflin, M.D., et al. (1990). DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `IncompleteProfile` if weight, height or age is non-finite or not positive
pub fn calculate_bmr(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    config: &BmrConfig,
) -> AppResult<f64> {
    require_positive("weight", weight_kg)?;
    require_positive("height", height_cm)?;
    require_positive("age", age)?;

    let base = config.msj_height_coef.mul_add(
        height_cm,
        config.msj_weight_coef.mul_add(weight_kg, config.msj_age_coef * age),
    );
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    Ok(base + gender_constant)
}

/// BMR for a profile, or 0 when the profile is incomplete
///
/// The incomplete condition is logged; callers that need to surface it should
/// use [`calculate_bmr`] directly.
#[must_use]
pub fn bmr_or_zero(profile: &UserProfile, config: &BmrConfig) -> f64 {
    match calculate_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        config,
    ) {
        Ok(bmr) => bmr,
        Err(e) => {
            warn!(error = %e, "BMR unavailable, profile incomplete");
            0.0
        }
    }
}

/// Total daily energy expenditure: BMR × activity multiplier + today's exercise energy
#[must_use]
pub fn calculate_tdee(bmr: f64, exercise_kcal_today: f64, config: &MetricsConfig) -> f64 {
    bmr.mul_add(config.activity_multiplier, exercise_kcal_today)
}

/// MET for an exercise type: a positive override wins, then the fixed table, then the default
#[must_use]
pub fn met_for_type(exercise_type: &str, met_override: Option<f64>, config: &MetricsConfig) -> f64 {
    met_override
        .filter(|met| met.is_finite() && *met > 0.0)
        .or_else(|| exercise_catalog::calorie_table_met(exercise_type))
        .unwrap_or(config.default_met)
}

/// Energy burned by one exercise: MET × weight(kg) × hours
#[must_use]
pub fn calculate_exercise_calories(
    exercise_type: &str,
    duration_minutes: f64,
    weight_kg: f64,
    met_override: Option<f64>,
    config: &MetricsConfig,
) -> f64 {
    let met = met_for_type(exercise_type, met_override, config);
    met * weight_kg * (duration_minutes / 60.0)
}

/// MET scaled by recorded intensity and body weight relative to the reference weight
#[must_use]
pub fn adjusted_met(base_met: f64, intensity: Intensity, weight_kg: f64, config: &MetricsConfig) -> f64 {
    base_met
        * config.intensity_multipliers.for_intensity(intensity)
        * (weight_kg / config.reference_weight_kg)
}

/// Calorie balance for a day; positive means a deficit (intake below expenditure)
#[must_use]
pub fn calculate_calorie_balance(tdee: f64, diet_kcal: f64) -> f64 {
    round1(tdee - diet_kcal)
}

/// Display-ready reading of a calorie balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "kcal", rename_all = "snake_case")]
pub enum CalorieBalance {
    /// Intake below expenditure by this many kcal
    Deficit(f64),
    /// Intake above expenditure by this many kcal
    Surplus(f64),
    /// Intake equals expenditure
    Balanced,
}

impl CalorieBalance {
    /// Classify a signed balance produced by [`calculate_calorie_balance`]
    #[must_use]
    pub fn classify(balance: f64) -> Self {
        if balance > 0.0 {
            Self::Deficit(balance)
        } else if balance < 0.0 {
            Self::Surplus(-balance)
        } else {
            Self::Balanced
        }
    }

    /// Label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Deficit(_) => "deficit",
            Self::Surplus(_) => "surplus",
            Self::Balanced => "balanced",
        }
    }

    /// Magnitude in kcal
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        match self {
            Self::Deficit(kcal) | Self::Surplus(kcal) => *kcal,
            Self::Balanced => 0.0,
        }
    }
}

/// BMR, TDEE and balance for one day, recomputed from the profile and day totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Basal metabolic rate (kcal/day), 0 when the profile is incomplete
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Energy burned by logged exercise (kcal)
    pub exercise_calories: f64,
    /// Energy eaten (kcal)
    pub diet_calories: f64,
    /// TDEE minus intake; positive means a deficit
    pub calorie_balance: f64,
    /// Whether age, height and weight were all usable
    pub profile_complete: bool,
}

impl DerivedMetrics {
    /// Run the full BMR -> TDEE -> balance chain
    #[must_use]
    pub fn compute(
        profile: &UserProfile,
        exercise_kcal: f64,
        diet_kcal: f64,
        config: &MetricsConfig,
    ) -> Self {
        let bmr = calculate_bmr(
            profile.gender,
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            &config.bmr,
        );
        let profile_complete = bmr.is_ok();
        let bmr = bmr.unwrap_or_else(|e| {
            debug!(error = %e, "deriving metrics from an incomplete profile");
            0.0
        });
        let tdee = calculate_tdee(bmr, exercise_kcal, config);

        Self {
            bmr: round1(bmr),
            tdee: round1(tdee),
            exercise_calories: round1(exercise_kcal),
            diet_calories: round1(diet_kcal),
            calorie_balance: calculate_calorie_balance(tdee, diet_kcal),
            profile_complete,
        }
    }

    /// Classified balance for display
    #[must_use]
    pub fn balance(&self) -> CalorieBalance {
        CalorieBalance::classify(self.calorie_balance)
    }
}

/// Thin wrapper binding the metric functions to one configuration
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    config: MetricsConfig,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCalculator {
    /// Calculator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().metrics.clone(),
        }
    }

    /// Calculator using an explicit configuration
    #[must_use]
    pub const fn with_config(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// See [`calculate_bmr`]
    ///
    /// # Errors
    ///
    /// Returns `IncompleteProfile` when a biometric field is unusable
    pub fn bmr(&self, profile: &UserProfile) -> AppResult<f64> {
        calculate_bmr(
            profile.gender,
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            &self.config.bmr,
        )
    }

    /// See [`calculate_tdee`]
    #[must_use]
    pub fn tdee(&self, bmr: f64, exercise_kcal_today: f64) -> f64 {
        calculate_tdee(bmr, exercise_kcal_today, &self.config)
    }

    /// See [`calculate_exercise_calories`]
    #[must_use]
    pub fn exercise_calories(
        &self,
        exercise_type: &str,
        duration_minutes: f64,
        weight_kg: f64,
        met_override: Option<f64>,
    ) -> f64 {
        calculate_exercise_calories(
            exercise_type,
            duration_minutes,
            weight_kg,
            met_override,
            &self.config,
        )
    }

    /// See [`DerivedMetrics::compute`]
    #[must_use]
    pub fn derive(&self, profile: &UserProfile, exercise_kcal: f64, diet_kcal: f64) -> DerivedMetrics {
        DerivedMetrics::compute(profile, exercise_kcal, diet_kcal, &self.config)
    }

    /// Build an exercise entry whose calories come from the MET table and body weight
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a negative or non-finite duration
    pub fn exercise_entry_from_catalog(
        &self,
        name: &str,
        exercise_type: &str,
        duration_minutes: f64,
        intensity: Intensity,
        weight_kg: f64,
        met_override: Option<f64>,
    ) -> AppResult<ExerciseEntry> {
        let calories = round1(self.exercise_calories(
            exercise_type,
            duration_minutes,
            weight_kg,
            met_override,
        ));
        let entry = ExerciseEntry::new(name, exercise_type, duration_minutes, calories, intensity);
        entry.validate()?;
        Ok(entry)
    }
}
