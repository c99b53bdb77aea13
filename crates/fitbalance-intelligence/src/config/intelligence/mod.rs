// ABOUTME: Intelligence configuration for energy metrics and rule-based advice
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the metrics calculator and the advice engine.
//! Defaults reproduce the documented constants; deployments may override a
//! subset through `FITBALANCE_*` environment variables. Per-user tuning is not
//! supported.
//!
//! # Module Structure
//!
//! - `metrics` - BMR coefficients, activity multiplier, MET defaults
//! - `advice` - goal windows, scoring points, rating cutoffs, calorie targets

pub mod advice;
pub mod error;
pub mod metrics;

pub use advice::{
    AdviceConfig, CalorieTargetsConfig, GoalTargets, GoalTargetsConfig, MetBand, MinuteWindow,
    NextDayConfig, RatingThresholds, ScoringConfig,
};
pub use error::ConfigError;
pub use metrics::{BmrConfig, IntensityMultipliers, MetricsConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for BMR/TDEE/exercise energy calculations
    pub metrics: MetricsConfig,
    /// Configuration for combination scoring and guidance
    pub advice: AdviceConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_metrics()?;
        self.validate_advice()
    }

    fn validate_metrics(&self) -> Result<(), ConfigError> {
        let metrics = &self.metrics;

        if metrics.bmr.msj_weight_coef <= 0.0 || metrics.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if !(1.0..=2.5).contains(&metrics.activity_multiplier) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity multiplier must be between 1.0 and 2.5",
            ));
        }
        if metrics.default_met <= 0.0 || metrics.reference_weight_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default MET and reference weight must be positive",
            ));
        }

        let m = &metrics.intensity_multipliers;
        if m.low <= 0.0 || m.low >= m.moderate || m.moderate >= m.high || m.high >= m.very_high {
            return Err(ConfigError::InvalidRange(
                "Intensity multipliers must be positive and ascending",
            ));
        }
        Ok(())
    }

    fn validate_advice(&self) -> Result<(), ConfigError> {
        let advice = &self.advice;

        for targets in [
            &advice.goals.weight_loss,
            &advice.goals.muscle_gain,
            &advice.goals.maintain,
        ] {
            if targets.ideal_minutes.min >= targets.ideal_minutes.max
                || targets.met_band.min >= targets.met_band.max
            {
                return Err(ConfigError::InvalidRange(
                    "Goal windows must have min < max",
                ));
            }
            if targets.near_minutes.min > targets.ideal_minutes.min
                || targets.near_minutes.max < targets.ideal_minutes.max
            {
                return Err(ConfigError::InvalidRange(
                    "Near duration window must contain the ideal window",
                ));
            }
        }

        let scoring = &advice.scoring;
        if scoring.max_total() > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Maximum combination score must not exceed 100",
            ));
        }
        if !(scoring.partial_share < scoring.focused_share
            && scoring.focused_share < scoring.dominant_share
            && scoring.dominant_share <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "Type share tiers must be ascending and at most 1.0",
            ));
        }

        let rating = &advice.rating;
        if !(rating.needs_improvement < rating.fair
            && rating.fair < rating.good
            && rating.good < rating.excellent)
        {
            return Err(ConfigError::InvalidRange(
                "Rating thresholds must be ascending",
            ));
        }

        let calories = &advice.calories;
        if calories.weight_loss_min_deficit >= calories.weight_loss_max_deficit
            || calories.muscle_gain_min_surplus >= calories.muscle_gain_max_surplus
        {
            return Err(ConfigError::InvalidRange(
                "Calorie targets must have min < max",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "FITBALANCE_ACTIVITY_MULTIPLIER",
            &mut self.metrics.activity_multiplier,
        )?;
        Self::apply_env_var("FITBALANCE_DEFAULT_MET", &mut self.metrics.default_met)?;
        Self::apply_env_var(
            "FITBALANCE_REFERENCE_WEIGHT_KG",
            &mut self.metrics.reference_weight_kg,
        )?;

        Self::apply_env_var(
            "FITBALANCE_RATING_EXCELLENT",
            &mut self.advice.rating.excellent,
        )?;
        Self::apply_env_var("FITBALANCE_RATING_GOOD", &mut self.advice.rating.good)?;
        Self::apply_env_var("FITBALANCE_RATING_FAIR", &mut self.advice.rating.fair)?;
        Self::apply_env_var(
            "FITBALANCE_RATING_NEEDS_IMPROVEMENT",
            &mut self.advice.rating.needs_improvement,
        )?;

        Self::apply_env_var(
            "FITBALANCE_AGE_DOWNGRADE_THRESHOLD",
            &mut self.advice.next_day.age_downgrade_threshold,
        )?;

        Self::apply_env_var(
            "FITBALANCE_WEIGHT_LOSS_MIN_DEFICIT",
            &mut self.advice.calories.weight_loss_min_deficit,
        )?;
        Self::apply_env_var(
            "FITBALANCE_WEIGHT_LOSS_MAX_DEFICIT",
            &mut self.advice.calories.weight_loss_max_deficit,
        )?;
        Self::apply_env_var(
            "FITBALANCE_MUSCLE_GAIN_MIN_SURPLUS",
            &mut self.advice.calories.muscle_gain_min_surplus,
        )?;
        Self::apply_env_var(
            "FITBALANCE_MUSCLE_GAIN_MAX_SURPLUS",
            &mut self.advice.calories.muscle_gain_max_surplus,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_validate() {
        let config = IntelligenceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.advice.scoring.max_total(), 100);
        assert!((config.metrics.activity_multiplier - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_unordered_ratings() {
        let mut config = IntelligenceConfig::default();
        config.advice.rating.good = 90;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_rejects_points_above_hundred() {
        let mut config = IntelligenceConfig::default();
        config.advice.scoring.type_points[0] = 50;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_override_applied() {
        env::set_var("FITBALANCE_DEFAULT_MET", "3.5");
        let config = IntelligenceConfig::load();
        env::remove_var("FITBALANCE_DEFAULT_MET");
        assert!((config.unwrap().metrics.default_met - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_env_override_parse_error() {
        env::set_var("FITBALANCE_ACTIVITY_MULTIPLIER", "lots");
        let result = IntelligenceConfig::load();
        env::remove_var("FITBALANCE_ACTIVITY_MULTIPLIER");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
