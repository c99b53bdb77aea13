// ABOUTME: Advice engine configuration for combination scoring and guidance thresholds
// ABOUTME: Goal duration windows, MET bands, type-share tiers, rating cutoffs, calorie targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Advice Engine Configuration
//!
//! Provides the goal-specific windows and point tables the combination score
//! is computed from, the rating cutoffs, and the calorie targets used by the
//! goal guidance lists.

use fitbalance_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Advice engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdviceConfig {
    /// Per-goal duration windows and MET bands
    pub goals: GoalTargetsConfig,
    /// Points awarded per scoring dimension
    pub scoring: ScoringConfig,
    /// Score cutoffs for qualitative ratings
    pub rating: RatingThresholds,
    /// Next-day suggestion settings
    pub next_day: NextDayConfig,
    /// Calorie deficit/surplus targets for goal guidance
    pub calories: CalorieTargetsConfig,
}

/// Inclusive range of minutes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MinuteWindow {
    /// Lower bound (minutes)
    pub min: f64,
    /// Upper bound (minutes)
    pub max: f64,
}

impl MinuteWindow {
    /// Whether `minutes` falls inside the window
    #[must_use]
    pub fn contains(&self, minutes: f64) -> bool {
        (self.min..=self.max).contains(&minutes)
    }
}

/// Inclusive MET band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetBand {
    /// Lower bound (MET)
    pub min: f64,
    /// Upper bound (MET)
    pub max: f64,
}

impl MetBand {
    /// Distance from the band, zero inside it
    #[must_use]
    pub fn distance(&self, met: f64) -> f64 {
        if met < self.min {
            self.min - met
        } else if met > self.max {
            met - self.max
        } else {
            0.0
        }
    }
}

/// Targets for one goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTargets {
    /// Ideal session length
    pub ideal_minutes: MinuteWindow,
    /// Acceptable session length around the ideal window
    pub near_minutes: MinuteWindow,
    /// Ideal duration-weighted average MET
    pub met_band: MetBand,
}

/// Targets for every goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTargetsConfig {
    /// Weight loss: 30-50 min ideal, 6.0-9.0 MET
    pub weight_loss: GoalTargets,
    /// Muscle gain: 40-60 min ideal, 5.0-7.5 MET
    pub muscle_gain: GoalTargets,
    /// Maintenance: 20-45 min ideal, 3.5-6.0 MET
    pub maintain: GoalTargets,
}

impl GoalTargetsConfig {
    /// Targets for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: FitnessGoal) -> &GoalTargets {
        match goal {
            FitnessGoal::WeightLoss => &self.weight_loss,
            FitnessGoal::MuscleGain => &self.muscle_gain,
            FitnessGoal::Maintain => &self.maintain,
        }
    }
}

impl Default for GoalTargetsConfig {
    fn default() -> Self {
        Self {
            weight_loss: GoalTargets {
                ideal_minutes: MinuteWindow {
                    min: 30.0,
                    max: 50.0,
                },
                near_minutes: MinuteWindow {
                    min: 20.0,
                    max: 60.0,
                },
                met_band: MetBand { min: 6.0, max: 9.0 },
            },
            muscle_gain: GoalTargets {
                ideal_minutes: MinuteWindow {
                    min: 40.0,
                    max: 60.0,
                },
                near_minutes: MinuteWindow {
                    min: 30.0,
                    max: 75.0,
                },
                met_band: MetBand { min: 5.0, max: 7.5 },
            },
            maintain: GoalTargets {
                ideal_minutes: MinuteWindow {
                    min: 20.0,
                    max: 45.0,
                },
                near_minutes: MinuteWindow {
                    min: 15.0,
                    max: 60.0,
                },
                met_band: MetBand { min: 3.5, max: 6.0 },
            },
        }
    }
}

/// Point tables and share tiers for the combination score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Type-match points, best to worst (40/35/30/20)
    pub type_points: [u8; 4],
    /// Duration-match points: ideal, near, short, other (30/25/15/10)
    pub duration_points: [u8; 4],
    /// Intensity-match points: in band, near band, other (30/25/15)
    pub intensity_points: [u8; 3],
    /// Category share for the top type tier (0.7)
    pub dominant_share: f64,
    /// Category share for the second tier, or top tier with a signature subcategory (0.5)
    pub focused_share: f64,
    /// Category share for the third tier (0.3)
    pub partial_share: f64,
    /// MET distance from the band still counted as "near" (1.5)
    pub near_met_tolerance: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            type_points: [40, 35, 30, 20],
            duration_points: [30, 25, 15, 10],
            intensity_points: [30, 25, 15],
            dominant_share: 0.7,
            focused_share: 0.5,
            partial_share: 0.3,
            near_met_tolerance: 1.5,
        }
    }
}

impl ScoringConfig {
    /// Highest achievable total score
    #[must_use]
    pub fn max_total(&self) -> u32 {
        u32::from(self.type_points[0])
            + u32::from(self.duration_points[0])
            + u32::from(self.intensity_points[0])
    }
}

/// Score cutoffs for qualitative ratings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingThresholds {
    /// Minimum score rated excellent (85)
    pub excellent: u8,
    /// Minimum score rated good (70)
    pub good: u8,
    /// Minimum score rated fair (50)
    pub fair: u8,
    /// Minimum score rated needs improvement (30)
    pub needs_improvement: u8,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            excellent: 85,
            good: 70,
            fair: 50,
            needs_improvement: 30,
        }
    }
}

/// Next-day suggestion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextDayConfig {
    /// Ages above this get tomorrow's intensity downgraded one level (40)
    pub age_downgrade_threshold: f64,
}

impl Default for NextDayConfig {
    fn default() -> Self {
        Self {
            age_downgrade_threshold: 40.0,
        }
    }
}

/// Calorie targets used by goal guidance and diet suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetsConfig {
    /// Smallest useful fat-loss deficit (300 kcal)
    pub weight_loss_min_deficit: f64,
    /// Largest recommended deficit (500 kcal)
    pub weight_loss_max_deficit: f64,
    /// Smallest useful muscle-gain surplus (200 kcal)
    pub muscle_gain_min_surplus: f64,
    /// Largest recommended surplus (500 kcal)
    pub muscle_gain_max_surplus: f64,
    /// Balance tolerance for maintenance (±200 kcal)
    pub maintain_tolerance: f64,
    /// Exercise energy below which more cardio is suggested for fat loss (200 kcal)
    pub weight_loss_low_exercise_kcal: f64,
    /// Exercise energy below which leg training is suggested for fat loss (100 kcal)
    pub weight_loss_minimal_exercise_kcal: f64,
    /// Exercise energy below which more strength work is suggested for muscle gain (300 kcal)
    pub muscle_gain_low_exercise_kcal: f64,
    /// Exercise-to-TDEE ratio treated as a heavy training day (0.2)
    pub heavy_day_tdee_ratio: f64,
}

impl Default for CalorieTargetsConfig {
    fn default() -> Self {
        Self {
            weight_loss_min_deficit: 300.0,
            weight_loss_max_deficit: 500.0,
            muscle_gain_min_surplus: 200.0,
            muscle_gain_max_surplus: 500.0,
            maintain_tolerance: 200.0,
            weight_loss_low_exercise_kcal: 200.0,
            weight_loss_minimal_exercise_kcal: 100.0,
            muscle_gain_low_exercise_kcal: 300.0,
            heavy_day_tdee_ratio: 0.2,
        }
    }
}
