// ABOUTME: Combination score for a training day against the user's goal
// ABOUTME: Sums type-match, duration-match and intensity-match points and maps them to a rating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::summary::SessionSummary;
use crate::config::intelligence::{AdviceConfig, GoalTargets, RatingThresholds, ScoringConfig};
use crate::exercise_catalog::ExerciseCategory;
use fitbalance_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative rating of a combination score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    /// Score at or above the excellent cutoff
    Excellent,
    /// Score at or above the good cutoff
    Good,
    /// Score at or above the fair cutoff
    Fair,
    /// Score at or above the needs-improvement cutoff
    NeedsImprovement,
    /// Anything lower
    Poor,
}

impl ScoreRating {
    /// Rating for a score
    #[must_use]
    pub const fn from_score(score: u8, thresholds: &RatingThresholds) -> Self {
        if score >= thresholds.excellent {
            Self::Excellent
        } else if score >= thresholds.good {
            Self::Good
        } else if score >= thresholds.fair {
            Self::Fair
        } else if score >= thresholds.needs_improvement {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsImprovement => "needs improvement",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the session length falls relative to the goal windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBand {
    /// Inside the ideal window
    Ideal,
    /// Inside the near window, below the ideal window
    NearShort,
    /// Inside the near window, above the ideal window
    NearLong,
    /// Below the near window
    Short,
    /// Above the near window
    Long,
}

impl DurationBand {
    /// Classify total minutes against a goal's windows
    #[must_use]
    pub fn classify(minutes: f64, targets: &GoalTargets) -> Self {
        if targets.ideal_minutes.contains(minutes) {
            Self::Ideal
        } else if targets.near_minutes.contains(minutes) {
            if minutes < targets.ideal_minutes.min {
                Self::NearShort
            } else {
                Self::NearLong
            }
        } else if minutes < targets.near_minutes.min {
            Self::Short
        } else {
            Self::Long
        }
    }
}

/// Where the average MET falls relative to the goal band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    /// Inside the band
    OnTarget,
    /// Below the band, within tolerance
    SlightlyLow,
    /// Above the band, within tolerance
    SlightlyHigh,
    /// Below the band by more than the tolerance
    TooLow,
    /// Above the band by more than the tolerance
    TooHigh,
}

impl IntensityBand {
    /// Classify an average MET against a goal band
    #[must_use]
    pub fn classify(average_met: f64, targets: &GoalTargets, tolerance: f64) -> Self {
        let distance = targets.met_band.distance(average_met);
        let below = average_met < targets.met_band.min;
        if distance <= 0.0 {
            Self::OnTarget
        } else if distance <= tolerance {
            if below {
                Self::SlightlyLow
            } else {
                Self::SlightlyHigh
            }
        } else if below {
            Self::TooLow
        } else {
            Self::TooHigh
        }
    }
}

/// How well the mix of exercise types fits the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTier {
    /// Best fit
    Top,
    /// Goal category makes up half the session
    Focused,
    /// Goal category is a minor part
    Partial,
    /// Little overlap with the goal
    Low,
}

impl TypeTier {
    /// Points awarded for this tier
    #[must_use]
    pub const fn points(self, scoring: &ScoringConfig) -> u8 {
        let [top, focused, partial, low] = scoring.type_points;
        match self {
            Self::Top => top,
            Self::Focused => focused,
            Self::Partial => partial,
            Self::Low => low,
        }
    }
}

/// Points per scoring dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Type-match points (0-40)
    pub type_points: u8,
    /// Type tier used
    pub type_tier: TypeTier,
    /// Duration-match points (0-30)
    pub duration_points: u8,
    /// Intensity-match points (0-30)
    pub intensity_points: u8,
    /// Duration band used
    pub duration_band: DurationBand,
    /// Intensity band used
    pub intensity_band: IntensityBand,
}

impl ScoreBreakdown {
    /// Combined score (0-100)
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.type_points
            .saturating_add(self.duration_points)
            .saturating_add(self.intensity_points)
    }
}

/// Score a non-empty session against a goal
///
/// Rest days are not scored here; the engine reports them with a score of 0.
#[must_use]
pub fn score_session(
    summary: &SessionSummary,
    goal: FitnessGoal,
    config: &AdviceConfig,
) -> ScoreBreakdown {
    let targets = config.goals.for_goal(goal);
    let scoring = &config.scoring;

    let duration_band = DurationBand::classify(summary.total_minutes, targets);
    let intensity_band =
        IntensityBand::classify(summary.average_met, targets, scoring.near_met_tolerance);

    let type_tier = type_tier(summary, goal, scoring);

    ScoreBreakdown {
        type_points: type_tier.points(scoring),
        type_tier,
        duration_points: duration_points(duration_band, scoring),
        intensity_points: intensity_points(intensity_band, scoring),
        duration_band,
        intensity_band,
    }
}

fn type_tier(summary: &SessionSummary, goal: FitnessGoal, scoring: &ScoringConfig) -> TypeTier {
    let focus_tier = |share: f64, signature: bool| {
        if share >= scoring.dominant_share || (signature && share >= scoring.focused_share) {
            TypeTier::Top
        } else if share >= scoring.focused_share {
            TypeTier::Focused
        } else if share >= scoring.partial_share {
            TypeTier::Partial
        } else {
            TypeTier::Low
        }
    };

    match goal {
        FitnessGoal::WeightLoss => focus_tier(
            summary.share(ExerciseCategory::Cardio),
            summary.has_hiit,
        ),
        FitnessGoal::MuscleGain => focus_tier(
            summary.share(ExerciseCategory::Strength),
            summary.has_weightlifting,
        ),
        FitnessGoal::Maintain => match summary.category_count() {
            n if n >= 3 => TypeTier::Top,
            2 if summary.minutes_in(ExerciseCategory::Flexibility) > 0.0 => TypeTier::Focused,
            2 => TypeTier::Partial,
            _ => TypeTier::Low,
        },
    }
}

const fn duration_points(band: DurationBand, scoring: &ScoringConfig) -> u8 {
    let [ideal, near, short, other] = scoring.duration_points;
    match band {
        DurationBand::Ideal => ideal,
        DurationBand::NearShort | DurationBand::NearLong => near,
        DurationBand::Short => short,
        DurationBand::Long => other,
    }
}

const fn intensity_points(band: IntensityBand, scoring: &ScoringConfig) -> u8 {
    let [on_target, near, other] = scoring.intensity_points;
    match band {
        IntensityBand::OnTarget => on_target,
        IntensityBand::SlightlyLow | IntensityBand::SlightlyHigh => near,
        IntensityBand::TooLow | IntensityBand::TooHigh => other,
    }
}
