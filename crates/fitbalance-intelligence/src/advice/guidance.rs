// ABOUTME: Deterministic text templates for duration, intensity, diet, recovery and next-day advice
// ABOUTME: Decision trees over goal, dominant category, subcategories, intensity and TDEE ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::scoring::{DurationBand, IntensityBand, ScoreBreakdown, ScoreRating, TypeTier};
use super::summary::{DominantCategory, SessionSummary};
use crate::config::intelligence::{AdviceConfig, CalorieTargetsConfig, GoalTargets, MinuteWindow};
use crate::exercise_catalog::ExerciseCategory;
use fitbalance_core::constants::food_energy::{CHICKEN_BREAST_KCAL_PER_100G, RICE_KCAL_PER_100G};
use fitbalance_core::models::{FitnessGoal, Intensity};
use serde::Serialize;

/// Share of a heavy day's burn refuelled with protein while cutting
const WEIGHT_LOSS_REFUEL_SHARE: f64 = 0.3;
/// Share of a heavy day's burn eaten back while bulking or maintaining
const REFUEL_SHARE: f64 = 0.5;
/// Protein target range while bulking (g per kg body weight)
const MUSCLE_GAIN_PROTEIN_G_PER_KG: (f64, f64) = (1.6, 2.2);
/// Water per hour of exercise (ml)
const WATER_ML_PER_HOUR: f64 = 500.0;
const MIN_WATER_ML: f64 = 250.0;

/// Grams of a food supplying `kcal`
pub(crate) fn grams_for(kcal: f64, kcal_per_100g: f64) -> f64 {
    kcal / kcal_per_100g * 100.0
}

/// Category a goal trains most, used when today gives no alternation hint
#[must_use]
pub const fn primary_category(goal: FitnessGoal) -> ExerciseCategory {
    match goal {
        FitnessGoal::WeightLoss => ExerciseCategory::Cardio,
        FitnessGoal::MuscleGain => ExerciseCategory::Strength,
        FitnessGoal::Maintain => ExerciseCategory::Flexibility,
    }
}

/// Tomorrow's planned session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextSession {
    /// Category to train
    pub category: ExerciseCategory,
    /// Target effort
    pub intensity: Intensity,
    /// Session length
    pub minutes: MinuteWindow,
    /// Whether intensity was lowered for age
    pub age_adjusted: bool,
}

/// Plan tomorrow's session from today's summary
///
/// Cardio and strength alternate; flexibility and unclassified days lead to
/// cardio; mixed and rest days fall back to the goal's primary category.
/// A hard day (peak high or above) is followed by moderate effort, anything
/// else by high effort, then ages above the configured threshold drop one
/// level.
#[must_use]
pub fn plan_next_session(
    summary: &SessionSummary,
    goal: FitnessGoal,
    age: f64,
    config: &AdviceConfig,
) -> NextSession {
    let category = match summary.dominant {
        DominantCategory::Single(ExerciseCategory::Cardio) => ExerciseCategory::Strength,
        DominantCategory::Single(
            ExerciseCategory::Strength | ExerciseCategory::Flexibility | ExerciseCategory::Other,
        ) => ExerciseCategory::Cardio,
        DominantCategory::Mixed | DominantCategory::Rest => primary_category(goal),
    };

    let base = match summary.peak_intensity {
        Some(Intensity::High | Intensity::VeryHigh) => Intensity::Moderate,
        _ => Intensity::High,
    };
    let age_adjusted = age > config.next_day.age_downgrade_threshold;
    let intensity = if age_adjusted { base.downgrade() } else { base };

    NextSession {
        category,
        intensity,
        minutes: config.goals.for_goal(goal).ideal_minutes,
        age_adjusted,
    }
}

fn category_examples(category: ExerciseCategory, goal: FitnessGoal) -> &'static str {
    match (category, goal) {
        (ExerciseCategory::Cardio, FitnessGoal::WeightLoss) => "running or HIIT",
        (ExerciseCategory::Cardio, _) => "cycling or swimming",
        (ExerciseCategory::Strength, FitnessGoal::MuscleGain) => {
            "compound lifts such as squats and bench press"
        }
        (ExerciseCategory::Strength, _) => "bodyweight circuits or light weights",
        (ExerciseCategory::Flexibility | ExerciseCategory::Other, _) => {
            "yoga or a stretching routine"
        }
    }
}

/// Render tomorrow's plan
#[must_use]
pub fn tomorrow_text(plan: &NextSession, goal: FitnessGoal, config: &AdviceConfig) -> String {
    let mut text = format!(
        "Tomorrow: {} {} for {:.0}-{:.0} min, for example {}.",
        plan.intensity.label(),
        plan.category.label(),
        plan.minutes.min,
        plan.minutes.max,
        category_examples(plan.category, goal),
    );
    if plan.age_adjusted {
        text.push_str(&format!(
            " Intensity lowered one level because you are over {:.0}.",
            config.next_day.age_downgrade_threshold
        ));
    }
    text
}

fn composition(summary: &SessionSummary) -> String {
    ExerciseCategory::ALL
        .iter()
        .filter(|category| summary.minutes_in(**category) > 0.0)
        .map(|category| {
            format!(
                "{} {:.0} min ({:.0}%)",
                category.label(),
                summary.minutes_in(*category),
                summary.share(*category) * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn type_fit(goal: FitnessGoal, tier: TypeTier) -> &'static str {
    match (goal, tier) {
        (FitnessGoal::WeightLoss, TypeTier::Top) => {
            "A cardio-focused session that suits weight loss well."
        }
        (FitnessGoal::WeightLoss, TypeTier::Focused) => {
            "Cardio makes up about half the session; more aerobic work would speed up fat loss."
        }
        (FitnessGoal::WeightLoss, TypeTier::Partial) => {
            "Cardio is a minor part of today's session; fat loss benefits from more aerobic work."
        }
        (FitnessGoal::WeightLoss, TypeTier::Low) => {
            "Little cardio today; make aerobic work the core of your weight-loss sessions."
        }
        (FitnessGoal::MuscleGain, TypeTier::Top) => {
            "A strength-focused session that suits muscle gain well."
        }
        (FitnessGoal::MuscleGain, TypeTier::Focused) => {
            "Strength work makes up about half the session; more resistance training would help muscle gain."
        }
        (FitnessGoal::MuscleGain, TypeTier::Partial) => {
            "Strength work is a minor part of today's session; muscle gain needs more resistance training."
        }
        (FitnessGoal::MuscleGain, TypeTier::Low) => {
            "Little strength work today; build your muscle-gain sessions around resistance training."
        }
        (FitnessGoal::Maintain, TypeTier::Top) => {
            "Good variety across exercise types keeps overall fitness balanced."
        }
        (FitnessGoal::Maintain, TypeTier::Focused) => {
            "Pairing flexibility work with another exercise type keeps training balanced."
        }
        (FitnessGoal::Maintain, TypeTier::Partial) => {
            "Two exercise types trained; adding flexibility work would round the session out."
        }
        (FitnessGoal::Maintain, TypeTier::Low) => {
            "Only one type of exercise today; mixing types suits maintenance better."
        }
    }
}

/// Describe how the exercise mix fits the goal
#[must_use]
pub fn combination_analysis(
    summary: &SessionSummary,
    goal: FitnessGoal,
    breakdown: &ScoreBreakdown,
    rating: ScoreRating,
) -> String {
    format!(
        "Today: {} ({}). {} Combination score {}/100 ({}).",
        summary.activity_labels.join(", "),
        composition(summary),
        type_fit(goal, breakdown.type_tier),
        breakdown.total(),
        rating.label(),
    )
}

/// Describe session length against the goal windows
#[must_use]
pub fn duration_analysis(
    summary: &SessionSummary,
    goal: FitnessGoal,
    targets: &GoalTargets,
    band: DurationBand,
) -> String {
    let ideal = targets.ideal_minutes;
    let lead = format!(
        "You trained {:.0} min; the ideal range for {} is {:.0}-{:.0} min.",
        summary.total_minutes,
        goal.label(),
        ideal.min,
        ideal.max
    );
    let verdict = match band {
        DurationBand::Ideal => "That is right in the ideal range.".to_owned(),
        DurationBand::NearShort => format!(
            "Slightly short; another {:.0} min would reach the ideal range.",
            ideal.min - summary.total_minutes
        ),
        DurationBand::NearLong => format!(
            "Slightly long; fine occasionally, but keep most sessions under {:.0} min.",
            ideal.max
        ),
        DurationBand::Short => format!(
            "Too short for a lasting training effect; build up toward at least {:.0} min.",
            ideal.min
        ),
        DurationBand::Long => {
            "Well beyond the recommended range. Long sessions raise injury and overtraining risk, so consider splitting the work across days."
                .to_owned()
        }
    };
    format!("{lead} {verdict}")
}

fn intensity_verdict(goal: FitnessGoal, band: IntensityBand, has_hiit: bool) -> &'static str {
    match (band, goal) {
        (IntensityBand::OnTarget, _) => "Intensity is on target.",
        (IntensityBand::SlightlyLow, FitnessGoal::WeightLoss) => {
            "Slightly easy; a few faster intervals would lift the average."
        }
        (IntensityBand::SlightlyLow, FitnessGoal::MuscleGain) => {
            "Slightly light; increase the load or shorten rest between sets."
        }
        (IntensityBand::SlightlyLow, FitnessGoal::Maintain) => {
            "Slightly easy; a brisker pace would help."
        }
        (IntensityBand::TooLow, FitnessGoal::WeightLoss) if has_hiit => {
            "Too easy overall for efficient fat burning; lengthen the hard intervals."
        }
        (IntensityBand::TooLow, FitnessGoal::WeightLoss) => {
            "Too easy for efficient fat burning; try HIIT or faster running."
        }
        (IntensityBand::TooLow, FitnessGoal::MuscleGain) => {
            "Too light to drive muscle growth; train closer to failure with heavier loads."
        }
        (IntensityBand::TooLow, FitnessGoal::Maintain) => {
            "Very light; fine for a recovery day, but include moderate work during the week."
        }
        (IntensityBand::SlightlyHigh, _) => "Slightly hard; make sure recovery keeps up.",
        (IntensityBand::TooHigh, FitnessGoal::WeightLoss) => {
            "Very hard; alternate hard days with easier ones to avoid burnout."
        }
        (IntensityBand::TooHigh, FitnessGoal::MuscleGain) => {
            "Very high; keep rest between sets long enough to lift with good form."
        }
        (IntensityBand::TooHigh, FitnessGoal::Maintain) => {
            "Harder than maintenance needs; ease off on most days."
        }
    }
}

/// Describe average intensity against the goal band
#[must_use]
pub fn intensity_analysis(
    summary: &SessionSummary,
    goal: FitnessGoal,
    targets: &GoalTargets,
    band: IntensityBand,
) -> String {
    let peak = summary
        .peak_intensity
        .map_or("none", Intensity::label);
    format!(
        "Average intensity was {:.1} MET (peak recorded effort: {}); the target for {} is {:.1}-{:.1} MET. {}",
        summary.average_met,
        peak,
        goal.label(),
        targets.met_band.min,
        targets.met_band.max,
        intensity_verdict(goal, band, summary.has_hiit),
    )
}

/// Suggest what to eat given today's burn and the goal
#[must_use]
pub fn diet_suggestion(
    summary: &SessionSummary,
    goal: FitnessGoal,
    weight_kg: f64,
    tdee: Option<f64>,
    targets: &CalorieTargetsConfig,
) -> String {
    let burn = summary.total_calories;
    let tdee = tdee.filter(|t| *t > 0.0);
    let heavy = tdee.is_some_and(|t| burn / t >= targets.heavy_day_tdee_ratio);

    let mut parts = Vec::new();
    match tdee {
        Some(t) => parts.push(format!(
            "Exercise burned {burn:.0} kcal, {:.0}% of your {t:.0} kcal TDEE.",
            burn / t * 100.0
        )),
        None => parts.push(format!("Exercise burned {burn:.0} kcal.")),
    }

    match goal {
        FitnessGoal::WeightLoss => {
            if heavy {
                let refuel = burn * WEIGHT_LOSS_REFUEL_SHARE;
                parts.push(format!(
                    "A demanding day: refuel with about {:.0} g chicken breast (about {refuel:.0} kcal) so the deficit stays moderate.",
                    grams_for(refuel, CHICKEN_BREAST_KCAL_PER_100G)
                ));
            } else if let Some(t) = tdee {
                parts.push(format!(
                    "Keep intake around {:.0}-{:.0} kcal, a {:.0}-{:.0} kcal deficit, with lean protein and vegetables.",
                    t - targets.weight_loss_max_deficit,
                    t - targets.weight_loss_min_deficit,
                    targets.weight_loss_min_deficit,
                    targets.weight_loss_max_deficit
                ));
            } else {
                parts.push(format!(
                    "Aim for a {:.0}-{:.0} kcal daily deficit with lean protein and vegetables.",
                    targets.weight_loss_min_deficit, targets.weight_loss_max_deficit
                ));
            }
        }
        FitnessGoal::MuscleGain => {
            if heavy {
                let refuel = burn * REFUEL_SHARE;
                parts.push(format!(
                    "Eat back about {refuel:.0} kcal on top of your usual surplus, for example {:.0} g rice and {:.0} g chicken breast.",
                    grams_for(refuel / 2.0, RICE_KCAL_PER_100G),
                    grams_for(refuel / 2.0, CHICKEN_BREAST_KCAL_PER_100G)
                ));
            } else if let Some(t) = tdee {
                parts.push(format!(
                    "Aim for {:.0}-{:.0} kcal today, a {:.0}-{:.0} kcal surplus.",
                    t + targets.muscle_gain_min_surplus,
                    t + targets.muscle_gain_max_surplus,
                    targets.muscle_gain_min_surplus,
                    targets.muscle_gain_max_surplus
                ));
            } else {
                parts.push(format!(
                    "Aim for a {:.0}-{:.0} kcal daily surplus.",
                    targets.muscle_gain_min_surplus, targets.muscle_gain_max_surplus
                ));
            }
            let (low, high) = MUSCLE_GAIN_PROTEIN_G_PER_KG;
            parts.push(format!(
                "Target {:.0}-{:.0} g of protein.",
                weight_kg * low,
                weight_kg * high
            ));
        }
        FitnessGoal::Maintain => {
            if let Some(t) = tdee {
                parts.push(format!("Eat close to your TDEE of {t:.0} kcal."));
            } else {
                parts.push("Eat roughly what you burn and keep meals balanced.".to_owned());
            }
            if heavy {
                parts.push(format!(
                    "Add about {:.0} g of rice to cover today's session.",
                    grams_for(burn * REFUEL_SHARE, RICE_KCAL_PER_100G)
                ));
            }
        }
    }

    match summary.dominant {
        DominantCategory::Single(ExerciseCategory::Strength) => {
            parts.push("Have protein within two hours after strength training.".to_owned());
        }
        DominantCategory::Single(ExerciseCategory::Cardio) => {
            parts.push("Replenish carbohydrates and fluids after cardio.".to_owned());
        }
        _ => {}
    }

    if tdee.is_none() {
        parts.push("Complete your profile to get intake targets based on your TDEE.".to_owned());
    }

    parts.join(" ")
}

fn water_ml(minutes: f64) -> f64 {
    let ml = (minutes / 60.0 * WATER_ML_PER_HOUR / 50.0).round() * 50.0;
    ml.max(MIN_WATER_ML)
}

/// Recovery tips from today's mix and effort
#[must_use]
pub fn recovery_tips(summary: &SessionSummary, targets: &GoalTargets) -> String {
    let hard = summary
        .peak_intensity
        .is_some_and(|peak| peak >= Intensity::High);
    let strength_day = summary.has_weightlifting
        || summary.dominant == DominantCategory::Single(ExerciseCategory::Strength);

    let tip = match summary.dominant {
        _ if strength_day && hard => {
            "Hard strength work: give the trained muscle groups 48 hours before loading them again, and sleep 7-9 hours."
        }
        _ if strength_day => {
            "Leave 48 hours before training the same muscle groups; light stretching helps."
        }
        DominantCategory::Single(ExerciseCategory::Cardio)
            if hard || summary.total_minutes > targets.ideal_minutes.max =>
        {
            "Cool down with 10 minutes of easy movement, then stretch your calves, hamstrings and hips."
        }
        DominantCategory::Single(ExerciseCategory::Cardio) => {
            "Stretch for 5-10 minutes after your session."
        }
        DominantCategory::Single(ExerciseCategory::Flexibility) => {
            "A gentle session; normal sleep is all the recovery it needs."
        }
        _ => "Stretch the muscles you worked and let tomorrow's effort load different areas.",
    };

    format!(
        "{tip} Drink about {:.0} ml of water over the next few hours.",
        water_ml(summary.total_minutes)
    )
}

/// Fixed advice for a day with no recorded minutes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestDayTemplates {
    /// Replaces the combination analysis
    pub combination: String,
    /// Replaces the duration analysis
    pub duration: String,
    /// Replaces the intensity analysis
    pub intensity: String,
    /// Replaces the diet suggestion
    pub diet: String,
    /// Replaces the recovery tips
    pub recovery: String,
    /// Replaces the next-day suggestion
    pub tomorrow: String,
}

/// Generic per-goal advice for a rest day; depends only on goal and configuration
#[must_use]
pub fn rest_day_templates(goal: FitnessGoal, config: &AdviceConfig) -> RestDayTemplates {
    let targets = config.goals.for_goal(goal);
    let calories = &config.calories;
    let window = targets.ideal_minutes;
    let band = targets.met_band;

    let (combination, diet, tomorrow) = match goal {
        FitnessGoal::WeightLoss => (
            "No exercise recorded today. For weight loss, cardio such as running, cycling or swimming is the most effective choice.".to_owned(),
            format!(
                "Keep a moderate deficit of {:.0}-{:.0} kcal and favor lean protein and vegetables.",
                calories.weight_loss_min_deficit, calories.weight_loss_max_deficit
            ),
            format!(
                "Tomorrow: start with {:.0}-{:.0} min of moderate cardio such as brisk walking or cycling.",
                window.min, window.max
            ),
        ),
        FitnessGoal::MuscleGain => (
            "No exercise recorded today. For muscle gain, build sessions around strength training with compound lifts.".to_owned(),
            format!(
                "Eat a {:.0}-{:.0} kcal surplus with protein at every meal.",
                calories.muscle_gain_min_surplus, calories.muscle_gain_max_surplus
            ),
            format!(
                "Tomorrow: {:.0}-{:.0} min of moderate strength training, for example squats and bench press.",
                window.min, window.max
            ),
        ),
        FitnessGoal::Maintain => (
            "No exercise recorded today. For maintenance, mix cardio, strength and flexibility work across the week.".to_owned(),
            "Eat close to your daily energy needs with balanced meals.".to_owned(),
            format!(
                "Tomorrow: {:.0}-{:.0} min of moderate activity, for example yoga followed by a brisk walk.",
                window.min, window.max
            ),
        ),
    };

    RestDayTemplates {
        combination,
        duration: format!(
            "Aim for {:.0}-{:.0} min per session for {}.",
            window.min,
            window.max,
            goal.label()
        ),
        intensity: format!(
            "Work at roughly {:.1}-{:.1} MET when you train for {}.",
            band.min,
            band.max,
            goal.label()
        ),
        diet,
        recovery: "A rest day helps recovery; light stretching or a short walk keeps you moving."
            .to_owned(),
        tomorrow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::MetricsConfig;
    use chrono::NaiveDate;
    use fitbalance_core::models::{DailyExerciseRecord, ExerciseEntry};

    fn summary(entries: Vec<ExerciseEntry>) -> SessionSummary {
        let record = DailyExerciseRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            exercises: entries,
        };
        SessionSummary::from_record(&record, 70.0, &MetricsConfig::default())
    }

    #[test]
    fn test_next_session_alternates() {
        let config = AdviceConfig::default();
        let cardio = summary(vec![ExerciseEntry::new(
            "Run",
            "running",
            30.0,
            0.0,
            Intensity::High,
        )]);
        let plan = plan_next_session(&cardio, FitnessGoal::WeightLoss, 30.0, &config);
        assert_eq!(plan.category, ExerciseCategory::Strength);
        assert_eq!(plan.intensity, Intensity::Moderate);
        assert!(!plan.age_adjusted);

        let strength = summary(vec![ExerciseEntry::new(
            "Bench",
            "chest",
            30.0,
            0.0,
            Intensity::Low,
        )]);
        let plan = plan_next_session(&strength, FitnessGoal::WeightLoss, 45.0, &config);
        assert_eq!(plan.category, ExerciseCategory::Cardio);
        assert_eq!(plan.intensity, Intensity::Moderate);
        assert!(plan.age_adjusted);
    }

    #[test]
    fn test_mixed_and_rest_use_goal_primary() {
        let config = AdviceConfig::default();
        let mixed = summary(vec![
            ExerciseEntry::new("Run", "running", 20.0, 0.0, Intensity::Moderate),
            ExerciseEntry::new("Bench", "chest", 20.0, 0.0, Intensity::Moderate),
        ]);
        assert_eq!(
            plan_next_session(&mixed, FitnessGoal::MuscleGain, 25.0, &config).category,
            ExerciseCategory::Strength
        );
        let rest = summary(Vec::new());
        assert_eq!(
            plan_next_session(&rest, FitnessGoal::Maintain, 25.0, &config).category,
            ExerciseCategory::Flexibility
        );
    }

    #[test]
    fn test_diet_suggestion_heavy_weight_loss_day() {
        let s = summary(vec![ExerciseEntry::new(
            "Run",
            "running",
            60.0,
            550.0,
            Intensity::High,
        )]);
        let text = diet_suggestion(
            &s,
            FitnessGoal::WeightLoss,
            70.0,
            Some(2200.0),
            &CalorieTargetsConfig::default(),
        );
        // 550 * 0.3 = 165 kcal -> 100 g chicken breast
        assert!(text.contains("25% of your 2200 kcal TDEE"));
        assert!(text.contains("100 g chicken breast"));
    }

    #[test]
    fn test_diet_suggestion_without_tdee_asks_for_profile() {
        let s = summary(vec![ExerciseEntry::new(
            "Bench",
            "chest",
            40.0,
            200.0,
            Intensity::Moderate,
        )]);
        let text = diet_suggestion(
            &s,
            FitnessGoal::MuscleGain,
            80.0,
            None,
            &CalorieTargetsConfig::default(),
        );
        assert!(text.contains("128-176 g of protein"));
        assert!(text.contains("Complete your profile"));
    }

    #[test]
    fn test_water_rounding() {
        assert!((water_ml(60.0) - 500.0).abs() < f64::EPSILON);
        assert!((water_ml(10.0) - MIN_WATER_ML).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rest_templates_are_goal_specific() {
        let config = AdviceConfig::default();
        let loss = rest_day_templates(FitnessGoal::WeightLoss, &config);
        let gain = rest_day_templates(FitnessGoal::MuscleGain, &config);
        assert_ne!(loss.combination, gain.combination);
        assert!(loss.duration.contains("30-50 min"));
        assert_eq!(loss, rest_day_templates(FitnessGoal::WeightLoss, &config));
    }
}
