// ABOUTME: Goal-specific calorie guidance comparing intake against TDEE
// ABOUTME: Produces weight-loss, muscle-gain and maintenance advice lists with food and exercise equivalents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::guidance::grams_for;
use crate::config::intelligence::CalorieTargetsConfig;
use crate::exercise_catalog;
use fitbalance_core::constants::food_energy::{CHICKEN_BREAST_KCAL_PER_100G, RICE_KCAL_PER_100G};
use fitbalance_core::models::FitnessGoal;
use tracing::debug;

const RUNNING: &str = "running";
const LEGS: &str = "legs";
const WALKING: &str = "walking";
const STRENGTH: &str = "weightlifting";

const EXTRA_RUN_MINUTES: f64 = 30.0;
const EXTRA_LEG_MINUTES: f64 = 20.0;
const EXTRA_STRENGTH_MINUTES: f64 = 40.0;

/// Inputs for one day's calorie guidance
#[derive(Debug, Clone, Copy)]
pub struct CalorieDay {
    /// Training goal
    pub goal: FitnessGoal,
    /// Body weight (kg); callers pass the guidance fallback when unknown
    pub weight_kg: f64,
    /// Total daily energy expenditure
    pub tdee: f64,
    /// Energy eaten
    pub intake_kcal: f64,
    /// Energy burned by logged exercise
    pub exercise_kcal: f64,
}

fn met(key: &str) -> f64 {
    exercise_catalog::base_met(key).unwrap_or_default()
}

fn kcal_for(key: &str, weight_kg: f64, minutes: f64) -> f64 {
    met(key) * weight_kg * minutes / 60.0
}

fn minutes_to_burn(key: &str, kcal: f64, weight_kg: f64) -> f64 {
    let per_minute = met(key) * weight_kg / 60.0;
    if per_minute > 0.0 {
        kcal / per_minute
    } else {
        0.0
    }
}

fn food_equivalent(kcal: f64) -> String {
    format!(
        "about {:.0} g rice or {:.0} g chicken breast",
        grams_for(kcal, RICE_KCAL_PER_100G),
        grams_for(kcal, CHICKEN_BREAST_KCAL_PER_100G)
    )
}

/// Advice list comparing the day's intake and exercise against the goal
#[must_use]
pub fn calorie_guidance(day: &CalorieDay, targets: &CalorieTargetsConfig) -> Vec<String> {
    debug!(goal = %day.goal, tdee = day.tdee, intake = day.intake_kcal, "building calorie guidance");
    match day.goal {
        FitnessGoal::WeightLoss => weight_loss(day, targets),
        FitnessGoal::MuscleGain => muscle_gain(day, targets),
        FitnessGoal::Maintain => maintain(day, targets),
    }
}

fn weight_loss(day: &CalorieDay, targets: &CalorieTargetsConfig) -> Vec<String> {
    let mut advice = Vec::new();
    let deficit = day.tdee - day.intake_kcal;
    let (min, max) = (
        targets.weight_loss_min_deficit,
        targets.weight_loss_max_deficit,
    );

    if deficit < min {
        let gap = min - deficit;
        advice.push(format!(
            "Your deficit is {deficit:.0} kcal, {gap:.0} kcal short of the {min:.0}-{max:.0} kcal fat-loss range. Burn {gap:.0} kcal more or eat {gap:.0} kcal less."
        ));
        advice.push(format!(
            "That is roughly {:.0} minutes of running.",
            minutes_to_burn(RUNNING, gap, day.weight_kg)
        ));
    } else if deficit > max {
        let excess = deficit - max;
        advice.push(format!(
            "Your deficit of {deficit:.0} kcal is larger than the recommended {max:.0} kcal. Eat {excess:.0} kcal more, {}, to protect muscle and energy.",
            food_equivalent(excess)
        ));
    } else {
        advice.push(format!(
            "Your deficit of {deficit:.0} kcal is in the {min:.0}-{max:.0} kcal range. Keep going."
        ));
    }

    if day.exercise_kcal < targets.weight_loss_low_exercise_kcal {
        advice.push(format!(
            "Exercise burned only {:.0} kcal today; {EXTRA_RUN_MINUTES:.0} minutes of running would add about {:.0} kcal.",
            day.exercise_kcal,
            kcal_for(RUNNING, day.weight_kg, EXTRA_RUN_MINUTES)
        ));
    }
    if day.exercise_kcal > 0.0 && day.exercise_kcal < targets.weight_loss_minimal_exercise_kcal {
        advice.push(format!(
            "Add {EXTRA_LEG_MINUTES:.0} minutes of leg training (about {:.0} kcal) to raise your daily burn.",
            kcal_for(LEGS, day.weight_kg, EXTRA_LEG_MINUTES)
        ));
    }
    advice
}

fn muscle_gain(day: &CalorieDay, targets: &CalorieTargetsConfig) -> Vec<String> {
    let mut advice = Vec::new();
    let surplus = day.intake_kcal - day.tdee;
    let (min, max) = (
        targets.muscle_gain_min_surplus,
        targets.muscle_gain_max_surplus,
    );

    if surplus < min {
        let gap = min - surplus;
        advice.push(format!(
            "Your surplus is {surplus:.0} kcal, {gap:.0} kcal below the {min:.0}-{max:.0} kcal muscle-gain range. Eat {gap:.0} kcal more, {}.",
            food_equivalent(gap)
        ));
    } else if surplus > max {
        let excess = surplus - max;
        advice.push(format!(
            "Your surplus of {surplus:.0} kcal is above the recommended {max:.0} kcal. Trim about {excess:.0} kcal, {}, to limit fat gain.",
            food_equivalent(excess)
        ));
    } else {
        advice.push(format!(
            "Your surplus of {surplus:.0} kcal is in the {min:.0}-{max:.0} kcal range. Keep going."
        ));
    }

    if day.exercise_kcal < targets.muscle_gain_low_exercise_kcal {
        advice.push(format!(
            "Exercise burned {:.0} kcal today; add {EXTRA_STRENGTH_MINUTES:.0} minutes of strength training (about {:.0} kcal) to give the surplus a stimulus.",
            day.exercise_kcal,
            kcal_for(STRENGTH, day.weight_kg, EXTRA_STRENGTH_MINUTES)
        ));
    }
    advice
}

fn maintain(day: &CalorieDay, targets: &CalorieTargetsConfig) -> Vec<String> {
    let balance = day.tdee - day.intake_kcal;
    let tolerance = targets.maintain_tolerance;

    let line = if balance.abs() <= tolerance {
        format!("Intake is within {tolerance:.0} kcal of your TDEE. Keep going.")
    } else if balance > 0.0 {
        format!(
            "You are {balance:.0} kcal under your TDEE. Eat a little more, {}.",
            food_equivalent(balance - tolerance)
        )
    } else {
        let excess = -balance;
        format!(
            "You are {excess:.0} kcal over your TDEE. Eat less or walk about {:.0} minutes to rebalance.",
            minutes_to_burn(WALKING, excess - tolerance, day.weight_kg)
        )
    };
    vec![line]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(goal: FitnessGoal, tdee: f64, intake: f64, exercise: f64) -> CalorieDay {
        CalorieDay {
            goal,
            weight_kg: 60.0,
            tdee,
            intake_kcal: intake,
            exercise_kcal: exercise,
        }
    }

    #[test]
    fn test_weight_loss_small_deficit_suggests_running() {
        let advice = calorie_guidance(
            &day(FitnessGoal::WeightLoss, 2000.0, 1900.0, 250.0),
            &CalorieTargetsConfig::default(),
        );
        // gap 200 kcal at 8 MET * 60 kg = 8 kcal/min -> 25 min
        assert_eq!(advice.len(), 2);
        assert!(advice[0].contains("200 kcal short"));
        assert!(advice[1].contains("25 minutes of running"));
    }

    #[test]
    fn test_weight_loss_large_deficit_eats_back_excess() {
        let advice = calorie_guidance(
            &day(FitnessGoal::WeightLoss, 2500.0, 1884.0, 300.0),
            &CalorieTargetsConfig::default(),
        );
        // excess 116 kcal -> 100 g rice
        assert!(advice[0].contains("Eat 116 kcal more"));
        assert!(advice[0].contains("100 g rice"));
    }

    #[test]
    fn test_weight_loss_low_exercise_extras() {
        let advice = calorie_guidance(
            &day(FitnessGoal::WeightLoss, 2000.0, 1600.0, 50.0),
            &CalorieTargetsConfig::default(),
        );
        assert_eq!(advice.len(), 3);
        assert!(advice[0].contains("Keep going"));
        // 8.0 * 60 * 0.5
        assert!(advice[1].contains("about 240 kcal"));
        assert!(advice[2].contains("20 minutes of leg training"));
    }

    #[test]
    fn test_muscle_gain_branches() {
        let targets = CalorieTargetsConfig::default();
        let short = calorie_guidance(&day(FitnessGoal::MuscleGain, 2500.0, 2535.0, 400.0), &targets);
        assert_eq!(short.len(), 1);
        assert!(short[0].contains("165 kcal below"));
        assert!(short[0].contains("100 g chicken breast"));

        let over = calorie_guidance(&day(FitnessGoal::MuscleGain, 2500.0, 3200.0, 100.0), &targets);
        assert!(over[0].contains("Trim about 200 kcal"));
        assert!(over[1].contains("40 minutes of strength training"));
    }

    #[test]
    fn test_maintain_tolerance() {
        let targets = CalorieTargetsConfig::default();
        let even = calorie_guidance(&day(FitnessGoal::Maintain, 2200.0, 2100.0, 0.0), &targets);
        assert_eq!(even.len(), 1);
        assert!(even[0].contains("Keep going"));

        let over = calorie_guidance(&day(FitnessGoal::Maintain, 2000.0, 2410.0, 0.0), &targets);
        assert!(over[0].contains("410 kcal over"));
    }
}
