// ABOUTME: Exercise commands for fitbalance-cli
// ABOUTME: Adds entries with MET-estimated calories, removes them, and lists a day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{emit, render_exercise, OutputFormat};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use fitbalance::ledger::FitnessLedger;
use fitbalance_core::constants::reference_body::REFERENCE_WEIGHT_KG;
use fitbalance_core::dates::today;
use fitbalance_core::models::{ExerciseEntry, Intensity};
use tracing::debug;

/// Input of `exercise add`
pub struct NewExercise {
    pub name: String,
    pub exercise_type: String,
    pub minutes: f64,
    pub intensity: Intensity,
    pub calories: Option<f64>,
    pub met: Option<f64>,
}

/// Log an exercise
pub fn add(
    ledger: &mut FitnessLedger,
    date: Option<NaiveDate>,
    input: &NewExercise,
    format: OutputFormat,
) -> Result<()> {
    let date = date.unwrap_or_else(today);
    let entry = if let Some(calories) = input.calories {
        ExerciseEntry::new(
            input.name.as_str(),
            input.exercise_type.as_str(),
            input.minutes,
            calories,
            input.intensity,
        )
    } else {
        let weight = ledger
            .profile()
            .map_or(REFERENCE_WEIGHT_KG, |p| p.weight_or(REFERENCE_WEIGHT_KG));
        debug!(weight, "estimating exercise calories from the MET table");
        ledger.calculator().exercise_entry_from_catalog(
            &input.name,
            &input.exercise_type,
            input.minutes,
            input.intensity,
            weight,
            input.met,
        )?
    };

    if !ledger.add_exercise(date, entry) {
        bail!("exercise not saved for {date}");
    }
    show(ledger, Some(date), format)
}

/// Remove an exercise by id
pub fn remove(ledger: &mut FitnessLedger, date: Option<NaiveDate>, id: &str) -> Result<()> {
    let date = date.unwrap_or_else(today);
    if !ledger.remove_exercise(date, id) {
        bail!("no exercise '{id}' removed for {date}");
    }
    println!("Removed {id}");
    Ok(())
}

/// Print the day's exercises
pub fn show(ledger: &FitnessLedger, date: Option<NaiveDate>, format: OutputFormat) -> Result<()> {
    let record = ledger.exercise_record(date.unwrap_or_else(today));
    emit(format, &record, render_exercise)
}
