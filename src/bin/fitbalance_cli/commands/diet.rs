// ABOUTME: Diet commands for fitbalance-cli
// ABOUTME: Adds, removes and lists the foods logged for a day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{emit, render_diet, OutputFormat};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use fitbalance::ledger::FitnessLedger;
use fitbalance_core::dates::today;
use fitbalance_core::models::FoodEntry;

/// Log a food
pub fn add(
    ledger: &mut FitnessLedger,
    date: Option<NaiveDate>,
    name: String,
    calories: f64,
    category: String,
    format: OutputFormat,
) -> Result<()> {
    let date = date.unwrap_or_else(today);
    if !ledger.add_food(date, FoodEntry::new(name, calories, category)) {
        bail!("food not saved for {date}");
    }
    show(ledger, Some(date), format)
}

/// Remove a food by id
pub fn remove(ledger: &mut FitnessLedger, date: Option<NaiveDate>, id: &str) -> Result<()> {
    let date = date.unwrap_or_else(today);
    if !ledger.remove_food(date, id) {
        bail!("no food '{id}' removed for {date}");
    }
    println!("Removed {id}");
    Ok(())
}

/// Print the day's foods
pub fn show(ledger: &FitnessLedger, date: Option<NaiveDate>, format: OutputFormat) -> Result<()> {
    let record = ledger.diet_record(date.unwrap_or_else(today));
    emit(format, &record, render_diet)
}
