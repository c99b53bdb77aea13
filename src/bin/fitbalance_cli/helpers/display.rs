// ABOUTME: Output formatting helpers for fitbalance-cli
// ABOUTME: Renders records, metrics, advice and the surplus calendar as text or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use fitbalance_core::dates::{format_date, month_days};
use fitbalance_core::models::{
    DailyDietRecord, DailyExerciseRecord, FoodEntry, Gender, UserProfile,
};
use fitbalance_intelligence::{AdviceOutcome, DerivedMetrics};
use serde::Serialize;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print `value` as text or JSON depending on `format`
pub fn emit<T, F>(format: OutputFormat, value: &T, render: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", render(value)),
    }
    Ok(())
}

const fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
    }
}

fn optional_kcal(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.1} kcal"))
}

pub fn render_profile(profile: &UserProfile) -> String {
    [
        format!("Name:   {}", profile.name),
        format!("Gender: {}", gender_label(profile.gender)),
        format!("Age:    {}", profile.age),
        format!("Height: {} cm", profile.height_cm),
        format!("Weight: {} kg", profile.weight_kg),
        format!("Goal:   {}", profile.goal.label()),
        format!("BMR:    {}", optional_kcal(profile.bmr)),
        format!("TDEE:   {}", optional_kcal(profile.tdee)),
    ]
    .join("\n")
}

pub fn render_diet(record: &DailyDietRecord) -> String {
    let mut lines = vec![format!("Diet for {}", format_date(record.date))];
    if record.foods.is_empty() {
        lines.push("  (nothing logged)".to_owned());
    }
    lines.extend(record.foods.iter().map(|food| {
        format!(
            "  {:<20} {:>7.1} kcal  {}  [{}]",
            food.name, food.calories, food.category, food.id
        )
    }));
    lines.push(format!("Total: {:.1} kcal", record.total_calories()));
    lines.join("\n")
}

pub fn render_exercise(record: &DailyExerciseRecord) -> String {
    let mut lines = vec![format!("Exercise for {}", format_date(record.date))];
    if record.exercises.is_empty() {
        lines.push("  (rest day)".to_owned());
    }
    lines.extend(record.exercises.iter().map(|entry| {
        format!(
            "  {:<20} {:<14} {:>5.0} min  {:<9} {:>7.1} kcal  [{}]",
            entry.name,
            entry.exercise_type,
            entry.duration_minutes,
            entry.intensity.label(),
            entry.calories_burned,
            entry.id
        )
    }));
    lines.push(format!(
        "Total: {:.0} min, {:.1} kcal",
        record.total_minutes(),
        record.total_calories()
    ));
    lines.join("\n")
}

pub fn render_metrics(metrics: &DerivedMetrics) -> String {
    let balance = metrics.balance();
    let mut lines = vec![
        format!("BMR:      {:.1} kcal", metrics.bmr),
        format!("TDEE:     {:.1} kcal", metrics.tdee),
        format!("Exercise: {:.1} kcal", metrics.exercise_calories),
        format!("Intake:   {:.1} kcal", metrics.diet_calories),
        format!("Balance:  {} {:.1} kcal", balance.label(), balance.magnitude()),
    ];
    if !metrics.profile_complete {
        lines.push("Profile incomplete: set age, height and weight for a real BMR.".to_owned());
    }
    lines.join("\n")
}

pub fn render_advice(outcome: &AdviceOutcome) -> String {
    let payload = match outcome {
        AdviceOutcome::ProfileRequired { message } => return message.clone(),
        AdviceOutcome::Generated(payload) => payload,
    };

    let mut lines = vec![
        format!(
            "Score: {}/100 ({})",
            payload.combination_score, payload.rating
        ),
        format!(
            "Total: {:.0} min, {:.1} kcal",
            payload.total_duration, payload.total_calories
        ),
        String::new(),
        format!("Combination: {}", payload.combination_analysis),
        format!("Duration:    {}", payload.duration_analysis),
        format!("Intensity:   {}", payload.intensity_analysis),
        format!("Diet:        {}", payload.diet_suggestion),
        format!("Recovery:    {}", payload.recovery_tips),
        format!("Tomorrow:    {}", payload.tomorrow_exercise),
    ];
    if !payload.calorie_guidance.is_empty() {
        lines.push(String::new());
        lines.push("Calorie guidance:".to_owned());
        lines.extend(payload.calorie_guidance.iter().map(|g| format!("  - {g}")));
    }
    lines.join("\n")
}

#[derive(Serialize)]
pub struct SurplusCalendar {
    pub year: i32,
    pub month: u32,
    pub surplus_dates: Vec<NaiveDate>,
}

/// Month grid (Monday first) with surplus days marked `*`
pub fn render_calendar(calendar: &SurplusCalendar) -> String {
    let Ok(days) = month_days(calendar.year, calendar.month) else {
        return format!("invalid month {}-{}", calendar.year, calendar.month);
    };

    let mut lines = vec![
        format!("{:04}-{:02}   (* = intake above TDEE)", calendar.year, calendar.month),
        " Mon  Tue  Wed  Thu  Fri  Sat  Sun".to_owned(),
    ];
    let mut week = "     ".repeat(days.first().map_or(0, |d| d.weekday().num_days_from_monday()) as usize);
    for day in &days {
        let mark = if calendar.surplus_dates.contains(day) { '*' } else { ' ' };
        week.push_str(&format!(" {:>3}{mark}", day.day()));
        if day.weekday().num_days_from_monday() == 6 {
            lines.push(std::mem::take(&mut week));
        }
    }
    if !week.is_empty() {
        lines.push(week);
    }
    lines.push(format!("Surplus days: {}", calendar.surplus_dates.len()));
    lines.join("\n")
}

pub fn render_foods(foods: &[FoodEntry]) -> String {
    if foods.is_empty() {
        return "No matching foods.".to_owned();
    }
    foods
        .iter()
        .map(|food| format!("{:<20} {:>7.1} kcal  {}", food.name, food.calories, food.category))
        .collect::<Vec<_>>()
        .join("\n")
}
