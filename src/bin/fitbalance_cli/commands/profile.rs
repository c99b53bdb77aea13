// ABOUTME: Profile commands for fitbalance-cli
// ABOUTME: Shows the saved profile or merges new field values into it and saves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{emit, render_profile, OutputFormat};
use anyhow::{bail, Result};
use clap::Args;
use fitbalance::ledger::FitnessLedger;
use fitbalance_core::models::{ExperienceLevel, FitnessGoal, Gender, UserProfile};
use fitbalance_intelligence::advice::PROFILE_REQUIRED_MESSAGE;
use tracing::info;

/// Fields accepted by `profile set`
#[derive(Args)]
pub struct ProfileArgs {
    /// Display name
    #[arg(long)]
    name: Option<String>,

    /// Gender (male, female)
    #[arg(long)]
    gender: Option<String>,

    /// Age in years
    #[arg(long)]
    age: Option<f64>,

    /// Height in cm
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kg
    #[arg(long)]
    weight: Option<f64>,

    /// Goal (weight_loss, muscle_gain, maintain)
    #[arg(long, value_parser = parse_goal_arg)]
    goal: Option<FitnessGoal>,

    /// Training experience (beginner, intermediate, advanced)
    #[arg(long, value_parser = parse_experience_arg)]
    experience: Option<ExperienceLevel>,
}

fn parse_goal_arg(value: &str) -> std::result::Result<FitnessGoal, String> {
    FitnessGoal::parse(value).map_err(|e| e.message)
}

fn parse_experience_arg(value: &str) -> std::result::Result<ExperienceLevel, String> {
    match value.to_lowercase().as_str() {
        "beginner" => Ok(ExperienceLevel::Beginner),
        "intermediate" => Ok(ExperienceLevel::Intermediate),
        "advanced" => Ok(ExperienceLevel::Advanced),
        other => Err(format!("unknown experience level '{other}'")),
    }
}

impl ProfileArgs {
    fn merge_into(self, mut profile: UserProfile) -> UserProfile {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(gender) = self.gender {
            profile.gender = Gender::from_str_lossy(&gender);
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(height) = self.height {
            profile.height_cm = height;
        }
        if let Some(weight) = self.weight {
            profile.weight_kg = weight;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
        if self.experience.is_some() {
            profile.experience_level = self.experience;
        }
        profile
    }
}

/// Print the saved profile
pub fn show(ledger: &FitnessLedger, format: OutputFormat) -> Result<()> {
    match ledger.profile() {
        Some(profile) => emit(format, &profile, render_profile),
        None => {
            println!("{PROFILE_REQUIRED_MESSAGE}");
            Ok(())
        }
    }
}

/// Merge fields into the saved profile and save it
pub fn set(ledger: &mut FitnessLedger, args: ProfileArgs, format: OutputFormat) -> Result<()> {
    let profile = args.merge_into(ledger.profile().unwrap_or_default());
    if !ledger.save_profile(profile) {
        bail!("profile not saved: name, age, height and weight are required and must be positive");
    }
    info!("Profile saved");
    show(ledger, format)
}
