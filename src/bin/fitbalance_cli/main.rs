// ABOUTME: FitBalance CLI - command-line front-end over the fitness ledger
// ABOUTME: Edits profile, diet and exercise records and renders metrics, advice and the surplus calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Save the profile (BMR and TDEE are computed on save)
//! fitbalance-cli profile set --name Sam --gender male --age 30 --height 175 --weight 70 --goal weight_loss
//!
//! # Log food and exercise for today
//! fitbalance-cli diet add --name 米饭 --calories 232 --category 主食
//! fitbalance-cli exercise add --name "Morning run" --type running --minutes 30 --intensity moderate
//!
//! # Metrics and advice, as text or JSON
//! fitbalance-cli metrics --date 2025-06-02
//! fitbalance-cli advice --format json
//!
//! # Days of a month that ended in surplus
//! fitbalance-cli calendar --year 2025 --month 6
//!
//! # Search the food catalog
//! fitbalance-cli food search chicken
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitbalance::config::AppConfig;
use fitbalance::ledger::FitnessLedger;
use fitbalance::logging::LoggingConfig;
use fitbalance_core::dates::parse_date;
use fitbalance_core::models::Intensity;
use helpers::display::OutputFormat;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitbalance-cli",
    about = "FitBalance energy-balance tracker",
    long_about = "Track diet and exercise, compute BMR/TDEE/calorie balance, and get rule-based exercise advice."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Diet record for a day
    Diet {
        #[command(subcommand)]
        action: DietCommand,
    },

    /// Exercise record for a day
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// BMR, TDEE and calorie balance for a day
    Metrics {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Exercise and diet advice for a day
    Advice {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Days of a month where intake exceeded TDEE
    Calendar {
        /// Year
        #[arg(long)]
        year: i32,

        /// Month (1-12)
        #[arg(long)]
        month: u32,
    },

    /// Food catalog
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the saved profile
    Show,

    /// Update profile fields; unspecified fields keep their saved value
    Set(commands::profile::ProfileArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DietCommand {
    /// Add a food
    Add {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Food name
        #[arg(long)]
        name: String,

        /// Energy in kcal
        #[arg(long)]
        calories: f64,

        /// Category label
        #[arg(long, default_value = "")]
        category: String,
    },

    /// Remove a food by id
    Remove {
        /// Entry id
        id: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Show the day's foods
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// Add an exercise; calories come from the MET table unless given
    Add {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Display name
        #[arg(long)]
        name: String,

        /// Exercise type (running, swimming, chest, yoga, 跑步, ...)
        #[arg(long = "type")]
        exercise_type: String,

        /// Duration in minutes
        #[arg(long)]
        minutes: f64,

        /// Intensity (low, moderate, high, very_high)
        #[arg(long, default_value = "moderate", value_parser = parse_intensity_arg)]
        intensity: Intensity,

        /// Calories burned, overriding the MET estimate
        #[arg(long)]
        calories: Option<f64>,

        /// MET override for the estimate
        #[arg(long)]
        met: Option<f64>,
    },

    /// Remove an exercise by id
    Remove {
        /// Entry id
        id: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Show the day's exercises
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodCommand {
    /// Case-insensitive name search
    Search {
        /// Part of the food name
        keyword: String,
    },
}

fn parse_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.message)
}

fn parse_intensity_arg(value: &str) -> std::result::Result<Intensity, String> {
    Intensity::parse(value).map_err(|e| e.message)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    debug!("{}", config.summary());

    let format = cli.format;
    let mut ledger = FitnessLedger::open(&config).context("failed to open record store")?;

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&ledger, format)?,
            ProfileCommand::Set(args) => commands::profile::set(&mut ledger, args, format)?,
        },
        Command::Diet { action } => match action {
            DietCommand::Add {
                date,
                name,
                calories,
                category,
            } => commands::diet::add(&mut ledger, date, name, calories, category, format)?,
            DietCommand::Remove { id, date } => {
                commands::diet::remove(&mut ledger, date, &id)?;
            }
            DietCommand::Show { date } => commands::diet::show(&ledger, date, format)?,
        },
        Command::Exercise { action } => match action {
            ExerciseCommand::Add {
                date,
                name,
                exercise_type,
                minutes,
                intensity,
                calories,
                met,
            } => commands::exercise::add(
                &mut ledger,
                date,
                &commands::exercise::NewExercise {
                    name,
                    exercise_type,
                    minutes,
                    intensity,
                    calories,
                    met,
                },
                format,
            )?,
            ExerciseCommand::Remove { id, date } => {
                commands::exercise::remove(&mut ledger, date, &id)?;
            }
            ExerciseCommand::Show { date } => commands::exercise::show(&ledger, date, format)?,
        },
        Command::Metrics { date } => commands::report::metrics(&ledger, date, format)?,
        Command::Advice { date } => commands::report::advice(&ledger, date, format)?,
        Command::Calendar { year, month } => {
            commands::report::calendar(&ledger, year, month, format)?;
        }
        Command::Food { action } => match action {
            FoodCommand::Search { keyword } => commands::food::search(&config, &keyword, format)?,
        },
    }

    Ok(())
}
