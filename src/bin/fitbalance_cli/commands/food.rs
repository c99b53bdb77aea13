// ABOUTME: Food catalog commands for fitbalance-cli
// ABOUTME: Searches the configured or bundled catalog by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{emit, render_foods, OutputFormat};
use anyhow::{Context, Result};
use fitbalance::config::AppConfig;
use fitbalance::foods::FoodCatalog;

pub fn search(config: &AppConfig, keyword: &str, format: OutputFormat) -> Result<()> {
    let catalog = FoodCatalog::from_config(config).context("failed to load food catalog")?;
    let hits = catalog.search(keyword);
    emit(format, hits.as_slice(), render_foods)
}
