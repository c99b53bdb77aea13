// ABOUTME: Calendar-date helpers shared by record keys, stores, and the CLI
// ABOUTME: Parses and formats YYYY-MM-DD dates and enumerates month days for the calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::storage_keys::DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, NaiveDate};

/// Format a date as `YYYY-MM-DD`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns `InvalidFormat` if the string is not a valid calendar date
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| AppError::invalid_format(format!("invalid date '{value}'")).with_source(e))
}

/// Today's local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days between two dates, ignoring order
#[must_use]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (b - a).num_days().unsigned_abs()
}

/// Every date of the given month, in order
///
/// # Errors
///
/// Returns `InvalidInput` for a month outside 1-12 or an unrepresentable year
pub fn month_days(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::invalid_input(format!("invalid month {year}-{month}")))?;
    Ok(first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect())
}
