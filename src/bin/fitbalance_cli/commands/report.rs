// ABOUTME: Report commands for fitbalance-cli
// ABOUTME: Derived metrics, advice and the monthly surplus calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{
    emit, render_advice, render_calendar, render_metrics, OutputFormat, SurplusCalendar,
};
use anyhow::Result;
use chrono::NaiveDate;
use fitbalance::ledger::FitnessLedger;
use fitbalance_core::dates::today;

pub fn metrics(ledger: &FitnessLedger, date: Option<NaiveDate>, format: OutputFormat) -> Result<()> {
    let metrics = ledger.metrics(date.unwrap_or_else(today));
    emit(format, &metrics, render_metrics)
}

pub fn advice(ledger: &FitnessLedger, date: Option<NaiveDate>, format: OutputFormat) -> Result<()> {
    let outcome = ledger.advice(date.unwrap_or_else(today));
    emit(format, &outcome, render_advice)
}

pub fn calendar(ledger: &FitnessLedger, year: i32, month: u32, format: OutputFormat) -> Result<()> {
    let calendar = SurplusCalendar {
        year,
        month,
        surplus_dates: ledger.surplus_dates(year, month)?,
    };
    emit(format, &calendar, render_calendar)
}
