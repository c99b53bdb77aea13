// ABOUTME: Error types shared by the ledger, stores and CLI
// ABOUTME: Re-exports the core AppError so callers need a single import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! `AppError` carries an [`ErrorCode`] plus a message and optional source.
//! Library code returns [`AppResult`]; the CLI converts into `anyhow` at the
//! top level.

pub use fitbalance_core::errors::{AppError, AppResult, ErrorCode};
pub use fitbalance_intelligence::config::intelligence::ConfigError;
