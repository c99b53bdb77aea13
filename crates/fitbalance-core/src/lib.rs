// ABOUTME: Core types and constants for the FitBalance energy-balance tracker
// ABOUTME: Foundation crate with error handling, data models, storage keys, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitBalance Core
//!
//! Foundation crate providing shared types for the FitBalance workspace. It
//! changes infrequently so the engine and application crates compile
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `AppResult` alias
//! - **models**: user profile, diet and exercise records
//! - **keys**: typed record-store keys
//! - **dates**: `YYYY-MM-DD` helpers
//! - **constants**: storage prefixes, reference body values, food energy densities

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Calendar-date helpers
pub mod dates;

/// Typed record-store keys
pub mod keys;

/// Core data models (profile, diet, exercise)
pub mod models;
