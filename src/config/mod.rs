// ABOUTME: Configuration module for application settings
// ABOUTME: Environment-driven storage and catalog settings; engine tuning lives in fitbalance-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **environment**: data directory, storage backend and quota, food catalog path
//! - **intelligence**: re-export of the engine configuration

/// Environment-driven application configuration
pub mod environment;

/// Engine configuration (metrics and advice thresholds)
pub mod intelligence {
    pub use fitbalance_intelligence::config::intelligence::*;
}

pub use environment::{AppConfig, Environment, StorageBackend};
