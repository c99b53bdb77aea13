// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage key prefixes, reference body values, and food energy densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable thresholds live in the
//! intelligence crate's configuration instead.

/// Record store key layout
pub mod storage_keys {
    /// Key holding the single persisted user profile
    pub const USER_INFO: &str = "user_info";
    /// Prefix for per-day diet records (`diet_YYYY-MM-DD`)
    pub const DIET_PREFIX: &str = "diet_";
    /// Prefix for per-day exercise records (`exercise_YYYY-MM-DD`)
    pub const EXERCISE_PREFIX: &str = "exercise_";
    /// Calendar date format used inside keys and records
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Reference body values used when a profile field is missing
pub mod reference_body {
    /// Body weight that MET values are normalized against (kg)
    pub const REFERENCE_WEIGHT_KG: f64 = 70.0;
    /// Fallback weight used by the calorie guidance lists (kg)
    pub const GUIDANCE_FALLBACK_WEIGHT_KG: f64 = 60.0;
}

/// Energy density of the reference foods used in diet suggestions
pub mod food_energy {
    /// Cooked white rice, kcal per 100 g
    pub const RICE_KCAL_PER_100G: f64 = 116.0;
    /// Cooked chicken breast, kcal per 100 g
    pub const CHICKEN_BREAST_KCAL_PER_100G: f64 = 165.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported by the logging subsystem
    pub const FITBALANCE: &str = "fitbalance";
}
