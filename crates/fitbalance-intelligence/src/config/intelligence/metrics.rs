// ABOUTME: Metrics configuration for BMR, TDEE, and exercise energy calculations
// ABOUTME: Mifflin-St Jeor coefficients, activity multiplier, MET defaults, intensity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - MET values: Ainsworth et al. (2011) Compendium of Physical Activities

use fitbalance_core::constants::reference_body::REFERENCE_WEIGHT_KG;
use fitbalance_core::models::Intensity;
use serde::{Deserialize, Serialize};

/// Metrics calculation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Fixed multiplier applied to BMR before adding exercise energy (1.3)
    pub activity_multiplier: f64,
    /// MET used for exercise types missing from the table (3.0)
    pub default_met: f64,
    /// Weight that MET values are normalised against (70 kg)
    pub reference_weight_kg: f64,
    /// Multipliers applied to base MET per recorded intensity
    pub intensity_multipliers: IntensityMultipliers,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_multiplier: 1.3,
            default_met: 3.0,
            reference_weight_kg: REFERENCE_WEIGHT_KG,
            intensity_multipliers: IntensityMultipliers::default(),
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// MET multipliers per recorded intensity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityMultipliers {
    /// Low intensity (0.8)
    pub low: f64,
    /// Moderate intensity (1.0)
    pub moderate: f64,
    /// High intensity (1.3)
    pub high: f64,
    /// Very high intensity (1.6)
    pub very_high: f64,
}

impl Default for IntensityMultipliers {
    fn default() -> Self {
        Self {
            low: 0.8,
            moderate: 1.0,
            high: 1.3,
            very_high: 1.6,
        }
    }
}

impl IntensityMultipliers {
    /// Multiplier for an intensity level
    #[must_use]
    pub const fn for_intensity(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Low => self.low,
            Intensity::Moderate => self.moderate,
            Intensity::High => self.high,
            Intensity::VeryHigh => self.very_high,
        }
    }
}
