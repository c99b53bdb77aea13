// ABOUTME: Static exercise catalog mapping free-text exercise names to categories and MET values
// ABOUTME: Bilingual lookup (English keys and common Chinese names) used by metrics and advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise classification
//!
//! Every logged entry is mapped to a category, a subcategory and a base MET.
//! Lookup order: the lower-cased `type` field, then the lower-cased `name`,
//! then individual words of the name, then Chinese aliases contained in the
//! name. Anything unmatched is `Other` with the configured default MET.
//!
//! MET values follow Ainsworth et al. (2011), Compendium of Physical Activities.

use fitbalance_core::models::ExerciseEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad exercise category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Aerobic work (running, cycling, HIIT, ...)
    Cardio,
    /// Resistance work (chest, legs, weightlifting, ...)
    Strength,
    /// Mobility work (yoga, stretching, pilates)
    Flexibility,
    /// Unclassified activity
    Other,
}

impl ExerciseCategory {
    /// Every category in display order
    pub const ALL: [Self; 4] = [Self::Cardio, Self::Strength, Self::Flexibility, Self::Other];

    /// Label used in advice text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification result for one exercise
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ExerciseProfile {
    /// Broad category
    pub category: ExerciseCategory,
    /// Catalog key (`running`, `chest`, `hiit`, ...)
    pub subcategory: &'static str,
    /// MET at moderate effort for a 70 kg adult
    pub base_met: f64,
    /// Display label
    pub label: &'static str,
}

/// Subcategory key of high-intensity interval training
pub const HIIT: &str = "hiit";
/// Subcategory key of free-weight lifting
pub const WEIGHTLIFTING: &str = "weightlifting";
/// Subcategory key of unmatched entries
pub const UNCLASSIFIED: &str = "other";

const fn profile(
    category: ExerciseCategory,
    subcategory: &'static str,
    base_met: f64,
    label: &'static str,
) -> ExerciseProfile {
    ExerciseProfile {
        category,
        subcategory,
        base_met,
        label,
    }
}

use ExerciseCategory::{Cardio, Flexibility, Strength};

/// Catalog entries: accepted aliases and the resulting profile
static CATALOG: &[(&[&str], ExerciseProfile)] = &[
    (
        &["running", "run", "jogging", "跑步", "慢跑"],
        profile(Cardio, "running", 8.0, "Running"),
    ),
    (
        &["jumping_rope", "jump_rope", "skipping", "跳绳"],
        profile(Cardio, "jumping_rope", 10.0, "Jumping rope"),
    ),
    (
        &["climbing_stairs", "stairs", "爬楼梯", "爬楼"],
        profile(Cardio, "climbing_stairs", 7.5, "Stair climbing"),
    ),
    (
        &["walking", "walk", "步行", "散步", "快走"],
        profile(Cardio, "walking", 3.5, "Walking"),
    ),
    (
        &["swimming", "swim", "游泳"],
        profile(Cardio, "swimming", 7.0, "Swimming"),
    ),
    (
        &["cycling", "bike", "biking", "骑行", "骑车", "单车"],
        profile(Cardio, "cycling", 6.8, "Cycling"),
    ),
    (
        &["aerobic_dance", "aerobics", "有氧操", "健身操"],
        profile(Cardio, "aerobic_dance", 6.0, "Aerobic dance"),
    ),
    (
        &["elliptical", "椭圆机"],
        profile(Cardio, "elliptical", 5.5, "Elliptical"),
    ),
    (
        &["hiit", "interval_training", "高强度间歇", "间歇训练"],
        profile(Cardio, HIIT, 8.0, "HIIT"),
    ),
    (
        &["chest", "胸部"],
        profile(Strength, "chest", 6.0, "Chest training"),
    ),
    (
        &["back", "背部"],
        profile(Strength, "back", 5.5, "Back training"),
    ),
    (
        &["legs", "leg", "腿部"],
        profile(Strength, "legs", 7.0, "Leg training"),
    ),
    (
        &["arms", "arm", "手臂"],
        profile(Strength, "arms", 4.5, "Arm training"),
    ),
    (
        &["shoulders", "shoulder", "肩部"],
        profile(Strength, "shoulders", 5.0, "Shoulder training"),
    ),
    (
        &["abs", "core", "腹部", "腹肌"],
        profile(Strength, "abs", 4.0, "Core training"),
    ),
    (
        &["weightlifting", "weight_training", "strength", "举重", "力量训练"],
        profile(Strength, WEIGHTLIFTING, 6.0, "Weightlifting"),
    ),
    (
        &["yoga", "瑜伽"],
        profile(Flexibility, "yoga", 2.5, "Yoga"),
    ),
    (
        &["stretching", "stretch", "拉伸"],
        profile(Flexibility, "stretching", 2.3, "Stretching"),
    ),
    (
        &["pilates", "普拉提"],
        profile(Flexibility, "pilates", 3.0, "Pilates"),
    ),
];

fn normalize(key: &str) -> String {
    key.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Exact lookup by catalog key or alias
#[must_use]
pub fn lookup(key: &str) -> Option<&'static ExerciseProfile> {
    let key = normalize(key);
    if key.is_empty() {
        return None;
    }
    CATALOG
        .iter()
        .find(|(aliases, _)| aliases.contains(&key.as_str()))
        .map(|(_, profile)| profile)
}

fn lookup_in_name(name: &str) -> Option<&'static ExerciseProfile> {
    let lowered = name.to_lowercase();
    if let Some(found) = lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .find_map(lookup)
    {
        return Some(found);
    }
    CATALOG
        .iter()
        .find(|(aliases, _)| {
            aliases
                .iter()
                .any(|alias| !alias.is_ascii() && lowered.contains(alias))
        })
        .map(|(_, profile)| profile)
}

/// Base MET of a catalog key, if the key is known
#[must_use]
pub fn base_met(exercise_type: &str) -> Option<f64> {
    lookup(exercise_type).map(|p| p.base_met)
}

/// Exercise types with a fixed MET for calorie estimates
///
/// Narrower than the catalog: aliases and flexibility work are not listed,
/// so they fall back to the default MET when estimating calories.
pub const CALORIE_MET_TABLE: [(&str, f64); 14] = [
    ("running", 8.0),
    ("jumping_rope", 10.0),
    ("climbing_stairs", 7.5),
    ("walking", 3.5),
    ("swimming", 7.0),
    ("cycling", 6.8),
    ("aerobic_dance", 6.0),
    ("elliptical", 5.5),
    ("chest", 6.0),
    ("back", 5.5),
    ("legs", 7.0),
    ("arms", 4.5),
    ("shoulders", 5.0),
    ("abs", 4.0),
];

/// MET from [`CALORIE_MET_TABLE`] for an exact exercise type key
#[must_use]
pub fn calorie_table_met(exercise_type: &str) -> Option<f64> {
    let key = exercise_type.trim();
    CALORIE_MET_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, met)| *met)
}

/// Classify an entry, falling back to `Other` with `default_met`
#[must_use]
pub fn classify(entry: &ExerciseEntry, default_met: f64) -> ExerciseProfile {
    lookup(&entry.exercise_type)
        .or_else(|| lookup(&entry.name))
        .or_else(|| lookup_in_name(&entry.name))
        .copied()
        .unwrap_or(ExerciseProfile {
            category: ExerciseCategory::Other,
            subcategory: UNCLASSIFIED,
            base_met: default_met,
            label: "Other activity",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitbalance_core::models::Intensity;

    fn entry(name: &str, exercise_type: &str) -> ExerciseEntry {
        ExerciseEntry::new(name, exercise_type, 30.0, 0.0, Intensity::Moderate)
    }

    #[test]
    fn test_source_met_table_values() {
        let expected = [
            ("running", 8.0),
            ("jumping_rope", 10.0),
            ("climbing_stairs", 7.5),
            ("walking", 3.5),
            ("swimming", 7.0),
            ("cycling", 6.8),
            ("aerobic_dance", 6.0),
            ("elliptical", 5.5),
            ("chest", 6.0),
            ("back", 5.5),
            ("legs", 7.0),
            ("arms", 4.5),
            ("shoulders", 5.0),
            ("abs", 4.0),
        ];
        for (key, met) in expected {
            assert_eq!(base_met(key), Some(met), "MET for {key}");
            assert_eq!(calorie_table_met(key), Some(met), "table MET for {key}");
        }
        assert_eq!(base_met("underwater_basket_weaving"), None);
    }

    #[test]
    fn test_calorie_table_ignores_catalog_aliases() {
        assert_eq!(base_met("yoga"), Some(2.5));
        assert_eq!(calorie_table_met("yoga"), None);
        assert_eq!(calorie_table_met("hiit"), None);
        assert_eq!(calorie_table_met("跑步"), None);
        assert_eq!(calorie_table_met(" running "), Some(8.0));
    }

    #[test]
    fn test_classify_by_type_then_name() {
        assert_eq!(classify(&entry("anything", "Running"), 3.0).subcategory, "running");
        assert_eq!(classify(&entry("瑜伽", ""), 3.0).category, ExerciseCategory::Flexibility);
        assert_eq!(classify(&entry("Morning run", "custom"), 3.0).subcategory, "running");
        assert_eq!(classify(&entry("晚上慢跑5公里", ""), 3.0).subcategory, "running");
    }

    #[test]
    fn test_unknown_falls_back_to_other() {
        let profile = classify(&entry("warm-up", "misc"), 3.0);
        assert_eq!(profile.category, ExerciseCategory::Other);
        assert!((profile.base_met - 3.0).abs() < f64::EPSILON);
    }
}
