// ABOUTME: Read-only food catalog with case-insensitive name search
// ABOUTME: Loads a JSON array of {name, calorie, category} from disk or the bundled default list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use fitbalance_core::models::FoodEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

const BUNDLED_FOODS: &str = include_str!("../data/foods.json");

/// One catalog row, energy per 100 g serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFood {
    /// Display name
    pub name: String,
    /// kcal per serving
    #[serde(alias = "calories")]
    pub calorie: f64,
    /// Grouping shown next to search results
    #[serde(default)]
    pub category: String,
}

impl CatalogFood {
    /// Diet entry for this food with a fresh id
    #[must_use]
    pub fn to_entry(&self) -> FoodEntry {
        FoodEntry {
            id: format!("{}_{}", self.category.to_lowercase(), Uuid::new_v4().simple()),
            name: self.name.clone(),
            calories: self.calorie,
            category: self.category.clone(),
        }
    }
}

/// In-memory food catalog
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<CatalogFood>,
}

impl FoodCatalog {
    /// Parse a JSON array of catalog rows
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and `ValueOutOfRange`
    /// for negative or non-finite energy values
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let foods: Vec<CatalogFood> = serde_json::from_str(json)?;
        if let Some(bad) = foods
            .iter()
            .find(|f| !f.calorie.is_finite() || f.calorie < 0.0)
        {
            return Err(AppError::out_of_range(format!(
                "catalog food '{}' has invalid calories",
                bad.name
            )));
        }
        debug!(count = foods.len(), "food catalog parsed");
        Ok(Self { foods })
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read food catalog {}", path.display()))
                .with_source(e)
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), count = catalog.len(), "Loaded food catalog");
        Ok(catalog)
    }

    /// Catalog shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled data is malformed
    pub fn bundled() -> AppResult<Self> {
        Self::from_json_str(BUNDLED_FOODS)
    }

    /// Catalog named by `FITBALANCE_FOOD_DB`, else the bundled one
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be loaded
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config
            .food_db_path
            .as_deref()
            .map_or_else(Self::bundled, Self::load)
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Foods whose name contains `keyword`, ignoring case, in catalog order
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<FoodEntry> {
        let needle = keyword.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .map(CatalogFood::to_entry)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = FoodCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        let rice = catalog.search("米饭");
        assert!(rice.iter().any(|f| f.name == "米饭" && (f.calories - 116.0).abs() < 1e-9));
    }

    #[test]
    fn test_search_ignores_case_and_assigns_ids() {
        let catalog = FoodCatalog::from_json_str(
            r#"[{"name":"Chicken Breast","calorie":165,"category":"Meat"},
                {"name":"Rice","calorie":116,"category":"Staple"}]"#,
        )
        .unwrap();
        let hits = catalog.search("CHICKEN");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].id.starts_with("meat_"));
        assert_ne!(hits[0].id, catalog.search("chicken")[0].id);
        assert!(catalog.search("pasta").is_empty());
    }

    #[test]
    fn test_negative_energy_rejected() {
        let err = FoodCatalog::from_json_str(r#"[{"name":"Bad","calorie":-1}]"#).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ValueOutOfRange);
    }
}
