// ABOUTME: Diet log models for daily food intake tracking
// ABOUTME: FoodEntry and DailyDietRecord definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_food_id() -> String {
    Uuid::new_v4().to_string()
}

/// A single food item eaten on a day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Identifier used for removal
    #[serde(default = "new_food_id")]
    pub id: String,
    /// Food name
    pub name: String,
    /// Energy in kcal
    #[serde(alias = "calorie")]
    pub calories: f64,
    /// Catalog category (staple, meat, snack, ...)
    #[serde(default)]
    pub category: String,
}

impl FoodEntry {
    /// Create an entry with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64, category: impl Into<String>) -> Self {
        Self {
            id: new_food_id(),
            name: name.into(),
            calories,
            category: category.into(),
        }
    }

    /// Reject negative or non-finite calories
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when calories are invalid
    pub fn validate(&self) -> AppResult<()> {
        if !self.calories.is_finite() || self.calories < 0.0 {
            return Err(AppError::out_of_range(format!(
                "food '{}' has invalid calories",
                self.name
            )));
        }
        Ok(())
    }
}

/// All food entries for one calendar date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyDietRecord {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Entries in insertion order
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
}

impl DailyDietRecord {
    /// Empty record for a date
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            foods: Vec::new(),
        }
    }

    /// Sum of calories eaten
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.foods.iter().map(|f| f.calories).sum()
    }

    /// Remove an entry by id, returning whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        self.foods.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_field_alias() {
        let food: FoodEntry =
            serde_json::from_str(r#"{"name":"米饭","calorie":116,"category":"主食"}"#).unwrap();
        assert!((food.calories - 116.0).abs() < f64::EPSILON);
        assert!(!food.id.is_empty());
    }

    #[test]
    fn test_record_total() {
        let mut record = DailyDietRecord::empty(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        record.foods.push(FoodEntry::new("Rice", 232.0, "staple"));
        record.foods.push(FoodEntry::new("Chicken", 165.5, "meat"));
        assert!((record.total_calories() - 397.5).abs() < 1e-9);
    }
}
