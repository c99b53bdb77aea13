// ABOUTME: Daily fitness ledger over a record store: profile, diet and exercise records plus derived views
// ABOUTME: Converts store failures into boolean results, notifies listeners, and feeds the metrics and advice engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitness Ledger
//!
//! The single entry point the front-end talks to. Reads never fail: an
//! absent or unreadable record comes back as an empty default and the problem
//! is logged. Writes return `bool`; a `false` leaves the caller's in-memory
//! value untouched and nothing is notified.
//!
//! Saving the profile recomputes its cached BMR and TDEE from today's
//! exercise, and so does any exercise change dated today.

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::notifications::ChangeNotifier;
use crate::storage::{open_store, RecordStore, RecordStoreExt};
use chrono::NaiveDate;
use fitbalance_core::dates::{month_days, today};
use fitbalance_core::keys::StorageKey;
use fitbalance_core::models::{
    DailyDietRecord, DailyExerciseRecord, ExerciseEntry, FoodEntry, UserProfile,
};
use fitbalance_intelligence::metrics::{calculate_calorie_balance, round1};
use fitbalance_intelligence::{
    AdviceEngine, AdviceOutcome, AdviceRequest, DerivedMetrics, IntelligenceConfig,
    MetricsCalculator,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Profile, diet and exercise records for one user
pub struct FitnessLedger {
    store: Box<dyn RecordStore>,
    notifier: ChangeNotifier,
    calculator: MetricsCalculator,
    engine: AdviceEngine,
}

impl fmt::Debug for FitnessLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FitnessLedger")
            .field("notifier", &self.notifier)
            .field("calculator", &self.calculator)
            .finish_non_exhaustive()
    }
}

impl FitnessLedger {
    /// Ledger over `store` using the global engine configuration
    #[must_use]
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self::with_config(store, IntelligenceConfig::global())
    }

    /// Ledger over `store` using an explicit engine configuration
    #[must_use]
    pub fn with_config(store: Box<dyn RecordStore>, config: &IntelligenceConfig) -> Self {
        Self {
            store,
            notifier: ChangeNotifier::new(),
            calculator: MetricsCalculator::with_config(config.metrics.clone()),
            engine: AdviceEngine::with_config(config),
        }
    }

    /// Open the configured store and wrap it
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened
    pub fn open(config: &AppConfig) -> AppResult<Self> {
        let store = open_store(config)?;
        info!(backend = %config.storage_backend, "Fitness ledger ready");
        Ok(Self::new(store))
    }

    /// Register a listener called after each successful write
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StorageKey) + 'static,
    {
        self.notifier.subscribe(listener);
    }

    /// Metrics calculator bound to this ledger's configuration
    #[must_use]
    pub const fn calculator(&self) -> &MetricsCalculator {
        &self.calculator
    }

    fn read<T: DeserializeOwned>(&self, key: &StorageKey) -> Option<T> {
        match self.store.fetch(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(%key, code = ?e.code, error = %e, "Failed to read record, using default");
                None
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &StorageKey, value: &T) -> bool {
        match self.store.put(key, value) {
            Ok(()) => {
                self.notifier.notify(key);
                true
            }
            Err(e) => {
                warn!(%key, code = ?e.code, error = %e, "Failed to save record");
                false
            }
        }
    }

    // ================================================================================================
    // Profile
    // ================================================================================================

    /// Saved profile, if any
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.read(&StorageKey::UserInfo)
    }

    /// Validate and save the profile with freshly computed BMR and TDEE
    ///
    /// Name, age, height and weight are required. Returns `false` when
    /// validation or the write fails.
    pub fn save_profile(&mut self, mut profile: UserProfile) -> bool {
        if let Err(e) = profile.validate_required() {
            warn!(error = %e, "Rejected profile");
            return false;
        }
        self.apply_derived(&mut profile);
        self.write(&StorageKey::UserInfo, &profile)
    }

    fn apply_derived(&self, profile: &mut UserProfile) {
        match self.calculator.bmr(profile) {
            Ok(bmr) => {
                let tdee = self
                    .calculator
                    .tdee(bmr, self.daily_exercise_calories(today()));
                profile.bmr = Some(round1(bmr));
                profile.tdee = Some(round1(tdee));
            }
            Err(e) => {
                debug!(error = %e, "profile incomplete, clearing cached metrics");
                profile.bmr = None;
                profile.tdee = None;
            }
        }
    }

    /// Recompute the cached metrics after today's exercise changed
    fn refresh_profile_metrics(&mut self, date: NaiveDate) {
        if date != today() {
            return;
        }
        let Some(mut profile) = self.profile() else {
            return;
        };
        let before = (profile.bmr, profile.tdee);
        self.apply_derived(&mut profile);
        if before != (profile.bmr, profile.tdee) {
            debug!(tdee = ?profile.tdee, "refreshing cached TDEE");
            self.write(&StorageKey::UserInfo, &profile);
        }
    }

    // ================================================================================================
    // Diet
    // ================================================================================================

    /// Diet record for `date`; empty when nothing is stored
    #[must_use]
    pub fn diet_record(&self, date: NaiveDate) -> DailyDietRecord {
        self.read(&StorageKey::Diet(date))
            .unwrap_or_else(|| DailyDietRecord::empty(date))
    }

    /// Replace the diet record for its date
    pub fn save_diet_record(&mut self, record: &DailyDietRecord) -> bool {
        self.write(&StorageKey::Diet(record.date), record)
    }

    /// Append a food to `date`
    pub fn add_food(&mut self, date: NaiveDate, food: FoodEntry) -> bool {
        if let Err(e) = food.validate() {
            warn!(error = %e, "Rejected food entry");
            return false;
        }
        let mut record = self.diet_record(date);
        record.foods.push(food);
        self.save_diet_record(&record)
    }

    /// Remove a food by id; `false` when no entry matched or the write failed
    pub fn remove_food(&mut self, date: NaiveDate, id: &str) -> bool {
        let mut record = self.diet_record(date);
        if !record.remove(id) {
            debug!(%date, id, "no food entry to remove");
            return false;
        }
        self.save_diet_record(&record)
    }

    /// Calories eaten on `date`, one decimal
    #[must_use]
    pub fn daily_food_calories(&self, date: NaiveDate) -> f64 {
        round1(self.diet_record(date).total_calories())
    }

    // ================================================================================================
    // Exercise
    // ================================================================================================

    /// Exercise record for `date`; empty when nothing is stored
    #[must_use]
    pub fn exercise_record(&self, date: NaiveDate) -> DailyExerciseRecord {
        self.read(&StorageKey::Exercise(date))
            .unwrap_or_else(|| DailyExerciseRecord::empty(date))
    }

    /// Replace the exercise record for its date
    pub fn save_exercise_record(&mut self, record: &DailyExerciseRecord) -> bool {
        let saved = self.write(&StorageKey::Exercise(record.date), record);
        if saved {
            self.refresh_profile_metrics(record.date);
        }
        saved
    }

    /// Append an exercise to `date`
    pub fn add_exercise(&mut self, date: NaiveDate, exercise: ExerciseEntry) -> bool {
        if let Err(e) = exercise.validate() {
            warn!(error = %e, "Rejected exercise entry");
            return false;
        }
        let mut record = self.exercise_record(date);
        record.exercises.push(exercise);
        self.save_exercise_record(&record)
    }

    /// Remove an exercise by id; `false` when no entry matched or the write failed
    pub fn remove_exercise(&mut self, date: NaiveDate, id: &str) -> bool {
        let mut record = self.exercise_record(date);
        if !record.remove(id) {
            debug!(%date, id, "no exercise entry to remove");
            return false;
        }
        self.save_exercise_record(&record)
    }

    /// Calories burned on `date`, one decimal
    #[must_use]
    pub fn daily_exercise_calories(&self, date: NaiveDate) -> f64 {
        round1(self.exercise_record(date).total_calories())
    }

    // ================================================================================================
    // Derived views
    // ================================================================================================

    /// Stored TDEE minus intake on `date` (positive = deficit); 0 without a TDEE
    #[must_use]
    pub fn calorie_deficit(&self, date: NaiveDate) -> f64 {
        self.profile()
            .and_then(|p| p.known_tdee())
            .map_or(0.0, |tdee| {
                calculate_calorie_balance(tdee, self.daily_food_calories(date))
            })
    }

    /// BMR, TDEE and balance for `date`, recomputed from the profile and that day's totals
    #[must_use]
    pub fn metrics(&self, date: NaiveDate) -> DerivedMetrics {
        let profile = self.profile().unwrap_or_default();
        self.calculator.derive(
            &profile,
            self.daily_exercise_calories(date),
            self.daily_food_calories(date),
        )
    }

    /// Dates in the month where intake exceeded the stored TDEE
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a month outside 1-12, or the store's error
    /// when its keys cannot be listed
    pub fn surplus_dates(&self, year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
        let days = month_days(year, month)?;
        let Some(tdee) = self.profile().and_then(|p| p.known_tdee()) else {
            debug!(year, month, "no stored TDEE, no surplus dates");
            return Ok(Vec::new());
        };
        let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
            return Ok(Vec::new());
        };

        // Only days with a stored diet record can be in surplus
        Ok(self
            .store
            .keys()?
            .iter()
            .filter(|key| matches!(key, StorageKey::Diet(_)))
            .filter_map(StorageKey::date)
            .filter(|day| (first..=last).contains(day))
            .filter(|day| self.daily_food_calories(*day) > tdee)
            .collect())
    }

    /// Advice for `date`
    ///
    /// Intake guidance is only produced when food was logged that day.
    #[must_use]
    pub fn advice(&self, date: NaiveDate) -> AdviceOutcome {
        let profile = self.profile();
        let exercise = self.exercise_record(date);
        let diet = self.diet_record(date);
        let diet_calories = (!diet.foods.is_empty()).then(|| diet.total_calories());

        self.engine.generate(&AdviceRequest {
            profile: profile.as_ref(),
            exercise: &exercise,
            diet_calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryRecordStore;
    use fitbalance_core::models::{FitnessGoal, Gender, Intensity};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ledger() -> FitnessLedger {
        FitnessLedger::with_config(
            Box::new(InMemoryRecordStore::new()),
            &IntelligenceConfig::default(),
        )
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Mina".into(),
            gender: Gender::Female,
            age: 25.0,
            height_cm: 165.0,
            weight_kg: 60.0,
            goal: FitnessGoal::WeightLoss,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_absent_records_are_empty() {
        let ledger = ledger();
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        assert!(ledger.profile().is_none());
        assert!(ledger.diet_record(date).foods.is_empty());
        assert!(ledger.exercise_record(date).exercises.is_empty());
        assert!(ledger.calorie_deficit(date).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_profile_fills_metrics() {
        let mut ledger = ledger();
        assert!(ledger.save_profile(profile()));
        let saved = ledger.profile().unwrap();
        assert_eq!(saved.bmr, Some(1345.3));
        assert_eq!(saved.tdee, Some(round1(1345.25 * 1.3)));
    }

    #[test]
    fn test_incomplete_profile_rejected() {
        let mut ledger = ledger();
        let mut user = profile();
        user.height_cm = 0.0;
        assert!(!ledger.save_profile(user));
        assert!(ledger.profile().is_none());
    }

    #[test]
    fn test_writes_notify_listeners() {
        let mut ledger = ledger();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        ledger.subscribe(move |key| sink.borrow_mut().push(*key));

        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        assert!(ledger.add_food(date, FoodEntry::new("Apple", 52.0, "fruit")));
        assert!(!ledger.remove_food(date, "missing"));
        assert_eq!(*seen.borrow(), vec![StorageKey::Diet(date)]);
    }

    #[test]
    fn test_today_exercise_refreshes_tdee() {
        let mut ledger = ledger();
        assert!(ledger.save_profile(profile()));
        let before = ledger.profile().unwrap().tdee.unwrap();

        let run = ExerciseEntry::new("Run", "running", 30.0, 240.0, Intensity::Moderate);
        assert!(ledger.add_exercise(today(), run));
        let after = ledger.profile().unwrap().tdee.unwrap();
        assert!((after - before - 240.0).abs() < 0.11);
    }
}
