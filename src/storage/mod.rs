// ABOUTME: Record store abstraction for profile, diet and exercise records
// ABOUTME: Pluggable backends (in-memory, JSON files) behind a synchronous key-value trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Store
//!
//! A small key-value contract over [`StorageKey`]. Values are JSON documents;
//! an absent key reads as `None` and never as an error. Stores are plain
//! `&mut self` objects with a single writer.
//!
//! ```rust
//! use fitbalance::storage::{memory::InMemoryRecordStore, RecordStore, RecordStoreExt};
//! use fitbalance_core::keys::StorageKey;
//! use fitbalance_core::models::UserProfile;
//! # fn main() -> Result<(), fitbalance::errors::AppError> {
//! let mut store = InMemoryRecordStore::new();
//! let profile = UserProfile { name: "Sam".to_owned(), ..UserProfile::default() };
//! store.put(&StorageKey::UserInfo, &profile)?;
//! let loaded: Option<UserProfile> = store.fetch(&StorageKey::UserInfo)?;
//! assert_eq!(loaded, Some(profile));
//! # Ok(())
//! # }
//! ```

/// JSON-file record store
pub mod file;
/// In-memory record store
pub mod memory;

use crate::config::{AppConfig, StorageBackend};
use crate::errors::AppResult;
use fitbalance_core::keys::StorageKey;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Synchronous key-value store for persisted records
pub trait RecordStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or holds malformed JSON
    fn get(&self, key: &StorageKey) -> AppResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StorageQuotaExceeded` when the write would exceed the quota,
    /// or `StorageError` when the backend rejects it
    fn set(&mut self, key: &StorageKey, value: Value) -> AppResult<()>;

    /// Remove `key`, returning whether a value was present
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified
    fn remove(&mut self, key: &StorageKey) -> AppResult<bool>;

    /// Every key currently stored, in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be listed
    fn keys(&self) -> AppResult<Vec<StorageKey>>;
}

/// Typed helpers on top of [`RecordStore`]
pub trait RecordStoreExt: RecordStore {
    /// Read and deserialize the value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the value has the wrong shape
    fn fetch<T: DeserializeOwned>(&self, key: &StorageKey) -> AppResult<Option<T>> {
        self.get(key)?
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    /// Serialize and store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    fn put<T: Serialize>(&mut self, key: &StorageKey, value: &T) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        self.set(key, value)
    }
}

impl<S: RecordStore + ?Sized> RecordStoreExt for S {}

/// Open the record store selected by configuration
///
/// # Errors
///
/// Returns an error if the file store's data directory cannot be created
pub fn open_store(config: &AppConfig) -> AppResult<Box<dyn RecordStore>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            info!(quota = ?config.storage_quota_bytes, "Initializing in-memory record store");
            Ok(Box::new(memory::InMemoryRecordStore::with_quota(
                config.storage_quota_bytes,
            )))
        }
        StorageBackend::File => {
            info!(data_dir = %config.data_dir.display(), "Initializing JSON file record store");
            Ok(Box::new(file::JsonFileRecordStore::open(
                &config.data_dir,
                config.storage_quota_bytes,
            )?))
        }
    }
}
