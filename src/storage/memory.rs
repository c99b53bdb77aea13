// ABOUTME: In-memory record store holding serialized JSON documents
// ABOUTME: Optional byte quota reproduces storage-full failures for tests and ephemeral runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use fitbalance_core::keys::StorageKey;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Record store backed by a `HashMap` of serialized documents
///
/// Usage is counted as key length plus serialized value length, the way
/// browser key-value storage accounts for its quota.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    entries: HashMap<StorageKey, Vec<u8>>,
    quota_bytes: Option<usize>,
}

impl InMemoryRecordStore {
    /// Unlimited store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store refusing writes that would exceed `quota_bytes`
    #[must_use]
    pub fn with_quota(quota_bytes: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes,
        }
    }

    /// Bytes currently used
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, data)| entry_size(key, data.len()))
            .sum()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry_size(key: &StorageKey, data_len: usize) -> usize {
    key.to_string().len() + data_len
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, key: &StorageKey) -> AppResult<Option<Value>> {
        self.entries
            .get(key)
            .map(|data| serde_json::from_slice(data))
            .transpose()
            .map_err(Into::into)
    }

    fn set(&mut self, key: &StorageKey, value: Value) -> AppResult<()> {
        let data = serde_json::to_vec(&value)?;

        if let Some(limit) = self.quota_bytes {
            let replaced = self
                .entries
                .get(key)
                .map_or(0, |old| entry_size(key, old.len()));
            let projected = self.used_bytes() - replaced + entry_size(key, data.len());
            if projected > limit {
                debug!(%key, projected, limit, "in-memory store quota exceeded");
                return Err(AppError::quota_exceeded(limit));
            }
        }

        self.entries.insert(*key, data);
        Ok(())
    }

    fn remove(&mut self, key: &StorageKey) -> AppResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self) -> AppResult<Vec<StorageKey>> {
        let mut keys: Vec<StorageKey> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let mut store = InMemoryRecordStore::new();
        let key = StorageKey::Diet(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(store.get(&key).unwrap().is_none());

        store.set(&key, json!({"foods": []})).unwrap();
        assert_eq!(store.get(&key).unwrap(), Some(json!({"foods": []})));
        assert!(store.remove(&key).unwrap());
        assert!(!store.remove(&key).unwrap());
    }

    #[test]
    fn test_quota_counts_replacement_once() {
        let key = StorageKey::UserInfo;
        let value = json!({"name": "Sam"});
        let size = entry_size(&key, serde_json::to_vec(&value).unwrap().len());

        let mut store = InMemoryRecordStore::with_quota(Some(size));
        store.set(&key, value.clone()).unwrap();
        store.set(&key, value).unwrap();

        let err = store.set(&key, json!({"name": "Samantha"})).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageQuotaExceeded);
        assert_eq!(store.len(), 1);
    }
}
