// ABOUTME: JSON-file record store keeping one document per key under a data directory
// ABOUTME: Writes go through a temporary file and rename so a crash never leaves half a record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use fitbalance_core::keys::StorageKey;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EXTENSION: &str = "json";

/// Record store persisting `<data_dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct JsonFileRecordStore {
    root: PathBuf,
    quota_bytes: Option<usize>,
}

impl JsonFileRecordStore {
    /// Open (creating if needed) the store rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created
    pub fn open(root: &Path, quota_bytes: Option<usize>) -> AppResult<Self> {
        fs::create_dir_all(root).map_err(|e| {
            AppError::storage(format!("cannot create data directory {}", root.display()))
                .with_source(e)
        })?;
        info!(root = %root.display(), "Opened JSON file record store");
        Ok(Self {
            root: root.to_path_buf(),
            quota_bytes,
        })
    }

    fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.root.join(format!("{key}.{EXTENSION}"))
    }

    fn file_len(path: &Path) -> AppResult<usize> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.len() as usize),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Bytes used by every record except `excluded`
    fn used_bytes_excluding(&self, excluded: &StorageKey) -> AppResult<usize> {
        let mut total = 0;
        for key in self.keys()? {
            if key != *excluded {
                total += Self::file_len(&self.path_for(&key))?;
            }
        }
        Ok(total)
    }
}

impl RecordStore for JsonFileRecordStore {
    fn get(&self, key: &StorageKey) -> AppResult<Option<Value>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &StorageKey, value: Value) -> AppResult<()> {
        let data = serde_json::to_vec_pretty(&value)?;

        if let Some(limit) = self.quota_bytes {
            let projected = self.used_bytes_excluding(key)? + data.len();
            if projected > limit {
                debug!(%key, projected, limit, "file store quota exceeded");
                return Err(AppError::quota_exceeded(limit));
            }
        }

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &data)?;
        fs::rename(&tmp, &path)?;
        debug!(%key, bytes = data.len(), "record written");
        Ok(())
    }

    fn remove(&mut self, key: &StorageKey) -> AppResult<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> AppResult<Vec<StorageKey>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match stem.parse::<StorageKey>() {
                Ok(key) => keys.push(key),
                Err(e) => debug!(file = %path.display(), error = %e, "skipping unrecognised file"),
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_and_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileRecordStore::open(dir.path(), None).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        store.set(&StorageKey::Exercise(date), json!({"exercises": []})).unwrap();
        store.set(&StorageKey::UserInfo, json!({"name": "Kai"})).unwrap();
        fs::write(dir.path().join("notes.json"), b"{}").unwrap();

        assert!(dir.path().join("exercise_2025-01-15.json").exists());
        assert_eq!(
            store.keys().unwrap(),
            vec![StorageKey::UserInfo, StorageKey::Exercise(date)]
        );
        assert_eq!(
            store.get(&StorageKey::UserInfo).unwrap(),
            Some(json!({"name": "Kai"}))
        );
        assert!(store.remove(&StorageKey::UserInfo).unwrap());
        assert!(store.get(&StorageKey::UserInfo).unwrap().is_none());
    }

    #[test]
    fn test_quota_rejects_write() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileRecordStore::open(dir.path(), Some(8)).unwrap();
        let err = store
            .set(&StorageKey::UserInfo, json!({"name": "a long enough name"}))
            .unwrap_err();
        assert!(err.code.is_storage_failure());
        assert!(store.get(&StorageKey::UserInfo).unwrap().is_none());
    }
}
