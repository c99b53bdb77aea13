// ABOUTME: Typed record-store keys for profile, diet, and exercise records
// ABOUTME: Formats and parses user_info, diet_YYYY-MM-DD, and exercise_YYYY-MM-DD
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::storage_keys::{DIET_PREFIX, EXERCISE_PREFIX, USER_INFO};
use crate::dates::{format_date, parse_date};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key namespace of the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StorageKey {
    /// The single user profile
    UserInfo,
    /// Diet record for a date
    Diet(NaiveDate),
    /// Exercise record for a date
    Exercise(NaiveDate),
}

impl StorageKey {
    /// Date the key refers to, if any
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::UserInfo => None,
            Self::Diet(date) | Self::Exercise(date) => Some(*date),
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserInfo => f.write_str(USER_INFO),
            Self::Diet(date) => write!(f, "{DIET_PREFIX}{}", format_date(*date)),
            Self::Exercise(date) => write!(f, "{EXERCISE_PREFIX}{}", format_date(*date)),
        }
    }
}

impl FromStr for StorageKey {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        if s == USER_INFO {
            return Ok(Self::UserInfo);
        }
        if let Some(rest) = s.strip_prefix(DIET_PREFIX) {
            return Ok(Self::Diet(parse_date(rest)?));
        }
        if let Some(rest) = s.strip_prefix(EXERCISE_PREFIX) {
            return Ok(Self::Exercise(parse_date(rest)?));
        }
        Err(AppError::invalid_format(format!("unknown storage key '{s}'")))
    }
}

impl TryFrom<String> for StorageKey {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        value.parse()
    }
}

impl From<StorageKey> for String {
    fn from(key: StorageKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format_matches_persisted_layout() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 9).unwrap();
        assert_eq!(StorageKey::Diet(date).to_string(), "diet_2025-04-09");
        assert_eq!(StorageKey::Exercise(date).to_string(), "exercise_2025-04-09");
        assert_eq!(StorageKey::UserInfo.to_string(), "user_info");
    }

    #[test]
    fn test_key_parse() {
        let key: StorageKey = "exercise_2025-04-09".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2025, 4, 9));
        assert!("userBMR".parse::<StorageKey>().is_err());
        assert!("diet_2025-02-30".parse::<StorageKey>().is_err());
    }
}
