// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Data directory, storage backend, storage quota, food catalog path, deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Directory name used under the platform data directory
const DATA_DIR_NAME: &str = "fitbalance";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Installed for real use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
            Self::Testing => f.write_str("testing"),
        }
    }
}

/// Record store backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON document per key under the data directory
    #[default]
    File,
    /// Process-local map, lost on exit
    Memory,
}

impl StorageBackend {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Self::Memory,
            _ => Self::File,
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding persisted records
    pub data_dir: PathBuf,
    /// Record store backend
    pub storage_backend: StorageBackend,
    /// Byte quota for the record store; `None` means unlimited
    pub storage_quota_bytes: Option<usize>,
    /// Food catalog JSON file; the bundled catalog is used when unset
    pub food_db_path: Option<PathBuf>,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_backend: StorageBackend::default(),
            storage_quota_bytes: None,
            food_db_path: None,
            environment: Environment::default(),
        }
    }
}

/// Platform data directory for FitBalance, falling back to the working directory
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory available, using ./{DATA_DIR_NAME}");
            PathBuf::from(DATA_DIR_NAME)
        },
        |dir| dir.join(DATA_DIR_NAME),
    )
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_env() -> Result<Self> {
        let config = Self {
            data_dir: env::var("FITBALANCE_DATA_DIR")
                .map_or_else(|_| default_data_dir(), PathBuf::from),
            storage_backend: env::var("FITBALANCE_STORAGE")
                .map(|v| StorageBackend::from_str_or_default(&v))
                .unwrap_or_default(),
            storage_quota_bytes: env::var("FITBALANCE_STORAGE_QUOTA_BYTES")
                .ok()
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("Invalid FITBALANCE_STORAGE_QUOTA_BYTES value")?,
            food_db_path: env::var("FITBALANCE_FOOD_DB").ok().map(PathBuf::from),
            environment: env::var("ENVIRONMENT")
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
        };

        config.validate()?;
        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero quota or an empty data directory
    pub fn validate(&self) -> Result<()> {
        if self.storage_quota_bytes == Some(0) {
            return Err(anyhow::anyhow!(
                "FITBALANCE_STORAGE_QUOTA_BYTES must be greater than zero"
            ));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("FITBALANCE_DATA_DIR must not be empty"));
        }
        if let Some(path) = &self.food_db_path {
            if !path.exists() {
                warn!(path = %path.display(), "Food catalog file does not exist");
            }
        }
        Ok(())
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} storage={} data_dir={} quota={} food_db={}",
            self.environment,
            self.storage_backend,
            self.data_dir.display(),
            self.storage_quota_bytes
                .map_or_else(|| "unlimited".to_owned(), |q| format!("{q} bytes")),
            self.food_db_path
                .as_ref()
                .map_or_else(|| "bundled".to_owned(), |p| p.display().to_string()),
        )
    }
}
