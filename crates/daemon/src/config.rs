// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration
//!
//! The data directory comes from the command line, `SHELF_DATA_DIR`, or the
//! platform data directory, in that order. Settings live in an optional
//! `shelf.toml` inside it; `SHELF_AUTOSAVE_SECS` overrides the interval.

use crate::lifecycle::LifecycleError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "SHELF_DATA_DIR";

/// Environment variable overriding the autosave interval, in seconds
pub const AUTOSAVE_ENV: &str = "SHELF_AUTOSAVE_SECS";

/// Settings file name inside the data directory
pub const CONFIG_FILE: &str = "shelf.toml";

/// Autosave interval when none is configured
pub const DEFAULT_AUTOSAVE_SECS: u64 = 30;

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the library artifacts
    pub data_dir: PathBuf,
    /// Path to lock/PID file
    pub lock_path: PathBuf,
    /// Path to daemon log file
    pub log_path: PathBuf,
    /// Time between autosaves
    pub autosave_interval: Duration,
    /// Add sample books and members to an empty library at startup
    pub seed_sample_data: bool,
}

/// Contents of `shelf.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    autosave_interval_secs: Option<u64>,
    seed_sample_data: bool,
}

impl Config {
    /// Resolve the full configuration, including environment overrides
    pub fn load(data_dir_arg: Option<PathBuf>) -> Result<Self, LifecycleError> {
        let data_dir = resolve_data_dir(data_dir_arg)?;
        let mut config = Self::for_data_dir(&data_dir)?;

        if let Ok(secs) = std::env::var(AUTOSAVE_ENV) {
            config.autosave_interval = parse_interval(&secs)?;
        }

        Ok(config)
    }

    /// Configuration for a data directory, reading its `shelf.toml` if any
    pub fn for_data_dir(data_dir: &Path) -> Result<Self, LifecycleError> {
        let path = data_dir.join(CONFIG_FILE);
        let file = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str::<ConfigFile>(&content)
                .map_err(|e| LifecycleError::Config(path.clone(), e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ConfigFile::default(),
            Err(e) => return Err(e.into()),
        };

        let secs = file.autosave_interval_secs.unwrap_or(DEFAULT_AUTOSAVE_SECS);
        if secs == 0 {
            return Err(LifecycleError::InvalidInterval(secs.to_string()));
        }

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            lock_path: data_dir.join("shelfd.pid"),
            log_path: data_dir.join("shelfd.log"),
            autosave_interval: Duration::from_secs(secs),
            seed_sample_data: file.seed_sample_data,
        })
    }
}

/// Parse an autosave interval in whole seconds (at least one)
pub fn parse_interval(value: &str) -> Result<Duration, LifecycleError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(LifecycleError::InvalidInterval(value.to_string())),
    }
}

fn resolve_data_dir(arg: Option<PathBuf>) -> Result<PathBuf, LifecycleError> {
    if let Some(dir) = arg {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_local_dir()
        .map(|dir| dir.join("shelf"))
        .ok_or(LifecycleError::NoDataDir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
