// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup and shutdown.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use fs2::FileExt;
use shelf_engine::Library;
use shelf_storage::StorageError;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

/// Daemon state during operation
pub struct DaemonState {
    /// Configuration
    pub config: Config,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
    /// The library engine (shared with anything the daemon hands it to)
    pub library: Arc<Library>,
    /// When daemon started
    pub start_time: Instant,
}

impl DaemonState {
    /// Flush state and release the data directory
    pub fn shutdown(&mut self) -> Result<(), LifecycleError> {
        info!("Shutting down daemon...");

        // 1. Stop the engine and write every artifact
        if !self.library.shutdown() {
            warn!("Final save was incomplete, see earlier errors");
        }

        // 2. Remove PID file (lock itself is released when lock_file drops)
        if self.config.lock_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.config.lock_path) {
                warn!("Failed to remove PID file: {}", e);
            }
        }

        info!(
            "Daemon shutdown complete after {}s",
            self.start_time.elapsed().as_secs()
        );
        Ok(())
    }
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Invalid config at {0}: {1}")]
    Config(PathBuf, toml::de::Error),

    #[error("Invalid autosave interval: {0:?} (expected whole seconds, at least 1)")]
    InvalidInterval(String),

    #[error("Failed to acquire lock: daemon already running?")]
    LockFailed(#[source] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the daemon
pub fn startup(config: &Config) -> Result<DaemonState, LifecycleError> {
    // 1. Create data directory (needed for the lock file)
    std::fs::create_dir_all(&config.data_dir)?;

    // 2. Acquire lock file FIRST - one daemon per data directory
    // Open without truncating so a refused second daemon leaves the pid intact
    let mut lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&config.lock_path)?;
    lock_file
        .try_lock_exclusive()
        .map_err(LifecycleError::LockFailed)?;
    lock_file.set_len(0)?;
    writeln!(lock_file, "{}", std::process::id())?;

    // 3. Load the library
    let library = Library::open_dir(&config.data_dir)?;

    // 4. Optional sample data for a fresh directory
    if config.seed_sample_data && library.seed_sample_data() {
        info!("Seeded sample books and members");
    }

    info!("Daemon started for data directory: {}", config.data_dir.display());

    Ok(DaemonState {
        config: config.clone(),
        lock_file,
        library: Arc::new(library),
        start_time: Instant::now(),
    })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
