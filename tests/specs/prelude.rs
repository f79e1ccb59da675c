//! Shared helpers for behavioral specs

use chrono::NaiveDate;
use shelf_core::FakeClock;
use shelf_engine::Library;
use shelf_storage::Store;
use std::path::PathBuf;
use tempfile::TempDir;

/// A library on a throwaway data directory with a controllable clock
pub struct Project {
    pub dir: TempDir,
    pub clock: FakeClock,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            clock: FakeClock::at(date(2026, 10, 1)),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Open (or reopen) the library, as a process restart would
    pub fn open(&self) -> Library<FakeClock> {
        Library::open(Store::open(self.data_dir()).unwrap(), self.clock.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
