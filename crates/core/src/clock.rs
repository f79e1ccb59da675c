// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable date handling
//!
//! Loans are tracked in whole calendar days, so the clock hands out dates
//! rather than instants.

use chrono::{Days, Local, NaiveDate};
use std::sync::{Arc, Mutex};

/// A clock that provides the current calendar date
pub trait Clock: Clone + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Real system clock, using the local calendar date
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fake clock for testing with a controllable date
#[derive(Debug, Clone)]
pub struct FakeClock {
    current: Arc<Mutex<NaiveDate>>,
}

impl FakeClock {
    /// Create a fake clock fixed at the given date
    pub fn at(date: NaiveDate) -> Self {
        Self {
            current: Arc::new(Mutex::new(date)),
        }
    }

    /// Create a fake clock starting at today's real date
    pub fn new() -> Self {
        Self::at(SystemClock.today())
    }

    /// Advance the clock by the given number of days
    pub fn advance_days(&self, days: u64) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = current.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    }

    /// Set the clock to a specific date
    pub fn set(&self, date: NaiveDate) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = date;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn today(&self) -> NaiveDate {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
