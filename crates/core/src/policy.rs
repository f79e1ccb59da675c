// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed loan policy: loan period and late fines
//!
//! The policy is deliberately not configurable.

use chrono::{Days, NaiveDate};

/// Days between issue and due date
pub const LOAN_PERIOD_DAYS: u64 = 14;

/// Fine charged per whole day a book is returned after its due date
pub const FINE_PER_LATE_DAY: f64 = 5.0;

/// Due date for a loan issued on `issue_date`
pub fn due_date_for(issue_date: NaiveDate) -> NaiveDate {
    issue_date
        .checked_add_days(Days::new(LOAN_PERIOD_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Whole days between the due date and the return date, zero when on time
/// or early
pub fn late_days(due_date: NaiveDate, return_date: NaiveDate) -> u32 {
    let days = return_date.signed_duration_since(due_date).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Fine owed for the given number of late days
pub fn fine_for(late_days: u32) -> f64 {
    if late_days > 0 {
        f64::from(late_days) * FINE_PER_LATE_DAY
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
