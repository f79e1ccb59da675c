// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Successful issue and return results

use chrono::NaiveDate;
use shelf_core::{BookId, MemberId, TransactionId};

/// A book was lent out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issued {
    pub transaction_id: TransactionId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl std::fmt::Display for Issued {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Issued book. Transaction ID: {}. Due on: {}",
            self.transaction_id, self.due_date
        )
    }
}

/// A book came back
#[derive(Debug, Clone, PartialEq)]
pub struct Returned {
    pub transaction_id: TransactionId,
    pub return_date: NaiveDate,
    pub late_days: u32,
    pub fine: f64,
}

impl std::fmt::Display for Returned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book returned. Late days: {}. Fine: {:.2}",
            self.late_days, self.fine
        )
    }
}
