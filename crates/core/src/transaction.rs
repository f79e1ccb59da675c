// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loan transaction record
//!
//! A transaction is created when a book is issued and is marked returned
//! exactly once. It is never deleted.

use crate::id::{BookId, MemberId, TransactionId};
use crate::policy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single loan of one book copy to one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub returned: bool,
}

impl Transaction {
    /// Open a loan issued on `issue_date`, due after the loan period
    pub fn issue(
        id: TransactionId,
        book_id: BookId,
        member_id: MemberId,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            book_id,
            member_id,
            issue_date,
            due_date: policy::due_date_for(issue_date),
            return_date: None,
            returned: false,
        }
    }

    /// Whether the loan is still outstanding
    pub fn is_active(&self) -> bool {
        !self.returned
    }

    /// Whether this is an outstanding loan of `book_id` to `member_id`
    pub fn is_active_loan_of(&self, book_id: BookId, member_id: MemberId) -> bool {
        self.is_active() && self.book_id == book_id && self.member_id == member_id
    }

    /// Close the loan
    pub fn mark_returned(&mut self, return_date: NaiveDate) {
        self.return_date = Some(return_date);
        self.returned = true;
    }

    /// Whole days past the due date at return time (zero while active)
    pub fn late_days(&self) -> u32 {
        match self.return_date {
            Some(returned) => policy::late_days(self.due_date, returned),
            None => 0,
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TransactionID:{} | BookID:{} | MemberID:{} | Issued:{} | Due:{} | Returned: ",
            self.id, self.book_id, self.member_id, self.issue_date, self.due_date
        )?;
        match (self.returned, self.return_date) {
            (true, Some(date)) => write!(f, "{}", date),
            (true, None) => write!(f, "Yes"),
            (false, _) => write!(f, "No"),
        }
    }
}

#[cfg(test)]
#[path = "transaction_tests.rs"]
mod tests;
