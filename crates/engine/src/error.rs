// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loan rule violations

use shelf_core::{BookId, MemberId};
use thiserror::Error;

/// Reasons an issue or return request is refused
///
/// These are ordinary outcomes, not faults: the engine is unchanged and
/// remains usable after any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    #[error("Book not found (ID: {0})")]
    BookNotFound(BookId),
    #[error("Member not found (ID: {0})")]
    MemberNotFound(MemberId),
    #[error("No copies available for: {title}")]
    NoCopiesAvailable { book_id: BookId, title: String },
    #[error("No active transaction found for Book ID {book_id} and Member ID {member_id}")]
    NoActiveLoan { book_id: BookId, member_id: MemberId },
}
