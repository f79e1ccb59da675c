// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory library state and the loan rules applied to it
//!
//! `LibraryState` is plain data plus pure transitions. Locking, dates and
//! persistence are the caller's concern (see `Library`).

use crate::error::LoanError;
use crate::outcome::{Issued, Returned};
use chrono::NaiveDate;
use shelf_core::id::take_next;
use shelf_core::{policy, Book, BookId, Member, MemberId, Transaction, TransactionId};
use shelf_storage::{LoadedState, Meta, Snapshot};
use std::collections::BTreeMap;
use tracing::warn;

/// Collections and id counters, owned as one aggregate
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    pub books: BTreeMap<BookId, Book>,
    pub members: BTreeMap<MemberId, Member>,
    pub transactions: BTreeMap<TransactionId, Transaction>,
    pub meta: Meta,
}

impl From<LoadedState> for LibraryState {
    fn from(loaded: LoadedState) -> Self {
        Self {
            books: loaded.books,
            members: loaded.members,
            transactions: loaded.transactions,
            meta: loaded.meta,
        }
    }
}

impl LibraryState {
    /// Borrowed view for a full save
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            books: &self.books,
            members: &self.members,
            transactions: &self.transactions,
            meta: self.meta,
        }
    }

    /// Catalogue a new book with one copy
    pub fn add_book(&mut self, title: &str, author: &str) -> Book {
        let id = BookId(take_next(&mut self.meta.next_book_id));
        let book = Book::new(id, title, author);
        self.books.insert(id, book.clone());
        book
    }

    /// Register a new member
    pub fn add_member(&mut self, name: &str) -> Member {
        let id = MemberId(take_next(&mut self.meta.next_member_id));
        let member = Member::new(id, name);
        self.members.insert(id, member.clone());
        member
    }

    /// Lend one copy of a book to a member
    ///
    /// A member may hold several active loans of the same book; only the
    /// number of available copies limits issuing.
    pub fn issue(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
        today: NaiveDate,
    ) -> Result<Issued, LoanError> {
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or(LoanError::BookNotFound(book_id))?;
        if !self.members.contains_key(&member_id) {
            return Err(LoanError::MemberNotFound(member_id));
        }
        if !book.borrow() {
            return Err(LoanError::NoCopiesAvailable {
                book_id,
                title: book.title.clone(),
            });
        }

        let id = TransactionId(take_next(&mut self.meta.next_transaction_id));
        let loan = Transaction::issue(id, book_id, member_id, today);
        let issued = Issued {
            transaction_id: id,
            book_id,
            member_id,
            issue_date: loan.issue_date,
            due_date: loan.due_date,
        };
        self.transactions.insert(id, loan);
        Ok(issued)
    }

    /// Close the member's outstanding loan of a book
    ///
    /// When several loans of the same book to the same member are active,
    /// the one with the lowest transaction id (the earliest issued) is
    /// closed first.
    pub fn return_loan(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
        today: NaiveDate,
    ) -> Result<Returned, LoanError> {
        let loan = self
            .transactions
            .values_mut()
            .find(|t| t.is_active_loan_of(book_id, member_id))
            .ok_or(LoanError::NoActiveLoan { book_id, member_id })?;
        loan.mark_returned(today);

        let late_days = policy::late_days(loan.due_date, today);
        let transaction_id = loan.id;

        match self.books.get_mut(&book_id) {
            Some(book) => book.give_back(),
            None => warn!(
                book_id = %book_id,
                transaction_id = %transaction_id,
                "returned loan refers to a missing book, copy count not restored"
            ),
        }

        Ok(Returned {
            transaction_id,
            return_date: today,
            late_days,
            fine: policy::fine_for(late_days),
        })
    }

    /// Whether no books and no members exist yet
    pub fn is_unpopulated(&self) -> bool {
        self.books.is_empty() && self.members.is_empty()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
