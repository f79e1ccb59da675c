// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk record format
//!
//! Every artifact is a JSON object carrying `format_version`. Collections
//! wrap their records in `records`; the meta artifact stores the three
//! counters inline. Unknown fields are ignored and optional fields fall back
//! to defaults, so older and newer writers stay readable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shelf_core::book::ISBN_PLACEHOLDER;
use shelf_core::id::FIRST_ID;
use shelf_core::member::EMAIL_PLACEHOLDER;
use shelf_core::{policy, Book, BookId, Member, MemberId, Transaction, TransactionId};

/// Current version of the artifact format
pub const FORMAT_VERSION: u32 = 1;

/// Envelope around a persisted collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CollectionFile<T> {
    #[serde(default)]
    pub format_version: u32,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

impl<T> CollectionFile<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            records,
        }
    }
}

/// Persisted id counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MetaFile {
    #[serde(default)]
    pub format_version: u32,
    #[serde(default = "first_id")]
    pub next_book_id: u32,
    #[serde(default = "first_id")]
    pub next_member_id: u32,
    #[serde(default = "first_id")]
    pub next_transaction_id: u32,
}

fn first_id() -> u32 {
    FIRST_ID
}

fn isbn_placeholder() -> String {
    ISBN_PLACEHOLDER.to_string()
}

fn email_placeholder() -> String {
    EMAIL_PLACEHOLDER.to_string()
}

/// Serializable book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorableBook {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "isbn_placeholder")]
    pub isbn: String,
    #[serde(default)]
    pub copies: u32,
}

impl From<&Book> for StorableBook {
    fn from(b: &Book) -> Self {
        Self {
            id: b.id.0,
            title: b.title.clone(),
            author: b.author.clone(),
            isbn: b.isbn.clone(),
            copies: b.copies,
        }
    }
}

impl From<StorableBook> for Book {
    fn from(sb: StorableBook) -> Self {
        Self {
            id: BookId(sb.id),
            title: sb.title,
            author: sb.author,
            isbn: sb.isbn,
            copies: sb.copies,
        }
    }
}

/// Serializable member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorableMember {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default = "email_placeholder")]
    pub email: String,
}

impl From<&Member> for StorableMember {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id.0,
            name: m.name.clone(),
            email: m.email.clone(),
        }
    }
}

impl From<StorableMember> for Member {
    fn from(sm: StorableMember) -> Self {
        Self {
            id: MemberId(sm.id),
            name: sm.name,
            email: sm.email,
        }
    }
}

/// Serializable transaction
///
/// `due_date` may be absent in hand-written or older files; it is then
/// derived from `issue_date` with the loan period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorableTransaction {
    pub id: u32,
    pub book_id: u32,
    pub member_id: u32,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub returned: bool,
}

impl From<&Transaction> for StorableTransaction {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.0,
            book_id: t.book_id.0,
            member_id: t.member_id.0,
            issue_date: t.issue_date,
            due_date: Some(t.due_date),
            return_date: t.return_date,
            returned: t.returned,
        }
    }
}

impl From<StorableTransaction> for Transaction {
    fn from(st: StorableTransaction) -> Self {
        Self {
            id: TransactionId(st.id),
            book_id: BookId(st.book_id),
            member_id: MemberId(st.member_id),
            issue_date: st.issue_date,
            due_date: st
                .due_date
                .unwrap_or_else(|| policy::due_date_for(st.issue_date)),
            return_date: st.return_date,
            returned: st.returned,
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
