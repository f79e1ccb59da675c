// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Book record
//!
//! `copies` counts the copies currently on the shelf, not the number owned.
//! It moves down on issue and up on return and can never go below zero.

use crate::id::BookId;
use serde::{Deserialize, Serialize};

/// ISBN recorded for books added without one
pub const ISBN_PLACEHOLDER: &str = "N/A";

/// A book in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: u32,
}

impl Book {
    /// Create a book with one available copy and a placeholder ISBN
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            isbn: ISBN_PLACEHOLDER.to_string(),
            copies: 1,
        }
    }

    /// Whether at least one copy can be lent out
    pub fn is_available(&self) -> bool {
        self.copies > 0
    }

    /// Take one copy off the shelf
    ///
    /// Returns false and leaves `copies` untouched when none are left.
    pub fn borrow(&mut self) -> bool {
        if self.copies > 0 {
            self.copies -= 1;
            true
        } else {
            false
        }
    }

    /// Put one copy back on the shelf
    ///
    /// There is no owned total to check against, so this never refuses.
    pub fn give_back(&mut self) {
        self.copies = self.copies.saturating_add(1);
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID:{} | {} by {} | ISBN: {} | Available: {}",
            self.id, self.title, self.author, self.isbn, self.copies
        )
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod tests;
