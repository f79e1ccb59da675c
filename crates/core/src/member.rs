// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Member record

use crate::id::MemberId;
use serde::{Deserialize, Serialize};

/// Email recorded for members added without one
pub const EMAIL_PLACEHOLDER: &str = "not-provided@example.com";

/// A library member who can borrow books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
}

impl Member {
    /// Create a member with a placeholder email
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: EMAIL_PLACEHOLDER.to_string(),
        }
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {} | Name: {} | Email: {}", self.id, self.name, self.email)
    }
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod tests;
