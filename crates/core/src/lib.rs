// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shelf-core: entity model for the shelf library-loan engine
//!
//! This crate provides:
//! - Plain records for books, members and loan transactions
//! - Typed identifiers
//! - The fixed loan policy (loan period, late fines)
//! - A clock abstraction so dates are testable

pub mod clock;
pub mod id;
pub mod policy;

pub mod book;
pub mod member;
pub mod transaction;

// Re-exports
pub use book::Book;
pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{BookId, MemberId, TransactionId};
pub use member::Member;
pub use transaction::Transaction;
