// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shelf loan engine
//!
//! Owns the authoritative library state, applies issue/return rules and
//! writes every change through to the snapshot store.

mod error;
mod library;
mod outcome;
mod state;

pub use error::LoanError;
pub use library::{Library, SAMPLE_BOOKS, SAMPLE_MEMBERS};
pub use outcome::{Issued, Returned};
pub use state::LibraryState;
