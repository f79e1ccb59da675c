// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Durable snapshot storage for the shelf engine
//!
//! State is written wholesale: one JSON file per collection plus a small
//! meta file holding the id counters.

mod format;
mod store;

pub use format::{StorableBook, StorableMember, StorableTransaction, FORMAT_VERSION};
pub use store::{Artifact, LoadedState, Meta, Snapshot, StorageError, Store};
