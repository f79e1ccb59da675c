// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shelf daemon support: configuration, lifecycle and the autosave timer

pub mod autosave;
pub mod config;
pub mod lifecycle;

pub use autosave::AutosaveTimer;
pub use config::Config;
pub use lifecycle::{startup, DaemonState, LifecycleError};
