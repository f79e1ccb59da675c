// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic autosave trigger
//!
//! The engine does not schedule anything itself; the daemon's event loop
//! ticks this timer and calls into the engine.

use std::time::Duration;

use shelf_core::Clock;
use shelf_engine::Library;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, warn};

/// Timer firing once per autosave interval, first after one full period
pub struct AutosaveTimer {
    interval: Interval,
}

impl AutosaveTimer {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        // A slow save should push the next one back, not trigger a burst
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// Wait for the next autosave slot
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Save the library unless it has been shut down
///
/// Returns whether a complete save happened.
pub fn run_once<C: Clock>(library: &Library<C>) -> bool {
    if !library.is_running() {
        debug!("library stopped, skipping autosave");
        return false;
    }
    let saved = library.auto_save();
    if saved {
        debug!("autosave complete");
    } else {
        warn!("autosave incomplete, will retry next interval");
    }
    saved
}

#[cfg(test)]
#[path = "autosave_tests.rs"]
mod tests;
