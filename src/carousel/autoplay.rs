// SPDX-License-Identifier: MPL-2.0
//! Optional automatic advance on a fixed interval.
//!
//! The autoplay owns at most one scheduled timer. Any user gesture cancels it;
//! it is re-armed once the carousel settles.

use crate::timer::{TimerHandle, Timers};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoplay {
    interval: Option<Duration>,
    handle: Option<TimerHandle>,
}

impl Autoplay {
    #[must_use]
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            handle: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.interval.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Schedules the next advance `interval` after `now`, replacing any
    /// previously armed timer. Does nothing when autoplay is disabled.
    pub fn arm<K: Clone>(&mut self, timers: &mut Timers<K>, kind: K, now: Duration) {
        timers.cancel_slot(&mut self.handle);
        if let Some(interval) = self.interval {
            self.handle = Some(timers.schedule(kind, now + interval));
        }
    }

    pub fn cancel<K: Clone>(&mut self, timers: &mut Timers<K>) {
        timers.cancel_slot(&mut self.handle);
    }

    /// Consumes a fired timer. Returns `true` when it was this autoplay's.
    pub fn fired(&mut self, handle: TimerHandle) -> bool {
        if self.handle == Some(handle) {
            self.handle = None;
            true
        } else {
            false
        }
    }
}
