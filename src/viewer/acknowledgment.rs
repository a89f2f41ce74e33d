// SPDX-License-Identifier: MPL-2.0
//! Transient "liked" acknowledgment shown after a double-tap.

use crate::timer::{TimerHandle, Timers};
use std::time::Duration;

/// Visibility of the acknowledgment and the timer that will hide it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeAcknowledgment {
    visible: bool,
    handle: Option<TimerHandle>,
}

impl LikeAcknowledgment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the acknowledgment until `now + duration`, restarting the
    /// expiry if it was already visible.
    pub fn show<K: Clone>(
        &mut self,
        timers: &mut Timers<K>,
        kind: K,
        now: Duration,
        duration: Duration,
    ) {
        timers.cancel_slot(&mut self.handle);
        self.visible = true;
        self.handle = Some(timers.schedule(kind, now + duration));
    }

    /// Consumes a fired timer. Returns `true` when it hid the acknowledgment.
    pub fn expire(&mut self, handle: TimerHandle) -> bool {
        if self.handle != Some(handle) {
            return false;
        }
        self.handle = None;
        std::mem::replace(&mut self.visible, false)
    }

    /// Hides immediately. Returns `true` if it was visible.
    pub fn cancel<K: Clone>(&mut self, timers: &mut Timers<K>) -> bool {
        timers.cancel_slot(&mut self.handle);
        std::mem::replace(&mut self.visible, false)
    }
}
