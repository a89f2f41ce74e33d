// SPDX-License-Identifier: MPL-2.0
//! Deterministic, tick-driven timers with cancellation handles.
//!
//! Deferred work (tap confirmation, like acknowledgment, autoplay) is
//! scheduled here instead of on a background runtime. The owner advances
//! time with [`Timers::drain_due`] from its periodic tick. Every schedule
//! returns a [`TimerHandle`]; owners keep the handle they expect and drop
//! fired timers whose handle no longer matches.

use std::time::Duration;

/// Opaque identifier of a scheduled timer. Never reused within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Entry<K> {
    handle: TimerHandle,
    deadline: Duration,
    kind: K,
}

/// Queue of pending timers keyed by deadline.
#[derive(Debug, Clone)]
pub struct Timers<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K: Clone> Timers<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire once `now >= deadline`.
    pub fn schedule(&mut self, kind: K, deadline: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            deadline,
            kind,
        });
        handle
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Cancels the timer stored in `slot`, if any, and clears the slot.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) -> bool {
        slot.take().is_some_and(|handle| self.cancel(handle))
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Removes and returns all timers due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<(TimerHandle, K)> {
        let mut due: Vec<Entry<K>> = Vec::new();
        self.entries.retain(|entry| {
            if entry.deadline <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.deadline, entry.handle));
        due.into_iter()
            .map(|entry| (entry.handle, entry.kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn handles_are_unique() {
        let mut timers = Timers::new();
        let a = timers.schedule("a", ms(10));
        let b = timers.schedule("b", ms(10));
        assert_ne!(a, b);
        assert_eq!(timers.len(), 2);
    }

    #[test]
    fn drain_returns_only_due_timers_in_order() {
        let mut timers = Timers::new();
        timers.schedule("late", ms(30));
        timers.schedule("early", ms(10));
        timers.schedule("future", ms(100));

        let fired: Vec<_> = timers.drain_due(ms(30)).into_iter().map(|(_, k)| k).collect();

        assert_eq!(fired, vec!["early", "late"]);
        assert_eq!(timers.next_deadline(), Some(ms(100)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        let handle = timers.schedule("ack", ms(10));
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.drain_due(ms(1_000)).is_empty());
    }

    #[test]
    fn cancel_slot_clears_the_slot() {
        let mut timers = Timers::new();
        let mut slot = Some(timers.schedule(1u8, ms(5)));
        assert!(timers.cancel_slot(&mut slot));
        assert!(slot.is_none());
        assert!(!timers.cancel_slot(&mut slot));
    }

    #[test]
    fn cancel_all_empties_queue() {
        let mut timers = Timers::new();
        timers.schedule(1u8, ms(5));
        timers.schedule(2u8, ms(6));
        timers.cancel_all();
        assert!(timers.is_empty());
        assert_eq!(timers.next_deadline(), None);
    }
}
