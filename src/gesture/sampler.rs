// SPDX-License-Identifier: MPL-2.0
//! Captures raw pointer/touch notifications into the live gesture session.
//!
//! The sampler tracks at most two contacts. A third simultaneous contact is
//! remembered only so its release can be matched; it marks the session as
//! overflowed, which later classifies as no gesture.

use super::session::{GestureSession, SessionPhase};
use crate::domain::gesture::{ContactPoint, PointerEvent, PointerId, TouchPhase};
use std::time::Duration;

/// What a single notification did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    /// Nothing changed (stray, duplicate or out-of-order notification).
    Ignored,
    /// First contact landed; a new session is live.
    SessionStarted,
    /// The primary contact moved while it was the only one down.
    Dragged { dx: f32, dy: f32 },
    /// A second contact landed.
    PinchStarted {
        first: ContactPoint,
        second: ContactPoint,
    },
    /// One of the two contacts moved.
    PinchMoved {
        first: ContactPoint,
        second: ContactPoint,
    },
    /// One of two contacts lifted; the session continues with one.
    PinchEnded,
    /// The last contact lifted; the completed session is handed over.
    Released(GestureSession),
    /// The host cancelled the interaction; the session was discarded.
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct TouchSampler {
    phase: SessionPhase,
    session: Option<GestureSession>,
    /// Tracked contacts, primary first.
    contacts: Vec<(PointerId, ContactPoint)>,
    /// Contacts beyond the second, tracked only to match their release.
    extra: Vec<PointerId>,
    primary: Option<PointerId>,
}

impl TouchSampler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Records one notification.
    pub fn sample(&mut self, event: PointerEvent) -> SampleOutcome {
        log::trace!(
            "sample {:?} {:?} ({}, {}) @{:?}",
            event.pointer,
            event.phase,
            event.x,
            event.y,
            event.t
        );
        match event.phase {
            TouchPhase::Start => self.on_start(event),
            TouchPhase::Move => self.on_move(event),
            TouchPhase::End => self.on_end(event),
            TouchPhase::Cancel => self.on_cancel(),
        }
    }

    /// Drops any live session without producing an outcome.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.session = None;
        self.contacts.clear();
        self.extra.clear();
        self.primary = None;
    }

    fn is_stale(&self, event: &PointerEvent) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| event.t < session.last_time)
    }

    fn contact_index(&self, pointer: PointerId) -> Option<usize> {
        self.contacts.iter().position(|(id, _)| *id == pointer)
    }

    fn pinch_pair(&self) -> Option<(ContactPoint, ContactPoint)> {
        match self.contacts.as_slice() {
            [(_, first), (_, second)] => Some((*first, *second)),
            _ => None,
        }
    }

    fn on_start(&mut self, event: PointerEvent) -> SampleOutcome {
        let point = event.contact();
        match self.phase {
            SessionPhase::Idle => {
                self.session = Some(GestureSession::begin(point));
                self.contacts.push((event.pointer, point));
                self.primary = Some(event.pointer);
                self.phase = SessionPhase::Tracking1;
                SampleOutcome::SessionStarted
            }
            _ if self.is_stale(&event) || self.contact_index(event.pointer).is_some() => {
                SampleOutcome::Ignored
            }
            SessionPhase::Tracking1 => {
                let Some(session) = self.session.as_mut() else {
                    return SampleOutcome::Ignored;
                };
                session.add_contact();
                session.touch(event.t);
                if !point.is_finite() {
                    session.malformed = true;
                }
                self.contacts.push((event.pointer, point));
                if let Some((first, second)) = self.pinch_pair() {
                    if let Some(session) = self.session.as_mut() {
                        session.pinch_start_distance = Some(first.distance_to(&second));
                    }
                    self.phase = SessionPhase::Tracking2;
                    SampleOutcome::PinchStarted { first, second }
                } else {
                    SampleOutcome::Ignored
                }
            }
            SessionPhase::Tracking2 => {
                if let Some(session) = self.session.as_mut() {
                    session.add_contact();
                    session.touch(event.t);
                }
                self.extra.push(event.pointer);
                SampleOutcome::Ignored
            }
        }
    }

    fn on_move(&mut self, event: PointerEvent) -> SampleOutcome {
        if self.session.is_none() || self.is_stale(&event) {
            return SampleOutcome::Ignored;
        }
        let Some(index) = self.contact_index(event.pointer) else {
            return SampleOutcome::Ignored;
        };
        let point = event.contact();
        if !point.is_finite() {
            if let Some(session) = self.session.as_mut() {
                session.malformed = true;
            }
            return SampleOutcome::Ignored;
        }
        self.contacts[index].1 = point;

        let is_primary = self.primary == Some(event.pointer);
        let Some(session) = self.session.as_mut() else {
            return SampleOutcome::Ignored;
        };
        match self.phase {
            SessionPhase::Tracking2 => {
                session.touch(event.t);
                match self.pinch_pair() {
                    Some((first, second)) => SampleOutcome::PinchMoved { first, second },
                    None => SampleOutcome::Ignored,
                }
            }
            SessionPhase::Tracking1 if is_primary && !session.was_pinch() => {
                session.move_primary(point);
                let (dx, dy) = session.displacement();
                SampleOutcome::Dragged { dx, dy }
            }
            _ => {
                session.touch(event.t);
                SampleOutcome::Ignored
            }
        }
    }

    fn on_end(&mut self, event: PointerEvent) -> SampleOutcome {
        if self.session.is_none() {
            return SampleOutcome::Ignored;
        }
        if let Some(pos) = self.extra.iter().position(|id| *id == event.pointer) {
            self.extra.remove(pos);
            if self.contacts.is_empty() && self.extra.is_empty() {
                return self.release(event.t);
            }
            if let Some(session) = self.session.as_mut() {
                session.remove_contact();
                session.touch(event.t);
            }
            return SampleOutcome::Ignored;
        }
        let Some(index) = self.contact_index(event.pointer) else {
            return SampleOutcome::Ignored;
        };
        let point = event.contact();
        let is_primary = self.primary == Some(event.pointer);
        self.contacts.remove(index);

        match self.phase {
            SessionPhase::Tracking2 => {
                if let Some(session) = self.session.as_mut() {
                    session.remove_contact();
                    session.touch(event.t);
                }
                self.phase = SessionPhase::Tracking1;
                SampleOutcome::PinchEnded
            }
            _ if !self.extra.is_empty() => {
                // overflow contacts are still down
                if let Some(session) = self.session.as_mut() {
                    session.remove_contact();
                    session.touch(event.t);
                }
                SampleOutcome::Ignored
            }
            _ => {
                if let Some(session) = self.session.as_mut() {
                    if is_primary && !session.was_pinch() && event.t >= session.last_time {
                        if point.is_finite() {
                            session.current_point = point;
                        } else {
                            session.malformed = true;
                        }
                    }
                }
                self.release(event.t)
            }
        }
    }

    /// Hands over the session once its final contact lifted.
    fn release(&mut self, t: Duration) -> SampleOutcome {
        let Some(mut session) = self.session.take() else {
            return SampleOutcome::Ignored;
        };
        session.remove_contact();
        session.touch(t);
        self.reset();
        SampleOutcome::Released(session)
    }

    fn on_cancel(&mut self) -> SampleOutcome {
        if self.session.is_none() {
            return SampleOutcome::Ignored;
        }
        self.reset();
        SampleOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(pointer: u64, phase: TouchPhase, x: f32, y: f32, ms: u64) -> PointerEvent {
        PointerEvent::new(PointerId(pointer), phase, x, y, Duration::from_millis(ms))
    }

    #[test]
    fn stray_move_and_end_are_dropped() {
        let mut sampler = TouchSampler::new();
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::Move, 0.0, 0.0, 0)),
            SampleOutcome::Ignored
        );
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::End, 0.0, 0.0, 5)),
            SampleOutcome::Ignored
        );
        assert_eq!(sampler.phase(), SessionPhase::Idle);
    }

    #[test]
    fn single_contact_lifecycle() {
        let mut sampler = TouchSampler::new();
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::Start, 100.0, 100.0, 0)),
            SampleOutcome::SessionStarted
        );
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::Move, 70.0, 104.0, 40)),
            SampleOutcome::Dragged { dx: -30.0, dy: 4.0 }
        );
        match sampler.sample(ev(1, TouchPhase::End, 20.0, 105.0, 90)) {
            SampleOutcome::Released(session) => {
                assert_eq!(session.displacement(), (-80.0, 5.0));
                assert_eq!(session.duration(), Duration::from_millis(90));
                assert!(!session.was_pinch());
            }
            other => panic!("expected release, got {other:?}"),
        }
        assert!(!sampler.is_active());
    }

    #[test]
    fn out_of_order_sample_is_ignored() {
        let mut sampler = TouchSampler::new();
        sampler.sample(ev(1, TouchPhase::Start, 0.0, 0.0, 100));
        sampler.sample(ev(1, TouchPhase::Move, 10.0, 0.0, 150));
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::Move, 90.0, 0.0, 120)),
            SampleOutcome::Ignored
        );
        assert_eq!(
            sampler.session().map(GestureSession::displacement),
            Some((10.0, 0.0))
        );
    }

    #[test]
    fn second_contact_starts_pinch() {
        let mut sampler = TouchSampler::new();
        sampler.sample(ev(1, TouchPhase::Start, 0.0, 0.0, 0));
        let outcome = sampler.sample(ev(2, TouchPhase::Start, 30.0, 40.0, 10));
        assert!(matches!(outcome, SampleOutcome::PinchStarted { .. }));
        assert_eq!(sampler.phase(), SessionPhase::Tracking2);
        assert_eq!(
            sampler.session().and_then(|s| s.pinch_start_distance),
            Some(50.0)
        );
    }

    #[test]
    fn lifting_one_of_two_returns_to_single_tracking() {
        let mut sampler = TouchSampler::new();
        sampler.sample(ev(1, TouchPhase::Start, 0.0, 0.0, 0));
        sampler.sample(ev(2, TouchPhase::Start, 30.0, 40.0, 10));
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::End, 0.0, 0.0, 50)),
            SampleOutcome::PinchEnded
        );
        assert_eq!(sampler.phase(), SessionPhase::Tracking1);
        // remaining finger never drags
        assert_eq!(
            sampler.sample(ev(2, TouchPhase::Move, 200.0, 40.0, 60)),
            SampleOutcome::Ignored
        );
        match sampler.sample(ev(2, TouchPhase::End, 200.0, 40.0, 70)) {
            SampleOutcome::Released(session) => assert!(session.was_pinch()),
            other => panic!("expected release, got {other:?}"),
        }
    }

    #[test]
    fn third_contact_overflows_session() {
        let mut sampler = TouchSampler::new();
        sampler.sample(ev(1, TouchPhase::Start, 0.0, 0.0, 0));
        sampler.sample(ev(2, TouchPhase::Start, 10.0, 0.0, 5));
        assert_eq!(
            sampler.sample(ev(3, TouchPhase::Start, 20.0, 0.0, 6)),
            SampleOutcome::Ignored
        );
        sampler.sample(ev(3, TouchPhase::End, 20.0, 0.0, 7));
        sampler.sample(ev(2, TouchPhase::End, 10.0, 0.0, 8));
        match sampler.sample(ev(1, TouchPhase::End, 0.0, 0.0, 9)) {
            SampleOutcome::Released(session) => assert!(session.overflowed()),
            other => panic!("expected release, got {other:?}"),
        }
    }

    #[test]
    fn overflow_contact_lifting_last_releases_session() {
        let mut sampler = TouchSampler::new();
        sampler.sample(ev(1, TouchPhase::Start, 0.0, 0.0, 0));
        sampler.sample(ev(2, TouchPhase::Start, 10.0, 0.0, 5));
        sampler.sample(ev(3, TouchPhase::Start, 20.0, 0.0, 6));
        assert_eq!(
            sampler.sample(ev(2, TouchPhase::End, 10.0, 0.0, 8)),
            SampleOutcome::PinchEnded
        );
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::End, 0.0, 0.0, 9)),
            SampleOutcome::Ignored
        );
        assert!(sampler.is_active());
        match sampler.sample(ev(3, TouchPhase::End, 20.0, 0.0, 12)) {
            SampleOutcome::Released(session) => {
                assert!(session.overflowed());
                assert_eq!(session.last_time, Duration::from_millis(12));
            }
            other => panic!("expected release, got {other:?}"),
        }
        assert!(!sampler.is_active());
    }

    #[test]
    fn cancel_discards_session() {
        let mut sampler = TouchSampler::new();
        sampler.sample(ev(1, TouchPhase::Start, 0.0, 0.0, 0));
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::Cancel, 0.0, 0.0, 5)),
            SampleOutcome::Cancelled
        );
        assert!(!sampler.is_active());
        assert_eq!(
            sampler.sample(ev(1, TouchPhase::Cancel, 0.0, 0.0, 6)),
            SampleOutcome::Ignored
        );
    }

    #[test]
    fn nan_start_produces_malformed_session() {
        let mut sampler = TouchSampler::new();
        sampler.sample(ev(1, TouchPhase::Start, f32::NAN, 0.0, 0));
        match sampler.sample(ev(1, TouchPhase::End, 0.0, 0.0, 50)) {
            SampleOutcome::Released(session) => assert!(session.malformed),
            other => panic!("expected release, got {other:?}"),
        }
    }
}
