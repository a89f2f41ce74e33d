// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer orchestration.
//!
//! Routes pointer samples through the sampler, classifier and pinch
//! controller, maps classified gestures to viewer actions and drives the
//! carousel slider:
//!
//! - swipe down closes, swipe up opens details (both regardless of zoom)
//! - swipe left/right pages, unless zoomed
//! - tap is deferred until the double-tap window passes
//! - double-tap shows the transient like acknowledgment
//! - long-press opens the action menu, unless zoomed
//!
//! All deferred work runs on [`Timers`] advanced by [`Message::Tick`]. After
//! [`ViewerOrchestrator::teardown`] every input is ignored.

use crate::carousel::slider;
use crate::carousel::{Autoplay, SlideDirection};
use crate::config::ViewerConfig;
use crate::domain::gesture::{GestureEvent, PointerEvent, SwipeDirection};
use crate::gesture::{
    GestureClassifier, GestureSession, PinchZoomController, SampleOutcome, TouchSampler,
};
use crate::timer::{TimerHandle, Timers};
use crate::viewer::acknowledgment::LikeAcknowledgment;
use crate::viewer::callbacks::Effect;
use std::time::Duration;

/// Snapshot of what the host renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    pub current_index: usize,
    pub scale: f32,
    pub swipe_offset: f32,
    pub is_transitioning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Pointer(PointerEvent),
    Tick(Duration),
    Next { now: Duration },
    Previous { now: Duration },
    Select(usize),
    Close,
    ShowDetails,
    ResetZoom,
    SetViewport { width: f32 },
    SetItemCount(usize),
}

/// Deferred work owned by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    PendingTap,
    LikeAck,
    Autoplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTap {
    handle: TimerHandle,
    deadline: Duration,
}

#[derive(Debug, Clone)]
pub struct ViewerOrchestrator {
    config: ViewerConfig,
    sampler: TouchSampler,
    classifier: GestureClassifier,
    pinch: PinchZoomController,
    slider: slider::State,
    timers: Timers<TimerKind>,
    pending_tap: Option<PendingTap>,
    acknowledgment: LikeAcknowledgment,
    autoplay: Autoplay,
    torn_down: bool,
}

impl ViewerOrchestrator {
    #[must_use]
    pub fn new(item_count: usize, config: ViewerConfig) -> Self {
        log::info!(
            "viewer created with {} items (pinch: {}, autoplay: {:?})",
            item_count,
            config.pinch_enabled,
            config.carousel.autoplay_interval
        );
        Self {
            config,
            sampler: TouchSampler::new(),
            classifier: GestureClassifier::new(config.gesture),
            pinch: PinchZoomController::new(config.scale_range),
            slider: slider::State::new(item_count, &config.carousel),
            timers: Timers::new(),
            pending_tap: None,
            acknowledgment: LikeAcknowledgment::new(),
            autoplay: Autoplay::new(config.carousel.autoplay_interval),
            torn_down: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ViewerState {
        ViewerState {
            current_index: self.slider.current_index(),
            scale: self.pinch.scale(),
            swipe_offset: self.slider.offset(),
            is_transitioning: self.slider.is_transitioning(),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.slider.navigator().item_count()
    }

    #[must_use]
    pub fn like_acknowledged(&self) -> bool {
        self.acknowledgment.is_visible()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the host should keep delivering ticks.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.torn_down
            && (!self.timers.is_empty() || self.slider.is_animating() || self.autoplay.is_enabled())
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Cancels every timer and stops reacting to input.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.timers.cancel_all();
        self.pending_tap = None;
        self.acknowledgment.cancel(&mut self.timers);
        self.autoplay.cancel(&mut self.timers);
        self.sampler.reset();
        self.torn_down = true;
        log::info!("viewer torn down");
    }

    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        if self.torn_down {
            log::debug!("ignoring {:?} after teardown", msg);
            return Vec::new();
        }
        let mut effects = Vec::new();
        match msg {
            Message::Pointer(event) => self.on_pointer(event, &mut effects),
            Message::Tick(now) => self.on_tick(now, &mut effects),
            Message::Next { now } => self.step(SlideDirection::Forward, now, &mut effects),
            Message::Previous { now } => self.step(SlideDirection::Backward, now, &mut effects),
            Message::Select(index) => {
                self.apply_slider(slider::Message::FinishNow, &mut effects);
                self.apply_slider(slider::Message::Jump(index), &mut effects);
            }
            Message::Close => effects.push(Effect::Close),
            Message::ShowDetails => effects.push(Effect::ShowDetails),
            Message::ResetZoom => self.reset_zoom(&mut effects),
            Message::SetViewport { width } => {
                self.apply_slider(slider::Message::Resize { item_width: width }, &mut effects);
            }
            Message::SetItemCount(count) => {
                self.apply_slider(slider::Message::SetItemCount(count), &mut effects);
            }
        }
        effects
    }

    fn on_pointer(&mut self, event: PointerEvent, effects: &mut Vec<Effect>) {
        match self.sampler.sample(event) {
            SampleOutcome::Ignored => {}
            SampleOutcome::SessionStarted => self.begin_session(event.t, effects),
            SampleOutcome::Dragged { dx, .. } => {
                if self.pinch.paging_enabled() {
                    let offset = self.classifier.drag_offset(dx);
                    self.apply_slider(slider::Message::Drag { offset }, effects);
                }
            }
            SampleOutcome::PinchStarted { first, second } => {
                self.apply_slider(slider::Message::AbortDrag, effects);
                if self.config.pinch_enabled {
                    self.pinch.begin(first, second);
                }
            }
            SampleOutcome::PinchMoved { first, second } => {
                if let Some(scale) = self.pinch.update(first, second) {
                    effects.push(Effect::ScaleChanged(scale));
                }
            }
            SampleOutcome::PinchEnded => {
                self.pinch.end();
            }
            SampleOutcome::Released(session) => self.complete_session(&session, effects),
            SampleOutcome::Cancelled => {
                log::debug!("session cancelled");
                self.pinch.end();
                self.classifier.clear_tap_memory();
                self.flush_overdue_tap(event.t, effects);
                self.apply_slider(
                    slider::Message::Release {
                        swipe: None,
                        now: event.t,
                    },
                    effects,
                );
                self.autoplay
                    .arm(&mut self.timers, TimerKind::Autoplay, event.t);
            }
        }
    }

    fn begin_session(&mut self, now: Duration, effects: &mut Vec<Effect>) {
        if let Some(pending) = self.pending_tap {
            if !self.classifier.within_double_tap_window(now) {
                self.timers.cancel(pending.handle);
                self.pending_tap = None;
                log::debug!("flushing overdue tap (deadline {:?})", pending.deadline);
                effects.push(Effect::Tap);
            }
        }
        self.apply_slider(slider::Message::FinishNow, effects);
        self.autoplay.cancel(&mut self.timers);
        if self.acknowledgment.cancel(&mut self.timers) {
            effects.push(Effect::LikeAcknowledged(false));
        }
    }

    fn complete_session(&mut self, session: &GestureSession, effects: &mut Vec<Effect>) {
        let now = session.last_time;
        if self.pinch.is_active() {
            self.pinch.end();
        }
        let gesture = self.classifier.classify(session, self.pinch.scale());
        if gesture != GestureEvent::DoubleTap {
            self.flush_overdue_tap(now, effects);
        }
        let mut swipe = None;

        match gesture {
            GestureEvent::Tap => self.defer_tap(now, effects),
            GestureEvent::DoubleTap => {
                if let Some(pending) = self.pending_tap.take() {
                    self.timers.cancel(pending.handle);
                }
                effects.push(Effect::DoubleTap);
                self.acknowledgment.show(
                    &mut self.timers,
                    TimerKind::LikeAck,
                    now,
                    self.config.like_ack,
                );
                effects.push(Effect::LikeAcknowledged(true));
            }
            GestureEvent::LongPress => {
                if self.pinch.is_zoomed() {
                    log::debug!("long-press suppressed while zoomed");
                } else {
                    effects.push(Effect::LongPress);
                }
            }
            GestureEvent::Swipe { direction, .. } => match direction {
                SwipeDirection::Down => {
                    effects.push(Effect::SwipeCommitted(direction));
                    effects.push(Effect::Close);
                }
                SwipeDirection::Up => {
                    effects.push(Effect::SwipeCommitted(direction));
                    effects.push(Effect::ShowDetails);
                }
                SwipeDirection::Left | SwipeDirection::Right => {
                    if self.pinch.paging_enabled() {
                        swipe = Some(direction);
                    } else {
                        log::debug!("paging suppressed at scale {}", self.pinch.scale());
                    }
                }
            },
            GestureEvent::Pinch { .. } | GestureEvent::None => {}
        }

        let before = effects.len();
        self.apply_slider(slider::Message::Release { swipe, now }, effects);
        if let Some(direction) = swipe {
            let committed = effects[before..].iter().any(|effect| {
                matches!(effect, Effect::TransitionStarted(_) | Effect::IndexChanged(_))
            });
            if committed {
                effects.insert(before, Effect::SwipeCommitted(direction));
            }
        }
        self.autoplay.arm(&mut self.timers, TimerKind::Autoplay, now);
    }

    /// Whether the live session started early enough to pair with the pending tap.
    fn second_tap_in_progress(&self) -> bool {
        self.sampler
            .session()
            .is_some_and(|session| self.classifier.within_double_tap_window(session.start_time))
    }

    /// Emits a pending tap whose deadline passed while a session was live.
    fn flush_overdue_tap(&mut self, now: Duration, effects: &mut Vec<Effect>) {
        if let Some(pending) = self.pending_tap {
            if pending.deadline <= now {
                self.timers.cancel(pending.handle);
                self.pending_tap = None;
                effects.push(Effect::Tap);
            }
        }
    }

    fn defer_tap(&mut self, released_at: Duration, effects: &mut Vec<Effect>) {
        if let Some(previous) = self.pending_tap.take() {
            self.timers.cancel(previous.handle);
            effects.push(Effect::Tap);
        }
        let deadline = released_at + self.config.gesture.double_tap_window;
        let handle = self.timers.schedule(TimerKind::PendingTap, deadline);
        self.pending_tap = Some(PendingTap { handle, deadline });
    }

    fn on_tick(&mut self, now: Duration, effects: &mut Vec<Effect>) {
        for (handle, kind) in self.timers.drain_due(now) {
            let handled = match kind {
                TimerKind::PendingTap => {
                    let live = self.pending_tap.is_some_and(|pending| pending.handle == handle);
                    if live && self.second_tap_in_progress() {
                        log::debug!("holding due tap until the live contact lifts");
                    } else if live {
                        self.pending_tap = None;
                        effects.push(Effect::Tap);
                    }
                    live
                }
                TimerKind::LikeAck => {
                    let hidden = self.acknowledgment.expire(handle);
                    if hidden {
                        effects.push(Effect::LikeAcknowledged(false));
                    }
                    hidden
                }
                TimerKind::Autoplay => {
                    let live = self.autoplay.fired(handle);
                    if live {
                        self.autoplay_advance(now, effects);
                    }
                    live
                }
            };
            if !handled {
                log::warn!("dropped stale {:?} timer", kind);
            }
        }

        if self.autoplay.is_enabled()
            && self.autoplay.handle().is_none()
            && !self.sampler.is_active()
        {
            self.autoplay.arm(&mut self.timers, TimerKind::Autoplay, now);
        }
        self.apply_slider(slider::Message::Tick(now), effects);
    }

    fn autoplay_advance(&mut self, now: Duration, effects: &mut Vec<Effect>) {
        if !self.sampler.is_active() && self.pinch.paging_enabled() {
            self.apply_slider(slider::Message::FinishNow, effects);
            self.apply_slider(slider::Message::Advance { now }, effects);
        }
        self.autoplay.arm(&mut self.timers, TimerKind::Autoplay, now);
    }

    fn step(&mut self, direction: SlideDirection, now: Duration, effects: &mut Vec<Effect>) {
        if !self.pinch.paging_enabled() {
            log::debug!("{:?} step suppressed while zoomed", direction);
            return;
        }
        self.apply_slider(slider::Message::FinishNow, effects);
        self.apply_slider(slider::Message::Step { direction, now }, effects);
        if !self.sampler.is_active() {
            self.autoplay.arm(&mut self.timers, TimerKind::Autoplay, now);
        }
    }

    fn reset_zoom(&mut self, effects: &mut Vec<Effect>) {
        if self.pinch.reset() {
            effects.push(Effect::ScaleChanged(self.pinch.scale()));
        }
    }

    fn apply_slider(&mut self, msg: slider::Message, effects: &mut Vec<Effect>) {
        match self.slider.handle(msg) {
            slider::Effect::None => {}
            slider::Effect::OffsetChanged(offset) => effects.push(Effect::SwipeOffset(offset)),
            slider::Effect::TransitionStarted(transition) => {
                effects.push(Effect::TransitionStarted(transition));
            }
            slider::Effect::IndexChanged(index) => {
                log::debug!("index changed to {}", index);
                effects.push(Effect::IndexChanged(index));
                self.reset_zoom(effects);
            }
        }
    }
}
