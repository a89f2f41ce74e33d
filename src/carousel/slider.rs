// SPDX-License-Identifier: MPL-2.0
//! Slider sub-component: live drag offset, slide animation and index commit.
//!
//! The displayed offset follows the damped drag while a session is live. On
//! release a committing swipe slides to a full item width and then snaps the
//! index; anything else settles back to zero on the same item.

use super::navigator::{CarouselNavigator, SlideDirection, Transition};
use super::transition::{rubber_band, SlideAnimation};
use crate::config::CarouselConfig;
use crate::config::defaults::DEFAULT_ITEM_WIDTH_PX;
use crate::domain::gesture::SwipeDirection;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    animation: SlideAnimation,
    /// `None` while settling back to rest.
    transition: Option<Transition>,
}

#[derive(Debug, Clone)]
pub struct State {
    navigator: CarouselNavigator,
    offset: f32,
    item_width: f32,
    transition_duration: Duration,
    edge_resistance: f32,
    motion: Option<Motion>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Live damped drag offset from an in-progress session.
    Drag { offset: f32 },
    /// Drop the live offset without animating (pinch took over).
    AbortDrag,
    /// Session released; `swipe` carries the committed swipe, if any.
    Release {
        swipe: Option<SwipeDirection>,
        now: Duration,
    },
    /// Programmatic one-item step (buttons, keyboard).
    Step {
        direction: SlideDirection,
        now: Duration,
    },
    /// Autoplay advance, wrapping at the end.
    Advance { now: Duration },
    /// Direct selection, applied without animation.
    Jump(usize),
    /// Complete any running animation immediately.
    FinishNow,
    Tick(Duration),
    Resize { item_width: f32 },
    SetItemCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    OffsetChanged(f32),
    TransitionStarted(Transition),
    IndexChanged(usize),
}

impl Default for State {
    fn default() -> Self {
        Self::new(0, &CarouselConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(item_count: usize, config: &CarouselConfig) -> Self {
        Self {
            navigator: CarouselNavigator::new(item_count),
            offset: 0.0,
            item_width: DEFAULT_ITEM_WIDTH_PX,
            transition_duration: config.transition,
            edge_resistance: config.edge_resistance,
            motion: None,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Drag { offset } => self.drag(offset),
            Message::AbortDrag => {
                self.motion = None;
                self.set_offset(0.0)
            }
            Message::Release { swipe, now } => {
                let planned = swipe.and_then(|direction| self.navigator.plan_swipe(direction));
                match planned {
                    Some(transition) => self.start_transition(transition, now),
                    None => self.settle(now),
                }
            }
            Message::Step { direction, now } => {
                let finished = self.finish_now();
                let planned = match direction {
                    SlideDirection::Forward => self.navigator.plan_next(),
                    SlideDirection::Backward => self.navigator.plan_previous(),
                };
                planned.map_or(finished, |transition| self.start_transition(transition, now))
            }
            Message::Advance { now } => {
                let finished = self.finish_now();
                self.navigator
                    .plan_autoplay()
                    .map_or(finished, |transition| self.start_transition(transition, now))
            }
            Message::Jump(index) => {
                self.finish_now();
                match self.navigator.plan_select(index) {
                    Some(transition) => {
                        self.offset = 0.0;
                        Effect::IndexChanged(self.navigator.commit(transition))
                    }
                    None => Effect::None,
                }
            }
            Message::FinishNow => self.finish_now(),
            Message::Tick(now) => self.tick(now),
            Message::Resize { item_width } => {
                if item_width.is_finite() && item_width >= 1.0 {
                    self.item_width = item_width;
                }
                Effect::None
            }
            Message::SetItemCount(count) => {
                self.motion = None;
                self.offset = 0.0;
                match self.navigator.set_item_count(count) {
                    Some(index) => Effect::IndexChanged(index),
                    None => Effect::None,
                }
            }
        }
    }

    #[must_use]
    pub fn navigator(&self) -> &CarouselNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Whether a committed slide is animating towards a new index.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.motion.is_some_and(|motion| motion.transition.is_some())
    }

    /// Whether any animation (slide or settle) is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    fn drag(&mut self, offset: f32) -> Effect {
        if !offset.is_finite() {
            return Effect::None;
        }
        let pushing_past_start = offset > 0.0 && !self.navigator.has_previous();
        let pushing_past_end = offset < 0.0 && !self.navigator.has_next();
        let resisted = if pushing_past_start || pushing_past_end {
            rubber_band(offset, self.edge_resistance)
        } else {
            offset
        };
        self.set_offset(resisted.clamp(-self.item_width, self.item_width))
    }

    fn set_offset(&mut self, offset: f32) -> Effect {
        if (self.offset - offset).abs() <= f32::EPSILON {
            return Effect::None;
        }
        self.offset = offset;
        Effect::OffsetChanged(offset)
    }

    fn start_transition(&mut self, transition: Transition, now: Duration) -> Effect {
        let target = match transition.direction {
            SlideDirection::Forward => -self.item_width,
            SlideDirection::Backward => self.item_width,
        };
        log::debug!(
            "slide {} -> {} ({:?})",
            transition.from,
            transition.to,
            transition.direction
        );
        self.motion = Some(Motion {
            animation: SlideAnimation::new(self.offset, target, now, self.transition_duration),
            transition: Some(transition),
        });
        if self.transition_duration.is_zero() {
            return self.finish_now();
        }
        Effect::TransitionStarted(transition)
    }

    fn settle(&mut self, now: Duration) -> Effect {
        if self.offset == 0.0 {
            self.motion = None;
            return Effect::None;
        }
        self.motion = Some(Motion {
            animation: SlideAnimation::new(self.offset, 0.0, now, self.transition_duration),
            transition: None,
        });
        if self.transition_duration.is_zero() {
            return self.finish_now();
        }
        Effect::None
    }

    fn tick(&mut self, now: Duration) -> Effect {
        let Some(motion) = self.motion else {
            return Effect::None;
        };
        if motion.animation.is_finished(now) {
            return self.finish_now();
        }
        self.set_offset(motion.animation.offset_at(now))
    }

    fn finish_now(&mut self) -> Effect {
        let Some(motion) = self.motion.take() else {
            return Effect::None;
        };
        match motion.transition {
            Some(transition) => {
                self.offset = 0.0;
                Effect::IndexChanged(self.navigator.commit(transition))
            }
            None => self.set_offset(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn slider(count: usize) -> State {
        State::new(count, &CarouselConfig::default())
    }

    #[test]
    fn committed_swipe_slides_then_snaps_index() {
        let mut state = slider(5);
        state.handle(Message::Drag { offset: -80.0 });
        let started = state.handle(Message::Release {
            swipe: Some(SwipeDirection::Left),
            now: ms(0),
        });
        assert!(matches!(started, Effect::TransitionStarted(t) if t.to == 1));
        assert!(state.is_transitioning());
        assert_eq!(state.current_index(), 0);

        let mid = state.handle(Message::Tick(ms(150)));
        assert!(matches!(mid, Effect::OffsetChanged(offset) if offset < -80.0));

        assert_eq!(state.handle(Message::Tick(ms(300))), Effect::IndexChanged(1));
        assert_eq!(state.current_index(), 1);
        assert_abs_diff_eq!(state.offset(), 0.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn uncommitted_release_settles_back() {
        let mut state = slider(5);
        state.handle(Message::Drag { offset: -30.0 });
        assert_eq!(
            state.handle(Message::Release {
                swipe: None,
                now: ms(0)
            }),
            Effect::None
        );
        assert!(state.is_animating());
        assert!(!state.is_transitioning());
        assert_eq!(state.handle(Message::Tick(ms(400))), Effect::OffsetChanged(0.0));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn boundary_swipe_emits_no_transition() {
        let mut state = slider(5);
        state.handle(Message::Jump(4));
        let effect = state.handle(Message::Release {
            swipe: Some(SwipeDirection::Left),
            now: ms(0),
        });
        assert!(!matches!(effect, Effect::TransitionStarted(_)));
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn drag_past_edge_is_resisted() {
        let mut state = slider(3);
        state.handle(Message::Drag { offset: 100.0 });
        assert_abs_diff_eq!(state.offset(), 35.0, epsilon = 1e-4);
        state.handle(Message::Drag { offset: -100.0 });
        assert_abs_diff_eq!(state.offset(), -100.0);
    }

    #[test]
    fn drag_is_clamped_to_item_width() {
        let mut state = slider(3);
        state.handle(Message::Resize { item_width: 200.0 });
        state.handle(Message::Drag { offset: -900.0 });
        assert_abs_diff_eq!(state.offset(), -200.0);
    }

    #[test]
    fn finish_now_snaps_running_transition() {
        let mut state = slider(3);
        state.handle(Message::Step {
            direction: SlideDirection::Forward,
            now: ms(0),
        });
        assert_eq!(state.handle(Message::FinishNow), Effect::IndexChanged(1));
        assert_eq!(state.handle(Message::FinishNow), Effect::None);
    }

    #[test]
    fn step_during_transition_completes_previous_first() {
        let mut state = slider(4);
        state.handle(Message::Step {
            direction: SlideDirection::Forward,
            now: ms(0),
        });
        let effect = state.handle(Message::Step {
            direction: SlideDirection::Forward,
            now: ms(100),
        });
        assert!(matches!(effect, Effect::TransitionStarted(t) if t.from == 1 && t.to == 2));
    }

    #[test]
    fn advance_wraps_around() {
        let mut state = slider(2);
        state.handle(Message::Jump(1));
        state.handle(Message::Advance { now: ms(0) });
        assert_eq!(state.handle(Message::Tick(ms(300))), Effect::IndexChanged(0));
    }

    #[test]
    fn jump_is_immediate_and_bounded() {
        let mut state = slider(3);
        assert_eq!(state.handle(Message::Jump(2)), Effect::IndexChanged(2));
        assert_eq!(state.handle(Message::Jump(3)), Effect::None);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn zero_duration_commits_immediately() {
        let config = CarouselConfig {
            transition: Duration::ZERO,
            ..CarouselConfig::default()
        };
        let mut state = State::new(3, &config);
        assert_eq!(
            state.handle(Message::Release {
                swipe: Some(SwipeDirection::Left),
                now: ms(0)
            }),
            Effect::IndexChanged(1)
        );
    }

    #[test]
    fn shrinking_item_count_reports_new_index() {
        let mut state = slider(5);
        state.handle(Message::Jump(4));
        assert_eq!(state.handle(Message::SetItemCount(2)), Effect::IndexChanged(1));
    }
}
