// SPDX-License-Identifier: MPL-2.0
//! Output boundary of the viewer.
//!
//! The orchestrator never calls out directly. It returns [`Effect`]s that the
//! host either matches on (the Iced front-end does) or routes to a
//! [`ViewerCallbacks`] implementation with [`Effect::dispatch`].

use crate::carousel::Transition;
use crate::domain::gesture::SwipeDirection;

/// Notifications for surrounding UI components. Every method defaults to a no-op.
pub trait ViewerCallbacks {
    fn on_index_changed(&mut self, _index: usize) {}
    fn on_swipe_committed(&mut self, _direction: SwipeDirection) {}
    fn on_tap(&mut self) {}
    fn on_double_tap(&mut self) {}
    fn on_long_press(&mut self) {}
    fn on_scale_changed(&mut self, _scale: f32) {}
    fn on_close(&mut self) {}
    fn on_show_details(&mut self) {}
    /// Live drag or animation offset in logical pixels.
    fn on_swipe_offset(&mut self, _offset: f32) {}
    /// The transient "liked" acknowledgment became visible (`true`) or expired.
    fn on_like_acknowledged(&mut self, _visible: bool) {}
}

/// Effects produced by the viewer orchestrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    IndexChanged(usize),
    SwipeCommitted(SwipeDirection),
    Tap,
    DoubleTap,
    LongPress,
    ScaleChanged(f32),
    Close,
    ShowDetails,
    SwipeOffset(f32),
    LikeAcknowledged(bool),
    /// A slide towards a new index started; no callback counterpart.
    TransitionStarted(Transition),
}

impl Effect {
    /// Routes this effect to the matching callback.
    pub fn dispatch<C: ViewerCallbacks + ?Sized>(self, callbacks: &mut C) {
        match self {
            Effect::IndexChanged(index) => callbacks.on_index_changed(index),
            Effect::SwipeCommitted(direction) => callbacks.on_swipe_committed(direction),
            Effect::Tap => callbacks.on_tap(),
            Effect::DoubleTap => callbacks.on_double_tap(),
            Effect::LongPress => callbacks.on_long_press(),
            Effect::ScaleChanged(scale) => callbacks.on_scale_changed(scale),
            Effect::Close => callbacks.on_close(),
            Effect::ShowDetails => callbacks.on_show_details(),
            Effect::SwipeOffset(offset) => callbacks.on_swipe_offset(offset),
            Effect::LikeAcknowledged(visible) => callbacks.on_like_acknowledged(visible),
            Effect::TransitionStarted(_) => {}
        }
    }

    /// Dispatches a batch in order.
    pub fn dispatch_all<C, I>(effects: I, callbacks: &mut C)
    where
        C: ViewerCallbacks + ?Sized,
        I: IntoIterator<Item = Effect>,
    {
        for effect in effects {
            effect.dispatch(callbacks);
        }
    }
}
