// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Touch and left-button mouse events become pointer messages; arrow keys and
//! Escape map to viewer commands.

use super::Message;
use crate::domain::gesture::{PointerId, TouchPhase};
use iced::keyboard::{self, key};
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Tick period while animations or timers are pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Touch fingers are offset by one so they never collide with the mouse id.
fn finger_pointer(finger: touch::Finger) -> PointerId {
    PointerId(finger.0.saturating_add(1))
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        event::Event::Touch(touch_event) => {
            let (finger, phase, position) = match touch_event {
                touch::Event::FingerPressed { id, position } => (id, TouchPhase::Start, position),
                touch::Event::FingerMoved { id, position } => (id, TouchPhase::Move, position),
                touch::Event::FingerLifted { id, position } => (id, TouchPhase::End, position),
                touch::Event::FingerLost { id, position } => (id, TouchPhase::Cancel, position),
            };
            Some(Message::Touch {
                pointer: finger_pointer(finger),
                phase,
                position,
            })
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        // buttons capture their own presses
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => Some(Message::MouseButton(true)),
            event::Status::Captured => None,
        },
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::MouseButton(false))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::Previous),
            keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::Next),
            keyboard::Key::Named(key::Named::Escape) => Some(Message::Close),
            keyboard::Key::Named(key::Named::Enter) => Some(Message::Reopen),
            _ => None,
        },
        _ => None,
    })
}

/// Periodic tick driving timers and slide animations, active only while needed.
pub fn create_tick_subscription(has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
