// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Preset;
use crate::domain::gesture::{PointerId, TouchPhase};
use iced::{window, Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Touch contact translated from an Iced touch event.
    Touch {
        pointer: PointerId,
        phase: TouchPhase,
        position: Point,
    },
    CursorMoved(Point),
    /// Left mouse button pressed (`true`) or released.
    MouseButton(bool),
    Tick(Instant),
    Next,
    Previous,
    Select(usize),
    Close,
    Reopen,
    ResetZoom,
    DismissPanels,
    Resized(Size),
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Number of demo slides.
    pub items: Option<usize>,
    /// Behavior preset overriding the one from `settings.toml`.
    pub preset: Option<Preset>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SWIPE_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
