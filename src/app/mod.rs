// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a full-screen viewer over coloured slides.
//!
//! The `App` owns one [`ViewerOrchestrator`], feeds it pointer, keyboard and
//! tick messages, and reacts to its effects through [`ViewerCallbacks`]. Panel
//! and menu visibility live here; the orchestrator only signals intent.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Preset, ViewerConfig};
use crate::domain::gesture::{PointerEvent, PointerId, SwipeDirection, TouchPhase};
use crate::viewer::{
    self, Effect, InMemoryInteractions, InteractionService, ViewerCallbacks, ViewerOrchestrator,
};
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 240;

/// Number of slides shown when `--items` is not given.
pub const DEFAULT_ITEM_COUNT: usize = 6;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn open_viewer(count: usize, config: ViewerConfig, width: f32) -> ViewerOrchestrator {
    let mut viewer = ViewerOrchestrator::new(count, config);
    viewer.handle(viewer::Message::SetViewport { width });
    viewer
}

/// Root Iced application state.
pub struct App {
    config: ViewerConfig,
    preset: Preset,
    viewer: ViewerOrchestrator,
    items: Vec<String>,
    interactions: InMemoryInteractions,
    /// Origin of the monotonic timestamps handed to the viewer.
    epoch: Instant,
    viewport_width: f32,
    cursor: Point,
    mouse_down: bool,
    /// Header and pagination, toggled by a single tap.
    chrome_visible: bool,
    details_open: bool,
    action_menu_open: bool,
    like_visible: bool,
    closed: bool,
    /// Last user-facing status line (errors from the interaction service, config warnings).
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("preset", &self.preset)
            .field("items", &self.items.len())
            .field("state", &self.viewer.state())
            .field("closed", &self.closed)
            .finish()
    }
}

impl App {
    /// Loads `settings.toml`, applies the preset override and opens the viewer.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (file_config, warning) = config::load();
        let preset = flags
            .preset
            .or(file_config.viewer.preset)
            .unwrap_or_default();
        let viewer_config = file_config.resolve(Some(preset));
        let count = flags.items.unwrap_or(DEFAULT_ITEM_COUNT);

        let mut app = Self::with_config(viewer_config, preset, count);
        if let Some(key) = warning {
            log::warn!("{}: falling back to default settings", key);
            app.status = Some("Settings could not be read, using defaults".to_string());
        }
        (app, Task::none())
    }

    fn with_config(config: ViewerConfig, preset: Preset, count: usize) -> Self {
        let items: Vec<String> = (0..count).map(|index| format!("slide-{}", index + 1)).collect();
        let viewport_width = WINDOW_DEFAULT_WIDTH as f32;
        Self {
            config,
            preset,
            viewer: open_viewer(items.len(), config, viewport_width),
            interactions: InMemoryInteractions::new(items.iter().cloned()),
            items,
            epoch: Instant::now(),
            viewport_width,
            cursor: Point::ORIGIN,
            mouse_down: false,
            chrome_visible: true,
            details_open: false,
            action_menu_open: false,
            like_visible: false,
            closed: false,
            status: None,
        }
    }

    fn title(&self) -> String {
        if self.closed || self.items.is_empty() {
            return "SwipeLens".to_string();
        }
        let state = self.viewer.state();
        format!(
            "{} ({}/{}) - SwipeLens",
            self.items[state.current_index],
            state.current_index + 1,
            self.items.len()
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.viewer.has_pending_work());
        Subscription::batch([event_sub, tick_sub])
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn current_item(&self) -> Option<&str> {
        self.items
            .get(self.viewer.state().current_index)
            .map(String::as_str)
    }

    fn send(&mut self, msg: viewer::Message) {
        let effects = self.viewer.handle(msg);
        Effect::dispatch_all(effects, self);
    }

    fn pointer(&mut self, pointer: PointerId, phase: TouchPhase, position: Point) {
        let event = PointerEvent::new(pointer, phase, position.x, position.y, self.now());
        self.send(viewer::Message::Pointer(event));
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Touch {
                pointer,
                phase,
                position,
            } => self.pointer(pointer, phase, position),
            Message::CursorMoved(position) => {
                self.cursor = position;
                if self.mouse_down {
                    self.pointer(PointerId::MOUSE, TouchPhase::Move, position);
                }
            }
            Message::MouseButton(pressed) => {
                if pressed && !self.mouse_down {
                    self.mouse_down = true;
                    self.pointer(PointerId::MOUSE, TouchPhase::Start, self.cursor);
                } else if !pressed && self.mouse_down {
                    self.mouse_down = false;
                    self.pointer(PointerId::MOUSE, TouchPhase::End, self.cursor);
                }
            }
            Message::Tick(instant) => {
                let now = instant.saturating_duration_since(self.epoch);
                self.send(viewer::Message::Tick(now));
            }
            Message::Next => {
                let now = self.now();
                self.send(viewer::Message::Next { now });
            }
            Message::Previous => {
                let now = self.now();
                self.send(viewer::Message::Previous { now });
            }
            Message::Select(index) => self.send(viewer::Message::Select(index)),
            Message::Close => {
                if self.details_open || self.action_menu_open {
                    self.dismiss_panels();
                } else {
                    self.send(viewer::Message::Close);
                }
            }
            Message::Reopen => self.reopen(),
            Message::ResetZoom => {
                self.action_menu_open = false;
                self.send(viewer::Message::ResetZoom);
            }
            Message::DismissPanels => self.dismiss_panels(),
            Message::Resized(size) => {
                self.viewport_width = size.width;
                self.send(viewer::Message::SetViewport { width: size.width });
            }
            Message::WindowCloseRequested(id) => {
                self.viewer.teardown();
                return window::close(id);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            preset: self.preset,
            state: self.viewer.state(),
            items: &self.items,
            liked: self
                .current_item()
                .is_some_and(|id| self.interactions.is_liked(id)),
            chrome_visible: self.chrome_visible,
            details_open: self.details_open,
            action_menu_open: self.action_menu_open,
            like_visible: self.like_visible,
            closed: self.closed,
            status: self.status.as_deref(),
        })
    }

    fn dismiss_panels(&mut self) {
        self.details_open = false;
        self.action_menu_open = false;
    }

    fn reopen(&mut self) {
        if !self.closed {
            return;
        }
        log::info!("reopening viewer");
        self.viewer = open_viewer(self.items.len(), self.config, self.viewport_width);
        self.closed = false;
        self.like_visible = false;
        self.dismiss_panels();
    }
}

impl ViewerCallbacks for App {
    fn on_index_changed(&mut self, index: usize) {
        log::debug!("showing item {}", index);
        self.dismiss_panels();
    }

    fn on_swipe_committed(&mut self, direction: SwipeDirection) {
        log::debug!("swipe committed: {:?}", direction);
    }

    fn on_tap(&mut self) {
        self.chrome_visible = !self.chrome_visible;
    }

    fn on_double_tap(&mut self) {
        let Some(item) = self.current_item().map(str::to_owned) else {
            return;
        };
        match self.interactions.toggle_like(&item) {
            Ok(liked) => {
                let label = if liked { "Liked" } else { "Like removed" };
                self.status = Some(label.to_string());
            }
            Err(err) => {
                log::warn!("toggle like failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn on_long_press(&mut self) {
        self.details_open = false;
        self.action_menu_open = true;
    }

    fn on_scale_changed(&mut self, scale: f32) {
        log::debug!("scale {:.2}", scale);
    }

    fn on_close(&mut self) {
        self.viewer.teardown();
        self.closed = true;
        self.mouse_down = false;
        self.like_visible = false;
        self.dismiss_panels();
    }

    fn on_show_details(&mut self) {
        self.action_menu_open = false;
        self.details_open = true;
    }

    fn on_like_acknowledged(&mut self, visible: bool) {
        self.like_visible = visible;
    }
}
