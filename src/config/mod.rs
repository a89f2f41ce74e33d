// SPDX-License-Identifier: MPL-2.0
//! This module handles the gesture configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gesture]` - Tap, long-press, double-tap and swipe thresholds
//! - `[zoom]` - Pinch-zoom scale range
//! - `[carousel]` - Slide transition, autoplay and edge resistance
//! - `[viewer]` - Preset selection and acknowledgment timing
//!
//! Every field is optional. Missing values come from the selected
//! [`Preset`], which in turn falls back to the constants in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use swipe_lens::config::{self, Preset};
//!
//! let (mut config, _warning) = config::load();
//! config.viewer.preset = Some(Preset::Hero);
//! config::save(&config).expect("Failed to save config");
//!
//! let resolved = config.resolve(None);
//! assert!(resolved.carousel.autoplay_interval.is_some());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gesture::ScaleRange;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when an existing config file cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Presets
// =============================================================================

/// Named behavior profiles for the components that host gestures.
///
/// Each preset is a complete [`ViewerConfig`]; explicit values from the
/// config file are layered on top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Full-screen media viewer: pinch-zoom, no autoplay.
    #[default]
    Viewer,
    /// Hero carousel: autoplay, no pinch-zoom.
    Hero,
    /// Inline image carousel with pinch-zoom.
    Carousel,
    /// Mobile image controls: pinch-zoom and a longer swipe threshold.
    Controls,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Viewer,
        Preset::Hero,
        Preset::Carousel,
        Preset::Controls,
    ];

    /// Returns the configuration this preset stands for.
    #[must_use]
    pub fn viewer_config(self) -> ViewerConfig {
        let base = ViewerConfig::default();
        match self {
            Preset::Viewer => base,
            Preset::Hero => ViewerConfig {
                pinch_enabled: false,
                carousel: CarouselConfig {
                    autoplay_interval: Some(Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS)),
                    ..base.carousel
                },
                ..base
            },
            Preset::Carousel => ViewerConfig {
                carousel: CarouselConfig {
                    edge_resistance: 0.5,
                    ..base.carousel
                },
                ..base
            },
            Preset::Controls => ViewerConfig {
                gesture: GestureConfig {
                    min_swipe_distance_px: CONTROLS_MIN_SWIPE_DISTANCE_PX,
                    ..base.gesture
                },
                ..base
            },
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Preset::Viewer => "viewer",
            Preset::Hero => "hero",
            Preset::Carousel => "carousel",
            Preset::Controls => "controls",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown preset: {s}")))
    }
}

// =============================================================================
// Resolved Runtime Configuration
// =============================================================================

/// Thresholds used by the gesture classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Maximum per-axis displacement for taps and long-presses.
    pub tap_slop_px: f32,
    /// Displacement one axis must exceed for a swipe.
    pub min_swipe_distance_px: f32,
    /// A stationary contact held longer than this is a long-press.
    pub long_press: Duration,
    /// A tap must be released before this duration.
    pub tap_max: Duration,
    /// Maximum gap between a tap release and the next contact start.
    pub double_tap_window: Duration,
    /// Factor applied to the live drag offset.
    pub swipe_damping: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_slop_px: DEFAULT_TAP_SLOP_PX,
            min_swipe_distance_px: DEFAULT_MIN_SWIPE_DISTANCE_PX,
            long_press: Duration::from_millis(DEFAULT_LONG_PRESS_MS),
            tap_max: Duration::from_millis(DEFAULT_TAP_MAX_MS),
            double_tap_window: Duration::from_millis(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            swipe_damping: DEFAULT_SWIPE_DAMPING,
        }
    }
}

/// Carousel animation and autoplay settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub transition: Duration,
    /// `None` disables autoplay.
    pub autoplay_interval: Option<Duration>,
    pub edge_resistance: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            autoplay_interval: None,
            edge_resistance: DEFAULT_EDGE_RESISTANCE,
        }
    }
}

/// Everything a viewer needs, after presets and file values are merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub gesture: GestureConfig,
    pub scale_range: ScaleRange,
    pub pinch_enabled: bool,
    pub carousel: CarouselConfig,
    pub like_ack: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            scale_range: ScaleRange::new(DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE),
            pinch_enabled: true,
            carousel: CarouselConfig::default(),
            like_ack: Duration::from_millis(DEFAULT_LIKE_ACK_MS),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Gesture threshold settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_slop_px: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_swipe_distance_px: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_press_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_max_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_window_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_damping: Option<f32>,
}

/// Pinch-zoom settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ZoomSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,
}

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarouselSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_resistance: Option<f32>,
}

/// Viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_ack_ms: Option<u64>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Persisted configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureSection,
    #[serde(default)]
    pub zoom: ZoomSection,
    #[serde(default)]
    pub carousel: CarouselSection,
    #[serde(default)]
    pub viewer: ViewerSection,
}

fn clamp_px(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, MAX_THRESHOLD_PX)
    } else {
        fallback
    }
}

fn clamp_ms(value: u64) -> Duration {
    Duration::from_millis(value.min(MAX_GESTURE_MS))
}

impl Config {
    /// Merges file values over a preset and clamps them into valid ranges.
    ///
    /// `preset_override` (e.g. from the command line) takes precedence over
    /// the preset named in the file.
    #[must_use]
    pub fn resolve(&self, preset_override: Option<Preset>) -> ViewerConfig {
        let preset = preset_override
            .or(self.viewer.preset)
            .unwrap_or_default();
        let mut resolved = preset.viewer_config();

        let gesture = &self.gesture;
        let g = &mut resolved.gesture;
        if let Some(px) = gesture.tap_slop_px {
            g.tap_slop_px = clamp_px(px, DEFAULT_TAP_SLOP_PX);
        }
        if let Some(px) = gesture.min_swipe_distance_px {
            g.min_swipe_distance_px = clamp_px(px, DEFAULT_MIN_SWIPE_DISTANCE_PX);
        }
        if let Some(ms) = gesture.long_press_ms {
            g.long_press = clamp_ms(ms);
        }
        if let Some(ms) = gesture.tap_max_ms {
            g.tap_max = clamp_ms(ms);
        }
        if let Some(ms) = gesture.double_tap_window_ms {
            g.double_tap_window = clamp_ms(ms);
        }
        if let Some(damping) = gesture.swipe_damping {
            if damping.is_finite() {
                g.swipe_damping = damping.clamp(MIN_SWIPE_DAMPING, MAX_SWIPE_DAMPING);
            }
        }

        if let Some(enabled) = self.zoom.enabled {
            resolved.pinch_enabled = enabled;
        }
        if self.zoom.min_scale.is_some() || self.zoom.max_scale.is_some() {
            resolved.scale_range = ScaleRange::new(
                self.zoom.min_scale.unwrap_or(resolved.scale_range.min()),
                self.zoom.max_scale.unwrap_or(resolved.scale_range.max()),
            );
        }

        let carousel = &self.carousel;
        let c = &mut resolved.carousel;
        if let Some(ms) = carousel.transition_ms {
            c.transition = clamp_ms(ms);
        }
        match carousel.autoplay {
            Some(false) => c.autoplay_interval = None,
            Some(true) => {
                let ms = carousel
                    .autoplay_interval_ms
                    .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
                    .max(MIN_AUTOPLAY_INTERVAL_MS);
                c.autoplay_interval = Some(Duration::from_millis(ms));
            }
            None => {
                if let (Some(ms), Some(_)) = (carousel.autoplay_interval_ms, c.autoplay_interval) {
                    c.autoplay_interval =
                        Some(Duration::from_millis(ms.max(MIN_AUTOPLAY_INTERVAL_MS)));
                }
            }
        }
        if let Some(resistance) = carousel.edge_resistance {
            if resistance.is_finite() {
                c.edge_resistance = resistance.clamp(0.0, 1.0);
            }
        }

        if let Some(ms) = self.viewer.like_ack_ms {
            resolved.like_ack = clamp_ms(ms);
        }

        resolved
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// default config without warning; an unreadable or invalid file yields the
/// default config plus [`CONFIG_LOAD_WARNING`].
pub fn load() -> (Config, Option<&'static str>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<&'static str>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    (config, None)
                }
                Err(err) => {
                    log::warn!("falling back to default config: {err}");
                    (Config::default(), Some(CONFIG_LOAD_WARNING))
                }
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
