// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation over an ordered list of items.
//!
//! ```text
//! slider (sub-component)
//!     ├── navigator  - current index, boundary clamp, transition planning
//!     ├── transition - damped slide / settle animation, rubber band
//!     └── autoplay   - interval timer, cancelled by user gestures
//! ```

pub mod autoplay;
pub mod navigator;
pub mod slider;
pub mod transition;

pub use autoplay::Autoplay;
pub use navigator::{CarouselNavigator, SlideDirection, Transition};
pub use transition::SlideAnimation;
