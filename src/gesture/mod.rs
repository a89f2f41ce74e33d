// SPDX-License-Identifier: MPL-2.0
//! Touch-gesture interpretation.
//!
//! ```text
//! PointerEvent ──▶ sampler ──▶ session ──▶ classifier ──▶ GestureEvent
//!                     │
//!                     └──(2 contacts)──▶ pinch ──▶ scale
//! ```

pub mod classifier;
pub mod pinch;
pub mod sampler;
pub mod session;

pub use classifier::GestureClassifier;
pub use pinch::PinchZoomController;
pub use sampler::{SampleOutcome, TouchSampler};
pub use session::{GestureSession, SessionPhase};
