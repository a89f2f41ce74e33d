// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer: gesture routing, paging, zoom and transient feedback.

pub mod acknowledgment;
pub mod callbacks;
pub mod interaction;
pub mod orchestrator;

pub use acknowledgment::LikeAcknowledgment;
pub use callbacks::{Effect, ViewerCallbacks};
pub use interaction::{InMemoryInteractions, InteractionError, InteractionService};
pub use orchestrator::{Message, ViewerOrchestrator, ViewerState};
