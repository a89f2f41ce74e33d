// SPDX-License-Identifier: MPL-2.0
//! Domain layer - framework-free value types.
//!
//! This module has no dependencies on external crates (except `std`) so the
//! gesture types can be shared between the engine, the config layer and any
//! host front-end.
//!
//! # Modules
//!
//! - [`gesture`]: input samples and classified gestures
//!   ([`PointerEvent`](gesture::PointerEvent), [`GestureEvent`](gesture::GestureEvent)),
//!   and the zoom value objects ([`Scale`](gesture::Scale), [`ScaleRange`](gesture::ScaleRange))

pub mod gesture;
