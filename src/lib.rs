// SPDX-License-Identifier: MPL-2.0
//! `swipe_lens` interprets raw pointer and touch streams as gestures and turns
//! them into carousel and full-screen viewer navigation.
//!
//! The engine is framework-free: hosts feed [`viewer::Message`]s with
//! monotonic timestamps and react to the returned [`viewer::Effect`]s. The
//! [`app`] module is an Iced front-end built on top of it.

pub mod app;
pub mod carousel;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod timer;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_utils;
