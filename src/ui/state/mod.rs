// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that belongs to the page chrome rather than to the locale or the
//! section tracker.

pub mod scroll;
pub mod viewport;

pub use scroll::ScrollAnimation;
pub use viewport::ViewportState;
