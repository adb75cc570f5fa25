// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Scroll**: In-page navigation animation

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Smallest window width the two-column layout supports.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Smallest window height the layout supports.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Default duration of the smooth scroll to a section (milliseconds).
pub const DEFAULT_SCROLL_ANIMATION_MS: u64 = 450;

/// Maximum scroll animation duration (milliseconds). Zero disables animation.
pub const MAX_SCROLL_ANIMATION_MS: u64 = 2000;
