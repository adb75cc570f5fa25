// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! view takes a `ViewContext` borrowing what it renders, and interactive
//! components turn their `Message` into an `Event` for the application.
//!
//! # Page
//!
//! - [`navbar`] - Header column: identity, section navigation, language switcher
//! - [`about`] - Biography section
//! - [`experience`] - Work-history timeline
//! - [`projects`] - Project cards
//! - [`project_modal`] - Project detail dialog
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Section geometry model feeding the section tracker
//! - [`state`] - Viewport and scroll animation state
//! - [`frame`] - Fixed-height section frame and text helpers
//! - [`language_switcher`] - EN/ES toggle group
//! - [`link`] - External links opened in the system browser
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod about;
pub mod design_tokens;
pub mod experience;
pub mod frame;
pub mod language_switcher;
pub mod layout;
pub mod link;
pub mod navbar;
pub mod project_modal;
pub mod projects;
pub mod state;
pub mod styles;
