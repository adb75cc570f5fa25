// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a bilingual (English/Spanish) personal portfolio built with
//! the Iced GUI framework.
//!
//! The page shows three sections (about, experience and projects) in a single
//! scrollable column. A fixed header highlights whichever section sits under
//! the middle of the viewport, and clicking an entry scrolls smoothly to it.
//! All visible text is looked up through a [`i18n::store::LocaleStore`] whose
//! language choice is persisted to the user's settings file.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod sections;
pub mod ui;
