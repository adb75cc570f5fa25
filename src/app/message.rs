// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::experience;
use crate::ui::navbar;
use crate::ui::project_modal;
use crate::ui::projects;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Experience(experience::Message),
    Projects(projects::Message),
    ProjectModal(project_modal::Message),
    /// The section column scrolled.
    Scrolled {
        offset: f32,
        height: f32,
        content_height: f32,
    },
    WindowResized(Size),
    /// Escape was pressed and not captured by a widget.
    EscapePressed,
    Tick(Instant), // Frame tick while a scroll animation runs
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional session language in BCP-47 form (e.g. `es`, `es-MX`).
    /// Not persisted.
    pub lang: Option<String>,
    /// Optional directory containing `en.toml` and `es.toml` text tables.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
