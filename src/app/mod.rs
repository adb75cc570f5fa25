// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the locale, the section
//! tracker and the page views.
//!
//! The `App` struct owns the single writer of each piece of state: the
//! [`LocaleStore`] for language, the [`SectionTracker`] for the active section,
//! and the page layout that feeds the tracker its geometry.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::keys::TextKey;
use crate::i18n::store::LocaleStore;
use crate::i18n::table::TextTable;
use crate::i18n::Language;
use crate::preferences::SettingsStore;
use crate::sections::{SectionId, SectionTracker};
use crate::ui::layout::PageLayout;
use crate::ui::project_modal;
use crate::ui::state::{ScrollAnimation, ViewportState};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Identifier of the section column scrollable.
pub const SCROLLABLE_ID: &str = "page-sections";

/// Root Iced application state.
pub struct App {
    locale: LocaleStore,
    tracker: SectionTracker<SectionId>,
    layout: PageLayout,
    viewport: ViewportState,
    window_size: Size,
    showcase: project_modal::State,
    scroll_animation: Option<ScrollAnimation>,
    scroll_duration: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.locale.language())
            .field("active", &self.tracker.active())
            .field("showcase_open", &self.showcase.is_open())
            .finish()
    }
}

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(config::MIN_WINDOW_WIDTH, config::MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, warning) = config::load();
    if let Some(key) = warning {
        tracing::warn!(warning = %key, "settings file ignored");
    }
    let settings = window_settings(&config);

    // iced 0.14 requires a Fn boot closure; the state is consumed on the first call
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

/// Loads the text table from `i18n_dir`, falling back to the embedded
/// documents, and finally to an empty table that echoes every key.
pub fn load_text_table(i18n_dir: Option<&Path>) -> TextTable {
    if let Some(dir) = i18n_dir {
        match TextTable::from_dir(dir) {
            Ok(table) => return table,
            Err(error) => {
                tracing::warn!(dir = %dir.display(), %error, "falling back to embedded text tables");
            }
        }
    }

    TextTable::embedded().unwrap_or_else(|error| {
        tracing::error!(%error, "embedded text tables unusable; showing raw keys");
        TextTable::empty()
    })
}

/// Logs every key present in one language but missing in another.
pub fn report_parity(table: &TextTable) -> usize {
    let gaps = table.parity_gaps();
    for (language, key) in &gaps {
        tracing::warn!(%language, key = key.as_str(), "text table key missing");
    }
    gaps.len()
}

impl App {
    /// Initializes application state from CLI flags and loaded settings.
    fn new(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let table = load_text_table(flags.i18n_dir.as_deref().map(Path::new));
        report_parity(&table);

        let store = SettingsStore::open();
        let mut locale = LocaleStore::new(table, Box::new(store));

        if let Some(raw) = flags.lang.as_deref() {
            match Language::from_code(raw) {
                Some(language) => locale.use_session_language(language),
                None => tracing::warn!(lang = raw, "unsupported --lang value ignored"),
            }
        }

        tracing::info!(language = %locale.language(), "starting portfolio");
        (Self::with_locale(locale, config), Task::none())
    }

    /// Builds the state around an existing locale store. Geometry is computed
    /// for the configured window size and the active section is resolved once.
    pub fn with_locale(locale: LocaleStore, config: &Config) -> Self {
        let (width, height) = config.window.size();
        let mut app = Self {
            locale,
            tracker: SectionTracker::new(SectionId::default()),
            layout: PageLayout {
                column_width: 0.0,
                regions: Vec::new(),
            },
            viewport: ViewportState {
                offset: 0.0,
                height,
                content_height: 0.0,
            },
            window_size: Size::new(width, height),
            showcase: project_modal::State::new(),
            scroll_animation: None,
            scroll_duration: config.scroll.animation_duration(),
        };

        app.refresh_layout();
        app.tracker.on_scroll(app.viewport.offset, app.viewport.height);
        app
    }

    /// Recomputes section geometry for the current window and language and
    /// hands it to the tracker.
    fn refresh_layout(&mut self) {
        self.layout = PageLayout::compute(&self.locale, self.window_size.width);
        let total = self.layout.regions.last().map_or(0.0, |last| last.end())
            + self.layout.trailing_space(self.viewport.height);
        self.viewport.content_height = total;
        self.tracker.recompute_regions(self.layout.regions.clone());
    }

    fn title(&self) -> String {
        self.locale.tr(TextKey::WindowTitle)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.scroll_animation.is_some()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            locale: &mut self.locale,
            tracker: &mut self.tracker,
            viewport: &mut self.viewport,
            showcase: &mut self.showcase,
            scroll_animation: &mut self.scroll_animation,
            scroll_duration: self.scroll_duration,
        };

        match message {
            Message::Navbar(navbar_message) => {
                let (task, relayout) = update::handle_navbar_message(&mut ctx, navbar_message);
                if relayout {
                    self.refresh_layout();
                }
                task
            }
            Message::Experience(experience_message) => {
                update::handle_experience_message(experience_message)
            }
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, &projects_message)
            }
            Message::ProjectModal(modal_message) => {
                update::handle_project_modal_message(&mut ctx, &modal_message)
            }
            Message::Scrolled {
                offset,
                height,
                content_height,
            } => update::handle_scrolled(&mut ctx, offset, height, content_height),
            Message::EscapePressed => {
                ctx.showcase.close();
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowResized(size) => {
                self.window_size = size;
                self.viewport.height = size.height;
                self.refresh_layout();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            locale: &self.locale,
            active: self.tracker.active(),
            layout: &self.layout,
            viewport_height: self.viewport.height,
            showcase: &self.showcase,
        })
    }

    #[must_use]
    pub fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn showcase(&self) -> &project_modal::State {
        &self.showcase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scroll_animation.is_some()
    }
}
