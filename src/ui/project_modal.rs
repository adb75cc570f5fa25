// SPDX-License-Identifier: MPL-2.0
//! Detail dialog for a single project.
//!
//! The dialog floats over the page. It starts collapsed (short description)
//! every time a project is opened, and forgets the expanded flag on close.

use crate::content::{FormFactor, Project};
use crate::i18n::keys::TextKey;
use crate::i18n::store::LocaleStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::frame;
use crate::ui::link;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, center, mouse_area, opaque, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Which project (if any) is shown and whether its long description is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    project: Option<&'static Project>,
    show_details: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `project`, collapsed.
    pub fn open(&mut self, project: &'static Project) {
        self.project = Some(project);
        self.show_details = false;
    }

    /// Hides the dialog and resets the expanded flag.
    pub fn close(&mut self) {
        self.project = None;
        self.show_details = false;
    }

    /// Flips between the short and the long description. No effect while closed.
    pub fn toggle_details(&mut self) {
        if self.project.is_some() {
            self.show_details = !self.show_details;
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    #[must_use]
    pub fn project(&self) -> Option<&'static Project> {
        self.project
    }

    #[must_use]
    pub fn shows_details(&self) -> bool {
        self.show_details
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close,
    ToggleDetails,
    OpenUrl(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenUrl(&'static str),
}

/// Apply a dialog message to its state.
pub fn update(state: &mut State, message: &Message) -> Event {
    match message {
        Message::Close => {
            state.close();
            Event::None
        }
        Message::ToggleDetails => {
            state.toggle_details();
            Event::None
        }
        Message::OpenUrl(url) => Event::OpenUrl(*url),
    }
}

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub locale: &'a LocaleStore,
    pub state: &'a State,
}

/// Render the dialog with its backdrop, or `None` when closed.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    let project = ctx.state.project()?;
    let locale = ctx.locale;

    let close = button(Text::new("✕").size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::dismiss)
        .on_press(Message::Close);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(locale.resolve(&project.title_key()))
                .size(typography::TITLE_LG)
                .font(frame::BOLD)
                .width(Length::Fill),
        )
        .push(close);

    let description_key = if ctx.state.shows_details() {
        project.long_description_key()
    } else {
        project.description_key()
    };
    let toggle_label = if ctx.state.shows_details() {
        locale.tr(TextKey::ProjectsShowLess)
    } else {
        locale.tr(TextKey::ProjectsReadMore)
    };

    let about = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(locale.tr(TextKey::ProjectsAboutProject))
                .size(typography::TITLE_SM)
                .font(frame::BOLD),
        )
        .push(frame::body(locale.resolve(&description_key), typography::BODY))
        .push(
            button(Text::new(toggle_label).size(typography::BODY))
                .padding(0)
                .style(styles::button::link)
                .on_press(Message::ToggleDetails),
        );

    let technologies = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(locale.tr(TextKey::ProjectsTechnologiesUsed))
                .size(typography::TITLE_SM)
                .font(frame::BOLD),
        )
        .push(frame::tags(project.technologies));

    let links = Column::new()
        .spacing(spacing::XXS)
        .push(build_link(locale.tr(TextKey::ProjectsLiveSite), project.live_url))
        .push(build_link(locale.tr(TextKey::ProjectsSourceCode), project.source_url));

    let content = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(build_screenshots(locale, project))
        .push(about)
        .push(technologies)
        .push(links);

    let dialog = Container::new(scrollable(content.padding(spacing::LG)))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .max_height(720.0)
        .style(styles::container::dialog);

    let backdrop = center(opaque(dialog))
        .padding(spacing::XL)
        .style(styles::container::backdrop);

    Some(mouse_area(backdrop).on_press(Message::Close).into())
}

/// Build the screenshot strip. Images are not bundled, so each slot shows
/// its caption and source path.
fn build_screenshots<'a>(locale: &LocaleStore, project: &Project) -> Element<'a, Message> {
    let label = locale.tr(TextKey::ProjectsScreenshot);
    let slot_width = match project.form_factor {
        FormFactor::Web => Length::FillPortion(2),
        FormFactor::Mobile => Length::FillPortion(1),
    };

    project
        .screenshots
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, path)| {
            let caption = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(format!("{label} {}", index + 1)).size(typography::BODY))
                .push(Text::new(*path).size(typography::CAPTION));
            row.push(
                Container::new(caption)
                    .padding(spacing::SM)
                    .width(slot_width)
                    .height(Length::Fixed(sizing::SCREENSHOT_HEIGHT))
                    .style(styles::container::screenshot),
            )
        })
        .into()
}

/// Build a link line. Placeholder targets render but stay inert.
fn build_link<'a>(label: String, url: &'static str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(link::view(label, typography::BODY, url, Message::OpenUrl))
        .push(Text::new("↗").size(typography::CAPTION))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::i18n::table::TextTable;
    use crate::preferences::MemoryStore;

    #[test]
    fn opens_collapsed() {
        let mut state = State::new();
        state.open(&PROJECTS[0]);
        assert!(state.is_open());
        assert!(!state.shows_details());
    }

    #[test]
    fn close_resets_details() {
        let mut state = State::new();
        state.open(&PROJECTS[0]);
        assert_eq!(update(&mut state, &Message::ToggleDetails), Event::None);
        assert!(state.shows_details());

        assert_eq!(update(&mut state, &Message::Close), Event::None);
        assert!(!state.is_open());
        assert!(!state.shows_details());
    }

    #[test]
    fn opening_another_project_starts_collapsed() {
        let mut state = State::new();
        state.open(&PROJECTS[0]);
        state.toggle_details();
        state.open(&PROJECTS[1]);
        assert_eq!(state.project(), Some(&PROJECTS[1]));
        assert!(!state.shows_details());
    }

    #[test]
    fn link_press_is_forwarded_without_touching_state() {
        let mut state = State::new();
        state.open(&PROJECTS[1]);
        let before = state.clone();

        let url = PROJECTS[1].live_url;
        assert_eq!(update(&mut state, &Message::OpenUrl(url)), Event::OpenUrl(url));
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_while_closed_is_ignored() {
        let mut state = State::new();
        state.toggle_details();
        assert_eq!(state, State::new());
    }

    #[test]
    fn view_is_absent_while_closed() {
        let locale = LocaleStore::new(TextTable::empty(), Box::new(MemoryStore::new()));
        let state = State::new();
        assert!(view(ViewContext {
            locale: &locale,
            state: &state
        })
        .is_none());
    }

    #[test]
    fn view_renders_when_open() {
        let locale = LocaleStore::new(TextTable::empty(), Box::new(MemoryStore::new()));
        let mut state = State::new();
        state.open(&PROJECTS[2]);
        assert!(view(ViewContext {
            locale: &locale,
            state: &state
        })
        .is_some());
    }
}
