// SPDX-License-Identifier: MPL-2.0
//! Projects section: one card per project, each opening the detail dialog.

use crate::content::{Project, PROJECTS};
use crate::i18n::keys::TextKey;
use crate::i18n::store::LocaleStore;
use crate::sections::SectionId;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::frame;
use crate::ui::layout::{CARD_PADDING, CARD_SPACING, ITEM_SPACING};
use crate::ui::styles;
use iced::{
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the projects section.
pub struct ViewContext<'a> {
    pub locale: &'a LocaleStore,
    pub extent: f32,
    pub active: bool,
}

/// Messages emitted by the projects section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenProject(&'static Project),
}

/// Process a projects message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Open(id) => match Project::find(id) {
            Some(project) => Event::OpenProject(project),
            None => {
                tracing::debug!(id, "ignoring request for unknown project");
                Event::None
            }
        },
    }
}

/// Render the projects section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let cards = PROJECTS
        .iter()
        .fold(Column::new().spacing(ITEM_SPACING), |column, project| {
            column.push(build_card(ctx.locale, project))
        });

    frame::section(
        ctx.locale.tr(SectionId::Projects.title_key()),
        cards.into(),
        ctx.extent,
        ctx.active,
    )
}

/// Build a project card.
fn build_card<'a>(locale: &LocaleStore, project: &'static Project) -> Element<'a, Message> {
    let title = frame::body(locale.resolve(&project.title_key()), typography::TITLE_SM)
        .font(frame::BOLD);
    let description = frame::body(locale.resolve(&project.description_key()), typography::BODY);

    let read_more = button(Text::new(locale.tr(TextKey::ProjectsReadMore)).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::Open(project.id));

    let content = Column::new()
        .spacing(CARD_SPACING)
        .push(title)
        .push(description)
        .push(frame::tags(project.highlights))
        .push(read_more);

    Container::new(content)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
