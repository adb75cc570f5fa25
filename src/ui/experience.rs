// SPDX-License-Identifier: MPL-2.0
//! Experience section: the work-history timeline.
//!
//! Company names and the résumé entry are links; pressing one emits
//! [`Message::OpenUrl`] for the application to hand to the browser.

use crate::content::{Position, POSITIONS, RESUME_URL};
use crate::i18n::keys::TextKey;
use crate::i18n::store::LocaleStore;
use crate::sections::SectionId;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::frame;
use crate::ui::link;
use crate::ui::layout::{CARD_PADDING, CARD_SPACING, ITEM_SPACING, SECTION_SPACING};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Messages emitted by the experience section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenUrl(&'static str),
}

/// Contextual data needed to render the experience section.
pub struct ViewContext<'a> {
    pub locale: &'a LocaleStore,
    pub extent: f32,
    pub active: bool,
}

/// Render the experience section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let timeline = POSITIONS
        .iter()
        .fold(Column::new().spacing(ITEM_SPACING), |column, position| {
            column.push(build_position(ctx.locale, position))
        });

    let resume = Row::new()
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(link::view(
            ctx.locale.tr(TextKey::ExperienceViewResume),
            typography::BODY,
            RESUME_URL,
            Message::OpenUrl,
        ))
        .push(Text::new("→").size(typography::BODY).color(palette::SLATE_200));

    let body = Column::new()
        .spacing(SECTION_SPACING)
        .push(timeline)
        .push(resume);

    frame::section(
        ctx.locale.tr(SectionId::Experience.title_key()),
        body.into(),
        ctx.extent,
        ctx.active,
    )
}

/// Build one timeline entry. The company name links to its website.
fn build_position<'a>(locale: &LocaleStore, position: &'static Position) -> Element<'a, Message> {
    let period = frame::body(locale.resolve(&position.period_key()), typography::CAPTION);
    let role = Row::new()
        .spacing(spacing::XS)
        .push(
            frame::body(
                format!("{} ·", locale.resolve(&position.title_key())),
                typography::BODY_LG,
            )
            .font(frame::BOLD),
        )
        .push(link::view(
            locale.resolve(&position.company_key()),
            typography::BODY_LG,
            position.url,
            Message::OpenUrl,
        ));
    let description = frame::body(locale.resolve(&position.description_key()), typography::BODY);

    let content = Column::new()
        .spacing(CARD_SPACING)
        .push(period)
        .push(role)
        .push(description)
        .push(frame::tags(position.technologies));

    Container::new(content)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
