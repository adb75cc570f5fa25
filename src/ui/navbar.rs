// SPDX-License-Identifier: MPL-2.0
//! Header column with in-page navigation.
//!
//! Shows the name, role and tagline, one navigation entry per section with
//! the active one highlighted, the language switcher and the social links.

use crate::content::SOCIAL_LINKS;
use crate::i18n::keys::TextKey;
use crate::i18n::store::LocaleStore;
use crate::i18n::Language;
use crate::sections::SectionId;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::frame;
use crate::ui::language_switcher;
use crate::ui::link;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub locale: &'a LocaleStore,
    pub active: SectionId,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NavigateTo(SectionId),
    SelectLanguage(Language),
    OpenUrl(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(SectionId),
    LanguageSelected(Language),
    OpenUrl(&'static str),
}

/// Process a header message and return the corresponding event.
///
/// Selecting a language always produces an event, even the one on screen,
/// so that a session-only language can be made persistent.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::NavigateTo(id) => Event::Navigate(id),
        Message::SelectLanguage(language) => Event::LanguageSelected(language),
        Message::OpenUrl(url) => Event::OpenUrl(url),
    }
}

/// Render the header column.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let locale = ctx.locale;

    let identity = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(locale.tr(TextKey::HeaderName))
                .size(typography::DISPLAY)
                .font(frame::BOLD)
                .color(palette::SLATE_200),
        )
        .push(
            Text::new(locale.tr(TextKey::HeaderTitle))
                .size(typography::TITLE_MD)
                .color(palette::SLATE_200),
        )
        .push(frame::body(locale.tr(TextKey::HeaderDescription), typography::BODY));

    let nav = SectionId::ALL.into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, id| column.push(build_nav_entry(locale, id, id == ctx.active)),
    );

    let switcher = language_switcher::view(
        locale.language(),
        locale.tr(TextKey::LanguageLabel),
        Message::SelectLanguage,
    );

    let socials = SOCIAL_LINKS.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, social| {
            row.push(link::view(
                locale.resolve(social.label_key),
                typography::BODY,
                social.url,
                Message::OpenUrl,
            ))
        },
    );

    let content = Column::new()
        .spacing(spacing::XL)
        .height(Length::Fill)
        .push(identity)
        .push(nav)
        .push(Space::new().height(Length::Fill))
        .push(switcher)
        .push(socials);

    Container::new(content)
        .padding([spacing::XXL, spacing::XL])
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .into()
}

/// Build one navigation entry: an indicator line plus the uppercase label.
fn build_nav_entry<'a>(locale: &LocaleStore, id: SectionId, active: bool) -> Element<'a, Message> {
    let indicator_width = if active { spacing::XXL * 1.5 } else { spacing::XL };
    let indicator_color = if active {
        palette::SLATE_200
    } else {
        palette::SLATE_500
    };

    let indicator = Container::new(Space::new())
        .width(Length::Fixed(indicator_width))
        .height(Length::Fixed(1.0))
        .style(move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(indicator_color.into()),
            ..Default::default()
        });

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(
            Text::new(locale.tr(id.nav_key()).to_uppercase())
                .size(typography::CAPTION)
                .font(frame::BOLD),
        );

    button(row)
        .padding([spacing::XS, 0.0])
        .style(styles::button::nav_entry(active))
        .on_press(Message::NavigateTo(id))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::table::TextTable;
    use crate::preferences::MemoryStore;

    #[test]
    fn navigate_emits_event() {
        let event = update(Message::NavigateTo(SectionId::Projects));
        assert_eq!(event, Event::Navigate(SectionId::Projects));
    }

    #[test]
    fn selecting_language_emits_event() {
        for language in Language::ALL {
            let event = update(Message::SelectLanguage(language));
            assert_eq!(event, Event::LanguageSelected(language));
        }
    }

    #[test]
    fn social_link_emits_open_event() {
        let url = SOCIAL_LINKS[0].url;
        assert_eq!(update(Message::OpenUrl(url)), Event::OpenUrl(url));
    }

    #[test]
    fn navbar_view_renders() {
        let table = TextTable::embedded().expect("embedded tables parse");
        let locale = LocaleStore::new(table, Box::new(MemoryStore::new()));
        let _element = view(ViewContext {
            locale: &locale,
            active: SectionId::Experience,
        });
    }
}
