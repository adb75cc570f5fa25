// SPDX-License-Identifier: MPL-2.0
//! Shared building blocks for the section views.

use crate::ui::design_tokens::{palette, typography};
use crate::ui::layout::{self, SECTION_PADDING, SECTION_SPACING};
use crate::ui::styles;
use iced::{
    font::Weight,
    widget::{Column, Container, Text},
    Element, Font, Length,
};

/// Bold variant of the default font.
pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Wraps a section heading and body in a container of exactly `extent`
/// pixels, dimmed when the section is not active.
pub fn section<'a, M: 'a>(
    heading: String,
    body: Element<'a, M>,
    extent: f32,
    active: bool,
) -> Element<'a, M> {
    let heading = Text::new(heading.to_uppercase())
        .size(typography::TITLE_SM)
        .line_height(typography::LINE_HEIGHT)
        .font(BOLD);

    let content = Column::<M>::new()
        .spacing(SECTION_SPACING)
        .push(heading)
        .push(body);

    Container::new(content)
        .padding([SECTION_PADDING, 0.0])
        .width(Length::Fill)
        .height(Length::Fixed(extent))
        .clip(true)
        .style(styles::container::section(active))
        .into()
}

/// Body text with the line height the layout model assumes.
pub fn body<'a>(content: String, size: f32) -> Text<'a> {
    Text::new(content)
        .size(size)
        .line_height(typography::LINE_HEIGHT)
}

/// A single line of technology names.
pub fn tags<'a>(technologies: &[&str]) -> Text<'a> {
    body(layout::tag_line(technologies), typography::CAPTION).color(palette::TEAL_300)
}
