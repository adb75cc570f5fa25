// SPDX-License-Identifier: MPL-2.0
//! About section: three biographical paragraphs.

use crate::i18n::keys::TextKey;
use crate::i18n::store::LocaleStore;
use crate::sections::SectionId;
use crate::ui::design_tokens::typography;
use crate::ui::frame;
use crate::ui::layout::ITEM_SPACING;
use iced::widget::Column;
use iced::Element;

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub locale: &'a LocaleStore,
    pub extent: f32,
    pub active: bool,
}

/// Render the about section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let paragraphs = [
        TextKey::AboutParagraph1,
        TextKey::AboutParagraph2,
        TextKey::AboutParagraph3,
    ]
    .into_iter()
    .fold(Column::<M>::new().spacing(ITEM_SPACING), |column, key| {
        column.push(frame::body(ctx.locale.tr(key), typography::BODY_LG))
    });

    frame::section(
        ctx.locale.tr(SectionId::About.title_key()),
        paragraphs.into(),
        ctx.extent,
        ctx.active,
    )
}
