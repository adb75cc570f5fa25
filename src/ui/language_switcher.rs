// SPDX-License-Identifier: MPL-2.0
//! EN/ES toggle group.

use crate::i18n::Language;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Text},
    Element,
};

/// Render one toggle per language, highlighting `current`.
///
/// The current language's button stays pressable so the toggle group reads
/// as a segmented control; selecting it again is a no-op upstream.
pub fn view<'a, M: Clone + 'a>(
    current: Language,
    label: String,
    on_select: impl Fn(Language) -> M,
) -> Element<'a, M> {
    Language::ALL.into_iter().fold(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(format!("{label}:")).size(typography::CAPTION)),
        |row, language| {
            let style = if language == current {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(language.label()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(style)
                    .on_press(on_select(language)),
            )
        },
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_renders_for_each_language() {
        for current in Language::ALL {
            let _element: Element<'_, Language> = view(current, "Language".into(), |l| l);
        }
    }
}
