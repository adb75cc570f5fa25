// SPDX-License-Identifier: MPL-2.0
//! External links rendered as text buttons.

use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{button, Text};
use iced::Element;

/// Whether `url` is something the system browser can open. Placeholders
/// such as `#` are still drawn but do not react to clicks.
#[must_use]
pub fn is_openable(url: &str) -> bool {
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// A link labelled `label` that emits `on_open(url)` when pressed.
pub fn view<'a, M: Clone + 'a>(
    label: String,
    size: f32,
    url: &'static str,
    on_open: impl Fn(&'static str) -> M,
) -> Element<'a, M> {
    button(
        Text::new(label)
            .size(size)
            .line_height(typography::LINE_HEIGHT),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press_maybe(is_openable(url).then(|| on_open(url)))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_and_mail_links_are_openable() {
        assert!(is_openable("https://keybe.ai/"));
        assert!(is_openable("http://example.com"));
        assert!(is_openable("mailto:someone@example.com"));
    }

    #[test]
    fn placeholders_are_not_openable() {
        assert!(!is_openable("#"));
        assert!(!is_openable(""));
        assert!(!is_openable("javascript:alert(1)"));
    }

    #[test]
    fn link_renders_with_and_without_target() {
        let _live: Element<'_, &str> = view("Live".into(), 14.0, "https://example.com", |url| url);
        let _inert: Element<'_, &str> = view("Résumé".into(), 14.0, "#", |url| url);
    }
}
