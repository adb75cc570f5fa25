// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navigation entry in the header. The active section is drawn in the
/// accent color, the others in muted slate.
pub fn nav_entry(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match (active, status) {
            (true, _) => palette::SLATE_200,
            (false, button::Status::Hovered) => palette::SLATE_200,
            (false, _) => palette::SLATE_500,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the selected entry of a toggle group (language switcher).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::TEAL_300,
        _ => palette::TEAL_400,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::SLATE_900,
        border: Border {
            color: palette::TEAL_300,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the unselected entries of a toggle group.
pub fn unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let (text_color, border_color) = match status {
        button::Status::Hovered => (WHITE, palette::TEAL_300),
        _ => (palette::SLATE_400, palette::SLATE_700),
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only link in the accent color ("Read more", résumé, social).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::TEAL_300,
        _ => palette::SLATE_200,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Close button of the project dialog.
pub fn dismiss(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::SLATE_700
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_nav_entry_is_highlighted() {
        let theme = Theme::Dark;
        let active = nav_entry(true)(&theme, button::Status::Active);
        let inactive = nav_entry(false)(&theme, button::Status::Active);
        assert_eq!(active.text_color, palette::SLATE_200);
        assert_eq!(inactive.text_color, palette::SLATE_500);
    }

    #[test]
    fn selected_toggle_has_accent_background() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::TEAL_400)));
        assert!(unselected(&Theme::Dark, button::Status::Active)
            .background
            .is_none());
    }
}
