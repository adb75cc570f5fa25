// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind both columns.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        text_color: Some(palette::SLATE_400),
        ..Default::default()
    }
}

/// A section container; sections outside the reader's focus are dimmed.
pub fn section(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let text = if active {
            palette::SLATE_400
        } else {
            Color {
                a: opacity::DIMMED,
                ..palette::SLATE_400
            }
        };
        container::Style {
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// Card surface for a project or position.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE_HOVER,
            ..palette::SLATE_800
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the project dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::SLATE_950
        })),
        ..Default::default()
    }
}

/// The project dialog surface.
pub fn dialog(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_800)),
        text_color: Some(palette::SLATE_200),
        border: Border {
            color: palette::SLATE_700,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Placeholder frame for a screenshot.
pub fn screenshot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        border: Border {
            color: palette::TEAL_900,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
