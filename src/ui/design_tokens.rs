// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the page's visual constants in one place.

## Organization

- **Palette**: Base colors (slate surfaces, teal accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale and line height
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::SLATE_950
};

let padding = spacing::MD; // 16px
```

The layout estimator in [`crate::ui::layout`] reads spacing and typography
from here, so a change to these scales moves the section geometry too.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate scale (page surfaces and body text)
    pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941);

    // Accent (teal scale)
    pub const TEAL_300: Color = Color::from_rgb(0.369, 0.918, 0.831);
    pub const TEAL_400: Color = Color::from_rgb(0.176, 0.831, 0.749);
    pub const TEAL_900: Color = Color::from_rgb(0.075, 0.306, 0.290);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;

    /// Sections outside the reader's focus.
    pub const DIMMED: f32 = 0.55;

    /// Card surface on hover.
    pub const SURFACE_HOVER: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed width of the left-hand header column.
    pub const SIDEBAR_WIDTH: f32 = 320.0;

    /// Widest the section column grows before it is centered.
    pub const CONTENT_MAX_WIDTH: f32 = 680.0;

    /// Height of a text button (nav entry, switcher, card action).
    pub const BUTTON_HEIGHT: f32 = 32.0;

    /// Width of the project detail dialog.
    pub const MODAL_WIDTH: f32 = 640.0;

    /// Height of a screenshot caption placeholder in the detail dialog.
    pub const SCREENSHOT_HEIGHT: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Name and section headings
    //! - Body: Paragraphs and card text
    //! - Caption: Periods, tags, small labels

    /// Display - The name in the header
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Project dialog heading
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Header subtitle
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section and card headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Card descriptions, buttons
    pub const BODY: f32 = 14.0;

    /// Caption - Periods, technology tags
    pub const CAPTION: f32 = 12.0;

    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT: f32 = 1.5;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_STRONG < 1.0);
    assert!(opacity::DIMMED > 0.0 && opacity::DIMMED < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::LINE_HEIGHT >= 1.0);

    assert!(sizing::CONTENT_MAX_WIDTH > sizing::SIDEBAR_WIDTH);
};
