// SPDX-License-Identifier: MPL-2.0
//! Deterministic layout model for the section column.
//!
//! Every section is drawn inside a container whose height is fixed to the
//! value computed here, so the regions handed to the tracker are exactly the
//! boxes on screen. Heights are estimated from the localized text, the font
//! scale and the column width; the estimate only has to be stable, not
//! pixel-perfect, because the container clips whatever does not fit.

use crate::content::{POSITIONS, PROJECTS};
use crate::i18n::keys::TextKey;
use crate::i18n::store::LocaleStore;
use crate::sections::{Region, SectionId};
use crate::ui::design_tokens::{sizing, spacing, typography};

/// Average glyph advance as a fraction of the font size.
const AVG_CHAR_WIDTH: f32 = 0.55;

/// Narrowest column the estimator will lay text into.
const MIN_COLUMN_WIDTH: f32 = 240.0;

/// Vertical padding above and below each section.
pub const SECTION_PADDING: f32 = spacing::XXL;

/// Gap between a section heading and its body.
pub const SECTION_SPACING: f32 = spacing::LG;

/// Inner padding of position and project cards.
pub const CARD_PADDING: f32 = spacing::MD;

/// Gap between lines of a card.
pub const CARD_SPACING: f32 = spacing::XS;

/// Gap between consecutive cards and paragraphs.
pub const ITEM_SPACING: f32 = spacing::MD;

/// Horizontal padding around the section column.
pub const COLUMN_PADDING: f32 = spacing::XL;

/// Separator between technology names in a tag line.
pub const TAG_SEPARATOR: &str = "  ·  ";

/// Height of one rendered line at `size`.
#[must_use]
pub fn line_height(size: f32) -> f32 {
    size * typography::LINE_HEIGHT
}

/// Estimated height of `text` wrapped into `width` at font `size`.
///
/// Lines break between words, as the renderer does; a word wider than the
/// line is split across as many lines as it needs. Explicit newlines start a
/// new paragraph, and an empty text still takes one line so that headings
/// never collapse.
#[must_use]
pub fn text_height(text: &str, size: f32, width: f32) -> f32 {
    let per_line = (width / (size * AVG_CHAR_WIDTH)).floor().max(1.0) as usize;
    let lines: usize = text
        .split('\n')
        .map(|paragraph| wrapped_lines(paragraph, per_line))
        .sum();
    lines as f32 * line_height(size)
}

/// Number of lines a greedy word wrap needs for `paragraph` when each line
/// holds `per_line` characters.
fn wrapped_lines(paragraph: &str, per_line: usize) -> usize {
    let mut lines = 1;
    let mut used = 0;

    for word in paragraph.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= per_line {
            used = needed;
            continue;
        }

        if used > 0 {
            lines += 1;
        }
        let overflow = len.div_ceil(per_line) - 1;
        lines += overflow;
        used = len - overflow * per_line;
    }

    lines
}

/// Height of a column of `items` separated by `gap`.
fn stacked(items: impl IntoIterator<Item = f32>, gap: f32) -> f32 {
    let mut total = 0.0;
    let mut count = 0;
    for item in items {
        total += item;
        count += 1;
    }
    if count > 1 {
        total += gap * (count - 1) as f32;
    }
    total
}

/// Width available to the section column for a given window width.
#[must_use]
pub fn column_width(window_width: f32) -> f32 {
    (window_width - sizing::SIDEBAR_WIDTH - 2.0 * COLUMN_PADDING)
        .clamp(MIN_COLUMN_WIDTH, sizing::CONTENT_MAX_WIDTH)
}

/// Joins technology names into a single tag line.
#[must_use]
pub fn tag_line(technologies: &[&str]) -> String {
    technologies.join(TAG_SEPARATOR)
}

fn section_body(heading: f32, body: f32) -> f32 {
    2.0 * SECTION_PADDING + stacked([heading, body], SECTION_SPACING)
}

fn heading(locale: &LocaleStore, id: SectionId, width: f32) -> f32 {
    text_height(&locale.tr(id.title_key()), typography::TITLE_SM, width)
}

fn about_extent(locale: &LocaleStore, width: f32) -> f32 {
    let paragraphs = [
        TextKey::AboutParagraph1,
        TextKey::AboutParagraph2,
        TextKey::AboutParagraph3,
    ]
    .into_iter()
    .map(|key| text_height(&locale.tr(key), typography::BODY_LG, width));

    section_body(
        heading(locale, SectionId::About, width),
        stacked(paragraphs, ITEM_SPACING),
    )
}

/// Height of one position card.
#[must_use]
pub fn position_card_height(locale: &LocaleStore, index: usize, width: f32) -> f32 {
    let Some(position) = POSITIONS.get(index) else {
        return 0.0;
    };
    let inner = width - 2.0 * CARD_PADDING;
    let role = format!(
        "{} · {}",
        locale.resolve(&position.title_key()),
        locale.resolve(&position.company_key())
    );
    let lines = [
        text_height(&locale.resolve(&position.period_key()), typography::CAPTION, inner),
        text_height(&role, typography::BODY_LG, inner),
        text_height(&locale.resolve(&position.description_key()), typography::BODY, inner),
        text_height(&tag_line(position.technologies), typography::CAPTION, inner),
    ];
    2.0 * CARD_PADDING + stacked(lines, CARD_SPACING)
}

fn experience_extent(locale: &LocaleStore, width: f32) -> f32 {
    let cards = (0..POSITIONS.len()).map(|index| position_card_height(locale, index, width));
    let body = stacked(
        [stacked(cards, ITEM_SPACING), sizing::BUTTON_HEIGHT],
        SECTION_SPACING,
    );
    section_body(heading(locale, SectionId::Experience, width), body)
}

/// Height of one project card.
#[must_use]
pub fn project_card_height(locale: &LocaleStore, index: usize, width: f32) -> f32 {
    let Some(project) = PROJECTS.get(index) else {
        return 0.0;
    };
    let inner = width - 2.0 * CARD_PADDING;
    let lines = [
        text_height(&locale.resolve(&project.title_key()), typography::TITLE_SM, inner),
        text_height(&locale.resolve(&project.description_key()), typography::BODY, inner),
        text_height(&tag_line(project.highlights), typography::CAPTION, inner),
        sizing::BUTTON_HEIGHT,
    ];
    2.0 * CARD_PADDING + stacked(lines, CARD_SPACING)
}

fn projects_extent(locale: &LocaleStore, width: f32) -> f32 {
    let cards = (0..PROJECTS.len()).map(|index| project_card_height(locale, index, width));
    section_body(
        heading(locale, SectionId::Projects, width),
        stacked(cards, ITEM_SPACING),
    )
}

/// Estimated height of a whole section.
#[must_use]
pub fn section_extent(id: SectionId, locale: &LocaleStore, width: f32) -> f32 {
    match id {
        SectionId::About => about_extent(locale, width),
        SectionId::Experience => experience_extent(locale, width),
        SectionId::Projects => projects_extent(locale, width),
    }
}

/// Geometry of the section column for one window width and language.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub column_width: f32,
    pub regions: Vec<Region<SectionId>>,
}

impl PageLayout {
    /// Lays the sections out top to bottom with no gaps between them.
    #[must_use]
    pub fn compute(locale: &LocaleStore, window_width: f32) -> Self {
        let width = column_width(window_width);
        let mut start = 0.0;
        let regions = SectionId::ALL
            .into_iter()
            .map(|id| {
                let extent = section_extent(id, locale, width);
                let region = Region::new(id, start, extent);
                start += extent;
                region
            })
            .collect();

        Self {
            column_width: width,
            regions,
        }
    }

    /// Height of the section `id`, zero if it is not laid out.
    #[must_use]
    pub fn extent(&self, id: SectionId) -> f32 {
        self.regions
            .iter()
            .find(|region| region.id == id)
            .map_or(0.0, |region| region.extent)
    }

    /// Space appended after the last section so that every section can be
    /// scrolled to the top of a viewport of `viewport_height`.
    #[must_use]
    pub fn trailing_space(&self, viewport_height: f32) -> f32 {
        self.regions
            .last()
            .map_or(0.0, |last| (viewport_height - last.extent).max(0.0))
    }
}
