// SPDX-License-Identifier: MPL-2.0
//! Page sections and active-section tracking.

pub mod tracker;

pub use tracker::{locate, probe, Region, ScrollRequest, SectionTracker};

use crate::i18n::keys::TextKey;
use std::fmt;

/// The named sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    About,
    Experience,
    Projects,
}

impl SectionId {
    /// Document order.
    pub const ALL: [SectionId; 3] = [SectionId::About, SectionId::Experience, SectionId::Projects];

    /// Anchor-style identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
        }
    }

    /// Key of the navigation label.
    #[must_use]
    pub fn nav_key(self) -> TextKey {
        match self {
            SectionId::About => TextKey::NavAbout,
            SectionId::Experience => TextKey::NavExperience,
            SectionId::Projects => TextKey::NavProjects,
        }
    }

    /// Key of the section heading.
    #[must_use]
    pub fn title_key(self) -> TextKey {
        match self {
            SectionId::About => TextKey::AboutTitle,
            SectionId::Experience => TextKey::ExperienceTitle,
            SectionId::Projects => TextKey::ProjectsTitle,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
