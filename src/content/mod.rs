// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Everything here is read-only and compiled in. Localized fields are not
//! stored; each record carries the slug its text keys are composed from and
//! exposes key builders that go through the dotted-string resolver.

/// Whether a project's screenshots are landscape (web) or portrait (mobile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFactor {
    Web,
    Mobile,
}

/// A project shown in the projects section and in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Stable identifier.
    pub id: &'static str,
    /// Segment under `projects.` holding the localized text.
    pub key: &'static str,
    pub screenshots: &'static [&'static str],
    pub technologies: &'static [&'static str],
    /// Subset of `technologies` shown on the card.
    pub highlights: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub form_factor: FormFactor,
}

impl Project {
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("projects.{}.title", self.key)
    }

    #[must_use]
    pub fn description_key(&self) -> String {
        format!("projects.{}.description", self.key)
    }

    #[must_use]
    pub fn long_description_key(&self) -> String {
        format!("projects.{}.longDescription", self.key)
    }

    /// Looks a project up by id.
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Project> {
        PROJECTS.iter().find(|project| project.id == id)
    }
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Segment under `experience.positions.` holding the localized text.
    pub slug: &'static str,
    pub url: &'static str,
    pub technologies: &'static [&'static str],
}

impl Position {
    fn field_key(&self, field: &str) -> String {
        format!("experience.positions.{}.{field}", self.slug)
    }

    #[must_use]
    pub fn title_key(&self) -> String {
        self.field_key("title")
    }

    #[must_use]
    pub fn company_key(&self) -> String {
        self.field_key("company")
    }

    #[must_use]
    pub fn period_key(&self) -> String {
        self.field_key("period")
    }

    #[must_use]
    pub fn description_key(&self) -> String {
        self.field_key("description")
    }
}

/// An external profile link in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label_key: &'static str,
    pub url: &'static str,
}

/// Target of the "view full résumé" link.
pub const RESUME_URL: &str = "#";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "flows-automation",
        key: "flows",
        screenshots: &["/images/flows-home.png", "/images/flows-example.png"],
        technologies: &[
            "React",
            "TypeScript",
            "Vite",
            "Tailwind CSS",
            "Jotai",
            "MobX",
            "React Flow",
            "Lottie",
            "ESLint",
            "Prettier",
        ],
        highlights: &["React", "TypeScript", "Jotai", "Tailwind CSS"],
        live_url: "#",
        source_url: "#",
        form_factor: FormFactor::Web,
    },
    Project {
        id: "chats-metrics",
        key: "metrics",
        screenshots: &["/images/metrics-home.png", "/images/metrics-maps.png"],
        technologies: &["Vue 3", "ECharts", "Chart.js", "Pinia", "FontAwesome"],
        highlights: &["Vue 3", "ECharts", "Chart.js", "Pinia"],
        live_url: "#",
        source_url: "#",
        form_factor: FormFactor::Web,
    },
    Project {
        id: "sales-chats",
        key: "chats",
        screenshots: &["/images/chat-home.png", "/images/chat-form.png"],
        technologies: &["SwiftUI", "Lottie", "Kingfisher"],
        highlights: &["SwiftUI", "Lottie", "Kingfisher"],
        live_url: "#",
        source_url: "#",
        form_factor: FormFactor::Mobile,
    },
];

pub const POSITIONS: &[Position] = &[
    Position {
        slug: "keybe",
        url: "https://keybe.ai/",
        technologies: &["JavaScript", "TypeScript", "React", "Vue", "SwiftUI"],
    },
    Position {
        slug: "amaris",
        url: "https://amaris.com/",
        technologies: &["TypeScript", "React", "Next", "Vue", "React Native"],
    },
    Position {
        slug: "linktic",
        url: "https://linktic.com/",
        technologies: &["JavaScript", "React", "Vue", "NuxtJs"],
    },
    Position {
        slug: "tecnoglass",
        url: "https://www.tecnoglass.com/",
        technologies: &["JavaScript", "Vue", "Vuetify", "SASS"],
    },
    Position {
        slug: "emdiem",
        url: "https://dribbble.com/EmdiemLab",
        technologies: &["JavaScript", "Vue", "Vuetify"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[SocialLink {
    label_key: "social.linkedin",
    url: "https://www.linkedin.com/in/manuel-montero-palencia/",
}];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::table::TextTable;
    use crate::i18n::Language;
    use std::collections::HashSet;

    fn composed_keys() -> Vec<String> {
        let mut keys = Vec::new();
        for project in PROJECTS {
            keys.push(project.title_key());
            keys.push(project.description_key());
            keys.push(project.long_description_key());
        }
        for position in POSITIONS {
            keys.push(position.title_key());
            keys.push(position.company_key());
            keys.push(position.period_key());
            keys.push(position.description_key());
        }
        keys.extend(SOCIAL_LINKS.iter().map(|link| link.label_key.to_string()));
        keys
    }

    #[test]
    fn composed_keys_resolve_in_both_languages() {
        let table = TextTable::embedded().expect("embedded tables parse");
        for key in composed_keys() {
            for language in Language::ALL {
                assert!(
                    table.lookup(language, &key).is_some(),
                    "{key} missing for {language}"
                );
            }
        }
    }

    #[test]
    fn project_ids_and_keys_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|project| project.id).collect();
        let keys: HashSet<_> = PROJECTS.iter().map(|project| project.key).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(keys.len(), PROJECTS.len());
    }

    #[test]
    fn highlights_are_drawn_from_technologies() {
        for project in PROJECTS {
            for tech in project.highlights {
                assert!(project.technologies.contains(tech), "{} lists {tech}", project.id);
            }
        }
    }

    #[test]
    fn find_project_by_id() {
        assert_eq!(Project::find("sales-chats").map(|p| p.key), Some("chats"));
        assert!(Project::find("unknown").is_none());
    }

    #[test]
    fn position_keys_are_composed_from_slug() {
        assert_eq!(
            POSITIONS[0].description_key(),
            "experience.positions.keybe.description"
        );
    }
}
