// SPDX-License-Identifier: MPL-2.0
//! Typed keys for the fixed strings of the page chrome.
//!
//! Using [`TextKey`] instead of string literals turns a misspelt key into a
//! compile error. Keys that depend on content (positions, projects) are
//! composed at runtime by [`crate::content`] and go through the dotted-string
//! resolver instead.

macro_rules! text_keys {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        /// A statically known entry of the text table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($variant),+
        }

        impl TextKey {
            /// Every typed key, in table order.
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant),+];

            /// The dotted path of this key in the text table.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $key),+
                }
            }
        }
    };
}

text_keys! {
    WindowTitle => "window.title",
    NavAbout => "nav.about",
    NavExperience => "nav.experience",
    NavProjects => "nav.projects",
    NavLabel => "nav.label",
    LanguageLabel => "language.label",
    HeaderName => "header.name",
    HeaderTitle => "header.title",
    HeaderDescription => "header.description",
    SocialLinkedin => "social.linkedin",
    AboutTitle => "about.title",
    AboutParagraph1 => "about.paragraph1",
    AboutParagraph2 => "about.paragraph2",
    AboutParagraph3 => "about.paragraph3",
    ExperienceTitle => "experience.title",
    ExperienceViewResume => "experience.viewResume",
    ExperiencePresent => "experience.present",
    ProjectsTitle => "projects.title",
    ProjectsAboutProject => "projects.aboutProject",
    ProjectsTechnologiesUsed => "projects.technologiesUsed",
    ProjectsReadMore => "projects.readMore",
    ProjectsShowLess => "projects.showLess",
    ProjectsClose => "projects.close",
    ProjectsScreenshot => "projects.screenshot",
    ProjectsLiveSite => "projects.liveSite",
    ProjectsSourceCode => "projects.sourceCode",
}

impl std::fmt::Display for TextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
