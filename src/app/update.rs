// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing only the state it
//! may touch, mirroring how components are kept ignorant of each other.

use super::{Message, SCROLLABLE_ID};
use crate::i18n::store::LocaleStore;
use crate::sections::{ScrollRequest, SectionId, SectionTracker};
use crate::ui::experience;
use crate::ui::link;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::project_modal::{self, Event as ProjectModalEvent};
use crate::ui::projects::{self, Event as ProjectsEvent};
use crate::ui::state::{ScrollAnimation, ViewportState};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::{Duration, Instant};

/// Mutable state reachable from message handlers.
pub struct UpdateContext<'a> {
    pub locale: &'a mut LocaleStore,
    pub tracker: &'a mut SectionTracker<SectionId>,
    pub viewport: &'a mut ViewportState,
    pub showcase: &'a mut project_modal::State,
    pub scroll_animation: &'a mut Option<ScrollAnimation>,
    pub scroll_duration: Duration,
}

/// Handles header messages.
///
/// Returns the task to run and whether the page geometry must be
/// recomputed (the language changed, so every text block changed length).
/// A selected language is persisted even when it is already on screen.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> (Task<Message>, bool) {
    match navbar::update(message) {
        NavbarEvent::Navigate(id) => match ctx.tracker.navigate_to(id) {
            Some(request) => (start_scroll(ctx, request, Instant::now()), false),
            None => (Task::none(), false),
        },
        NavbarEvent::LanguageSelected(language) => {
            let changed = ctx.locale.language() != language;
            ctx.locale.set_language(language);
            (Task::none(), changed)
        }
        NavbarEvent::OpenUrl(url) => (handle_open_url(url), false),
    }
}

/// Handles experience section messages.
pub fn handle_experience_message(message: experience::Message) -> Task<Message> {
    match message {
        experience::Message::OpenUrl(url) => handle_open_url(url),
    }
}

/// Handles project card messages.
pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: &projects::Message,
) -> Task<Message> {
    if let ProjectsEvent::OpenProject(project) = projects::update(message) {
        ctx.showcase.open(project);
    }
    Task::none()
}

/// Handles project dialog messages.
pub fn handle_project_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: &project_modal::Message,
) -> Task<Message> {
    match project_modal::update(ctx.showcase, message) {
        ProjectModalEvent::None => Task::none(),
        ProjectModalEvent::OpenUrl(url) => handle_open_url(url),
    }
}

/// Opens `url` in the system browser. Placeholder targets are ignored.
pub fn handle_open_url(url: &'static str) -> Task<Message> {
    if !link::is_openable(url) {
        tracing::debug!(url, "ignoring placeholder link");
        return Task::none();
    }
    if let Err(error) = open::that(url) {
        tracing::warn!(url, %error, "failed to open link in browser");
    }
    Task::none()
}

/// Records a scroll event and lets the tracker re-evaluate the active section.
pub fn handle_scrolled(
    ctx: &mut UpdateContext<'_>,
    offset: f32,
    height: f32,
    content_height: f32,
) -> Task<Message> {
    ctx.viewport.update(offset, height, content_height);
    ctx.tracker.on_scroll(offset, height);
    Task::none()
}

/// Advances the running scroll animation by one frame.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let Some(animation) = *ctx.scroll_animation else {
        return Task::none();
    };

    let offset = animation.offset_at(now);
    if animation.is_finished(now) {
        *ctx.scroll_animation = None;
    }
    snap_to(ctx.viewport, offset)
}

/// Starts animating toward the requested region, or jumps straight there
/// when animation is disabled.
fn start_scroll(
    ctx: &mut UpdateContext<'_>,
    request: ScrollRequest<SectionId>,
    now: Instant,
) -> Task<Message> {
    let target = ctx.viewport.clamp(request.target);
    let from = ctx.viewport.offset;

    if ctx.scroll_duration.is_zero() {
        *ctx.scroll_animation = None;
        return snap_to(ctx.viewport, target);
    }

    tracing::debug!(section = %request.id, from, to = target, "scrolling to section");
    *ctx.scroll_animation = Some(ScrollAnimation::new(from, target, now, ctx.scroll_duration));
    Task::none()
}

/// Snaps the page scrollable to an absolute offset.
fn snap_to(viewport: &ViewportState, offset: f32) -> Task<Message> {
    match viewport.relative(offset) {
        Some(y) => operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y }),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::store::LANGUAGE_KEY;
    use crate::i18n::table::TextTable;
    use crate::i18n::Language;
    use crate::preferences::{MemoryStore, PreferenceStore};
    use crate::sections::Region;

    struct Fixture {
        locale: LocaleStore,
        tracker: SectionTracker<SectionId>,
        viewport: ViewportState,
        showcase: project_modal::State,
        scroll_animation: Option<ScrollAnimation>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut tracker = SectionTracker::new(SectionId::About);
            tracker.recompute_regions(vec![
                Region::new(SectionId::About, 0.0, 800.0),
                Region::new(SectionId::Experience, 800.0, 1200.0),
                Region::new(SectionId::Projects, 2000.0, 1500.0),
            ]);
            Self {
                locale: LocaleStore::new(TextTable::empty(), Box::new(MemoryStore::new())),
                tracker,
                viewport: ViewportState {
                    offset: 0.0,
                    height: 600.0,
                    content_height: 3500.0,
                },
                showcase: project_modal::State::new(),
                scroll_animation: None,
            }
        }

        fn ctx(&mut self, scroll_duration: Duration) -> UpdateContext<'_> {
            UpdateContext {
                locale: &mut self.locale,
                tracker: &mut self.tracker,
                viewport: &mut self.viewport,
                showcase: &mut self.showcase,
                scroll_animation: &mut self.scroll_animation,
                scroll_duration,
            }
        }
    }

    #[test]
    fn navigate_starts_animation_toward_clamped_target() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::from_millis(300));
        let (_task, relayout) =
            handle_navbar_message(&mut ctx, navbar::Message::NavigateTo(SectionId::Projects));
        assert!(!relayout);

        let animation = fixture.scroll_animation.expect("animation started");
        // max offset is 3500 - 600
        assert_eq!(animation.target(), 2000.0);
        assert_eq!(fixture.tracker.active(), SectionId::Projects);
    }

    #[test]
    fn zero_duration_skips_animation() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::ZERO);
        let _ = handle_navbar_message(&mut ctx, navbar::Message::NavigateTo(SectionId::Experience));
        assert!(fixture.scroll_animation.is_none());
        assert_eq!(fixture.tracker.active(), SectionId::Experience);
    }

    #[test]
    fn language_selection_requests_relayout() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::ZERO);
        let (_task, relayout) =
            handle_navbar_message(&mut ctx, navbar::Message::SelectLanguage(Language::Spanish));
        assert!(relayout);
        assert_eq!(fixture.locale.language(), Language::Spanish);
    }

    #[test]
    fn reselecting_session_language_persists_without_relayout() {
        let mut fixture = Fixture::new();
        fixture.locale.use_session_language(Language::Spanish);

        let mut ctx = fixture.ctx(Duration::ZERO);
        let (_task, relayout) =
            handle_navbar_message(&mut ctx, navbar::Message::SelectLanguage(Language::Spanish));
        assert!(!relayout);

        let store = fixture.locale.into_store();
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn placeholder_links_are_not_opened() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::ZERO);
        let (_task, relayout) = handle_navbar_message(&mut ctx, navbar::Message::OpenUrl("#"));
        assert!(!relayout);
        let _ = handle_experience_message(experience::Message::OpenUrl("#"));
        let _ = handle_open_url("");
    }

    #[test]
    fn dialog_close_goes_through_handler() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::ZERO);
        let _ = handle_projects_message(&mut ctx, &projects::Message::Open("sales-chats"));
        let _ = handle_project_modal_message(&mut ctx, &project_modal::Message::OpenUrl("#"));
        assert!(fixture.showcase.is_open());

        let mut ctx = fixture.ctx(Duration::ZERO);
        let _ = handle_project_modal_message(&mut ctx, &project_modal::Message::Close);
        assert!(!fixture.showcase.is_open());
    }

    #[test]
    fn scrolled_updates_viewport_and_tracker() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::ZERO);
        let _ = handle_scrolled(&mut ctx, 1900.0, 600.0, 3500.0);
        assert_eq!(fixture.viewport.offset, 1900.0);
        assert_eq!(fixture.tracker.active(), SectionId::Projects);
    }

    #[test]
    fn tick_without_animation_is_noop() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::ZERO);
        let _ = handle_tick(&mut ctx, Instant::now());
        assert!(fixture.scroll_animation.is_none());
    }

    #[test]
    fn tick_keeps_animation_until_finished() {
        let mut fixture = Fixture::new();
        let start = Instant::now();
        fixture.scroll_animation = Some(ScrollAnimation::new(
            0.0,
            2000.0,
            start,
            Duration::from_millis(400),
        ));

        let mut ctx = fixture.ctx(Duration::from_millis(400));
        let _ = handle_tick(&mut ctx, start + Duration::from_millis(100));
        assert!(fixture.scroll_animation.is_some());

        let mut ctx = fixture.ctx(Duration::from_millis(400));
        let _ = handle_tick(&mut ctx, start + Duration::from_millis(400));
        assert!(fixture.scroll_animation.is_none());
    }

    #[test]
    fn opening_project_shows_dialog() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx(Duration::ZERO);
        let _ = handle_projects_message(&mut ctx, &projects::Message::Open("chats-metrics"));
        assert_eq!(
            fixture.showcase.project().map(|project| project.id),
            Some("chats-metrics")
        );
    }
}
