// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a fixed header column beside a scrollable section column.
//! The project dialog, when open, is stacked over both.

use super::{Message, SCROLLABLE_ID};
use crate::i18n::store::LocaleStore;
use crate::sections::SectionId;
use crate::ui::layout::{PageLayout, COLUMN_PADDING};
use crate::ui::project_modal;
use crate::ui::styles;
use crate::ui::{about, experience, navbar, projects};
use iced::{
    alignment::Horizontal,
    widget::{scrollable::Viewport, Column, Container, Id, Row, Scrollable, Space, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub locale: &'a LocaleStore,
    pub active: SectionId,
    pub layout: &'a PageLayout,
    pub viewport_height: f32,
    pub showcase: &'a project_modal::State,
}

/// Renders the whole page.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(navbar::ViewContext {
        locale: ctx.locale,
        active: ctx.active,
    })
    .map(Message::Navbar);

    let page = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(view_sections(&ctx));

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let dialog = project_modal::view(project_modal::ViewContext {
        locale: ctx.locale,
        state: ctx.showcase,
    });

    match dialog {
        Some(dialog) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(dialog.map(Message::ProjectModal))
            .into(),
        None => base.into(),
    }
}

/// The scrollable column of sections. Each section gets exactly the height
/// the layout model assigned to it.
fn view_sections<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.active;
    let layout = ctx.layout;

    let about: Element<'a, Message> = about::view(about::ViewContext {
        locale: ctx.locale,
        extent: layout.extent(SectionId::About),
        active: active == SectionId::About,
    });
    let experience = experience::view(experience::ViewContext {
        locale: ctx.locale,
        extent: layout.extent(SectionId::Experience),
        active: active == SectionId::Experience,
    })
    .map(Message::Experience);
    let projects = projects::view(projects::ViewContext {
        locale: ctx.locale,
        extent: layout.extent(SectionId::Projects),
        active: active == SectionId::Projects,
    })
    .map(Message::Projects);

    let column = Column::new()
        .width(Length::Fixed(layout.column_width))
        .push(about)
        .push(experience)
        .push(projects)
        .push(Space::new().height(Length::Fixed(layout.trailing_space(ctx.viewport_height))));

    let centered = Container::new(column)
        .width(Length::Fill)
        .padding([0.0, COLUMN_PADDING])
        .align_x(Horizontal::Center);

    Scrollable::new(centered)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset: viewport.absolute_offset().y,
            height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .into()
}
