// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders exactly one of
//! the four storefront sections based on application state, framed by the
//! navbar above and the footer below.

use super::{Message, Section};
use crate::i18n::fluent::I18n;
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::footer::{self, ViewContext as FooterViewContext};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::services::{self, ViewContext as ServicesViewContext};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Id, Scrollable};
use iced::{Element, Length};

/// Id of the content scrollable, shared with the update logic so section
/// switches can snap it back to the top.
pub(crate) const CONTENT_SCROLLABLE_ID: &str = "storefront-content";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub section: Section,
    pub gallery: &'a gallery::State,
    pub contact: &'a contact::State,
    pub scrolled: bool,
}

/// Renders the current application view based on the active section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.section,
        compact: ctx.scrolled,
    })
    .map(Message::Navbar);

    let section_view: Element<'_, Message> = match ctx.section {
        Section::Home => home::view(HomeViewContext { i18n: ctx.i18n }).map(Message::Home),
        Section::Services => {
            services::view(ServicesViewContext { i18n: ctx.i18n }).map(Message::Services)
        }
        Section::Portfolio => gallery::view(GalleryViewContext {
            i18n: ctx.i18n,
            state: ctx.gallery,
        })
        .map(Message::Gallery),
        Section::Contact => contact::view(ContactViewContext {
            i18n: ctx.i18n,
            state: ctx.contact,
        })
        .map(Message::Contact),
    };

    let footer_view = footer::view(FooterViewContext { i18n: ctx.i18n }).map(Message::Footer);

    let content = Column::new().push(section_view).push(footer_view);

    let scrollable_content = Scrollable::new(content)
        .id(Id::new(CONTENT_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y));

    Column::new()
        .push(navbar_view)
        .push(scrollable_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
