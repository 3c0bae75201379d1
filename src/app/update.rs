// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for each part of
//! the storefront. `App::update` builds an `UpdateContext` over its fields
//! and forwards each message variant here.

use super::view::CONTENT_SCROLLABLE_ID;
use super::{Message, Section, SCROLL_COMPACT_THRESHOLD};
use crate::ui::contact;
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::gallery;
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::services::{self, Event as ServicesEvent};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable borrows of the `App` fields the handlers operate on.
pub struct UpdateContext<'a> {
    pub section: &'a mut Section,
    pub scrolled: &'a mut bool,
    pub gallery: &'a mut gallery::State,
    pub contact: &'a mut contact::State,
}

/// Switches the presented section.
///
/// Each section replaces the previous one wholesale; there is no history.
/// The content scrollable is snapped back to the top so a freshly selected
/// section always starts at its heading, and the compact-navbar flag is
/// cleared to match.
pub fn select_section(ctx: &mut UpdateContext<'_>, section: Section) -> Task<Message> {
    *ctx.section = section;
    *ctx.scrolled = false;

    operation::snap_to(
        Id::new(CONTENT_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    )
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Navigate(section) => select_section(ctx, section),
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::Navigate(section) => select_section(ctx, section),
    }
}

pub fn handle_services_message(
    ctx: &mut UpdateContext<'_>,
    message: services::Message,
) -> Task<Message> {
    match services::update(message) {
        ServicesEvent::GoToContact => select_section(ctx, Section::Contact),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let gallery::Event::None = gallery::update(ctx.gallery, message);
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    let contact::Event::None = contact::update(ctx.contact, message);
    Task::none()
}

pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::Navigate(section) => select_section(ctx, section),
    }
}

/// Tracks whether the visitor has scrolled past the hero threshold.
/// Cosmetic only: it compacts the navbar.
pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, offset: f32) -> Task<Message> {
    *ctx.scrolled = offset > SCROLL_COMPACT_THRESHOLD;
    Task::none()
}
