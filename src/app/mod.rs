// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront sections.
//!
//! The `App` struct wires together the domains (catalog presentation,
//! localization, preferences) and translates messages into state changes.
//! This file intentionally keeps policy decisions (window sizing, the
//! scroll threshold, locale resolution) close to the main update loop so
//! it is easy to audit user-facing behavior.

mod message;
mod section;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Vertical scroll offset beyond which the navbar switches to its compact
/// presentation.
pub const SCROLL_COMPACT_THRESHOLD: f32 = 50.0;

/// Root Iced application state that bridges UI sections, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    section: Section,
    gallery: gallery::State,
    contact: contact::State,
    scrolled: bool,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.section)
            .field("gallery_filter", self.gallery.filter())
            .field("scrolled", &self.scrolled)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            section: Section::default(),
            gallery: gallery::State::new(),
            contact: contact::State::new(),
            scrolled: false,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.theme_mode.unwrap_or_default(),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            section: &mut self.section,
            scrolled: &mut self.scrolled,
            gallery: &mut self.gallery,
            contact: &mut self.contact,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Services(services_message) => {
                update::handle_services_message(&mut ctx, services_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::Scrolled(offset) => update::handle_scrolled(&mut ctx, offset),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            section: self.section,
            gallery: &self.gallery,
            contact: &self.contact,
            scrolled: self.scrolled,
        })
    }

    /// The currently presented section.
    #[must_use]
    pub fn active_section(&self) -> Section {
        self.section
    }

    /// Whether the navbar is in its compact presentation.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}
