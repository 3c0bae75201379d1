// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::services;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Services(services::Message),
    Gallery(gallery::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    /// The content scrollable reported a new absolute vertical offset.
    Scrolled(f32),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
