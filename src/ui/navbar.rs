// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for section navigation.
//!
//! The navbar shows the brand wordmark, one item per storefront section
//! with the active item highlighted, and the "call to book" phone pill.
//! Once the visitor scrolls past the hero the bar switches to a compact
//! presentation with a solid background.

use crate::app::Section;
use crate::i18n::fluent::I18n;
use crate::ui::contact;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The currently presented section (its nav item is highlighted).
    pub active: Section,
    /// Whether the visitor has scrolled past the hero threshold.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Section),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(section) => Event::Navigate(section),
    }
}

/// Render the navigation bar.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = button(
        Row::new()
            .spacing(spacing::XXS)
            .push(Text::new("MIDWAY").size(typography::TITLE_MD))
            .push(
                Text::new("MEWS")
                    .size(typography::TITLE_MD)
                    .color(palette::GOLD_500),
            ),
    )
    .on_press(Message::Navigate(Section::Home))
    .style(styles::button::nav_item(false))
    .padding(0);

    let mut items = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    for section in Section::ALL {
        items = items.push(nav_item(ctx.i18n, section, ctx.active == section));
    }

    let phone_pill = Container::new(
        Text::new(format!(
            "{} · {}",
            ctx.i18n.tr("navbar-call-to-book"),
            contact::PHONE_DISPLAY
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XS, spacing::MD])
    .style(|_theme: &Theme| container::Style {
        border: Border {
            color: palette::GOLD_500,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    });

    let padding = if ctx.compact {
        sizing::NAVBAR_PADDING_COMPACT
    } else {
        sizing::NAVBAR_PADDING
    };

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(items).width(Length::Fill))
        .push(phone_pill);

    Container::new(bar)
        .width(Length::Fill)
        .padding([padding, spacing::LG])
        .style(styles::container::header(ctx.compact))
        .into()
}

/// Build a single nav item for `section`.
fn nav_item<'a>(i18n: &I18n, section: Section, active: bool) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
        .on_press(Message::Navigate(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_item(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Section::Home,
            compact: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_compact() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Section::Portfolio,
            compact: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navigate_message_emits_navigate_event() {
        let event = update(Message::Navigate(Section::Contact));
        assert!(matches!(event, Event::Navigate(Section::Contact)));
    }
}
