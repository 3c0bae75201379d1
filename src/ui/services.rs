// SPDX-License-Identifier: MPL-2.0
//! Services section: the curated treatment menu.
//!
//! Renders the static service catalog as a card grid. The web page's
//! `tel:` booking link becomes a navigate-to-contact action here, where
//! the phone number is displayed.

use crate::catalog;
use crate::domain::catalog::Service;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, Column, Container, Row, Text},
    Element, Length,
};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Contextual data needed to render the services section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the services section.
#[derive(Debug, Clone)]
pub enum Message {
    /// Book-visit pressed on a card; bookings are taken over the phone,
    /// shown in the contact section.
    BookVisit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GoToContact,
}

/// Process a services section message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::BookVisit => Event::GoToContact,
    }
}

/// Render the services section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let kicker = Text::new(ctx.i18n.tr("services-kicker"))
        .size(typography::CAPTION)
        .color(palette::GOLD_500);
    let title = Text::new(ctx.i18n.tr("services-title")).size(typography::TITLE_LG);

    let mut grid = Column::new().spacing(spacing::LG);
    for chunk in catalog::services().chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::LG);
        for service in chunk {
            row = row.push(service_card(ctx.i18n, service));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(kicker)
        .push(title)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::XXL, spacing::XL])
        .into()
}

/// Build one service card.
fn service_card<'a>(i18n: &I18n, service: &'a Service) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(i18n.tr(service.category.label_key())).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::badge);

    let title = Text::new(service.title).size(typography::TITLE_MD);
    let description = Text::new(service.description)
        .size(typography::BODY)
        .color(palette::STONE_500);

    let price = Text::new(service.price).size(typography::BODY_LG);
    let book = button(Text::new(i18n.tr("services-book-button")).size(typography::CAPTION))
        .on_press(Message::BookVisit)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::outline);

    let price_row = Row::new()
        .align_y(Vertical::Center)
        .push(Container::new(price).width(Length::Fill))
        .push(book);

    let card = Column::new()
        .spacing(spacing::SM)
        .push(badge)
        .push(title)
        .push(description)
        .push(rule::horizontal(1))
        .push(price_row);

    Container::new(card)
        .width(sizing::SERVICE_CARD_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
