// SPDX-License-Identifier: MPL-2.0
//! Home (hero) section.
//!
//! A welcome spread: kicker line, the two-part display heading, intro
//! copy, two calls to action, and a mosaic of tonal tiles standing in
//! for the hero photography.

use crate::app::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Captions for the hero mosaic, mirroring the salon's promotional shots.
const MOSAIC_CAPTIONS: [&str; 4] = [
    "Braiding Mastery",
    "Locs Maintenance",
    "Professional Color",
    "Curly Hair Styling",
];

/// Contextual data needed to render the home section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the home section.
#[derive(Debug, Clone)]
pub enum Message {
    ExploreServices,
    ViewLocation,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Section),
}

/// Process a home section message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ExploreServices => Event::Navigate(Section::Services),
        Message::ViewLocation => Event::Navigate(Section::Contact),
    }
}

/// Render the home section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let kicker = Text::new(ctx.i18n.tr("home-kicker"))
        .size(typography::CAPTION)
        .color(palette::GOLD_500);

    let heading = Column::new()
        .push(Text::new(ctx.i18n.tr("home-heading-strong")).size(typography::DISPLAY))
        .push(
            Text::new(ctx.i18n.tr("home-heading-light"))
                .size(typography::DISPLAY)
                .color(palette::STONE_300),
        );

    let intro = Text::new(ctx.i18n.tr("home-intro")).size(typography::BODY_LG);

    let explore = button(Text::new(ctx.i18n.tr("home-explore-button")).size(typography::BODY))
        .on_press(Message::ExploreServices)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let location = button(Text::new(ctx.i18n.tr("home-location-button")).size(typography::BODY))
        .on_press(Message::ViewLocation)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::outline);

    let actions = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(explore)
        .push(location);

    let copy = Column::new()
        .spacing(spacing::LG)
        .max_width(460.0)
        .push(kicker)
        .push(heading)
        .push(intro)
        .push(actions);

    let spread = Row::new()
        .spacing(spacing::XXL)
        .push(copy)
        .push(mosaic());

    Container::new(spread)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .into()
}

/// Build the 2x2 tile mosaic shown beside the hero copy.
fn mosaic<'a>() -> Element<'a, Message> {
    let tones = [
        palette::GOLD_100,
        palette::STONE_100,
        palette::GOLD_300,
        palette::STONE_300,
    ];

    let mut grid = Column::new().spacing(spacing::MD);
    for row_index in 0..2 {
        let mut row = Row::new().spacing(spacing::MD);
        for col_index in 0..2 {
            let index = row_index * 2 + col_index;
            row = row.push(
                Container::new(
                    Text::new(MOSAIC_CAPTIONS[index]).size(typography::CAPTION),
                )
                .width(sizing::SERVICE_CARD_WIDTH / 2.0)
                .height(sizing::HERO_TILE_HEIGHT)
                .padding(spacing::SM)
                .style(styles::container::tile(tones[index])),
            );
        }
        grid = grid.push(row);
    }

    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn explore_navigates_to_services() {
        let event = update(Message::ExploreServices);
        assert!(matches!(event, Event::Navigate(Section::Services)));
    }

    #[test]
    fn location_navigates_to_contact() {
        let event = update(Message::ViewLocation);
        assert!(matches!(event, Event::Navigate(Section::Contact)));
    }
}
