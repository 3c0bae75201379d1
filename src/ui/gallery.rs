// SPDX-License-Identifier: MPL-2.0
//! Portfolio gallery section with tag filtering.
//!
//! A chip row built from the catalog's distinct tags narrows the grid of
//! gallery pieces. The filter itself is pure domain logic
//! (`domain::catalog::filter`); this module only owns the selected chip
//! and the presentation.

use crate::catalog;
use crate::domain::catalog::{filter, GalleryFilter, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Tiles per grid row.
const GRID_COLUMNS: usize = 4;

/// Tonal rotation for the placeholder tiles.
const TILE_TONES: [iced::Color; 4] = [
    palette::STONE_100,
    palette::GOLD_100,
    palette::STONE_300,
    palette::GOLD_300,
];

/// State for the gallery section: the currently selected filter.
#[derive(Debug, Clone, Default)]
pub struct State {
    filter: GalleryFilter,
}

impl State {
    /// Create gallery state with the sentinel filter selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected filter.
    #[must_use]
    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    /// The gallery pieces visible under the current filter, in catalog
    /// order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&'static GalleryItem> {
        filter::visible_items(catalog::gallery_items(), &self.filter)
    }
}

/// Contextual data needed to render the gallery section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the gallery section.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(GalleryFilter),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FilterSelected(selected) => {
            state.filter = selected;
            Event::None
        }
    }
}

/// Render the gallery section.
#[must_use]
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let kicker = Text::new(ctx.i18n.tr("gallery-kicker"))
        .size(typography::CAPTION)
        .color(palette::GOLD_500);
    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let chips = chip_row(ctx.i18n, ctx.state);

    let visible = ctx.state.visible_items();
    let grid: Element<'a, Message> = if visible.is_empty() {
        Text::new(ctx.i18n.tr("gallery-empty"))
            .size(typography::BODY)
            .color(palette::STONE_500)
            .into()
    } else {
        let mut grid = Column::new().spacing(spacing::MD);
        for chunk in visible.chunks(GRID_COLUMNS) {
            let mut row = Row::new().spacing(spacing::MD);
            for (offset, item) in chunk.iter().enumerate() {
                row = row.push(gallery_tile(item, offset));
            }
            grid = grid.push(row);
        }
        grid.into()
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(kicker)
        .push(title)
        .push(chips)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::XXL, spacing::XL])
        .into()
}

/// Build the filter chip row from the catalog's distinct tags.
fn chip_row<'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for option in filter::tag_options(catalog::gallery_items()) {
        let label = match &option {
            GalleryFilter::All => i18n.tr("gallery-filter-all"),
            GalleryFilter::Tag(tag) => tag.clone(),
        };
        let selected = state.filter == option;

        row = row.push(
            button(Text::new(label).size(typography::CAPTION))
                .on_press(Message::FilterSelected(option))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::chip(selected)),
        );
    }

    row.into()
}

/// Build one placeholder tile for a gallery piece.
fn gallery_tile<'a>(item: &'static GalleryItem, offset: usize) -> Element<'a, Message> {
    let tone = TILE_TONES[offset % TILE_TONES.len()];

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(item.tag)
                .size(typography::CAPTION)
                .color(palette::GOLD_700),
        )
        .push(Text::new(item.title).size(typography::BODY_LG));

    Container::new(caption)
        .width(Length::Fixed(sizing::SERVICE_CARD_WIDTH * 0.6))
        .height(Length::Fixed(sizing::GALLERY_TILE_HEIGHT))
        .padding(spacing::SM)
        .align_y(iced::alignment::Vertical::Bottom)
        .style(styles::container::tile(tone))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn initial_state_shows_all_eight_pieces() {
        let state = State::new();
        assert_eq!(state.filter(), &GalleryFilter::All);
        assert_eq!(state.visible_items().len(), 8);
    }

    #[test]
    fn selecting_braiding_narrows_to_g1_and_g7() {
        let mut state = State::new();
        update(
            &mut state,
            Message::FilterSelected(GalleryFilter::Tag("Braiding".to_string())),
        );

        let ids: Vec<_> = state.visible_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["g1", "g7"]);
    }

    #[test]
    fn unknown_tag_yields_empty_result() {
        let mut state = State::new();
        update(
            &mut state,
            Message::FilterSelected(GalleryFilter::Tag("Updo".to_string())),
        );
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn selecting_all_restores_the_full_gallery() {
        let mut state = State::new();
        update(
            &mut state,
            Message::FilterSelected(GalleryFilter::Tag("Locs".to_string())),
        );
        update(&mut state, Message::FilterSelected(GalleryFilter::All));
        assert_eq!(state.visible_items().len(), 8);
    }

    #[test]
    fn gallery_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn gallery_view_renders_empty_filter_result() {
        let i18n = I18n::default();
        let mut state = State::new();
        update(
            &mut state,
            Message::FilterSelected(GalleryFilter::Tag("Updo".to_string())),
        );
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
