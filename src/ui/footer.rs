// SPDX-License-Identifier: MPL-2.0
//! Footer band shown below every section.
//!
//! Brand tagline, social labels, and a directory of section shortcuts.

use crate::app::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

const SOCIAL_LABELS: [&str; 3] = ["Instagram", "Facebook", "X"];

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Section),
}

/// Process a footer message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(section) => Event::Navigate(section),
    }
}

/// Render the footer.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Row::new()
        .spacing(spacing::XXS)
        .push(
            Text::new("MIDWAY")
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new("MEWS")
                .size(typography::TITLE_MD)
                .color(palette::GOLD_500),
        );

    let tagline = Text::new(ctx.i18n.tr("footer-tagline")).size(typography::BODY);

    let mut socials = Row::new().spacing(spacing::LG);
    for label in SOCIAL_LABELS {
        socials = socials.push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::STONE_500),
        );
    }

    let brand_column = Column::new()
        .spacing(spacing::MD)
        .max_width(380.0)
        .push(brand)
        .push(tagline)
        .push(socials);

    let directory = directory_column(ctx.i18n);

    let columns = Row::new()
        .spacing(spacing::XXL)
        .push(Container::new(brand_column).width(Length::Fill))
        .push(directory);

    let copyright = Text::new(ctx.i18n.tr("footer-copyright"))
        .size(typography::CAPTION)
        .color(palette::STONE_500);

    let content = Column::new()
        .spacing(spacing::XL)
        .push(columns)
        .push(copyright);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::footer)
        .into()
}

/// Build the section directory column.
fn directory_column<'a>(i18n: &I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("footer-directory-label"))
        .size(typography::CAPTION)
        .color(palette::GOLD_500);

    let entries = [
        ("footer-directory-services", Section::Services),
        ("footer-directory-gallery", Section::Portfolio),
        ("footer-directory-contact", Section::Contact),
    ];

    let mut column = Column::new().spacing(spacing::SM).push(heading);
    for (key, section) in entries {
        column = column.push(
            button(Text::new(i18n.tr(key)).size(typography::BODY))
                .on_press(Message::Navigate(section))
                .padding(0)
                .style(styles::button::quiet),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn directory_entries_emit_navigate_events() {
        let event = update(Message::Navigate(Section::Portfolio));
        assert!(matches!(event, Event::Navigate(Section::Portfolio)));
    }
}
