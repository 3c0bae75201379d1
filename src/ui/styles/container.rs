// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used for service entries and the contact form panel.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so cards stay readable in both light and dark modes
/// without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    let base = palette_ext.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette::STONE_100,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Tonal placeholder tile standing in for a photo that is never fetched.
pub fn tile(tone: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tone)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small category badge shown on service cards.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD_100)),
        text_color: Some(palette::GOLD_700),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Header bar behind the navbar. Solid once the visitor has scrolled so
/// the nav stays legible over content, transparent at the top of the page.
pub fn header(compact: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette_ext = theme.extended_palette();
        let base = palette_ext.background.base.color;

        if compact {
            container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    base.r,
                    base.g,
                    base.b,
                    opacity::SURFACE,
                ))),
                shadow: shadow::SM,
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}

/// Dark footer band at the bottom of every section.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::OBSIDIAN)),
        text_color: Some(palette::STONE_300),
        ..Default::default()
    }
}

/// Inverted panel used for the boutique details half of the contact view.
pub fn boutique_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::OBSIDIAN)),
        text_color: Some(palette::STONE_100),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_transparent_until_scrolled() {
        let at_top = header(false)(&Theme::Light);
        assert!(at_top.background.is_none());

        let scrolled = header(true)(&Theme::Light);
        assert!(scrolled.background.is_some());
    }

    #[test]
    fn footer_uses_brand_ink() {
        let style = footer(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::OBSIDIAN))
        );
    }
}
