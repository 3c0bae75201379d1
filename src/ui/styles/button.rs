// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary call-to-action pill (obsidian ink, gold on hover).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::OBSIDIAN)),
            text_color: WHITE,
            border: Border {
                color: palette::OBSIDIAN,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GOLD_500)),
            text_color: WHITE,
            border: Border {
                color: palette::GOLD_700,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Secondary pill with a hairline border and no fill.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border {
                color: palette::GOLD_500,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border {
                color: palette::STONE_300,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Gallery filter chip. The selected chip is filled with brand ink, the
/// rest stay outlined until hovered.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();

        if selected {
            return button::Style {
                background: Some(Background::Color(palette::OBSIDIAN)),
                text_color: WHITE,
                border: Border {
                    color: palette::OBSIDIAN,
                    width: border::WIDTH_SM,
                    radius: radius::FULL.into(),
                },
                shadow: shadow::SM,
                snap: true,
            };
        }

        let border_color = match status {
            button::Status::Hovered => palette::GOLD_300,
            _ => palette::STONE_100,
        };

        button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navbar item. The active section is rendered in brand gold; the rest
/// use the muted text tone until hovered.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();

        let text_color = if active {
            palette::GOLD_500
        } else {
            match status {
                button::Status::Hovered => palette_ext.background.base.text,
                _ => palette::STONE_500,
            }
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Quiet text button used for footer directory entries.
pub fn quiet(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => WHITE,
        _ => palette::STONE_300,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
