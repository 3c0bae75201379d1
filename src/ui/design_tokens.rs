// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (the salon's gold/obsidian/stone brand)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use midway_mews::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::OBSIDIAN
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Near-black brand ink used for primary surfaces and text.
    pub const OBSIDIAN: Color = Color::from_rgb(0.11, 0.10, 0.09);

    /// Warm off-white page background.
    pub const PARCHMENT: Color = Color::from_rgb(0.98, 0.96, 0.93);

    // Neutral stone scale
    pub const STONE_900: Color = Color::from_rgb(0.16, 0.15, 0.14);
    pub const STONE_700: Color = Color::from_rgb(0.32, 0.30, 0.28);
    pub const STONE_500: Color = Color::from_rgb(0.47, 0.44, 0.42);
    pub const STONE_300: Color = Color::from_rgb(0.72, 0.69, 0.66);
    pub const STONE_100: Color = Color::from_rgb(0.93, 0.91, 0.89);

    // Brand colors (gold scale)
    pub const GOLD_100: Color = Color::from_rgb(0.97, 0.93, 0.83);
    pub const GOLD_300: Color = Color::from_rgb(0.89, 0.78, 0.52);
    pub const GOLD_500: Color = Color::from_rgb(0.80, 0.64, 0.28);
    pub const GOLD_700: Color = Color::from_rgb(0.62, 0.47, 0.16);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Navbar presentation: generous at the top of the page, compact once
    // the visitor has scrolled past the hero.
    pub const NAVBAR_PADDING: f32 = 24.0;
    pub const NAVBAR_PADDING_COMPACT: f32 = 8.0;

    // Content tiles
    pub const SERVICE_CARD_WIDTH: f32 = 300.0;
    pub const GALLERY_TILE_HEIGHT: f32 = 180.0;
    pub const HERO_TILE_HEIGHT: f32 = 140.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for consistent text hierarchy.
    //!
    //! - Display: the hero heading only
    //! - Titles: section headings
    //! - Body: primary content text
    //! - Caption: kickers, badges, small info

    /// Display heading - hero section only.
    pub const DISPLAY: f32 = 56.0;

    /// Large title - Section headings (Services, Gallery, Contact)
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand wordmark, card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Sub-headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Kickers, badges, chips, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, selected chips
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::NAVBAR_PADDING > sizing::NAVBAR_PADDING_COMPACT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::GOLD_500.r >= 0.0 && palette::GOLD_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn gold_scale_darkens_with_weight() {
        assert!(palette::GOLD_100.r > palette::GOLD_500.r);
        assert!(palette::GOLD_500.r > palette::GOLD_700.r);
    }
}
