// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! The salon's offering is a fixed, read-only catalog: a menu of services
//! and a portfolio of gallery pieces. Both are defined at compile time and
//! never mutated, so the types here borrow `'static` string data instead
//! of owning allocations.

pub mod filter;

pub use filter::{tag_options, visible_items, GalleryFilter};

/// Broad grouping for a service on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Hair,
    Beauty,
    Nails,
    Skin,
}

impl ServiceCategory {
    /// Localization key for the category label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ServiceCategory::Hair => "category-hair",
            ServiceCategory::Beauty => "category-beauty",
            ServiceCategory::Nails => "category-nails",
            ServiceCategory::Skin => "category-skin",
        }
    }
}

/// A single entry on the service menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Display string, e.g. `"From R850"`. Pricing is presentational only.
    pub price: &'static str,
    pub category: ServiceCategory,
    /// Static reference to the promotional photo. Never fetched.
    pub image: &'static str,
}

/// A single piece in the portfolio gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: &'static str,
    pub title: &'static str,
    /// Free-form label used for filtering and grouping.
    pub tag: &'static str,
    /// Static reference to the photo. Never fetched.
    pub image: &'static str,
}
