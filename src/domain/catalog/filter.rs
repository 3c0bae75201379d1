// SPDX-License-Identifier: MPL-2.0
//! Gallery filtering for the domain layer.
//!
//! This module contains the pure filter logic for the portfolio gallery.
//! Everything here is a total function over in-memory catalog data; there
//! is no I/O and no failure path. Filtering by a tag that matches nothing
//! yields an empty result, which is the intended behavior, not a fault.

use super::GalleryItem;

/// Filter for the portfolio gallery.
///
/// Either the sentinel that shows everything, or a single tag that narrows
/// the gallery to the pieces carrying that exact label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    /// Show the full gallery.
    #[default]
    All,
    /// Show only pieces whose tag equals this label.
    Tag(String),
}

impl GalleryFilter {
    /// Returns `true` if this filter matches the given tag.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Self::All => true,
            Self::Tag(selected) => selected == tag,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// The selected tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Tag(selected) => Some(selected),
        }
    }
}

/// Returns the gallery pieces visible under `filter`, preserving the
/// catalog's original order.
///
/// `GalleryFilter::All` returns every item; a tag returns the subsequence
/// carrying that tag. A tag that matches nothing yields an empty list.
#[must_use]
pub fn visible_items<'a>(items: &'a [GalleryItem], filter: &GalleryFilter) -> Vec<&'a GalleryItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.tag))
        .collect()
}

/// Returns the selectable filter options for the given gallery.
///
/// The sentinel comes first, followed by each distinct tag in order of
/// first occurrence. Duplicate tags appear once.
#[must_use]
pub fn tag_options(items: &[GalleryItem]) -> Vec<GalleryFilter> {
    let mut options = vec![GalleryFilter::All];
    for item in items {
        let candidate = GalleryFilter::Tag(item.tag.to_string());
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gallery() -> Vec<GalleryItem> {
        vec![
            GalleryItem {
                id: "p1",
                title: "Copper Braids",
                tag: "Braiding",
                image: "braids.jpg",
            },
            GalleryItem {
                id: "p2",
                title: "Editorial Locs",
                tag: "Locs",
                image: "locs.jpg",
            },
            GalleryItem {
                id: "p3",
                title: "Intricate Knots",
                tag: "Braiding",
                image: "knots.jpg",
            },
        ]
    }

    #[test]
    fn all_filter_matches_everything() {
        let filter = GalleryFilter::All;
        assert!(filter.matches("Braiding"));
        assert!(filter.matches("anything at all"));
        assert!(!filter.is_active());
        assert_eq!(filter.tag(), None);
    }

    #[test]
    fn tag_filter_matches_exact_label_only() {
        let filter = GalleryFilter::Tag("Locs".to_string());
        assert!(filter.matches("Locs"));
        assert!(!filter.matches("locs"));
        assert!(!filter.matches("Braiding"));
        assert!(filter.is_active());
        assert_eq!(filter.tag(), Some("Locs"));
    }

    #[test]
    fn visible_items_with_all_returns_everything_in_order() {
        let gallery = sample_gallery();
        let visible = visible_items(&gallery, &GalleryFilter::All);
        let ids: Vec<_> = visible.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn visible_items_with_tag_preserves_relative_order() {
        let gallery = sample_gallery();
        let filter = GalleryFilter::Tag("Braiding".to_string());
        let visible = visible_items(&gallery, &filter);
        let ids: Vec<_> = visible.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert!(visible.iter().all(|item| item.tag == "Braiding"));
    }

    #[test]
    fn visible_items_with_unknown_tag_is_empty_not_fatal() {
        let gallery = sample_gallery();
        let filter = GalleryFilter::Tag("Cornrows".to_string());
        assert!(visible_items(&gallery, &filter).is_empty());
    }

    #[test]
    fn tag_options_start_with_sentinel_and_deduplicate() {
        let gallery = sample_gallery();
        let options = tag_options(&gallery);
        assert_eq!(
            options,
            vec![
                GalleryFilter::All,
                GalleryFilter::Tag("Braiding".to_string()),
                GalleryFilter::Tag("Locs".to_string()),
            ]
        );
    }

    #[test]
    fn tag_options_of_empty_gallery_is_just_the_sentinel() {
        let options = tag_options(&[]);
        assert_eq!(options, vec![GalleryFilter::All]);
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(GalleryFilter::default(), GalleryFilter::All);
    }
}
