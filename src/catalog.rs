// SPDX-License-Identifier: MPL-2.0
//! The salon's static catalog: the service menu and the portfolio gallery.
//!
//! Both collections are fixed at compile time. Image fields are references
//! to the salon's promotional photography and are never fetched by the
//! application; the UI renders tonal placeholder tiles instead.

use crate::domain::catalog::{GalleryItem, Service, ServiceCategory};

const SERVICES: [Service; 6] = [
    Service {
        id: "1",
        title: "Balayage & Coloring",
        description: "Expert hand-painted highlights and bespoke color transformations for a natural, sun-kissed finish.",
        price: "From R850",
        category: ServiceCategory::Hair,
        image: "https://images.unsplash.com/photo-1522337660859-02fbefca4702?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "2",
        title: "Hair Braiding",
        description: "Intricate and protective braiding styles including cornrows, box braids, and custom designs.",
        price: "From R450",
        category: ServiceCategory::Hair,
        image: "https://images.unsplash.com/photo-1649931754013-176840733d31?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "3",
        title: "Locs & Natural Hair",
        description: "Professional installation, maintenance, and styling for locs and natural hair textures.",
        price: "From R350",
        category: ServiceCategory::Hair,
        image: "https://images.unsplash.com/photo-1605980776566-0486c3ac7617?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "4",
        title: "Extensions & Weaves",
        description: "Premium hair extensions and weaves for added length, volume, and versatile styling options.",
        price: "From R1200",
        category: ServiceCategory::Hair,
        image: "https://images.unsplash.com/photo-1595476108010-b4d1f102b1b1?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "5",
        title: "Women's & Children's Cut",
        description: "Precision cutting for all ages, from classic bobs to modern layers and kids styles.",
        price: "From R250",
        category: ServiceCategory::Hair,
        image: "https://images.unsplash.com/photo-1560869713-7d0a29430803?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "6",
        title: "Curly Hair Specialty",
        description: "Dedicated care and styling for curly, coily, and kinky hair textures to enhance natural bounce.",
        price: "From R400",
        category: ServiceCategory::Hair,
        image: "https://images.unsplash.com/photo-1519699047748-de8e457a634e?auto=format&fit=crop&q=80&w=800",
    },
];

const GALLERY_ITEMS: [GalleryItem; 8] = [
    GalleryItem {
        id: "g1",
        title: "Copper Braids",
        tag: "Braiding",
        image: "https://images.unsplash.com/photo-1584297062310-6539799d3cf2?auto=format&fit=crop&q=80&w=800",
    },
    GalleryItem {
        id: "g2",
        title: "Editorial Locs",
        tag: "Locs",
        image: "https://images.unsplash.com/photo-1595913253503-4f9328479e0a?auto=format&fit=crop&q=80&w=800",
    },
    GalleryItem {
        id: "g3",
        title: "Golden Balayage",
        tag: "Color",
        image: "https://images.unsplash.com/photo-1634449571010-02389ed0f9b0?auto=format&fit=crop&q=80&w=800",
    },
    GalleryItem {
        id: "g4",
        title: "Natural Curls",
        tag: "Natural",
        image: "https://images.unsplash.com/photo-1535131749006-b7f58c99034b?auto=format&fit=crop&q=80&w=800",
    },
    GalleryItem {
        id: "g5",
        title: "Sleek Weave",
        tag: "Extensions",
        image: "https://images.unsplash.com/photo-1620331311520-246422ff83f9?auto=format&fit=crop&q=80&w=800",
    },
    GalleryItem {
        id: "g6",
        title: "Modern Pixie",
        tag: "Cut",
        image: "https://images.unsplash.com/photo-1580618672591-eb180b1a973f?auto=format&fit=crop&q=80&w=800",
    },
    GalleryItem {
        id: "g7",
        title: "Intricate Knots",
        tag: "Braiding",
        image: "https://images.unsplash.com/photo-1617391654484-2894196c2cc9?auto=format&fit=crop&q=80&w=800",
    },
    GalleryItem {
        id: "g8",
        title: "Platinum Silk",
        tag: "Color",
        image: "https://images.unsplash.com/photo-1605497788044-5a32c7078486?auto=format&fit=crop&q=80&w=800",
    },
];

/// The full service menu, in display order.
#[must_use]
pub fn services() -> &'static [Service] {
    &SERVICES
}

/// The full portfolio gallery, in display order.
#[must_use]
pub fn gallery_items() -> &'static [GalleryItem] {
    &GALLERY_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_expected_sizes() {
        assert_eq!(services().len(), 6);
        assert_eq!(gallery_items().len(), 8);
    }

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = services().iter().map(|service| service.id).collect();
        assert_eq!(ids.len(), services().len());
    }

    #[test]
    fn gallery_ids_are_unique() {
        let ids: HashSet<_> = gallery_items().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), gallery_items().len());
    }

    #[test]
    fn gallery_order_matches_catalog_definition() {
        let ids: Vec<_> = gallery_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["g1", "g2", "g3", "g4", "g5", "g6", "g7", "g8"]);
    }

    #[test]
    fn no_catalog_entry_has_empty_copy() {
        for service in services() {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
            assert!(!service.price.is_empty());
        }
        for item in gallery_items() {
            assert!(!item.title.is_empty());
            assert!(!item.tag.is_empty());
        }
    }
}
