// SPDX-License-Identifier: MPL-2.0
//! Gallery items and their classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stable identity of a gallery item.
///
/// Identifiers are handed out by the registry and stay valid for the lifetime
/// of the item. They never repeat within one registry, so holding an `ItemId`
/// across removals is safe; lookups on a removed id simply find nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category an item belongs to.
///
/// The set is closed: the filter bar, the upload form and the per-item tag all
/// draw from the same four categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Nature,
    People,
    Architecture,
    StreetArt,
}

impl Category {
    /// All categories, in the order a filter bar presents them.
    pub const ALL: [Category; 4] = [
        Category::Nature,
        Category::People,
        Category::Architecture,
        Category::StreetArt,
    ];

    /// Machine-readable key, matching the serialized form.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::People => "people",
            Category::Architecture => "architecture",
            Category::StreetArt => "street-art",
        }
    }

    /// Human-readable label for tags and captions.
    ///
    /// Multi-word categories use a space where the key uses a hyphen.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::People => "people",
            Category::Architecture => "architecture",
            Category::StreetArt => "street art",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque handle to image content.
///
/// The engine never decodes or measures pixels; it only carries this handle
/// from registration through to the lightbox so the embedder can resolve it
/// back to real content (a URL, a path, a texture id). Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self(source.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One registered gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    id: ItemId,
    category: Category,
    image: ImageRef,
}

impl GalleryItem {
    pub fn new(id: ItemId, category: Category, image: ImageRef) -> Self {
        Self {
            id,
            category,
            image,
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_exposes_value() {
        let id = ItemId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::StreetArt).expect("serialize category");
        assert_eq!(json, "\"street-art\"");

        let parsed: Category = serde_json::from_str("\"street-art\"").expect("parse category");
        assert_eq!(parsed, Category::StreetArt);
    }

    #[test]
    fn category_label_replaces_hyphen_with_space() {
        assert_eq!(Category::StreetArt.key(), "street-art");
        assert_eq!(Category::StreetArt.label(), "street art");
        assert_eq!(Category::Nature.label(), "nature");
    }

    #[test]
    fn category_all_covers_every_variant() {
        assert_eq!(Category::ALL.len(), 4);
        for category in Category::ALL {
            assert!(Category::ALL.contains(&category));
        }
    }

    #[test]
    fn image_ref_round_trips_source() {
        let image = ImageRef::new("photos/tree.jpg");
        assert_eq!(image.as_str(), "photos/tree.jpg");

        let clone = image.clone();
        assert_eq!(clone, image);
    }

    #[test]
    fn gallery_item_exposes_fields() {
        let item = GalleryItem::new(
            ItemId::new(1),
            Category::Architecture,
            ImageRef::new("bridge.png"),
        );
        assert_eq!(item.id(), ItemId::new(1));
        assert_eq!(item.category(), Category::Architecture);
        assert_eq!(item.image().as_str(), "bridge.png");
    }
}
