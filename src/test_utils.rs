// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit tests.

use crate::domain::{Category, ImageRef, ItemId};
use crate::events::GalleryEvent;
use crate::gallery::Gallery;

/// Builds a gallery seeded through the public event path.
///
/// Returned ids follow insertion order; the gallery presents them newest
/// first.
pub(crate) fn seeded_gallery(categories: &[Category]) -> (Gallery, Vec<ItemId>) {
    let mut gallery = Gallery::new();
    let mut ids = Vec::with_capacity(categories.len());
    for (index, category) in categories.iter().enumerate() {
        gallery.handle(GalleryEvent::AddRequested {
            category: *category,
            image: ImageRef::new(format!("image-{index}.jpg")),
        });
        ids.push(gallery.items()[0].id());
    }
    (gallery, ids)
}
