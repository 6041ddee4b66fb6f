// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of registered gallery items.
//!
//! The registry is the single source of truth for which items exist and in
//! what presentation order. Newly added items go to the front, matching a
//! gallery that shows the latest upload first. Identifiers are monotonic and
//! never reused, so stale ids held elsewhere (an open lightbox, an activity
//! record) can never silently alias a newer item.

use crate::domain::{Category, GalleryItem, ImageRef, ItemId};
use crate::filter::GalleryFilter;

#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<GalleryItem>,
    next_id: u64,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new item at the front of the presentation order.
    ///
    /// Returns the freshly assigned id.
    pub fn add(&mut self, category: Category, image: ImageRef) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        self.items.insert(0, GalleryItem::new(id, category, image));
        id
    }

    /// Removes the item with the given id.
    ///
    /// Returns `false` when no such item exists; removing an unknown id is
    /// benign and leaves the registry untouched.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// All items in presentation order, newest first.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of the items passing `filter`, in presentation order.
    ///
    /// Pure derivation; callers decide when to recompute and where to store
    /// the result.
    #[must_use]
    pub fn compute_visible(&self, filter: &GalleryFilter) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .map(|item| item.id())
            .collect()
    }
}
