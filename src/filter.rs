// SPDX-License-Identifier: MPL-2.0
//! Filter selection and the derived visible set.
//!
//! Exactly one filter is active at a time. The visible set is a cached
//! derivation over the registry, recomputed when the filter changes or the
//! registry reports a mutation; it is never edited in place.

use crate::domain::{Category, GalleryItem, ItemId};
use crate::registry::ItemRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which items the gallery currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryFilter {
    /// Every registered item.
    #[default]
    All,

    /// Only items in the given category.
    Category(Category),
}

impl GalleryFilter {
    #[must_use]
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(category) => item.category() == *category,
        }
    }

    /// Whether this filter narrows the gallery at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, GalleryFilter::All)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Category(category) => category.label(),
        }
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active filter plus the cached visible set derived from it.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active: GalleryFilter,
    visible: Vec<ItemId>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> GalleryFilter {
        self.active
    }

    /// Visible item ids in presentation order.
    #[must_use]
    pub fn visible(&self) -> &[ItemId] {
        &self.visible
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether the current filter leaves nothing to show.
    ///
    /// Drives the "no items" indicator in the embedding UI.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.visible.contains(&id)
    }

    /// Position of `id` within the visible order.
    #[must_use]
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.visible.iter().position(|visible| *visible == id)
    }

    /// Switches the active filter and recomputes visibility.
    ///
    /// Selecting the filter that is already active is a no-op and returns
    /// `false`; nothing is recomputed.
    pub fn set(&mut self, filter: GalleryFilter, registry: &ItemRegistry) -> bool {
        if filter == self.active {
            return false;
        }
        self.active = filter;
        self.visible = registry.compute_visible(&self.active);
        true
    }

    /// Recomputes visibility after a registry mutation.
    ///
    /// Returns `true` when the visible set actually changed.
    pub fn refresh(&mut self, registry: &ItemRegistry) -> bool {
        let recomputed = registry.compute_visible(&self.active);
        if recomputed == self.visible {
            return false;
        }
        self.visible = recomputed;
        true
    }
}
