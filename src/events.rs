// SPDX-License-Identifier: MPL-2.0
//! Events into the engine and notifications back out.
//!
//! The embedding UI translates user input into [`GalleryEvent`] values and
//! feeds them to [`crate::gallery::Gallery::handle`]; each call returns the
//! [`Notification`]s describing what changed, so a passive renderer knows
//! exactly which surface to redraw.

use crate::domain::{Category, ImageRef, ItemId};
use crate::error::Error;
use crate::filter::GalleryFilter;
use crate::lightbox::LightboxStatus;

/// One user intent, expressed toolkit-independently.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    /// Register a new item directly, bypassing the upload form.
    AddRequested { category: Category, image: ImageRef },

    /// Remove an item. Unknown ids are ignored.
    RemoveRequested(ItemId),

    /// Switch the active filter.
    FilterSelected(GalleryFilter),

    /// Open the lightbox on a visible item.
    OpenRequested(ItemId),

    /// Close the lightbox. Benign when nothing is open.
    CloseRequested,

    /// Step to the next visible item, wrapping at the end.
    NextRequested,

    /// Step to the previous visible item, wrapping at the front.
    PreviousRequested,

    /// Raw wheel delta over the lightboxed image.
    WheelZoomed(f32),

    /// Snap the lightbox zoom back to natural size.
    ZoomResetRequested,

    /// A category was picked in the upload form.
    UploadCategorySelected(Category),

    /// The upload form's category selection returned to the placeholder.
    UploadCategoryCleared,

    /// A file was picked into the upload form.
    UploadFileSelected { name: String, image: ImageRef },

    /// The picked file was removed from the upload form.
    UploadFileCleared,

    /// Submit the upload form. Ignored while the form is incomplete.
    UploadSubmitted,
}

/// State change reported back to the embedder.
#[derive(Debug, Clone)]
pub enum Notification {
    /// The visible set changed; the grid should re-render in this order.
    VisibilityChanged { visible: Vec<ItemId> },

    /// The lightbox opened, closed, navigated, zoomed or was reindexed.
    LightboxChanged(LightboxStatus),

    /// The upload form gained or lost completeness.
    UploadFormChanged { is_complete: bool },

    /// An operation was refused; state is unchanged.
    Rejected { error: Error },
}
