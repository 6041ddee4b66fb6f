// SPDX-License-Identifier: MPL-2.0
//! Headless state engine for a filterable image gallery with a zoomable
//! lightbox.
//!
//! The crate owns four cooperating state machines: the item registry, the
//! filter with its derived visible set, the lightbox session and the upload
//! form. It renders nothing and decodes nothing; an [`ImageRef`] is an
//! opaque handle the embedder resolves back to real content. User input
//! arrives as [`GalleryEvent`]s through [`Gallery::handle`], and every call
//! returns the [`Notification`]s a passive renderer needs to stay in sync.
//!
//! ```
//! use gallery_core::{Category, Gallery, GalleryEvent, ImageRef};
//!
//! let mut gallery = Gallery::new();
//! gallery.handle(GalleryEvent::AddRequested {
//!     category: Category::Nature,
//!     image: ImageRef::new("photos/tree.jpg"),
//! });
//!
//! let id = gallery.items()[0].id();
//! gallery.handle(GalleryEvent::OpenRequested(id));
//! assert!(gallery.lightbox_status().is_open());
//! ```

pub mod activity;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod filter;
pub mod gallery;
pub mod lightbox;
pub mod registry;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;
pub use domain::{Category, GalleryItem, ImageRef, ItemId, ZoomFactor};
pub use error::{Error, LightboxError, Result};
pub use events::{GalleryEvent, Notification};
pub use filter::GalleryFilter;
pub use gallery::Gallery;
pub use lightbox::LightboxStatus;
