// SPDX-License-Identifier: MPL-2.0
//! Core value types shared across the crate.
//!
//! Everything here is a plain value object: no I/O, no state machines, no
//! references into the engine. The engine modules ([`crate::registry`],
//! [`crate::lightbox`]) own the behavior; these types carry the data.

pub mod item;
pub mod zoom;

pub use item::{Category, GalleryItem, ImageRef, ItemId};
pub use zoom::{zoom_bounds, ZoomFactor};
