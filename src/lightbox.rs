// SPDX-License-Identifier: MPL-2.0
//! Lightbox session control.
//!
//! The lightbox shows one visible item at a time and navigates the visible
//! order with wrap-around, so "next" from the last item lands on the first.
//! All session state lives in an [`Option`]: no session means closed, and no
//! stale index can outlive the item it pointed at. Navigation and zoom only
//! exist while a session is open.

use crate::config::defaults::WHEEL_ZOOM_SENSITIVITY;
use crate::domain::{ItemId, ZoomFactor};
use crate::error::{LightboxError, Result};
use crate::filter::FilterState;

/// State carried while the lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LightboxSession {
    item: ItemId,
    index: usize,
    zoom: ZoomFactor,
}

impl LightboxSession {
    /// A fresh session always starts at natural zoom.
    fn opened(item: ItemId, index: usize) -> Self {
        Self {
            item,
            index,
            zoom: ZoomFactor::default(),
        }
    }
}

/// Outcome of re-checking an open session against the current visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revalidation {
    /// No session, or the session still points at the same position.
    Unchanged,

    /// The displayed item is still visible but its position shifted.
    Reindexed,

    /// The displayed item left the visible set; the session was closed.
    Closed,
}

/// Read-only snapshot of the lightbox for embedding UIs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxStatus {
    /// Item currently displayed, if a session is open.
    pub current: Option<ItemId>,

    /// Position of the displayed item within the visible order.
    pub index: Option<usize>,

    /// Zoom factor of the open session.
    pub zoom: Option<ZoomFactor>,

    /// Size of the visible set the session navigates over.
    pub visible_len: usize,
}

impl LightboxStatus {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// One-based counter for a "2 of 5" style caption.
    #[must_use]
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.index.map(|index| (index + 1, self.visible_len))
    }

    /// Whether navigation can land anywhere new.
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.visible_len > 1
    }
}

/// Controller for the single lightbox session.
#[derive(Debug, Clone)]
pub struct Lightbox {
    session: Option<LightboxSession>,
    wheel_sensitivity: f32,
}

impl Lightbox {
    /// Creates a controller with the given wheel sensitivity.
    ///
    /// Non-finite sensitivities fall back to the default.
    pub fn new(wheel_sensitivity: f32) -> Self {
        let wheel_sensitivity = if wheel_sensitivity.is_finite() {
            wheel_sensitivity
        } else {
            WHEEL_ZOOM_SENSITIVITY
        };
        Self {
            session: None,
            wheel_sensitivity,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<ItemId> {
        self.session.map(|session| session.item)
    }

    #[must_use]
    pub fn zoom(&self) -> Option<ZoomFactor> {
        self.session.map(|session| session.zoom)
    }

    /// Opens a session on `id`.
    ///
    /// Fails without touching state when the visible set is empty or `id` is
    /// not in it. Opening over an existing session replaces it; zoom starts
    /// at natural size either way.
    pub fn open(&mut self, id: ItemId, filter: &FilterState) -> Result<()> {
        if filter.is_empty() {
            return Err(LightboxError::NoVisibleItems.into());
        }
        let index = filter
            .position_of(id)
            .ok_or(LightboxError::ItemNotVisible(id))?;
        self.session = Some(LightboxSession::opened(id, index));
        Ok(())
    }

    /// Closes the session.
    ///
    /// Returns `false` when nothing was open; closing twice is benign.
    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Advances to the next visible item, wrapping past the end.
    ///
    /// With a single visible item this lands on the same item again. Zoom
    /// resets on every step.
    pub fn next(&mut self, filter: &FilterState) -> Result<ItemId> {
        self.revalidate(filter);
        let session = self.session.ok_or(LightboxError::SessionClosed)?;
        // Revalidation kept the session, so the visible set is non-empty.
        let len = filter.len();
        let index = (session.index + 1) % len;
        let item = filter.visible()[index];
        self.session = Some(LightboxSession::opened(item, index));
        Ok(item)
    }

    /// Steps back to the previous visible item, wrapping past the front.
    pub fn previous(&mut self, filter: &FilterState) -> Result<ItemId> {
        self.revalidate(filter);
        let session = self.session.ok_or(LightboxError::SessionClosed)?;
        // Revalidation kept the session, so the visible set is non-empty.
        let len = filter.len();
        let index = (session.index + len - 1) % len;
        let item = filter.visible()[index];
        self.session = Some(LightboxSession::opened(item, index));
        Ok(item)
    }

    /// Applies a raw wheel delta to the session zoom.
    ///
    /// The delta is scaled by the configured sensitivity before it reaches
    /// the factor, so wheel-up zooms in under the default negative
    /// sensitivity. Returns the zoom after clamping.
    pub fn wheel_zoom(&mut self, raw_delta: f32) -> Result<ZoomFactor> {
        let session = self
            .session
            .as_mut()
            .ok_or(LightboxError::SessionClosed)?;
        session.zoom = session.zoom.adjusted(raw_delta * self.wheel_sensitivity);
        Ok(session.zoom)
    }

    /// Snaps the session zoom back to natural size.
    pub fn reset_zoom(&mut self) -> Result<ZoomFactor> {
        let session = self
            .session
            .as_mut()
            .ok_or(LightboxError::SessionClosed)?;
        session.zoom = ZoomFactor::default();
        Ok(session.zoom)
    }

    /// Re-checks the session against the current visible set.
    ///
    /// Call after any registry or filter mutation. A session whose item is
    /// still visible keeps its zoom and follows the item to its new
    /// position; a session whose item dropped out of the visible set is
    /// closed rather than left pointing at a neighbour the user never chose.
    pub fn revalidate(&mut self, filter: &FilterState) -> Revalidation {
        let Some(session) = self.session else {
            return Revalidation::Unchanged;
        };
        match filter.position_of(session.item) {
            Some(index) if index == session.index => Revalidation::Unchanged,
            Some(index) => {
                self.session = Some(LightboxSession { index, ..session });
                Revalidation::Reindexed
            }
            None => {
                self.session = None;
                Revalidation::Closed
            }
        }
    }

    /// Snapshot of the current session for rendering.
    #[must_use]
    pub fn status(&self, filter: &FilterState) -> LightboxStatus {
        match self.session {
            Some(session) => LightboxStatus {
                current: Some(session.item),
                index: Some(session.index),
                zoom: Some(session.zoom),
                visible_len: filter.len(),
            },
            None => LightboxStatus {
                current: None,
                index: None,
                zoom: None,
                visible_len: filter.len(),
            },
        }
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(WHEEL_ZOOM_SENSITIVITY)
    }
}
