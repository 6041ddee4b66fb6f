// SPDX-License-Identifier: MPL-2.0
//! The gallery engine.
//!
//! [`Gallery`] owns the registry, the filter state, the lightbox and the
//! upload form, and is the only place that mutates them. Embedders feed it
//! [`GalleryEvent`]s and render from the returned [`Notification`]s plus the
//! read-only queries; they never reach into the parts directly.
//!
//! After every mutation the engine reconciles: visibility is recomputed from
//! the registry, and an open lightbox session is re-checked against the new
//! visible set before any notification goes out. A call that changes nothing
//! returns no notifications. When both surfaces change in one call, the
//! grid's [`Notification::VisibilityChanged`] precedes the lightbox's
//! [`Notification::LightboxChanged`].

use crate::activity::{ActivityKind, ActivityLog, BufferCapacity};
use crate::config::Config;
use crate::domain::{Category, GalleryItem, ImageRef, ItemId};
use crate::error::Error;
use crate::events::{GalleryEvent, Notification};
use crate::filter::{FilterState, GalleryFilter};
use crate::lightbox::{Lightbox, LightboxStatus, Revalidation};
use crate::registry::ItemRegistry;
use crate::upload::UploadForm;

#[derive(Debug, Clone)]
pub struct Gallery {
    registry: ItemRegistry,
    filter: FilterState,
    lightbox: Lightbox,
    upload: UploadForm,
    activity: ActivityLog,
}

impl Gallery {
    /// Creates an empty gallery with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates an empty gallery from loaded settings.
    ///
    /// Callers that persist settings pair this with [`Config::load`].
    pub fn with_config(config: &Config) -> Self {
        Self {
            registry: ItemRegistry::new(),
            filter: FilterState::new(),
            lightbox: Lightbox::new(config.effective_wheel_sensitivity()),
            upload: UploadForm::new(),
            activity: ActivityLog::new(BufferCapacity::new(
                config.effective_activity_capacity(),
            )),
        }
    }

    /// Applies one event and returns the resulting state changes.
    pub fn handle(&mut self, event: GalleryEvent) -> Vec<Notification> {
        match event {
            GalleryEvent::AddRequested { category, image } => self.add_item(category, image),
            GalleryEvent::RemoveRequested(id) => self.remove_item(id),
            GalleryEvent::FilterSelected(filter) => self.select_filter(filter),
            GalleryEvent::OpenRequested(id) => self.open_lightbox(id),
            GalleryEvent::CloseRequested => self.close_lightbox(),
            GalleryEvent::NextRequested => self.step_forward(),
            GalleryEvent::PreviousRequested => self.step_back(),
            GalleryEvent::WheelZoomed(delta) => self.wheel_zoom(delta),
            GalleryEvent::ZoomResetRequested => self.reset_zoom(),
            GalleryEvent::UploadCategorySelected(category) => {
                self.upload_category_selected(Some(category))
            }
            GalleryEvent::UploadCategoryCleared => self.upload_category_selected(None),
            GalleryEvent::UploadFileSelected { name, image } => {
                self.upload_file_selected(Some((name, image)))
            }
            GalleryEvent::UploadFileCleared => self.upload_file_selected(None),
            GalleryEvent::UploadSubmitted => self.upload_submitted(),
        }
    }

    // ------------------------------------------------------------------
    // Registry and filter
    // ------------------------------------------------------------------

    fn add_item(&mut self, category: Category, image: ImageRef) -> Vec<Notification> {
        let mut notifications = Vec::new();
        let before = self.lightbox.status(&self.filter);

        let id = self.registry.add(category, image);
        self.activity.record(ActivityKind::ItemAdded { id, category });

        if self.filter.refresh(&self.registry) {
            notifications.push(self.visibility_notification());
        }
        self.reconcile_lightbox(before, &mut notifications);
        notifications
    }

    fn remove_item(&mut self, id: ItemId) -> Vec<Notification> {
        let mut notifications = Vec::new();
        let before = self.lightbox.status(&self.filter);

        // Unknown ids are a benign no-op, not a failure.
        if !self.registry.remove(id) {
            return notifications;
        }
        self.activity.record(ActivityKind::ItemRemoved { id });

        if self.filter.refresh(&self.registry) {
            notifications.push(self.visibility_notification());
        }
        self.reconcile_lightbox(before, &mut notifications);
        notifications
    }

    fn select_filter(&mut self, filter: GalleryFilter) -> Vec<Notification> {
        let mut notifications = Vec::new();
        let before = self.lightbox.status(&self.filter);

        // Re-selecting the active filter changes nothing.
        if !self.filter.set(filter, &self.registry) {
            return notifications;
        }
        self.activity.record(ActivityKind::FilterChanged { filter });

        // A filter switch always re-renders the grid, even when the visible
        // ids happen to coincide; the active highlight moved.
        notifications.push(self.visibility_notification());
        self.reconcile_lightbox(before, &mut notifications);
        notifications
    }

    // ------------------------------------------------------------------
    // Lightbox
    // ------------------------------------------------------------------

    fn open_lightbox(&mut self, id: ItemId) -> Vec<Notification> {
        match self.lightbox.open(id, &self.filter) {
            Ok(()) => {
                self.activity.record(ActivityKind::LightboxOpened { id });
                vec![self.lightbox_notification()]
            }
            Err(error) => self.reject(error),
        }
    }

    fn close_lightbox(&mut self) -> Vec<Notification> {
        if !self.lightbox.close() {
            return Vec::new();
        }
        self.activity.record(ActivityKind::LightboxClosed);
        vec![self.lightbox_notification()]
    }

    fn step_forward(&mut self) -> Vec<Notification> {
        match self.lightbox.next(&self.filter) {
            Ok(id) => {
                self.activity.record(ActivityKind::LightboxNavigated { id });
                vec![self.lightbox_notification()]
            }
            Err(error) => self.reject(error),
        }
    }

    fn step_back(&mut self) -> Vec<Notification> {
        match self.lightbox.previous(&self.filter) {
            Ok(id) => {
                self.activity.record(ActivityKind::LightboxNavigated { id });
                vec![self.lightbox_notification()]
            }
            Err(error) => self.reject(error),
        }
    }

    fn wheel_zoom(&mut self, delta: f32) -> Vec<Notification> {
        let before = self.lightbox.zoom();
        match self.lightbox.wheel_zoom(delta) {
            Ok(zoom) => {
                // Already at a bound, or a non-finite delta: nothing moved.
                if before == Some(zoom) {
                    return Vec::new();
                }
                self.activity.record(ActivityKind::ZoomAdjusted {
                    factor: zoom.value(),
                });
                vec![self.lightbox_notification()]
            }
            Err(error) => self.reject(error),
        }
    }

    fn reset_zoom(&mut self) -> Vec<Notification> {
        let before = self.lightbox.zoom();
        match self.lightbox.reset_zoom() {
            Ok(zoom) => {
                if before == Some(zoom) {
                    return Vec::new();
                }
                self.activity.record(ActivityKind::ZoomReset);
                vec![self.lightbox_notification()]
            }
            Err(error) => self.reject(error),
        }
    }

    // ------------------------------------------------------------------
    // Upload form
    // ------------------------------------------------------------------

    fn upload_category_selected(&mut self, category: Option<Category>) -> Vec<Notification> {
        let was_complete = self.upload.is_complete();
        match category {
            Some(category) => self.upload.select_category(category),
            None => self.upload.clear_category(),
        }
        self.upload_delta(was_complete)
    }

    fn upload_file_selected(&mut self, file: Option<(String, ImageRef)>) -> Vec<Notification> {
        let was_complete = self.upload.is_complete();
        match file {
            Some((name, image)) => self.upload.select_file(name, image),
            None => self.upload.clear_file(),
        }
        self.upload_delta(was_complete)
    }

    fn upload_submitted(&mut self) -> Vec<Notification> {
        // Incomplete submissions are ignored; the submit action should have
        // been disabled anyway.
        let Some((category, image)) = self.upload.submit() else {
            return Vec::new();
        };
        let mut notifications = self.add_item(category, image);
        notifications.push(Notification::UploadFormChanged { is_complete: false });
        notifications
    }

    fn upload_delta(&self, was_complete: bool) -> Vec<Notification> {
        let is_complete = self.upload.is_complete();
        if is_complete == was_complete {
            return Vec::new();
        }
        vec![Notification::UploadFormChanged { is_complete }]
    }

    // ------------------------------------------------------------------
    // Reconciliation
    // ------------------------------------------------------------------

    /// Re-checks the lightbox against the refreshed visible set and reports
    /// any observable difference, including a changed counter length.
    fn reconcile_lightbox(
        &mut self,
        before: LightboxStatus,
        notifications: &mut Vec<Notification>,
    ) {
        let displayed = self.lightbox.current();
        if self.lightbox.revalidate(&self.filter) == Revalidation::Closed {
            if let Some(id) = displayed {
                self.activity.record(ActivityKind::LightboxAutoClosed { id });
            }
        }
        let after = self.lightbox.status(&self.filter);
        if after != before {
            notifications.push(Notification::LightboxChanged(after));
        }
    }

    fn reject(&mut self, error: Error) -> Vec<Notification> {
        if let Error::Lightbox(lightbox_error) = &error {
            self.activity.record(ActivityKind::OperationRejected {
                message_key: lightbox_error.message_key().to_string(),
            });
        }
        vec![Notification::Rejected { error }]
    }

    fn visibility_notification(&self) -> Notification {
        Notification::VisibilityChanged {
            visible: self.filter.visible().to_vec(),
        }
    }

    fn lightbox_notification(&self) -> Notification {
        Notification::LightboxChanged(self.lightbox.status(&self.filter))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All registered items, newest first.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        self.registry.items()
    }

    /// Ids of the currently visible items, in presentation order.
    #[must_use]
    pub fn visible_ids(&self) -> &[ItemId] {
        self.filter.visible()
    }

    /// Visible items resolved against the registry, in presentation order.
    pub fn visible_items(&self) -> impl Iterator<Item = &GalleryItem> {
        self.filter
            .visible()
            .iter()
            .filter_map(|id| self.registry.get(*id))
    }

    #[must_use]
    pub fn active_filter(&self) -> GalleryFilter {
        self.filter.active()
    }

    /// Whether the current filter leaves nothing to show.
    #[must_use]
    pub fn has_no_visible_items(&self) -> bool {
        self.filter.is_empty()
    }

    #[must_use]
    pub fn lightbox_status(&self) -> LightboxStatus {
        self.lightbox.status(&self.filter)
    }

    /// The item the lightbox currently displays.
    #[must_use]
    pub fn displayed_item(&self) -> Option<&GalleryItem> {
        self.lightbox.current().and_then(|id| self.registry.get(id))
    }

    #[must_use]
    pub fn upload_form(&self) -> &UploadForm {
        &self.upload
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}
