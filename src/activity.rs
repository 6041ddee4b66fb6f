// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory activity log.
//!
//! Every state transition the engine performs is recorded here as a tagged
//! event. The log is a ring buffer, so memory stays bounded no matter how
//! long a session runs; once full, the oldest event is dropped for each new
//! one. Events serialize to a stable tagged form for export, with the
//! capture instant kept only in memory.

use crate::config::defaults::{
    DEFAULT_ACTIVITY_CAPACITY, MAX_ACTIVITY_CAPACITY, MIN_ACTIVITY_CAPACITY,
};
use crate::domain::{Category, ItemId};
use crate::filter::GalleryFilter;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Ring buffer size, clamped into the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_ACTIVITY_CAPACITY, MAX_ACTIVITY_CAPACITY))
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    #[must_use]
    pub fn is_min(&self) -> bool {
        self.0 == MIN_ACTIVITY_CAPACITY
    }

    #[must_use]
    pub fn is_max(&self) -> bool {
        self.0 == MAX_ACTIVITY_CAPACITY
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_ACTIVITY_CAPACITY)
    }
}

/// Fixed-capacity FIFO over `VecDeque`.
///
/// Pushing onto a full buffer evicts the oldest element.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// What happened, in serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityKind {
    ItemAdded { id: ItemId, category: Category },
    ItemRemoved { id: ItemId },
    FilterChanged { filter: GalleryFilter },
    LightboxOpened { id: ItemId },
    LightboxNavigated { id: ItemId },
    LightboxClosed,
    /// The displayed item left the visible set and the session was closed
    /// on the user's behalf.
    LightboxAutoClosed { id: ItemId },
    ZoomAdjusted { factor: f32 },
    ZoomReset,
    OperationRejected { message_key: String },
}

/// One recorded transition with its capture instant.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEvent {
    #[serde(skip)]
    at: Instant,
    #[serde(flatten)]
    kind: ActivityKind,
}

impl ActivityEvent {
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &ActivityKind {
        &self.kind
    }

    /// Time since the event was recorded.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.at.elapsed()
    }
}

/// The engine's activity trail.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    events: CircularBuffer<ActivityEvent>,
}

impl ActivityLog {
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity.value()),
        }
    }

    pub fn record(&mut self, kind: ActivityKind) {
        self.events.push(ActivityEvent::new(kind));
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ActivityEvent> {
        self.events.latest()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_capacity_clamps() {
        assert_eq!(BufferCapacity::new(0).value(), MIN_ACTIVITY_CAPACITY);
        assert_eq!(
            BufferCapacity::new(usize::MAX).value(),
            MAX_ACTIVITY_CAPACITY
        );
        assert_eq!(BufferCapacity::new(500).value(), 500);
        assert_eq!(BufferCapacity::default().value(), DEFAULT_ACTIVITY_CAPACITY);
    }

    #[test]
    fn buffer_capacity_reports_bounds() {
        assert!(BufferCapacity::new(MIN_ACTIVITY_CAPACITY).is_min());
        assert!(BufferCapacity::new(MAX_ACTIVITY_CAPACITY).is_max());
        assert!(!BufferCapacity::default().is_min());
    }

    #[test]
    fn circular_buffer_evicts_oldest_when_full() {
        let mut buffer = CircularBuffer::new(3);
        for value in 1..=5 {
            buffer.push(value);
        }

        let contents: Vec<i32> = buffer.iter().copied().collect();
        assert_eq!(contents, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.latest(), Some(&5));
    }

    #[test]
    fn circular_buffer_clear_keeps_capacity() {
        let mut buffer = CircularBuffer::new(2);
        buffer.push("a");
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = CircularBuffer::new(0);
        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.latest(), Some(&2));
    }

    #[test]
    fn log_records_in_order() {
        let mut log = ActivityLog::default();
        log.record(ActivityKind::LightboxClosed);
        log.record(ActivityKind::ZoomReset);

        let kinds: Vec<&ActivityKind> = log.events().map(ActivityEvent::kind).collect();
        assert_eq!(kinds, vec![&ActivityKind::LightboxClosed, &ActivityKind::ZoomReset]);
        assert_eq!(log.latest().map(ActivityEvent::kind), Some(&ActivityKind::ZoomReset));
    }

    #[test]
    fn log_respects_capacity() {
        let mut log = ActivityLog::new(BufferCapacity::new(MIN_ACTIVITY_CAPACITY));
        for _ in 0..(MIN_ACTIVITY_CAPACITY + 5) {
            log.record(ActivityKind::ZoomReset);
        }
        assert_eq!(log.len(), MIN_ACTIVITY_CAPACITY);
    }

    #[test]
    fn activity_kind_serializes_with_tag() {
        let kind = ActivityKind::ItemAdded {
            id: ItemId::new(5),
            category: Category::Nature,
        };
        let json = serde_json::to_value(&kind).expect("serialize kind");
        assert_eq!(json["kind"], "item_added");
        assert_eq!(json["id"], 5);
        assert_eq!(json["category"], "nature");
    }

    #[test]
    fn event_serializes_kind_without_instant() {
        let event = ActivityEvent::new(ActivityKind::FilterChanged {
            filter: GalleryFilter::Category(Category::StreetArt),
        });
        let json = serde_json::to_value(&event).expect("serialize event");
        assert_eq!(json["kind"], "filter_changed");
        assert_eq!(json["filter"]["category"], "street-art");
        assert!(json.get("at").is_none());
    }

    #[test]
    fn event_age_is_monotonic() {
        let event = ActivityEvent::new(ActivityKind::ZoomReset);
        assert!(event.age() <= event.age());
    }
}
