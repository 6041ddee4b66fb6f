// SPDX-License-Identifier: MPL-2.0
//! Zoom factor with construction-time clamping.

use crate::config::defaults::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};

/// Zoom bounds exposed to embedders.
///
/// UIs that render a zoom slider or disable zoom buttons at the ends can read
/// the bounds here without reaching into the config layer.
pub mod zoom_bounds {
    use crate::config::defaults;

    pub const MIN: f32 = defaults::MIN_ZOOM_FACTOR;
    pub const MAX: f32 = defaults::MAX_ZOOM_FACTOR;
    pub const DEFAULT: f32 = defaults::DEFAULT_ZOOM_FACTOR;
}

/// Magnification factor of the lightboxed image, always within bounds.
///
/// `1.0` is natural size. Values outside `[MIN_ZOOM_FACTOR,
/// MAX_ZOOM_FACTOR]` cannot be constructed; every path in clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a zoom factor, clamping into the supported range.
    ///
    /// Non-finite input falls back to the default factor.
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self(DEFAULT_ZOOM_FACTOR);
        }
        Self(value.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(&self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    #[must_use]
    pub fn is_max(&self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    /// Returns this factor shifted by `delta`, clamped into bounds.
    ///
    /// A non-finite delta is ignored and the factor returned unchanged; a
    /// garbage wheel event must not poison the session.
    #[must_use]
    pub fn adjusted(self, delta: f32) -> Self {
        if !delta.is_finite() {
            return self;
        }
        Self::new(self.0 + delta)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}
