// SPDX-License-Identifier: MPL-2.0
//! Central location for every tunable default in the crate.
//!
//! Values here are compile-time fallbacks. Anything the user may override at
//! runtime is surfaced through [`crate::config::Config`]; the rest is fixed
//! behavior the gallery relies on.

// ============================================================================
// ZOOM
// ============================================================================

/// Smallest zoom factor the lightbox will clamp to.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Largest zoom factor the lightbox will clamp to.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Zoom factor every session starts at (natural size).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Multiplier applied to raw wheel delta before it reaches the zoom factor.
///
/// Negative so that wheel-up (negative delta on most toolkits) zooms in.
pub const WHEEL_ZOOM_SENSITIVITY: f32 = -0.001;

// ============================================================================
// ACTIVITY LOG
// ============================================================================

/// Number of activity events retained before the oldest is dropped.
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 1_000;

/// Lower bound for a configured activity capacity.
pub const MIN_ACTIVITY_CAPACITY: usize = 10;

/// Upper bound for a configured activity capacity.
pub const MAX_ACTIVITY_CAPACITY: usize = 10_000;

// ============================================================================
// CONFIG FILE
// ============================================================================

/// Directory under the platform config root that holds our settings file.
pub const CONFIG_DIR_NAME: &str = "gallery-core";

/// File name of the persisted settings, in TOML format.
pub const CONFIG_FILE_NAME: &str = "config.toml";
