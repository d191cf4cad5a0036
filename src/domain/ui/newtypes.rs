// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Autoplay Bounds
// =============================================================================

/// Autoplay interval bounds (0.5 s to 60 s).
pub mod autoplay_bounds {
    /// Minimum interval in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum interval in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default interval in milliseconds.
    pub const DEFAULT_MS: u64 = 4500;
}

// =============================================================================
// AutoplayInterval
// =============================================================================

/// Time between two automatic slideshow advances.
///
/// Guaranteed to be within 500 ms to 60 s, so a misconfigured value can
/// neither spin the timer nor freeze the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates an interval, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(autoplay_bounds::MIN_MS, autoplay_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(autoplay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// RootMargin
// =============================================================================

/// Lazy-load margin bounds (0 to 4000 px).
pub mod root_margin_bounds {
    /// Maximum margin in pixels.
    pub const MAX_PX: u32 = 4000;
    /// Default margin in pixels.
    pub const DEFAULT_PX: u32 = 350;
}

/// Distance beyond every viewport edge at which a thumbnail counts as
/// near-visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMargin(u32);

impl RootMargin {
    /// Creates a margin, clamping to [`root_margin_bounds::MAX_PX`].
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.min(root_margin_bounds::MAX_PX))
    }

    /// Returns the margin in pixels.
    #[must_use]
    pub fn px(self) -> u32 {
        self.0
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self(root_margin_bounds::DEFAULT_PX)
    }
}
