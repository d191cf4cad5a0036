// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Slideshow**: image set naming and autoplay interval
//! - **Gallery**: lazy-load proximity margin
//! - **Orders**: backend endpoint and status page

use crate::domain::ui::newtypes::{autoplay_bounds, root_margin_bounds};

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Folder holding full-resolution portfolio images.
pub const DEFAULT_FULL_FOLDER: &str = "images/portfolio/";

/// Folder holding thumbnails, named identically to the full images.
pub const DEFAULT_THUMB_FOLDER: &str = "images/portfolio/thumbs/";

/// Filename prefix shared by every image (`work1.jpg`, `work2.jpg`, ...).
pub const DEFAULT_BASENAME: &str = "work";

/// Number of images in the set.
pub const DEFAULT_IMAGE_COUNT: u32 = 12;

/// Image file extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Default autoplay interval in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = autoplay_bounds::DEFAULT_MS;

/// Minimum autoplay interval in milliseconds.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = autoplay_bounds::MIN_MS;

/// Maximum autoplay interval in milliseconds.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = autoplay_bounds::MAX_MS;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Distance beyond the viewport edges at which thumbnails start loading.
pub const DEFAULT_ROOT_MARGIN_PX: u32 = root_margin_bounds::DEFAULT_PX;

/// Maximum lazy-load margin in pixels.
pub const MAX_ROOT_MARGIN_PX: u32 = root_margin_bounds::MAX_PX;

// ==========================================================================
// Order Defaults
// ==========================================================================

/// Origin used by the command-line driver when posting orders.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Order intake endpoint path.
pub const DEFAULT_ORDER_ENDPOINT: &str = "/api/orders";

/// Page the browser is sent to after a submission attempt.
pub const DEFAULT_STATUS_PAGE: &str = "/order-status.html";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    assert!(DEFAULT_ROOT_MARGIN_PX <= MAX_ROOT_MARGIN_PX);

    assert!(DEFAULT_IMAGE_COUNT > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTOPLAY_INTERVAL_MS, 4500);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    }

    #[test]
    fn root_margin_default_is_350px() {
        assert_eq!(DEFAULT_ROOT_MARGIN_PX, 350);
    }

    #[test]
    fn bounds_agree_with_clamping_newtypes() {
        use crate::domain::ui::{AutoplayInterval, RootMargin};

        assert_eq!(AutoplayInterval::from_millis(0).as_millis(), MIN_AUTOPLAY_INTERVAL_MS);
        assert_eq!(AutoplayInterval::from_millis(u64::MAX).as_millis(), MAX_AUTOPLAY_INTERVAL_MS);
        assert_eq!(AutoplayInterval::default().as_millis(), DEFAULT_AUTOPLAY_INTERVAL_MS);
        assert_eq!(RootMargin::new(u32::MAX).px(), MAX_ROOT_MARGIN_PX);
        assert_eq!(RootMargin::default().px(), DEFAULT_ROOT_MARGIN_PX);
    }

    #[test]
    fn order_paths_are_absolute() {
        assert!(DEFAULT_ORDER_ENDPOINT.starts_with('/'));
        assert!(DEFAULT_STATUS_PAGE.starts_with('/'));
    }
}
