// SPDX-License-Identifier: MPL-2.0
//! Viewport-proximity observation, the port behind lazy thumbnail loading.

use crate::domain::ui::RootMargin;

/// One observation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    /// Index of the observed thumbnail placeholder.
    pub index: usize,
    /// Whether the placeholder is within the viewport extended by the margin.
    pub is_intersecting: bool,
}

/// Observer watching thumbnail placeholders for viewport proximity.
pub trait ViewportObserver {
    /// Sets how far beyond each viewport edge a placeholder counts as visible.
    fn set_root_margin(&mut self, margin: RootMargin);

    fn observe(&mut self, index: usize);

    fn unobserve(&mut self, index: usize);
}
