// SPDX-License-Identifier: MPL-2.0
//! Browser navigation port.

/// Sends the browser to another location.
pub trait Navigator {
    /// Navigates to `location` (a path with query string).
    fn redirect(&mut self, location: &str);
}
