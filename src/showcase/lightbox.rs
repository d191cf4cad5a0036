// SPDX-License-Identifier: MPL-2.0
//! Lightbox open/closed state.

/// What the lightbox currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: bool,
    src: Option<String>,
    caption: String,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, src: &str, caption: &str) {
        self.open = true;
        self.src = Some(src.to_string());
        self.caption = caption.to_string();
    }

    /// Closes the lightbox and drops the image reference.
    pub fn close(&mut self) {
        self.open = false;
        self.src = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }
}
