// SPDX-License-Identifier: MPL-2.0
//! Convention-named portfolio image sets.
//!
//! Images are addressed as `{folder}{basename}{i}.{ext}` for `i` in `1..=N`.
//! Full-resolution images and thumbnails live in separate folders but share
//! naming, count and extension, so both sequences stay index-aligned.

/// Naming template an [`ImageSet`] is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSetSpec {
    /// Folder of full-resolution images, including the trailing slash.
    pub full_folder: String,
    /// Folder of thumbnails; `None` means thumbnails fall back to full images.
    pub thumb_folder: Option<String>,
    /// Filename prefix.
    pub basename: String,
    /// Number of images.
    pub count: u32,
    /// Extension without the dot.
    pub extension: String,
}

/// One image of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    full: String,
    thumb: Option<String>,
}

impl ImageEntry {
    /// Creates an entry from its full-resolution URL and optional thumbnail.
    #[must_use]
    pub fn new(full: impl Into<String>, thumb: Option<String>) -> Self {
        Self {
            full: full.into(),
            thumb,
        }
    }

    /// Full-resolution URL.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Thumbnail URL, or the full-resolution URL when no thumbnail exists.
    #[must_use]
    pub fn thumb_or_full(&self) -> &str {
        self.thumb.as_deref().unwrap_or(&self.full)
    }
}

/// Ordered, index-aligned list of portfolio images.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSet {
    entries: Vec<ImageEntry>,
}

impl ImageSet {
    /// Generates the set described by `spec`.
    #[must_use]
    pub fn generate(spec: &ImageSetSpec) -> Self {
        let url = |folder: &str, i: u32| format!("{folder}{}{i}.{}", spec.basename, spec.extension);
        let entries = (1..=spec.count)
            .map(|i| {
                ImageEntry::new(
                    url(&spec.full_folder, i),
                    spec.thumb_folder.as_deref().map(|folder| url(folder, i)),
                )
            })
            .collect();
        Self { entries }
    }

    /// Builds a set from explicit full-resolution and thumbnail URL lists.
    ///
    /// Thumbnails are matched by position; positions past the end of
    /// `thumbs` fall back to the full-resolution URL.
    #[must_use]
    pub fn from_urls(full: Vec<String>, thumbs: Vec<String>) -> Self {
        let mut thumbs = thumbs.into_iter();
        let entries = full
            .into_iter()
            .map(|url| ImageEntry::new(url, thumbs.next()))
            .collect();
        Self { entries }
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the set holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }
}
