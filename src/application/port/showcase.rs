// SPDX-License-Identifier: MPL-2.0
//! Showcase page elements: slide track, status label, gallery and lightbox.

/// The single slide shown in the slide track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    /// 1-based ordinal of the slide.
    pub alt: String,
    /// Whether the element reacts to pointer input. Always `false` for slides.
    pub pointer_events: bool,
    /// Whether the image can be dragged. Always `false` for slides.
    pub draggable: bool,
}

/// Container the current slide is rendered into.
pub trait SlideTrack {
    /// Replaces whatever the track shows with `slide`.
    fn replace_slide(&mut self, slide: &Slide);
}

/// Text element showing slideshow position or status.
pub trait StatusLabel {
    fn set_text(&mut self, text: &str);
}

/// Gallery control for one image, created without loading its image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailPlaceholder {
    pub index: usize,
    /// True source, held back until the placeholder nears the viewport.
    pub deferred_src: String,
    pub alt: String,
}

/// Grid that hosts the thumbnail placeholders.
pub trait GalleryGrid {
    /// Removes every placeholder.
    fn clear(&mut self);

    /// Appends a placeholder. It must not fetch `deferred_src`.
    fn append_placeholder(&mut self, placeholder: &ThumbnailPlaceholder);

    /// Moves the deferred source of placeholder `index` into its loading
    /// attribute, which starts the fetch.
    fn promote_source(&mut self, index: usize, src: &str);
}

/// Modal overlay showing one full-size image.
pub trait LightboxView {
    /// Sets the displayed image; `None` clears the source.
    fn set_image(&mut self, src: Option<&str>);

    fn set_caption(&mut self, caption: &str);

    /// Shows or hides the overlay. Implementations flip the visibility state
    /// and the `aria-hidden` attribute together.
    fn set_visible(&mut self, visible: bool);
}

/// Lookup of the showcase elements on a page.
///
/// Each accessor returns `None` when the element is absent from the page.
pub trait ShowcasePage {
    fn slide_track(&mut self) -> Option<&mut dyn SlideTrack>;
    fn status_label(&mut self) -> Option<&mut dyn StatusLabel>;
    fn gallery(&mut self) -> Option<&mut dyn GalleryGrid>;
    fn lightbox(&mut self) -> Option<&mut dyn LightboxView>;
}
