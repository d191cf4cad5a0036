// SPDX-License-Identifier: MPL-2.0
//! Showcase controller coordinating slideshow, gallery and lightbox.
//!
//! The controller owns all showcase state. The page, the timer source and
//! the viewport observer are injected at construction; the host feeds page
//! events in through [`ShowcaseController::handle`].
//!
//! Cross-cutting rules enforced here:
//! - an empty image set disables everything and shows a status message
//! - opening the lightbox stops autoplay, closing it starts a fresh timer
//! - hiding the page stops autoplay, showing it starts a fresh timer

use std::rc::Rc;

use crate::application::port::{
    IntersectionEntry, Scheduler, ShowcasePage, Slide, ThumbnailPlaceholder, TimerId,
    ViewportObserver,
};
use crate::config::Config;
use crate::domain::gallery::ImageSet;
use crate::domain::ui::{AutoplayInterval, RootMargin};
use crate::i18n::I18n;

use super::gallery::LazyGallery;
use super::lightbox::Lightbox;
use super::slideshow::{Autoplay, SlidePosition};

/// Tunables of a showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowcaseSettings {
    pub interval: AutoplayInterval,
    pub root_margin: RootMargin,
}

impl ShowcaseSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: config.slideshow.interval(),
            root_margin: config.gallery.root_margin(),
        }
    }
}

/// Keys the showcase reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Events the host forwards to the showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEvent {
    /// A scheduler timer fired.
    Tick(TimerId),
    /// The page's visibility changed.
    VisibilityChanged { hidden: bool },
    /// The viewport observer reported placeholder proximity.
    Intersections(Vec<IntersectionEntry>),
    /// A gallery placeholder was clicked.
    ThumbnailActivated(usize),
    /// The lightbox close control was clicked.
    CloseClicked,
    /// The lightbox backdrop itself (not its content) was clicked.
    BackdropClicked,
    KeyDown(Key),
    /// Manual navigation.
    Next,
    Previous,
}

pub struct ShowcaseController<P, S, O> {
    page: P,
    scheduler: S,
    observer: O,
    images: ImageSet,
    position: SlidePosition,
    autoplay: Autoplay,
    gallery: LazyGallery,
    lightbox: Lightbox,
    root_margin: RootMargin,
    i18n: Rc<I18n>,
}

impl<P, S, O> ShowcaseController<P, S, O>
where
    P: ShowcasePage,
    S: Scheduler,
    O: ViewportObserver,
{
    pub fn new(
        page: P,
        scheduler: S,
        observer: O,
        images: ImageSet,
        settings: ShowcaseSettings,
        i18n: Rc<I18n>,
    ) -> Self {
        let position = SlidePosition::new(images.len());
        Self {
            page,
            scheduler,
            observer,
            images,
            position,
            autoplay: Autoplay::new(settings.interval),
            gallery: LazyGallery::default(),
            lightbox: Lightbox::new(),
            root_margin: settings.root_margin,
            i18n,
        }
    }

    /// Activates the showcase: first slide, gallery and autoplay.
    ///
    /// With an empty image set only the "no images" status is shown.
    pub fn init(&mut self) {
        if self.images.is_empty() {
            tracing::warn!("showcase has no images; slideshow, gallery and autoplay disabled");
            let message = self.i18n.tr("status-no-images");
            if let Some(status) = self.page.status_label() {
                status.set_text(&message);
            }
            return;
        }

        self.render();
        self.build_gallery();
        self.start_autoplay();
    }

    /// Dispatches one host event.
    pub fn handle(&mut self, event: &ShowcaseEvent) {
        match event {
            ShowcaseEvent::Tick(id) => self.tick(*id),
            ShowcaseEvent::VisibilityChanged { hidden } => self.set_page_hidden(*hidden),
            ShowcaseEvent::Intersections(entries) => self.on_intersections(entries),
            ShowcaseEvent::ThumbnailActivated(index) => self.activate_thumbnail(*index),
            ShowcaseEvent::CloseClicked | ShowcaseEvent::BackdropClicked => self.close_lightbox(),
            ShowcaseEvent::KeyDown(key) => self.on_key(key),
            ShowcaseEvent::Next => self.next(),
            ShowcaseEvent::Previous => self.previous(),
        }
    }

    // =========================================================================
    // Slideshow
    // =========================================================================

    /// Handles a timer firing. Ticks from timers other than the current
    /// autoplay timer are ignored.
    pub fn tick(&mut self, id: TimerId) {
        if !self.autoplay.owns(id) {
            tracing::debug!(?id, "ignoring tick from stale timer");
            return;
        }
        if self.position.advance().is_some() {
            self.render();
        }
    }

    /// Shows the next slide without touching the timer.
    pub fn next(&mut self) {
        if self.position.advance().is_some() {
            self.render();
        }
    }

    /// Shows the previous slide without touching the timer.
    pub fn previous(&mut self) {
        if self.position.retreat().is_some() {
            self.render();
        }
    }

    /// Starts autoplay, replacing any running timer.
    pub fn start_autoplay(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let id = self.autoplay.start(&mut self.scheduler);
        tracing::debug!(
            ?id,
            interval_ms = self.autoplay.interval().as_millis(),
            "autoplay started"
        );
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.is_running() {
            self.autoplay.stop(&mut self.scheduler);
            tracing::debug!("autoplay stopped");
        }
    }

    /// Hidden pages stop autoplay; visible pages restart it from a fresh
    /// interval rather than resuming the interrupted one.
    pub fn set_page_hidden(&mut self, hidden: bool) {
        if hidden {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    fn render(&mut self) {
        let index = self.position.index();
        let Some(entry) = self.images.get(index) else {
            return;
        };
        let slide = Slide {
            src: entry.full().to_string(),
            alt: self
                .i18n
                .tr_with_args("slide-alt", &[("index", (index + 1).to_string())]),
            pointer_events: false,
            draggable: false,
        };
        if let Some(track) = self.page.slide_track() {
            track.replace_slide(&slide);
        }
        let text = self.status_text();
        if let Some(status) = self.page.status_label() {
            status.set_text(&text);
        }
    }

    /// `"{current} / {total}"`, or empty when there are no images.
    #[must_use]
    pub fn status_text(&self) -> String {
        if self.images.is_empty() {
            return String::new();
        }
        self.i18n.tr_with_args(
            "status-position",
            &[
                ("current", (self.position.index() + 1).to_string()),
                ("total", self.images.len().to_string()),
            ],
        )
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    fn build_gallery(&mut self) {
        let Some(grid) = self.page.gallery() else {
            tracing::debug!("no gallery container on page; gallery skipped");
            return;
        };
        grid.clear();
        for (index, entry) in self.images.iter().enumerate() {
            let alt = self
                .i18n
                .tr_with_args("thumbnail-alt", &[("index", (index + 1).to_string())]);
            grid.append_placeholder(&ThumbnailPlaceholder {
                index,
                deferred_src: entry.thumb_or_full().to_string(),
                alt,
            });
        }

        self.gallery = LazyGallery::new(self.images.len());
        self.observer.set_root_margin(self.root_margin);
        for index in 0..self.images.len() {
            self.observer.observe(index);
        }
    }

    /// Promotes the deferred source of every newly near-visible placeholder
    /// and stops observing it.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if !self.gallery.promote(entry.index) {
                continue;
            }
            if let Some(image) = self.images.get(entry.index) {
                if let Some(grid) = self.page.gallery() {
                    grid.promote_source(entry.index, image.thumb_or_full());
                }
            }
            self.observer.unobserve(entry.index);
        }
    }

    /// Opens the lightbox on the full-size image behind placeholder `index`.
    pub fn activate_thumbnail(&mut self, index: usize) {
        let Some(src) = self.images.get(index).map(|entry| entry.full().to_string()) else {
            return;
        };
        let caption = self.i18n.tr_with_args(
            "lightbox-caption",
            &[
                ("index", (index + 1).to_string()),
                ("total", self.images.len().to_string()),
            ],
        );
        self.open_lightbox(&src, &caption);
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    pub fn open_lightbox(&mut self, src: &str, caption: &str) {
        let Some(view) = self.page.lightbox() else {
            tracing::warn!("no lightbox on page; cannot open {src}");
            return;
        };
        view.set_image(Some(src));
        view.set_caption(caption);
        view.set_visible(true);
        self.lightbox.open(src, caption);
        self.stop_autoplay();
    }

    pub fn close_lightbox(&mut self) {
        if let Some(view) = self.page.lightbox() {
            view.set_visible(false);
            view.set_image(None);
        }
        self.lightbox.close();
        self.start_autoplay();
    }

    fn on_key(&mut self, key: &Key) {
        if *key == Key::Escape && self.lightbox.is_open() {
            self.close_lightbox();
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.position.index()
    }

    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// The timer currently driving autoplay.
    #[must_use]
    pub fn autoplay_timer(&self) -> Option<TimerId> {
        self.autoplay.timer()
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn gallery(&self) -> &LazyGallery {
        &self.gallery
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageSetSpec;
    use crate::infrastructure::memory::{ManualScheduler, MemoryShowcasePage, RecordingObserver};
    use pretty_assertions::assert_eq;

    type TestShowcase = ShowcaseController<MemoryShowcasePage, ManualScheduler, RecordingObserver>;

    fn images(count: u32) -> ImageSet {
        ImageSet::generate(&ImageSetSpec {
            full_folder: "full/".to_string(),
            thumb_folder: Some("thumbs/".to_string()),
            basename: "work".to_string(),
            count,
            extension: "jpg".to_string(),
        })
    }

    fn showcase_with(page: MemoryShowcasePage, count: u32) -> TestShowcase {
        let mut showcase = ShowcaseController::new(
            page,
            ManualScheduler::new(),
            RecordingObserver::new(),
            images(count),
            ShowcaseSettings::default(),
            Rc::new(I18n::new(Some("en-US".to_string()), &Config::default())),
        );
        showcase.init();
        showcase
    }

    fn showcase(count: u32) -> TestShowcase {
        showcase_with(MemoryShowcasePage::complete(), count)
    }

    fn tick(showcase: &mut TestShowcase) {
        let id = showcase.autoplay_timer().expect("autoplay running");
        showcase.handle(&ShowcaseEvent::Tick(id));
    }

    #[test]
    fn init_renders_first_slide_and_status() {
        let showcase = showcase(3);
        let slide = showcase.page().track().and_then(|t| t.slide()).expect("slide rendered");
        assert_eq!(slide.src, "full/work1.jpg");
        assert_eq!(slide.alt, "1");
        assert!(!slide.pointer_events);
        assert!(!slide.draggable);
        assert_eq!(showcase.page().status_text(), Some("1 / 3"));
    }

    #[test]
    fn init_starts_single_timer_at_interval() {
        let showcase = showcase(3);
        let active = showcase.scheduler().active_timers();
        assert_eq!(active.len(), 1);
        assert_eq!(
            showcase.scheduler().period_of(active[0]),
            Some(AutoplayInterval::default().as_duration())
        );
    }

    #[test]
    fn ticks_advance_and_wrap() {
        let mut showcase = showcase(3);
        for expected in [1, 2, 0, 1] {
            tick(&mut showcase);
            assert_eq!(showcase.current_index(), expected);
        }
        assert_eq!(showcase.page().status_text(), Some("2 / 3"));
        let slide = showcase.page().track().and_then(|t| t.slide()).expect("slide");
        assert_eq!(slide.src, "full/work2.jpg");
    }

    #[test]
    fn every_render_replaces_the_slide() {
        let mut showcase = showcase(2);
        tick(&mut showcase);
        tick(&mut showcase);
        let track = showcase.page().track().expect("track");
        assert_eq!(track.render_count(), 3);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut showcase = showcase(3);
        let stale = showcase.autoplay_timer().expect("running");
        showcase.start_autoplay();
        showcase.handle(&ShowcaseEvent::Tick(stale));
        assert_eq!(showcase.current_index(), 0);
    }

    #[test]
    fn manual_navigation_wraps_both_ways() {
        let mut showcase = showcase(3);
        showcase.handle(&ShowcaseEvent::Previous);
        assert_eq!(showcase.current_index(), 2);
        showcase.handle(&ShowcaseEvent::Next);
        assert_eq!(showcase.current_index(), 0);
        assert!(showcase.is_autoplaying());
    }

    #[test]
    fn empty_set_disables_everything() {
        let showcase = showcase(0);
        assert_eq!(showcase.page().status_text(), Some("No images found."));
        assert!(showcase.page().track().and_then(|t| t.slide()).is_none());
        assert_eq!(showcase.page().gallery_grid().map(|g| g.len()), Some(0));
        assert!(showcase.scheduler().active_timers().is_empty());
        assert_eq!(showcase.scheduler().started_count(), 0);
        assert!(showcase.observer().observed().is_empty());
        assert_eq!(showcase.status_text(), "");
    }

    #[test]
    fn empty_set_ignores_visibility_restore() {
        let mut showcase = showcase(0);
        showcase.handle(&ShowcaseEvent::VisibilityChanged { hidden: false });
        assert!(!showcase.is_autoplaying());
    }

    #[test]
    fn gallery_creates_deferred_placeholders_and_observes_them() {
        let showcase = showcase(3);
        let grid = showcase.page().gallery_grid().expect("gallery");
        assert_eq!(grid.len(), 3);
        for index in 0..3 {
            let thumb = grid.thumbnail(index).expect("placeholder");
            assert_eq!(thumb.placeholder.deferred_src, format!("thumbs/work{}.jpg", index + 1));
            assert_eq!(thumb.loaded_src, None);
        }
        assert_eq!(showcase.observer().observed(), vec![0, 1, 2]);
        assert_eq!(showcase.observer().root_margin(), Some(RootMargin::new(350)));
    }

    #[test]
    fn intersection_promotes_once_and_unobserves() {
        let mut showcase = showcase(3);
        let near = IntersectionEntry {
            index: 1,
            is_intersecting: true,
        };
        let far = IntersectionEntry {
            index: 2,
            is_intersecting: false,
        };

        showcase.handle(&ShowcaseEvent::Intersections(vec![near, far]));
        showcase.handle(&ShowcaseEvent::Intersections(vec![near]));

        let grid = showcase.page().gallery_grid().expect("gallery");
        let promoted = grid.thumbnail(1).expect("placeholder");
        assert_eq!(promoted.loaded_src.as_deref(), Some("thumbs/work2.jpg"));
        assert_eq!(promoted.promotions, 1);
        assert_eq!(grid.thumbnail(2).and_then(|t| t.loaded_src.clone()), None);
        assert_eq!(showcase.observer().observed(), vec![0, 2]);
        assert_eq!(showcase.observer().unobserve_calls(1), 1);
    }

    #[test]
    fn thumbnail_opens_lightbox_and_stops_autoplay() {
        let mut showcase = showcase(4);
        showcase.handle(&ShowcaseEvent::ThumbnailActivated(2));

        let lightbox = showcase.page().lightbox_view().expect("lightbox");
        assert!(lightbox.visible);
        assert!(!lightbox.aria_hidden);
        assert_eq!(lightbox.image.as_deref(), Some("full/work3.jpg"));
        assert_eq!(lightbox.caption, "Image 3 / 4");
        assert!(!showcase.is_autoplaying());
        assert!(showcase.scheduler().active_timers().is_empty());
    }

    #[test]
    fn closing_lightbox_clears_image_and_restarts_autoplay() {
        let mut showcase = showcase(4);
        showcase.handle(&ShowcaseEvent::ThumbnailActivated(0));
        showcase.handle(&ShowcaseEvent::CloseClicked);

        let lightbox = showcase.page().lightbox_view().expect("lightbox");
        assert!(!lightbox.visible);
        assert!(lightbox.aria_hidden);
        assert_eq!(lightbox.image, None);
        assert!(showcase.is_autoplaying());
        assert_eq!(showcase.scheduler().active_timers().len(), 1);
    }

    #[test]
    fn repeated_open_close_never_leaves_duplicate_timers() {
        let mut showcase = showcase(2);
        for _ in 0..5 {
            showcase.handle(&ShowcaseEvent::ThumbnailActivated(1));
            assert!(showcase.scheduler().active_timers().is_empty());
            showcase.handle(&ShowcaseEvent::BackdropClicked);
            assert_eq!(showcase.scheduler().active_timers().len(), 1);
        }
        assert_eq!(
            showcase.scheduler().active_timers(),
            vec![showcase.autoplay_timer().expect("running")]
        );
    }

    #[test]
    fn escape_closes_only_an_open_lightbox() {
        let mut showcase = showcase(2);
        let timer_before = showcase.autoplay_timer();
        showcase.handle(&ShowcaseEvent::KeyDown(Key::Escape));
        assert_eq!(showcase.autoplay_timer(), timer_before);

        showcase.handle(&ShowcaseEvent::ThumbnailActivated(0));
        showcase.handle(&ShowcaseEvent::KeyDown(Key::from_dom("Enter")));
        assert!(showcase.lightbox().is_open());
        showcase.handle(&ShowcaseEvent::KeyDown(Key::from_dom("Escape")));
        assert!(!showcase.lightbox().is_open());
        assert!(showcase.is_autoplaying());
    }

    #[test]
    fn visibility_stops_and_restarts_with_fresh_timer() {
        let mut showcase = showcase(3);
        let original = showcase.autoplay_timer().expect("running");

        showcase.handle(&ShowcaseEvent::VisibilityChanged { hidden: true });
        assert!(!showcase.is_autoplaying());
        assert!(showcase.scheduler().active_timers().is_empty());

        showcase.handle(&ShowcaseEvent::VisibilityChanged { hidden: false });
        let restarted = showcase.autoplay_timer().expect("running again");
        assert_ne!(original, restarted);
        assert_eq!(showcase.scheduler().active_timers(), vec![restarted]);
    }

    #[test]
    fn missing_elements_degrade_gracefully() {
        let mut showcase = showcase_with(MemoryShowcasePage::default(), 3);
        assert!(showcase.is_autoplaying());
        assert!(showcase.observer().observed().is_empty());

        showcase.handle(&ShowcaseEvent::ThumbnailActivated(0));
        assert!(!showcase.lightbox().is_open());
        assert!(showcase.is_autoplaying());

        tick(&mut showcase);
        assert_eq!(showcase.current_index(), 1);
    }
}
