// SPDX-License-Identifier: MPL-2.0
//! Portfolio showcase: auto-advancing slideshow, lazily loaded thumbnail
//! gallery and lightbox.
//!
//! [`ShowcaseController`] owns the state; [`mount`] attaches it to an
//! [`EventSource`] so the host only has to forward page events.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use crown_storefront::config::Config;
//! use crown_storefront::domain::gallery::ImageSet;
//! use crown_storefront::events::EventSource;
//! use crown_storefront::i18n::I18n;
//! use crown_storefront::infrastructure::memory::{
//!     ManualScheduler, MemoryShowcasePage, RecordingObserver,
//! };
//! use crown_storefront::showcase::{self, ShowcaseController, ShowcaseEvent, ShowcaseSettings};
//!
//! let config = Config::default();
//! let images = ImageSet::generate(&config.slideshow.image_set_spec());
//! let controller = ShowcaseController::new(
//!     MemoryShowcasePage::complete(),
//!     ManualScheduler::new(),
//!     RecordingObserver::new(),
//!     images,
//!     ShowcaseSettings::from_config(&config),
//!     Rc::new(I18n::new(Some("en-US".into()), &config)),
//! );
//!
//! let mut events = EventSource::new();
//! let (showcase, _subscription) = showcase::mount(controller, &mut events);
//! events.emit(&ShowcaseEvent::Next);
//! assert_eq!(showcase.borrow().current_index(), 1);
//! ```

pub mod controller;
pub mod gallery;
pub mod lightbox;
pub mod slideshow;

pub use controller::{Key, ShowcaseController, ShowcaseEvent, ShowcaseSettings};
pub use gallery::{LazyGallery, LoadState};
pub use lightbox::Lightbox;
pub use slideshow::{Autoplay, SlidePosition};

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::port::{Scheduler, ShowcasePage, ViewportObserver};
use crate::events::{EventSource, Subscription};

/// Shared handle to a mounted showcase.
pub type SharedShowcase<P, S, O> = Rc<RefCell<ShowcaseController<P, S, O>>>;

/// Initializes `controller` and subscribes it to `events`.
///
/// Unsubscribing the returned [`Subscription`] detaches the showcase; any
/// running timer keeps its id but its ticks no longer arrive.
pub fn mount<P, S, O>(
    mut controller: ShowcaseController<P, S, O>,
    events: &mut EventSource<ShowcaseEvent>,
) -> (SharedShowcase<P, S, O>, Subscription)
where
    P: ShowcasePage + 'static,
    S: Scheduler + 'static,
    O: ViewportObserver + 'static,
{
    controller.init();
    let shared = Rc::new(RefCell::new(controller));
    let handle = Rc::clone(&shared);
    let subscription = events.subscribe(move |event| handle.borrow_mut().handle(event));
    (shared, subscription)
}
