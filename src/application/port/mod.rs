// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Every element the controllers touch on the page is reached through one of
//! these traits and injected at construction, so a browser binding, a test
//! double and the command-line driver can all host the same controllers.
//!
//! # Available Ports
//!
//! - [`showcase`]: Slide track, status label, gallery grid and lightbox
//! - [`scheduler`]: Repeating timers
//! - [`viewport`]: Viewport-proximity observation for lazy loading
//! - [`form`]: Order form controls, error panel and submit button
//! - [`navigation`]: Browser redirects
//! - [`transport`]: Order submission over HTTP
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Element lookups that may fail return `Option`; controllers skip the
//!   feature that needs a missing element
//! - Everything runs on one UI thread, so no trait requires `Send`

pub mod form;
pub mod navigation;
pub mod scheduler;
pub mod showcase;
pub mod transport;
pub mod viewport;

pub use form::{ControlKind, ErrorPanel, FormControl, OrderFormView, SubmitButton};
pub use navigation::Navigator;
pub use scheduler::{Scheduler, TimerId};
pub use showcase::{
    GalleryGrid, LightboxView, ShowcasePage, Slide, SlideTrack, StatusLabel, ThumbnailPlaceholder,
};
pub use transport::{OrderTransport, TransportError, TransportResponse};
pub use viewport::{IntersectionEntry, ViewportObserver};
