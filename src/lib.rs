// SPDX-License-Identifier: MPL-2.0
//! `crown_storefront` drives the interactive parts of a print-shop storefront:
//! a portfolio showcase (slideshow, lazily loaded gallery, lightbox) and the
//! quick and large order forms that post to the orders backend.
//!
//! Page elements, timers, viewport observation and navigation are reached
//! through the port traits in [`application::port`], so the controllers run
//! unchanged against a browser bridge or the in-memory adapters in
//! [`infrastructure::memory`].

#![doc(html_root_url = "https://docs.rs/crown_storefront/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod i18n;
pub mod infrastructure;
pub mod order_form;
pub mod paths;
pub mod showcase;
