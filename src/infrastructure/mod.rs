// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Order submission over HTTP via `reqwest` (implements [`OrderTransport`])
//! - [`memory`]: In-memory page, timer, observer and navigator adapters used
//!   by the command-line driver and by tests
//!
//! [`OrderTransport`]: crate::application::port::OrderTransport

pub mod http;
pub mod memory;

pub use http::HttpOrderTransport;
