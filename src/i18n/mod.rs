// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for page-facing strings.
//!
//! Status texts, captions, validation messages and submit labels are looked
//! up in Fluent bundles embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when a message is missing in the current locale

pub mod fluent;

pub use fluent::I18n;
