// SPDX-License-Identifier: MPL-2.0
//! Domain layer - storefront types with no dependencies beyond `std`.
//!
//! # Modules
//!
//! - [`gallery`]: Portfolio image sets ([`ImageSet`](gallery::ImageSet),
//!   [`ImageSetSpec`](gallery::ImageSetSpec))
//! - [`order`]: Order form types ([`FormKind`](order::FormKind),
//!   [`OrderItemLine`](order::OrderItemLine), [`OrderPayload`](order::OrderPayload),
//!   [`SubmissionPhase`](order::SubmissionPhase))
//! - [`ui`]: UI value objects ([`AutoplayInterval`](ui::AutoplayInterval),
//!   [`RootMargin`](ui::RootMargin))

pub mod gallery;
pub mod order;
pub mod ui;
