// SPDX-License-Identifier: MPL-2.0
//! Order form domain types.
//!
//! These types describe the two known order forms, the item lines they
//! collect, the multipart payload they submit and the lifecycle of a
//! submission attempt.

pub mod form_kind;
pub mod item;
pub mod payload;
pub mod phase;

pub use form_kind::FormKind;
pub use item::OrderItemLine;
pub use payload::{FieldValue, FileAttachment, FormField, OrderPayload};
pub use phase::SubmissionPhase;
