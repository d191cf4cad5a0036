// SPDX-License-Identifier: MPL-2.0
//! Portfolio image set types.

pub mod image_set;

pub use image_set::{ImageEntry, ImageSet, ImageSetSpec};
