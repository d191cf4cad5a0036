// SPDX-License-Identifier: MPL-2.0
//! Application layer - port definitions for the page the controllers drive.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Controllers (`showcase`, `order_form`) depend only on ports

pub mod port;
