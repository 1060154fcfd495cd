//! Meeple Market Core - Shared types library.
//!
//! This crate provides common types used across all Meeple Market components:
//! - `storefront` - Domain models, repositories, and the installer service
//! - `cli` - Command-line tools for setup and migrations
//! - `integration-tests` - Page objects and the BDD suite
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no console interaction. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and passwords
//! - [`validation`] - Named constraints and violation descriptors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{Constraint, ConstraintViolation, validate};
