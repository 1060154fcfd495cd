//! Core types for Meeple Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod password;

pub use email::{Email, EmailError};
pub use id::*;
pub use password::{PasswordError, PlainPassword};
