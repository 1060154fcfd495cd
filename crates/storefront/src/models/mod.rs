//! Domain types for the storefront customization layer.
//!
//! These types represent validated domain objects separate from database
//! row types.

pub mod address;
pub mod admin_user;

pub use address::Address;
pub use admin_user::{AdminUser, NewAdminUser};
