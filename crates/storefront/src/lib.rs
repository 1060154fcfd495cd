//! Meeple Market Storefront - domain layer for the board-game storefront.
//!
//! This crate hosts the pieces of the storefront that the customization
//! layer owns:
//!
//! - [`models`] - Domain types (addresses, administrator accounts)
//! - [`db`] - Repositories over `PostgreSQL`, plus an in-memory double
//! - [`frontend`] - In-process view layer for the address-book pages
//! - [`services`] - The first-run installer service
//! - [`config`] - Environment-variable configuration
//!
//! The web framework, catalogue, and checkout live in the platform proper
//! and are out of scope here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod frontend;
pub mod models;
pub mod services;
