//! BDD support for Meeple Market.
//!
//! The [`pages`] module holds the page objects the step definitions drive:
//! test-side abstractions over one frontend page each, hiding rendering
//! details behind navigation and read operations.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p meeple-market-integration-tests --test cucumber
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pages;

pub use pages::{AddressIndexPage, AddressShowPage};
