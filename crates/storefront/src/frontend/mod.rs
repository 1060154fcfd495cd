//! In-process view layer for the storefront frontend.
//!
//! The BDD suite drives page objects against this layer instead of a
//! browser. Navigating to a page the viewer may not access is an expected
//! outcome, so it is modeled as a [`Navigation`] variant rather than an
//! error: callers branch on `Opened` versus `Redirected` instead of
//! catching anything.

pub mod address;

use meeple_market_core::AddressId;

pub use address::{AddressBook, AddressIndexView, AddressShowView};

/// A routable frontend location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The address list page.
    AddressIndex,
    /// The detail page for one address.
    AddressShow(AddressId),
}

/// Where a navigation attempt actually landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The requested detail page rendered.
    Opened(AddressShowView),
    /// The frontend sent the viewer somewhere else.
    Redirected(Redirect),
}

/// A navigation that landed on a different page than requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// The route the viewer ended up on.
    pub to: Route,
}
