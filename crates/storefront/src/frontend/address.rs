//! Address-book pages.
//!
//! Visibility rule: an address is visible only to the customer who owns
//! it. The index lists the viewer's own addresses; opening someone else's
//! detail page redirects back to the index.

use meeple_market_core::{AddressId, CustomerId};

use super::{Navigation, Redirect, Route};
use crate::models::Address;

/// The set of addresses known to the frontend.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    addresses: Vec<Address>,
}

impl AddressBook {
    /// Create an empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an address.
    pub fn add(&mut self, address: Address) {
        self.addresses.push(address);
    }

    /// Look up an address by ID.
    #[must_use]
    pub fn get(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|address| address.id == id)
    }

    /// Render the address list page for a viewer.
    ///
    /// An anonymous viewer sees an empty list; the page itself is always
    /// reachable.
    #[must_use]
    pub fn index_for(&self, viewer: Option<CustomerId>) -> AddressIndexView {
        let entries = viewer.map_or_else(Vec::new, |customer| {
            self.addresses
                .iter()
                .filter(|address| address.owner == customer)
                .map(|address| address.title.clone())
                .collect()
        });

        AddressIndexView { entries }
    }

    /// Navigate to the detail page of one address.
    ///
    /// Returns [`Navigation::Opened`] only when the viewer owns the
    /// address; a missing address or a foreign viewer is redirected to the
    /// index.
    #[must_use]
    pub fn show_for(&self, viewer: Option<CustomerId>, id: AddressId) -> Navigation {
        match self.get(id) {
            Some(address) if viewer == Some(address.owner) => {
                Navigation::Opened(AddressShowView {
                    id: address.id,
                    street: address.street.clone(),
                })
            }
            _ => Navigation::Redirected(Redirect {
                to: Route::AddressIndex,
            }),
        }
    }
}

/// Rendered address list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressIndexView {
    entries: Vec<String>,
}

impl AddressIndexView {
    /// Titles rendered on the list, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether a titled address appears on the list.
    #[must_use]
    pub fn has_entry(&self, title: &str) -> bool {
        self.entries.iter().any(|entry| entry == title)
    }
}

/// Rendered address detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressShowView {
    /// The address this page is showing.
    pub id: AddressId,
    /// Street line as displayed.
    pub street: String,
}
