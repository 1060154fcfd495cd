//! Address domain type.

use meeple_market_core::{AddressId, CustomerId};

/// A customer address (domain type).
///
/// The platform owns address creation and editing; this layer only reads
/// addresses to render the address-book pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Unique address ID.
    pub id: AddressId,
    /// Customer who owns this address.
    pub owner: CustomerId,
    /// User-assigned title (e.g., "Home", "Office").
    pub title: String,
    /// Street line shown on the detail page.
    pub street: String,
}

impl Address {
    /// Create a new address.
    #[must_use]
    pub fn new(
        id: AddressId,
        owner: CustomerId,
        title: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner,
            title: title.into(),
            street: street.into(),
        }
    }
}
