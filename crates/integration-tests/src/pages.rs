//! Page objects for the storefront frontend.
//!
//! Each page object exposes navigation and read operations for one page.
//! Navigation that lands somewhere unexpected is not an error: the show
//! page records the [`Navigation`] outcome and `is_open` reports on it, so
//! negative-path steps can assert without catching anything.

use meeple_market_core::{AddressId, CustomerId};
use meeple_market_storefront::frontend::{AddressBook, AddressIndexView, Navigation};

/// Page object for the address list page.
#[derive(Debug, Default)]
pub struct AddressIndexPage {
    view: Option<AddressIndexView>,
}

impl AddressIndexPage {
    /// Open the address list as the given viewer.
    pub fn open(&mut self, book: &AddressBook, viewer: Option<CustomerId>) {
        self.view = Some(book.index_for(viewer));
    }

    /// Whether the list page is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.view.is_some()
    }

    /// Whether an address with this title appears on the list.
    ///
    /// Returns `false` when the page has not been opened.
    #[must_use]
    pub fn is_address_on_list(&self, title: &str) -> bool {
        self.view
            .as_ref()
            .is_some_and(|view| view.has_entry(title))
    }
}

/// Page object for the address detail page.
#[derive(Debug, Default)]
pub struct AddressShowPage {
    last: Option<Navigation>,
}

impl AddressShowPage {
    /// Navigate to the detail page of an address as the given viewer.
    ///
    /// The outcome is recorded whether or not the page opened.
    pub fn open(&mut self, book: &AddressBook, viewer: Option<CustomerId>, id: AddressId) {
        self.last = Some(book.show_for(viewer, id));
    }

    /// Whether the detail page for exactly this address is open.
    ///
    /// `false` when navigation redirected elsewhere, when the page shows a
    /// different address, or when nothing was opened at all.
    #[must_use]
    pub fn is_open(&self, id: AddressId) -> bool {
        matches!(&self.last, Some(Navigation::Opened(view)) if view.id == id)
    }

    /// Street line displayed on the open detail page.
    #[must_use]
    pub fn street(&self) -> Option<&str> {
        match &self.last {
            Some(Navigation::Opened(view)) => Some(view.street.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meeple_market_storefront::models::Address;

    fn book_with_home() -> AddressBook {
        let mut book = AddressBook::new();
        book.add(Address::new(
            AddressId::new(1),
            CustomerId::new(10),
            "Home",
            "12 Carcassonne Way",
        ));
        book
    }

    #[test]
    fn index_page_reports_list_membership() {
        let book = book_with_home();
        let mut page = AddressIndexPage::default();
        assert!(!page.is_address_on_list("Home"));

        page.open(&book, Some(CustomerId::new(10)));
        assert!(page.is_open());
        assert!(page.is_address_on_list("Home"));
        assert!(!page.is_address_on_list("Office"));
    }

    #[test]
    fn show_page_opens_for_the_owner() {
        let book = book_with_home();
        let mut page = AddressShowPage::default();

        page.open(&book, Some(CustomerId::new(10)), AddressId::new(1));
        assert!(page.is_open(AddressId::new(1)));
        assert_eq!(page.street(), Some("12 Carcassonne Way"));
    }

    #[test]
    fn show_page_is_not_open_after_a_redirect() {
        let book = book_with_home();
        let mut page = AddressShowPage::default();

        page.open(&book, Some(CustomerId::new(99)), AddressId::new(1));
        assert!(!page.is_open(AddressId::new(1)));
        assert_eq!(page.street(), None);
    }

    #[test]
    fn show_page_is_not_open_for_a_different_id() {
        let book = book_with_home();
        let mut page = AddressShowPage::default();

        page.open(&book, Some(CustomerId::new(10)), AddressId::new(1));
        assert!(!page.is_open(AddressId::new(2)));
    }
}
