//! Services for the storefront customization layer.

pub mod installer;
