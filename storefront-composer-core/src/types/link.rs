//! Linkable content abstraction

use super::banner::LandingBanner;
use super::catalog::ProductIdSet;

/// Anything the shopper can tap to open a product listing.
pub trait LinkSource {
    /// Products listed when the element is activated
    fn linked_product_ids(&self) -> &ProductIdSet;

    /// Secondary banner carried onto the listing screen
    fn landing_banner(&self) -> Option<&LandingBanner> {
        None
    }

    /// Elements without linked products render as non-interactive
    fn is_interactive(&self) -> bool {
        !self.linked_product_ids().is_empty()
    }
}
