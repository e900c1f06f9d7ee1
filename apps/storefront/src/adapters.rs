//! # Input Adapters
//!
//! Parse what the page exposes into domain values the cart accepts.
//!
//! Two source contracts feed the session:
//!
//! - **Product tiles** render their price as display text
//!   (`"R$ 120,50"` — currency prefix, decimal comma). The adapter strips
//!   the prefix and whitespace and normalizes the comma before parsing.
//! - **Service triggers** attach name and price as element metadata, with
//!   the price already a dot-decimal string (`"40.00"`).
//!
//! Parse failure aborts the click at the call site: no cart mutation, no
//! notification, only a diagnostic log. The user sees nothing happen.

use serde::{Deserialize, Serialize};

use petshop_core::{Money, PriceParseError};

/// Currency prefix product tiles carry in their price text.
pub const CURRENCY_PREFIX: &str = "R$";

// =============================================================================
// Product Adapter
// =============================================================================

/// What a purchasable product tile exposes to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTile {
    /// Display name read from the tile.
    pub name: String,

    /// Price as rendered on the tile, e.g. `"R$ 120,50"`.
    pub price_text: String,
}

impl ProductTile {
    pub fn new(name: impl Into<String>, price_text: impl Into<String>) -> Self {
        ProductTile {
            name: name.into(),
            price_text: price_text.into(),
        }
    }

    /// Parses the tile's display price.
    ///
    /// Strips the currency prefix and surrounding whitespace, converts
    /// the decimal comma to a decimal point, then parses.
    ///
    /// ## Example
    /// ```rust
    /// use storefront::adapters::ProductTile;
    ///
    /// let tile = ProductTile::new("Ração 10kg", "R$ 120,50");
    /// assert_eq!(tile.parse_price().unwrap().cents(), 12050);
    /// ```
    pub fn parse_price(&self) -> Result<Money, PriceParseError> {
        let token = self.price_text.trim();
        let token = token.strip_prefix(CURRENCY_PREFIX).unwrap_or(token).trim();
        Money::parse_decimal(&token.replace(',', "."))
    }
}

// =============================================================================
// Service Adapter
// =============================================================================

/// What a service action trigger exposes via its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAction {
    /// Service name attached to the trigger.
    pub name: String,

    /// Price metadata as a parseable decimal string, e.g. `"40.00"`.
    pub price_attr: String,
}

impl ServiceAction {
    pub fn new(name: impl Into<String>, price_attr: impl Into<String>) -> Self {
        ServiceAction {
            name: name.into(),
            price_attr: price_attr.into(),
        }
    }

    /// Parses the trigger's price metadata.
    pub fn parse_price(&self) -> Result<Money, PriceParseError> {
        Money::parse_decimal(&self.price_attr)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price_with_currency_prefix_and_comma() {
        let tile = ProductTile::new("Ração 10kg", "R$ 120,50");
        assert_eq!(tile.parse_price().unwrap(), Money::from_cents(12050));
    }

    #[test]
    fn test_product_price_tolerates_spacing_variants() {
        assert_eq!(
            ProductTile::new("a", "R$120,50").parse_price().unwrap(),
            Money::from_cents(12050)
        );
        assert_eq!(
            ProductTile::new("a", "  R$  25,90  ").parse_price().unwrap(),
            Money::from_cents(2590)
        );
        assert_eq!(
            ProductTile::new("a", "25,90").parse_price().unwrap(),
            Money::from_cents(2590)
        );
    }

    #[test]
    fn test_product_price_whole_reais() {
        let tile = ProductTile::new("a", "R$ 15");
        assert_eq!(tile.parse_price().unwrap(), Money::from_cents(1500));
    }

    #[test]
    fn test_product_price_parse_failure() {
        assert!(ProductTile::new("a", "R$ --").parse_price().is_err());
        assert!(ProductTile::new("a", "").parse_price().is_err());
        assert!(ProductTile::new("a", "preço sob consulta").parse_price().is_err());
    }

    #[test]
    fn test_service_price_from_metadata() {
        let action = ServiceAction::new("Banho", "40.00");
        assert_eq!(action.parse_price().unwrap(), Money::from_cents(4000));

        let action = ServiceAction::new("Tosa", "35.5");
        assert_eq!(action.parse_price().unwrap(), Money::from_cents(3550));
    }

    #[test]
    fn test_service_price_parse_failure() {
        assert!(ServiceAction::new("Banho", "grátis").parse_price().is_err());
        assert!(ServiceAction::new("Banho", "").parse_price().is_err());
    }
}
