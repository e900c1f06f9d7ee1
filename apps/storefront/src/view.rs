//! # Cart View Projection
//!
//! Pure projection from cart state to the displayed list representation.
//!
//! The projection fully rebuilds the view from current cart contents on
//! every call — no incremental diffing. At this scale a rebuild is cheap,
//! and handing the surface a complete view keeps the boundary stateless.
//! Each row carries the line item's stable id, so remove affordances bind
//! to identity rather than display position and never need rewiring after
//! a rebuild.

use serde::{Deserialize, Serialize};

use petshop_core::{Cart, LineItemId, Money};

/// Placeholder text a surface shows when the cart has no rows.
pub const EMPTY_CART_PLACEHOLDER: &str = "Your cart is empty.";

/// One displayed cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    /// Stable key for the row's remove affordance.
    pub id: LineItemId,

    /// Item display name.
    pub name: String,

    /// Formatted price, currency prefix included: `"R$ 120,50"`.
    pub price: String,
}

/// The complete displayed cart: rows in insertion order plus a total row.
///
/// An empty cart projects to no rows and no total; the surface shows
/// [`EMPTY_CART_PLACEHOLDER`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub rows: Vec<CartRow>,
    /// Formatted sum of all rows; `None` when the cart is empty.
    pub total: Option<String>,
}

impl CartView {
    /// Projects the current cart contents into a displayable view.
    ///
    /// ## Example
    /// ```rust
    /// use petshop_core::{Cart, Money};
    /// use storefront::view::CartView;
    ///
    /// let mut cart = Cart::new();
    /// cart.add("Banho", Money::from_cents(4000)).unwrap();
    ///
    /// let view = CartView::project(&cart);
    /// assert_eq!(view.rows[0].price, "R$ 40,00");
    /// assert_eq!(view.total.as_deref(), Some("R$ 40,00"));
    /// ```
    pub fn project(cart: &Cart) -> Self {
        let rows = cart
            .items()
            .iter()
            .map(|item| CartRow {
                id: item.id,
                name: item.name.clone(),
                price: display_price(item.price),
            })
            .collect();

        let total = if cart.is_empty() {
            None
        } else {
            Some(display_price(cart.total()))
        };

        CartView { rows, total }
    }

    /// True when the view shows the empty-cart placeholder.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats a price for display, `R$ ` prefix included.
pub fn display_price(price: Money) -> String {
    format!("R$ {price}")
}

// =============================================================================
// Unit Tests
// =============================================================================
