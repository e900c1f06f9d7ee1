//! # Cart Module
//!
//! The cart is the single source of truth for the page session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  Page Action              Session Command        Cart Change        │
//! │  ───────────              ───────────────        ───────────        │
//! │                                                                     │
//! │  Click "Buy" ────────────► add_product() ──────► items.push(item)  │
//! │                                                                     │
//! │  Confirm service ────────► confirm_service() ──► items.push(item)  │
//! │                                                                     │
//! │  Click "Remove" ─────────► remove_item() ──────► items.remove(i)   │
//! │                                                                     │
//! │  Finalize purchase ──────► finalize() ─────────► items.clear()     │
//! │                                                                     │
//! │  The cart itself never renders or notifies: callers orchestrate    │
//! │  presentation after every mutation.                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is preserved; append-only plus removal
//! - No item carries a negative price (validated on `add`)
//! - Identical items accumulate as separate entries (no quantity merge)
//! - `total()` is recomputed on demand, never cached

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price};

// =============================================================================
// Line Item Identity
// =============================================================================

/// Stable identity for one cart entry, issued at add time.
///
/// Removal is keyed by this id rather than by display position, so a
/// remove affordance stays correct no matter how the displayed list is
/// rebuilt or reordered after it was handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(Uuid);

impl LineItemId {
    fn new() -> Self {
        LineItemId(Uuid::new_v4())
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced entry in the cart: a product, or a confirmed service.
///
/// Immutable once created. The name and price are frozen at add time;
/// nothing in the session mutates an item in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable id issued when the item entered the cart.
    pub id: LineItemId,

    /// Display name (non-empty).
    pub name: String,

    /// Price frozen at add time (non-negative).
    pub price: Money,

    /// When this item was added to the cart.
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Cart
// =============================================================================

/// The ordered collection of line items for the current page session.
///
/// Created empty at session start, mutated by add/remove throughout, and
/// cleared entirely on successful checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a line item to the end of the cart.
    ///
    /// ## Behavior
    /// - Validates the name (non-empty, bounded length) and the price
    ///   (non-negative) before touching the sequence
    /// - Never merges: adding the same name/price twice yields two entries
    ///
    /// ## Returns
    /// The id issued for the new entry. Hand it to [`Cart::remove`] or use
    /// it to key a displayed row.
    ///
    /// ## Example
    /// ```rust
    /// use petshop_core::{Cart, Money};
    ///
    /// let mut cart = Cart::new();
    /// let id = cart.add("Banho", Money::from_cents(4000)).unwrap();
    /// assert_eq!(cart.len(), 1);
    /// assert!(cart.remove(&id).is_some());
    /// ```
    pub fn add(&mut self, name: &str, price: Money) -> Result<LineItemId, ValidationError> {
        validate_item_name(name)?;
        validate_price(price)?;

        let id = LineItemId::new();
        self.items.push(LineItem {
            id,
            name: name.trim().to_string(),
            price,
            added_at: Utc::now(),
        });
        Ok(id)
    }

    /// Removes the item with the given id.
    ///
    /// ## Returns
    /// The removed item, or `None` if no item carries the id (a stale
    /// affordance firing after the item is already gone). The miss is a
    /// silent no-op, not an error.
    pub fn remove(&mut self, id: &LineItemId) -> Option<LineItem> {
        let position = self.items.iter().position(|item| item.id == *id)?;
        Some(self.items.remove(position))
    }

    /// Removes the item at the given zero-based position.
    ///
    /// Positional removal is the legacy affordance key; out-of-range
    /// positions are a silent no-op (`None`), never a panic.
    pub fn remove_at(&mut self, position: usize) -> Option<LineItem> {
        if position < self.items.len() {
            Some(self.items.remove(position))
        } else {
            None
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all current item prices; zero for an empty cart.
    ///
    /// Recomputed on every call from the live sequence.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
