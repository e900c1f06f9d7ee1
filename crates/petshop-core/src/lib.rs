//! # petshop-core: Pure Business Logic for the Mundo Pet Storefront
//!
//! This crate is the **heart** of the storefront cart. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Page (external collaborator)                  │ │
//! │  │   product tiles ─► cart drawer ─► popup ─► checkout notice    │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │ trait boundary                     │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              apps/storefront (session layer)                  │ │
//! │  │   commands, view projection, confirmation flow, adapters      │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ petshop-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────────┐               │ │
//! │  │   │  money   │  │   cart   │  │  validation  │               │ │
//! │  │   │  Money   │  │   Cart   │  │    rules     │               │ │
//! │  │   │  parse   │  │ LineItem │  │    checks    │               │ │
//! │  │   └──────────┘  └──────────┘  └──────────────┘               │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DISPLAY • NO TIMERS • PURE FUNCTIONS            │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and LineItem, the session's single source of truth
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use petshop_core::{Cart, Money};
//!
//! let mut cart = Cart::new();
//! cart.add("Ração 10kg", Money::parse_decimal("120.50").unwrap()).unwrap();
//! cart.add("Banho", Money::from_cents(4000)).unwrap();
//!
//! assert_eq!(cart.total().to_string(), "160,50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use petshop_core::Cart` instead of
// `use petshop_core::cart::Cart`

pub use cart::{Cart, LineItem, LineItemId};
pub use error::{PriceParseError, ValidationError};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a line-item display name.
///
/// Product tiles and service triggers supply these; a bound keeps a
/// mangled page from pushing arbitrarily large strings into the cart.
pub const MAX_ITEM_NAME_LEN: usize = 200;
