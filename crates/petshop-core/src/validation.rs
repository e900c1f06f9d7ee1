//! # Validation Module
//!
//! Input validation for candidate line items.
//!
//! Validation runs once, at the cart boundary: `Cart::add` calls both
//! checks before an item is appended, so every item inside a cart already
//! satisfies them. Nothing downstream (totals, rendering) re-checks.

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a line-item display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use petshop_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Ração Premium 10kg").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a line-item price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// A parsed token can legally be negative (the parser is sign-agnostic);
/// this is the invariant gate that keeps negatives out of carts.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
