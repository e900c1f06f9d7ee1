//! # Error Types
//!
//! Domain-specific error types for petshop-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending token, field name)
//! 3. Errors are enum variants, never String
//! 4. Every failure in this system is recoverable; nothing here is fatal

use thiserror::Error;

// =============================================================================
// Price Parse Error
// =============================================================================

/// A price token could not be converted to [`Money`](crate::Money).
///
/// ## When This Occurs
/// - A product tile's price text is missing or mangled
/// - A service trigger's price metadata is not a decimal string
///
/// Parse failures abort the operation at the point of detection: the cart
/// is untouched and the user sees nothing happen. The only trace is a
/// diagnostic log emitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
    /// The token was empty after trimming.
    #[error("price token is empty")]
    Empty,

    /// The token contained characters other than digits and a single
    /// decimal point, or had no integer part.
    #[error("price token '{token}' is not a decimal number")]
    Malformed { token: String },

    /// The token parsed but does not fit the cents representation.
    #[error("price token '{token}' is out of range")]
    OutOfRange { token: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a candidate line item doesn't meet the cart's
/// invariants. Used for early validation before the item is appended.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A cart never holds a negative price.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        let err = PriceParseError::Malformed {
            token: "R$ abc".to_string(),
        };
        assert_eq!(err.to_string(), "price token 'R$ abc' is not a decimal number");
        assert_eq!(PriceParseError::Empty.to_string(), "price token is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
