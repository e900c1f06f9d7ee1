//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A cart summing float prices drifts one centavo at a time.          │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    R$ 120,50 is stored as 12050                                     │
//! │    Totals are exact integer sums                                    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Convention
//! The storefront renders prices with a decimal comma and exactly two
//! fractional digits: `12,30`, `0,00`. The `R$ ` currency prefix belongs
//! to the view layer, not to this type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::PriceParseError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: lets arithmetic and parsing express negative values;
///   the cart boundary rejects them (`validate_price`)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for view serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use petshop_core::money::Money;
    ///
    /// let price = Money::from_cents(12050); // R$ 120,50
    /// assert_eq!(price.cents(), 12050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (reais and centavos).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -5,50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a normalized decimal token (`.` as separator) into Money.
    ///
    /// This is the shared tail of both input adapters: the product adapter
    /// strips the currency prefix and swaps the decimal comma for a dot
    /// before calling this, the service adapter hands its metadata string
    /// over as-is.
    ///
    /// ## Accepted Forms
    /// - `"120"`      → 12000 cents
    /// - `"120.5"`    → 12050 cents
    /// - `"120.50"`   → 12050 cents
    /// - `"120.505"`  → 12051 cents (rounded half away from zero)
    /// - `"-3.10"`    → -310 cents (callers reject negatives at the cart)
    ///
    /// ## Errors
    /// [`PriceParseError`] for empty tokens, stray characters, or a
    /// missing integer part. Nothing here touches the cart: a failed
    /// parse aborts the whole operation at the call site.
    ///
    /// ## Example
    /// ```rust
    /// use petshop_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("120.50").unwrap().cents(), 12050);
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(token: &str) -> Result<Self, PriceParseError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let (negative, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };

        if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(PriceParseError::Malformed {
                token: token.to_string(),
            });
        }
        if !frac_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(PriceParseError::Malformed {
                token: token.to_string(),
            });
        }

        let major: i64 = int_part
            .parse()
            .map_err(|_| PriceParseError::OutOfRange {
                token: token.to_string(),
            })?;

        // First two fractional digits are centavos; a third digit rounds
        // half away from zero, mirroring display rounding to two places.
        let mut frac_digits = frac_part.chars().map(|c| c as i64 - '0' as i64);
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().map_or(false, |d| d >= 5);

        let mut cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths))
            .ok_or_else(|| PriceParseError::OutOfRange {
                token: token.to_string(),
            })?;
        if round_up {
            cents += 1;
        }

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the storefront display form: two fractional digits, decimal
/// comma, no thousands separator, no currency symbol.
///
/// ## Example
/// ```rust
/// use petshop_core::money::Money;
///
/// assert_eq!(Money::from_cents(1230).to_string(), "12,30");
/// assert_eq!(Money::zero().to_string(), "0,00");
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{},{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summation for cart totals: `items.map(|i| i.price).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
