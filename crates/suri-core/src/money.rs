//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The catalog API sends prices as JSON numbers:                          │
//! │    { "price": 22.3 }                                                    │
//! │                                                                         │
//! │  Summing those as floats drifts:                                        │
//! │    22.3 * 3 = 66.89999999999999  ❌ WRONG!                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Convert once at the catalog boundary: 22.3 → 2230 cents             │
//! │    2230 * 3 = 6690 cents = $66.90 exactly                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use suri_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_cents(500);
//! assert_eq!(doubled.cents(), 2198);
//! assert_eq!(total.cents(), 1599);
//!
//! // Catalog prices are converted exactly, once
//! let catalog_price = Money::try_from_f64(109.95).unwrap();
//! assert_eq!(catalog_price.cents(), 10995);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays well-defined; prices themselves are
///   checked non-negative at the catalog boundary
/// - **Saturating arithmetic**: Sums and products clamp at the i64 bounds
///   instead of panicking or wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer of cents
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► CartLineItem.price ──► price × quantity              │
/// │                                               │                         │
/// │                                               ▼                         │
/// │                              CartState.subtotal() ──► Order total       │
/// │                                                          │              │
/// │                                                          ▼              │
/// │                                               Installment amounts       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use suri_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a non-negative decimal amount such as `"109.95"` or `"7"`.
    ///
    /// At most two decimal places are accepted; anything finer cannot be
    /// represented in cents and is rejected rather than rounded.
    ///
    /// ## Example
    /// ```rust
    /// use suri_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("22.3").unwrap().cents(), 2230);
    /// assert_eq!(Money::from_decimal_str("7").unwrap().cents(), 700);
    /// assert!(Money::from_decimal_str("1.999").is_err());
    /// assert!(Money::from_decimal_str("-5.00").is_err());
    /// ```
    pub fn from_decimal_str(input: &str) -> CoreResult<Self> {
        let text = input.trim();
        let (major, minor) = match text.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (text, ""),
        };

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid_price(input, "not a non-negative decimal"));
        }
        if !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid_price(input, "not a non-negative decimal"));
        }
        if minor.len() > 2 {
            return Err(CoreError::invalid_price(
                input,
                "more than two decimal places",
            ));
        }

        let major: i64 = major
            .parse()
            .map_err(|_| CoreError::invalid_price(input, "amount too large"))?;
        // "5" -> 0, "5.5" -> 50, "5.05" -> 5
        let minor_cents = match minor.len() {
            0 => 0,
            1 => i64::from(minor.as_bytes()[0] - b'0') * 10,
            _ => i64::from(minor.as_bytes()[0] - b'0') * 10 + i64::from(minor.as_bytes()[1] - b'0'),
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_cents))
            .map(Money)
            .ok_or_else(|| CoreError::invalid_price(input, "amount too large"))
    }

    /// Converts a catalog price (a JSON number) into exact cents.
    ///
    /// `f64`'s `Display` prints the shortest decimal that round-trips, so
    /// `22.3` formats as `"22.3"` and converts to exactly 2230 cents.
    pub fn try_from_f64(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_price(value, "not a finite number"));
        }
        if value < 0.0 {
            return Err(CoreError::invalid_price(value, "must not be negative"));
        }
        Money::from_decimal_str(&value.to_string())
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Multiplies a unit price by a cart quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use suri_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1595); // $15.95
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 4785);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Splits the amount into `parts` installments that sum to the original.
    ///
    /// Leftover cents go to the earliest installments, one each.
    ///
    /// ## Example
    /// ```rust
    /// use suri_core::money::Money;
    ///
    /// let parts = Money::from_cents(16990).split(3);
    /// let cents: Vec<i64> = parts.iter().map(|m| m.cents()).collect();
    /// assert_eq!(cents, vec![5664, 5663, 5663]);
    /// ```
    ///
    /// Returns an empty vector when `parts` is zero.
    pub fn split(&self, parts: u32) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }
        let parts_i64 = i64::from(parts);
        let base = self.0.div_euclid(parts_i64);
        let remainder = self.0.rem_euclid(parts_i64);

        (0..parts_i64)
            .map(|i| Money(base + i64::from(i < remainder)))
            .collect()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and order summaries. Use frontend formatting for actual
/// UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
