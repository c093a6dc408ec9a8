//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    $10.00 × 15% off = $8.499999... → displayed as $8.50 or $8.49?      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Truncation                               │
//! │    Discounted amounts are computed in integer cents and truncated       │
//! │    toward zero. A customer is never charged a rounded-up cent.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use edumart_core::money::Money;
//! use edumart_core::types::DiscountRate;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // $21.98
//! let total = price + Money::from_cents(500);   // $15.99
//!
//! // Discount arithmetic always truncates toward zero
//! let rate = DiscountRate::from_bps(1500);      // 15%
//! assert_eq!(price.discount_amount(rate).cents(), 164); // not 165
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for adjustments and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CatalogItem.price_cents ──► effective unit price ──► line total        │
/// │                                                                         │
/// │  subtotal ──► bulk discount lookup ──► OrderSummary.total               │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type             │
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
    /// use edumart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The catalog, calculations, and API all use cents.
    /// Only the UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use edumart_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use edumart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates the discount amount for a rate, truncated toward zero.
    ///
    /// Used when a discount is reported as its own ledger line (the bulk
    /// tier's `bulkDiscountAmount`): the amount taken off is
    /// `subtotal × rate` with the fractional cent dropped.
    ///
    /// ## Implementation
    /// Integer math in i128: `amount_cents * bps / 10000`. Rust integer
    /// division truncates toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use edumart_core::money::Money;
    /// use edumart_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(21975);     // $219.75
    /// let rate = DiscountRate::from_bps(500);      // 5%
    /// // 5% of 21975 = 1098.75 cents → 1098
    /// assert_eq!(subtotal.discount_amount(rate).cents(), 1098);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        // i128 to prevent overflow on large amounts
        let discount_cents = self.0 as i128 * rate.bps() as i128 / 10_000;
        Money::from_cents(discount_cents as i64)
    }

    /// Applies a discount rate and returns the discounted price,
    /// truncated toward zero.
    ///
    /// ## Truncation Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  DISCOUNTED PRICES TRUNCATE, NEVER ROUND UP                         │
    /// │                                                                     │
    /// │  $10.99 at 15% off = 934.15 cents effective                         │
    /// │                                                                     │
    /// │    truncate → $9.34  → price as advertised or a hair under          │
    /// │    round up → $9.35  → customer charged a cent over the promise     │
    /// │                                                                     │
    /// │  The effective price is computed directly as price × (1 − rate),    │
    /// │  NOT as price − truncated discount: the latter would shift the      │
    /// │  fractional cent onto the customer.                                 │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use edumart_core::money::Money;
    /// use edumart_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(10000);          // $100.00
    /// let sale = price.less_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(sale.cents(), 9000);                // $90.00
    /// ```
    pub fn less_discount(&self, rate: DiscountRate) -> Money {
        let remainder_bps = 10_000i128 - rate.bps() as i128;
        let discounted_cents = self.0 as i128 * remainder_bps / 10_000;
        Money::from_cents(discounted_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use `StoreConfig::format_currency` for actual UI
/// display to handle currency symbols properly.
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_discount_amount_exact() {
        // $100.00 at 10% = $10.00 exactly, no truncation needed
        let amount = Money::from_cents(10000);
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(amount.discount_amount(rate).cents(), 1000);
        assert_eq!(amount.less_discount(rate).cents(), 9000);
    }

    #[test]
    fn test_discount_amount_truncates() {
        // $10.99 at 15% = 164.85 cents of discount → 164 (truncated)
        let amount = Money::from_cents(1099);
        let rate = DiscountRate::from_bps(1500);
        assert_eq!(amount.discount_amount(rate).cents(), 164);

        // The discounted price truncates independently:
        // 1099 × 85% = 934.15 → 934, not 1099 − 164 = 935
        assert_eq!(amount.less_discount(rate).cents(), 934);
    }

    #[test]
    fn test_discount_truncation_direction() {
        // One cent at 99.99%: both the discount (0.9999) and the price
        // (0.0001) truncate toward zero
        let amount = Money::from_cents(1);
        let rate = DiscountRate::from_bps(9999);
        assert_eq!(amount.discount_amount(rate).cents(), 0);
        assert_eq!(amount.less_discount(rate).cents(), 0);
    }

    #[test]
    fn test_zero_discount() {
        let amount = Money::from_cents(1234);
        assert_eq!(amount.discount_amount(DiscountRate::zero()).cents(), 0);
        assert_eq!(amount.less_discount(DiscountRate::zero()), amount);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }
}
