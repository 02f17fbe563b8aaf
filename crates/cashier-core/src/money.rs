//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Whole currency units                                     │
//! │    Prices are stored as integers in the smallest unit the store        │
//! │    charges in. A subtotal is always exactly price × quantity.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cashier_core::money::Money;
//!
//! let price = Money::new(3500);
//!
//! let subtotal = price.multiply_quantity(2).unwrap();
//! assert_eq!(subtotal.amount(), 7000);
//!
//! let total = subtotal.checked_add(Money::new(500)).unwrap();
//! assert_eq!(total.amount(), 7500);
//!
//! assert!(Money::new(i64::MAX / 2).multiply_quantity(3).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: the database column is a plain INTEGER
/// - **Checked arithmetic**: pricing goes through `multiply_quantity` and
///   `checked_add`, which return `None` instead of wrapping
/// - **Single field tuple struct**: serializes as the bare number
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──► × quantity ──► TransactionDetail.subtotal            │
/// │                                          │                              │
/// │                                          ▼ Σ                            │
/// │                                  Transaction.total_amount               │
/// │                                          │                              │
/// │                                          ▼ Σ (same day)                 │
/// │                                  Report.total_revenue                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use cashier_core::money::Money;
    ///
    /// let price = Money::new(12_000);
    /// assert_eq!(price.amount(), 12_000);
    /// ```
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Returns `None` when the product does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use cashier_core::money::Money;
    ///
    /// let unit_price = Money::new(2_500);
    /// let subtotal = unit_price.multiply_quantity(3).unwrap();
    /// assert_eq!(subtotal.amount(), 7_500);
    /// ```
    ///
    /// ## Checkout Workflow
    /// ```text
    /// Product: Indomie @ 2500
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: 7500
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(amount) => Some(Money(amount)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(amount) => Some(Money(amount)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the bare amount with thousands separators, e.g. `12,500`.
///
/// For logs only; currency symbols are a frontend concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if self.0 < 0 {
            write!(f, "-{}", grouped)
        } else {
            write!(f, "{}", grouped)
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_amount() {
        let m = Money::new(15_000);
        assert_eq!(m.amount(), 15_000);
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(0).to_string(), "0");
        assert_eq!(Money::new(999).to_string(), "999");
        assert_eq!(Money::new(1_000).to_string(), "1,000");
        assert_eq!(Money::new(1_234_567).to_string(), "1,234,567");
        assert_eq!(Money::new(-25_000).to_string(), "-25,000");
    }

    #[test]
    fn test_checked_add() {
        let a = Money::new(1_000);
        let b = Money::new(500);

        assert_eq!(a.checked_add(b), Some(Money::new(1_500)));
    }

    #[test]
    fn test_overflow_is_reported_not_wrapped() {
        let huge = Money::new(i64::MAX / 2);

        assert_eq!(huge.multiply_quantity(3), None);
        assert_eq!(huge.checked_add(huge).map(|m| m.amount()), Some(i64::MAX - 1));
        assert_eq!(huge.checked_add(Money::new(i64::MAX)), None);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::new(10);
        assert_eq!(unit_price.multiply_quantity(2), Some(Money::new(20)));
        assert_eq!(unit_price.multiply_quantity(0), Some(Money::zero()));
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::new(4_200)).unwrap();
        assert_eq!(json, "4200");

        let back: Money = serde_json::from_str("4200").unwrap();
        assert_eq!(back, Money::new(4_200));
    }
}
