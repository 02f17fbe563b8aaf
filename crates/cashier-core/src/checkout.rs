//! # Checkout Tally
//!
//! The pure half of the checkout workflow: turning looked-up products and
//! requested quantities into detail lines and a running total.
//!
//! ## Where This Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cashier-db: TransactionRepository::checkout (one sqlx transaction)     │
//! │                                                                         │
//! │   for item in items:                                                    │
//! │       row = UPDATE products ... RETURNING name, price, stock            │
//! │       tally.add_line(&row, item.quantity, policy)?  ◄── THIS MODULE     │
//! │                                                                         │
//! │   INSERT transactions (total_amount = tally.total())                    │
//! │   for line in tally: INSERT transaction_details                         │
//! │   COMMIT                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because every subtotal goes through [`CheckoutTally::add_line`], the
//! total always equals the sum of the recorded subtotals.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, TransactionDetail};

// =============================================================================
// Checkout Policy
// =============================================================================

/// Stock rules applied while tallying a checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    /// Let stock go below zero instead of rejecting the checkout.
    pub allow_negative_stock: bool,
}

impl CheckoutPolicy {
    /// Policy that permits overselling.
    pub const fn allow_oversell() -> Self {
        CheckoutPolicy {
            allow_negative_stock: true,
        }
    }
}

// =============================================================================
// Pending Detail
// =============================================================================

/// A detail line that has been priced but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDetail {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub subtotal: Money,
}

impl PendingDetail {
    /// Attaches the identifiers assigned by the database.
    pub fn into_detail(self, id: i64, transaction_id: i64) -> TransactionDetail {
        TransactionDetail {
            id,
            transaction_id,
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            subtotal: self.subtotal.amount(),
        }
    }
}

// =============================================================================
// Checkout Tally
// =============================================================================

/// Accumulates priced lines in input order.
#[derive(Debug, Clone, Default)]
pub struct CheckoutTally {
    lines: Vec<PendingDetail>,
    total: Money,
}

impl CheckoutTally {
    /// Creates an empty tally sized for `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        CheckoutTally {
            lines: Vec::with_capacity(capacity),
            total: Money::zero(),
        }
    }

    /// Prices one line against `product` as it was before this line's
    /// stock decrement.
    ///
    /// ## Errors
    /// - `CoreError::InsufficientStock` when the policy forbids overselling
    ///   and `product.stock < quantity`
    /// - `CoreError::AmountOverflow` when the subtotal or the new total does
    ///   not fit in an `i64`; the tally is left unchanged
    pub fn add_line(
        &mut self,
        product: &Product,
        quantity: i64,
        policy: CheckoutPolicy,
    ) -> CoreResult<&PendingDetail> {
        if !product.can_sell(quantity, policy.allow_negative_stock) {
            return Err(CoreError::InsufficientStock {
                product_id: product.id,
                available: product.stock,
                requested: quantity,
            });
        }

        let overflow = || CoreError::AmountOverflow {
            product_id: product.id,
        };
        let subtotal = product
            .price()
            .multiply_quantity(quantity)
            .ok_or_else(overflow)?;
        self.total = self.total.checked_add(subtotal).ok_or_else(overflow)?;
        self.lines.push(PendingDetail {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            subtotal,
        });

        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Running total of all lines.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the tally, returning the total and the lines.
    pub fn into_parts(self) -> (Money, Vec<PendingDetail>) {
        (self.total, self.lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
