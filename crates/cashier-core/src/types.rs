//! # Domain Types
//!
//! Core domain types used throughout the cashier backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │    Category     │   │     Product     │   │     Transaction      │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  id             │   │  id             │   │  id                  │  │
//! │  │  name           │   │  name           │   │  created_at          │  │
//! │  │  description    │   │  price          │   │  total_amount        │  │
//! │  └─────────────────┘   │  stock          │   │  details ──┐         │  │
//! │                        └─────────────────┘   └────────────┼─────────┘  │
//! │                                                           ▼            │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │  CheckoutItem   │   │     Report      │   │  TransactionDetail   │  │
//! │  │  (request only) │   │  (computed)     │   │  product_name (snap) │  │
//! │  │  product_id     │   │  total_revenue  │   │  quantity            │  │
//! │  │  quantity       │   │  top_sell_...   │   │  subtotal            │  │
//! │  └─────────────────┘   └─────────────────┘   └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names are the wire names: these structs serialize directly into the
//! `data` member of API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Payload for creating or replacing a category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Database-assigned identifier.
    pub id: i64,

    /// Display name, copied onto transaction details at checkout.
    pub name: String,

    /// Unit price in whole currency units.
    pub price: i64,

    /// Units on hand.
    pub stock: i64,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::new(self.price)
    }

    /// Checks whether `quantity` can be taken from stock.
    ///
    /// With `allow_negative_stock` the answer is always yes.
    pub fn can_sell(&self, quantity: i64, allow_negative_stock: bool) -> bool {
        allow_negative_stock || self.stock >= quantity
    }
}

/// Payload for creating or replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

// =============================================================================
// Checkout Request
// =============================================================================

/// One requested line of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Body of `POST /api/transactions/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
}

// =============================================================================
// Transaction
// =============================================================================

/// A committed sale.
///
/// Never updated after checkout. `total_amount` equals the sum of the
/// details' subtotals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Transaction {
    pub id: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub total_amount: i64,
    /// Loaded separately from `transaction_details`.
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::new(self.total_amount)
    }
}

/// A line item of a transaction.
/// Uses snapshot pattern to freeze the product name at time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct TransactionDetail {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    pub quantity: i64,
    /// Unit price at time of sale × quantity.
    pub subtotal: i64,
}

// =============================================================================
// Report
// =============================================================================

/// Daily sales summary. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub total_revenue: i64,
    pub total_transaction: i64,
    pub top_sell_product: TopSellProduct,
}

/// Best-selling product of the reported day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct TopSellProduct {
    pub name: String,
    pub quantity_sell: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(stock: i64) -> Product {
        Product {
            id: 1,
            name: "Kopi Susu".to_string(),
            price: 10,
            stock,
        }
    }

    #[test]
    fn test_can_sell_respects_stock() {
        let p = product(5);
        assert!(p.can_sell(5, false));
        assert!(!p.can_sell(6, false));
        assert!(p.can_sell(6, true));
    }

    #[test]
    fn test_money_accessors() {
        assert_eq!(product(1).price(), Money::new(10));

        let tx = Transaction {
            id: 1,
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            total_amount: 12_500,
            details: Vec::new(),
        };
        assert_eq!(tx.total().to_string(), "12,500");
    }

    #[test]
    fn test_transaction_wire_shape() {
        let tx = Transaction {
            id: 7,
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            total_amount: 20,
            details: vec![TransactionDetail {
                id: 1,
                transaction_id: 7,
                product_id: 1,
                product_name: "Kopi Susu".to_string(),
                quantity: 2,
                subtotal: 20,
            }],
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["total_amount"], 20);
        assert_eq!(json["created_at"], "2026-01-02T03:04:05Z");
        assert_eq!(json["details"][0]["product_name"], "Kopi Susu");
        assert_eq!(json["details"][0]["subtotal"], 20);
    }

    #[test]
    fn test_checkout_request_parses() {
        let req: CheckoutRequest = serde_json::from_str(
            r#"{"items":[{"product_id":1,"quantity":2},{"product_id":3,"quantity":1}]}"#,
        )
        .unwrap();

        assert_eq!(req.items.len(), 2);
        assert_eq!(req.items[0], CheckoutItem { product_id: 1, quantity: 2 });
    }

    #[test]
    fn test_new_category_description_optional() {
        let c: NewCategory = serde_json::from_str(r#"{"name":"Drinks"}"#).unwrap();
        assert_eq!(c.name, "Drinks");
        assert!(c.description.is_none());
    }
}
