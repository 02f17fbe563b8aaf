//! # Transaction Repository
//!
//! Checkout, transaction lookup and the daily sales report.
//!
//! ## Checkout Unit of Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BEGIN                                                                  │
//! │    for each item (input order):                                         │
//! │      UPDATE products SET stock = stock - qty                            │
//! │        WHERE id = ? RETURNING name, price, stock                        │
//! │      ├── no row ──────────────► NotFound("Product", id)  ─┐             │
//! │      └── tally.add_line(...)                              │             │
//! │            └── stock too low ► InsufficientStock ─────────┤             │
//! │    INSERT transactions (total_amount, created_at)         │             │
//! │    INSERT transaction_details × N                         │             │
//! │  COMMIT                                                   ▼             │
//! │                                            dropped tx ⇒ ROLLBACK        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first statement is a write, so SQLite's write lock is held from the
//! first stock decrement until commit and concurrent checkouts serialize.
//!
//! ## Stock Delta Pattern
//! Stock is always decremented relative to the stored value
//! (`stock = stock - ?`), never overwritten with a value computed in Rust.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use cashier_core::{
    CheckoutItem, CheckoutPolicy, CheckoutTally, Product, Report, TopSellProduct, Transaction,
    TransactionDetail,
};

/// Repository for sales transactions.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Converts checkout items into a committed transaction.
    ///
    /// All stock decrements and inserts happen in one database
    /// transaction. Any error leaves products and history untouched.
    ///
    /// An empty item list yields a transaction with zero total and no
    /// details; callers that want to forbid that validate first.
    ///
    /// ## Returns
    /// * `Ok(Transaction)` - Committed, with ids, timestamp and details
    /// * `Err(DbError::NotFound)` - An item references a missing product
    /// * `Err(DbError::Rule(InsufficientStock))` - Policy forbids oversell
    /// * `Err(DbError::Rule(AmountOverflow))` - A subtotal or the total does not fit in an `i64`
    pub async fn checkout(
        &self,
        items: &[CheckoutItem],
        policy: CheckoutPolicy,
    ) -> DbResult<Transaction> {
        debug!(lines = items.len(), ?policy, "Starting checkout");

        let mut tx = self.pool.begin().await?;
        let mut tally = CheckoutTally::with_capacity(items.len());

        for item in items {
            let row: Option<(String, i64, i64)> = sqlx::query_as(
                r#"
                UPDATE products
                SET stock = stock - ?1
                WHERE id = ?2
                RETURNING name, price, stock
                "#,
            )
            .bind(item.quantity)
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some((name, price, stock_after)) = row else {
                debug!(product_id = item.product_id, "Checkout references missing product");
                return Err(DbError::not_found("Product", item.product_id));
            };

            // Stock as it was before this line's decrement
            let product = Product {
                id: item.product_id,
                name,
                price,
                stock: stock_after + item.quantity,
            };
            tally.add_line(&product, item.quantity, policy)?;
        }

        if tally.is_empty() {
            debug!("Checkout has no lines, recording a zero total");
        }

        let created_at = Utc::now();
        let (total, lines) = tally.into_parts();

        let transaction_id = sqlx::query(
            "INSERT INTO transactions (total_amount, created_at) VALUES (?1, ?2)",
        )
        .bind(total.amount())
        .bind(created_at)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let mut details = Vec::with_capacity(lines.len());
        for line in lines {
            let detail_id = sqlx::query(
                r#"
                INSERT INTO transaction_details (
                    transaction_id, product_id, product_name, quantity, subtotal
                ) VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(transaction_id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.quantity)
            .bind(line.subtotal.amount())
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            details.push(line.into_detail(detail_id, transaction_id));
        }

        tx.commit().await?;

        info!(
            transaction_id,
            total = %total,
            lines = details.len(),
            "Checkout committed"
        );

        Ok(Transaction {
            id: transaction_id,
            created_at,
            total_amount: total.amount(),
            details,
        })
    }

    /// Gets a committed transaction with its details.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Transaction> {
        let mut transaction = sqlx::query_as::<_, Transaction>(
            "SELECT id, created_at, total_amount FROM transactions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Transaction", id))?;

        transaction.details = self.get_details(id).await?;
        Ok(transaction)
    }

    /// Gets the detail lines of a transaction, ordered by id.
    pub async fn get_details(&self, transaction_id: i64) -> DbResult<Vec<TransactionDetail>> {
        let details = sqlx::query_as::<_, TransactionDetail>(
            r#"
            SELECT id, transaction_id, product_id, product_name, quantity, subtotal
            FROM transaction_details
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(transaction_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }

    /// Sales report for today in the server's local time zone.
    pub async fn report(&self) -> DbResult<Report> {
        self.report_for_day(Local::now().date_naive()).await
    }

    /// Sales report for one local calendar day.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No detail lines that day, so no top seller
    pub async fn report_for_day(&self, day: NaiveDate) -> DbResult<Report> {
        let (start, end) = local_day_bounds(day)?;
        debug!(%day, %start, %end, "Building sales report");

        let (total_revenue, total_transaction): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_amount), 0), COUNT(*)
            FROM transactions
            WHERE created_at >= ?1 AND created_at < ?2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        // Current product name when the product still exists, otherwise the
        // snapshot. Ties go to the lowest product id.
        let top_sell_product = sqlx::query_as::<_, TopSellProduct>(
            r#"
            SELECT
                COALESCE(p.name, MAX(td.product_name)) AS name,
                SUM(td.quantity) AS quantity_sell
            FROM transaction_details td
            INNER JOIN transactions t ON t.id = td.transaction_id
            LEFT JOIN products p ON p.id = td.product_id
            WHERE t.created_at >= ?1 AND t.created_at < ?2
            GROUP BY td.product_id
            ORDER BY quantity_sell DESC, td.product_id ASC
            LIMIT 1
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Report", day))?;

        Ok(Report {
            total_revenue,
            total_transaction,
            top_sell_product,
        })
    }
}

/// Half-open UTC interval `[start, end)` covering one local calendar day.
fn local_day_bounds(day: NaiveDate) -> DbResult<(DateTime<Utc>, DateTime<Utc>)> {
    let next = day
        .succ_opt()
        .ok_or_else(|| DbError::Internal(format!("No day after {}", day)))?;

    Ok((local_midnight(day)?, local_midnight(next)?))
}

fn local_midnight(day: NaiveDate) -> DbResult<DateTime<Utc>> {
    let midnight = day.and_time(NaiveTime::MIN);

    // A DST jump can skip midnight; the day then starts an hour later.
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map(|t| t.with_timezone(&Utc))
        .ok_or_else(|| DbError::Internal(format!("No local midnight on {}", day)))
}

// =============================================================================
// Unit Tests
// =============================================================================
