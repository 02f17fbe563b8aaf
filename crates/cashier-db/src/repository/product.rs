//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Listing with an optional name filter
//! - CRUD operations
//!
//! Stock is only decremented by the checkout unit of work in
//! [`crate::repository::transaction`]; here it is set wholesale on
//! create/update.
//!
//! ## Name Filter
//! ```text
//! GET /api/products?name=kop
//!       │
//!       ▼
//! WHERE name LIKE '%kop%'    (ASCII case-insensitive in SQLite)
//!       │
//!       ▼
//! Kopi Susu, Kopi Hitam      ordered by id
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use cashier_core::{NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list(None).await?;
/// let product = repo.get_by_id(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists products ordered by id.
    ///
    /// ## Arguments
    /// * `name` - Optional substring filter, already trimmed by validation
    pub async fn list(&self, name: Option<&str>) -> DbResult<Vec<Product>> {
        debug!(filter = ?name, "Listing products");

        let products = match name {
            Some(name) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, price, stock
                    FROM products
                    WHERE name LIKE '%' || ?1 || '%' ESCAPE '\'
                    ORDER BY id
                    "#,
                )
                .bind(escape_like(name))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, price, stock FROM products ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Inserts a new product and returns it with its assigned id.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query("INSERT INTO products (name, price, stock) VALUES (?1, ?2, ?3)")
            .bind(&product.name)
            .bind(product.price)
            .bind(product.stock)
            .execute(&self.pool)
            .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
        })
    }

    /// Replaces a product's name, price and stock.
    ///
    /// Past transaction details keep their snapshot name and subtotal.
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<Product> {
        debug!(id, "Updating product");

        let result =
            sqlx::query("UPDATE products SET name = ?2, price = ?3, stock = ?4 WHERE id = ?1")
                .bind(id)
                .bind(&product.name)
                .bind(product.price)
                .bind(product.stock)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(Product {
            id,
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
        })
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No product with this id
    /// * `Err(DbError::ForeignKeyViolation)` - Product has been sold
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Escapes LIKE wildcards so the filter matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================
