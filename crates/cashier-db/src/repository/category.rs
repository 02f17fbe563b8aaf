//! # Category Repository
//!
//! CRUD for product categories.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use cashier_core::{Category, NewCategory};

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Gets a category by its ID.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No category with this id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Category> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Category", id))
    }

    /// Inserts a new category and returns it with its assigned id.
    pub async fn insert(&self, category: &NewCategory) -> DbResult<Category> {
        debug!(name = %category.name, "Inserting category");

        let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?1, ?2)")
            .bind(&category.name)
            .bind(&category.description)
            .execute(&self.pool)
            .await?;

        Ok(Category {
            id: result.last_insert_rowid(),
            name: category.name.clone(),
            description: category.description.clone(),
        })
    }

    /// Replaces a category's name and description.
    pub async fn update(&self, id: i64, category: &NewCategory) -> DbResult<Category> {
        debug!(id, "Updating category");

        let result = sqlx::query("UPDATE categories SET name = ?2, description = ?3 WHERE id = ?1")
            .bind(id)
            .bind(&category.name)
            .bind(&category.description)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(Category {
            id,
            name: category.name.clone(),
            description: category.description.clone(),
        })
    }

    /// Deletes a category.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use cashier_core::NewCategory;

    fn drinks() -> NewCategory {
        NewCategory {
            name: "Drinks".to_string(),
            description: Some("Hot and cold".to_string()),
        }
    }

    #[tokio::test]
    async fn test_category_crud() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.categories();

        let created = repo.insert(&drinks()).await.unwrap();
        assert_eq!(created.name, "Drinks");
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), created);

        let renamed = NewCategory {
            name: "Beverages".to_string(),
            description: None,
        };
        let updated = repo.update(created.id, &renamed).await.unwrap();
        assert_eq!(updated.name, "Beverages");
        assert!(updated.description.is_none());

        assert_eq!(repo.list().await.unwrap(), vec![updated]);

        repo.delete(created.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_category_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.categories();

        let err = repo.get_by_id(42).await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found: 42");

        assert!(repo.update(42, &drinks()).await.is_err());
        assert!(repo.delete(42).await.is_err());
    }
}
