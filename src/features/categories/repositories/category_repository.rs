use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::shared::constants::{
    CATEGORY_NAME_ACTIVE_INDEX, PG_FOREIGN_KEY_VIOLATION, PG_UNIQUE_VIOLATION,
};

/// Persistence port for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    /// Case-insensitive lookup. When several rows share the name the active
    /// one wins, then the most recently updated.
    async fn find_by_name_case_insensitive(&self, name: &str) -> Result<Option<Category>>;

    /// Insert or update by id
    async fn save(&self, category: Category) -> Result<Category>;

    /// Hard delete
    async fn remove(&self, category: Category) -> Result<Category>;
}

/// Convert database error to more specific AppError
fn handle_db_error(e: sqlx::Error, category: &Category) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION)
            && db_err.constraint() == Some(CATEGORY_NAME_ACTIVE_INDEX)
        {
            return AppError::DuplicateName(category.name.clone());
        }

        if db_err.code().as_deref() == Some(PG_FOREIGN_KEY_VIOLATION) {
            return AppError::BadRequest(format!(
                "Category with id {} is still referenced by funkos",
                category.id
            ));
        }
    }

    tracing::error!("Category query failed: {:?}", e);
    AppError::Database(e)
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM categories
            ORDER BY name, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_name_case_insensitive(&self, name: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM categories
            WHERE LOWER(name) = LOWER($1)
            ORDER BY is_active DESC, updated_at DESC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by name: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn save(&self, category: Category) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                is_active = EXCLUDED.is_active,
                updated_at = EXCLUDED.updated_at
            RETURNING id, name, is_active, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.is_active)
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, &category))
    }

    async fn remove(&self, category: Category) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            DELETE FROM categories
            WHERE id = $1
            RETURNING id, name, is_active, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, &category))?
        .ok_or_else(|| {
            AppError::NotFound(format!("Category with id {} not found", category.id))
        })
    }
}
