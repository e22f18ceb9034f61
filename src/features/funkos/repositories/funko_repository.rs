use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::funkos::models::{Funko, NewFunko};
use crate::shared::constants::PG_FOREIGN_KEY_VIOLATION;

/// Persistence port for funkos
#[async_trait]
pub trait FunkoRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Funko>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Funko>>;

    /// Insert a new row; the store assigns the id
    async fn insert(&self, funko: NewFunko) -> Result<Funko>;

    /// Overwrite an existing row
    async fn save(&self, funko: Funko) -> Result<Funko>;
}

fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some(PG_FOREIGN_KEY_VIOLATION) {
            return AppError::BadRequest("Referenced category does not exist.".to_string());
        }
    }

    tracing::error!("Funko query failed: {:?}", e);
    AppError::Database(e)
}

pub struct PgFunkoRepository {
    pool: PgPool,
}

impl PgFunkoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FunkoRepository for PgFunkoRepository {
    async fn find_all(&self) -> Result<Vec<Funko>> {
        sqlx::query_as::<_, Funko>(
            r#"
            SELECT id, name, price, quantity, image, is_deleted, category_id, created_at, updated_at
            FROM funkos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Funko>> {
        sqlx::query_as::<_, Funko>(
            r#"
            SELECT id, name, price, quantity, image, is_deleted, category_id, created_at, updated_at
            FROM funkos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn insert(&self, funko: NewFunko) -> Result<Funko> {
        sqlx::query_as::<_, Funko>(
            r#"
            INSERT INTO funkos (name, price, quantity, image, is_deleted, category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, price, quantity, image, is_deleted, category_id, created_at, updated_at
            "#,
        )
        .bind(&funko.name)
        .bind(funko.price)
        .bind(funko.quantity)
        .bind(&funko.image)
        .bind(funko.is_deleted)
        .bind(funko.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn save(&self, funko: Funko) -> Result<Funko> {
        sqlx::query_as::<_, Funko>(
            r#"
            UPDATE funkos
            SET name = $1,
                price = $2,
                quantity = $3,
                image = $4,
                is_deleted = $5,
                category_id = $6,
                updated_at = $7
            WHERE id = $8
            RETURNING id, name, price, quantity, image, is_deleted, category_id, created_at, updated_at
            "#,
        )
        .bind(&funko.name)
        .bind(funko.price)
        .bind(funko.quantity)
        .bind(&funko.image)
        .bind(funko.is_deleted)
        .bind(funko.category_id)
        .bind(funko.updated_at)
        .bind(funko.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?
        .ok_or_else(|| AppError::NotFound(format!("Funko with id {} not found", funko.id)))
    }
}
