use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::funkos::models::{Funko, NewFunko};
use crate::features::funkos::repositories::FunkoRepository;

#[derive(Default)]
struct Rows {
    next_id: i64,
    funkos: BTreeMap<i64, Funko>,
}

/// In-memory funko store with sequential ids
#[derive(Default)]
pub struct InMemoryFunkoRepository {
    rows: RwLock<Rows>,
}

impl InMemoryFunkoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.funkos.len()
    }
}

#[async_trait]
impl FunkoRepository for InMemoryFunkoRepository {
    async fn find_all(&self) -> Result<Vec<Funko>> {
        Ok(self.rows.read().await.funkos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Funko>> {
        Ok(self.rows.read().await.funkos.get(&id).cloned())
    }

    async fn insert(&self, funko: NewFunko) -> Result<Funko> {
        let mut rows = self.rows.write().await;
        rows.next_id += 1;
        let now = Utc::now();
        let stored = Funko {
            id: rows.next_id,
            name: funko.name,
            price: funko.price,
            quantity: funko.quantity,
            image: funko.image,
            is_deleted: funko.is_deleted,
            category_id: funko.category_id,
            created_at: now,
            updated_at: now,
        };
        rows.funkos.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, funko: Funko) -> Result<Funko> {
        let mut rows = self.rows.write().await;
        match rows.funkos.get_mut(&funko.id) {
            Some(slot) => {
                *slot = funko.clone();
                Ok(funko)
            }
            None => Err(AppError::NotFound(format!(
                "Funko with id {} not found",
                funko.id
            ))),
        }
    }
}
