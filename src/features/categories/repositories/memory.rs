use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;

/// In-memory category store. Enforces the same "one active row per
/// lowercase name" rule as the partial unique index in Postgres.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    rows: RwLock<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>> {
        let mut all: Vec<Category> = self.rows.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_name_case_insensitive(&self, name: &str) -> Result<Option<Category>> {
        let needle = name.to_lowercase();
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|c| c.name.to_lowercase() == needle)
            .max_by_key(|c| (c.is_active, c.updated_at))
            .cloned())
    }

    async fn save(&self, category: Category) -> Result<Category> {
        let mut rows = self.rows.write().await;

        if category.is_active {
            let needle = category.name.to_lowercase();
            let clash = rows
                .values()
                .any(|c| c.id != category.id && c.is_active && c.name.to_lowercase() == needle);
            if clash {
                return Err(AppError::DuplicateName(category.name));
            }
        }

        rows.insert(category.id, category.clone());
        Ok(category)
    }

    async fn remove(&self, category: Category) -> Result<Category> {
        self.rows
            .write()
            .await
            .remove(&category.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with id {} not found", category.id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_rejects_second_active_row_with_same_name() {
        let repo = InMemoryCategoryRepository::new();
        repo.save(Category::new("Marvel")).await.unwrap();

        let err = repo.save(Category::new("MARVEL")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(name) if name == "MARVEL"));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_inactive_rows_may_share_a_name() {
        let repo = InMemoryCategoryRepository::new();
        for _ in 0..2 {
            let mut category = Category::new("DC");
            category.set_active(false);
            repo.save(category).await.unwrap();
        }
        repo.save(Category::new("dc")).await.unwrap();

        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn test_name_lookup_prefers_active_row() {
        let repo = InMemoryCategoryRepository::new();
        let mut old = Category::new("Disney");
        old.set_active(false);
        repo.save(old).await.unwrap();
        let live = repo.save(Category::new("disney")).await.unwrap();

        let found = repo
            .find_by_name_case_insensitive("DISNEY")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, live.id);
    }
}
