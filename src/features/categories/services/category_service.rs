use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List every category, active or not
    pub async fn find_all(&self) -> Result<Vec<CategoryResponseDto>> {
        tracing::info!("Listing all categories");
        let categories = self.repository.find_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn find_one(&self, id: Uuid) -> Result<CategoryResponseDto> {
        tracing::info!("Finding category by id: {}", id);
        self.get_category(id).await.map(Into::into)
    }

    /// Create a category, or revive a soft-deleted one with the same name
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = dto.to_entity();
        tracing::info!("Creating category: {}", category.name);

        let saved = match self.resolve_name(&category.name).await? {
            Some(reactivated) => reactivated,
            None => self.repository.save(category).await?,
        };

        Ok(saved.into())
    }

    /// Rename a category.
    ///
    /// Returns `None` when the new name belonged to a soft-deleted category:
    /// that category is reactivated and this one is left untouched.
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCategoryDto,
    ) -> Result<Option<CategoryResponseDto>> {
        tracing::info!("Updating category with id: {}", id);
        let existing = self.get_category(id).await?;
        let category = dto.apply_to(existing);

        if self.resolve_name(&category.name).await?.is_some() {
            return Ok(None);
        }

        let saved = self.repository.save(category).await?;
        Ok(Some(saved.into()))
    }

    /// Soft delete
    pub async fn change_is_active(&self, id: Uuid) -> Result<CategoryResponseDto> {
        tracing::info!("Deactivating category with id: {}", id);
        let mut category = self.get_category(id).await?;
        category.set_active(false);
        let saved = self.repository.save(category).await?;
        Ok(saved.into())
    }

    /// Hard delete
    pub async fn remove(&self, id: Uuid) -> Result<CategoryResponseDto> {
        tracing::info!("Removing category with id: {}", id);
        let category = self.get_category(id).await?;
        let removed = self.repository.remove(category).await?;
        Ok(removed.into())
    }

    /// Decide what happens to a candidate name before it is persisted.
    ///
    /// - no match: `Ok(None)`, the caller saves its own entity
    /// - active match: `DuplicateName`
    /// - inactive match: that row is reactivated, saved and returned
    pub async fn resolve_name(&self, name: &str) -> Result<Option<Category>> {
        let Some(mut existing) = self.repository.find_by_name_case_insensitive(name).await?
        else {
            return Ok(None);
        };

        if existing.is_active {
            tracing::warn!("Category name already in use: {}", name);
            return Err(AppError::DuplicateName(name.to_string()));
        }

        tracing::info!("Reactivating category {} for name {}", existing.id, name);
        existing.set_active(true);
        self.repository.save(existing).await.map(Some)
    }

    async fn get_category(&self, id: Uuid) -> Result<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))
    }
}
