use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::CategoryRepository;
use crate::features::funkos::dtos::{CreateFunkoDto, FunkoResponseDto, UpdateFunkoDto};
use crate::features::funkos::models::Funko;
use crate::features::funkos::repositories::FunkoRepository;

/// Service for funko operations
pub struct FunkoService {
    repository: Arc<dyn FunkoRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl FunkoService {
    pub fn new(
        repository: Arc<dyn FunkoRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            repository,
            categories,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<FunkoResponseDto>> {
        tracing::info!("Listing all funkos");
        let funkos = self.repository.find_all().await?;
        let names: HashMap<Uuid, String> = self
            .categories
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(funkos
            .into_iter()
            .map(|f| {
                let category = names.get(&f.category_id).cloned().unwrap_or_default();
                FunkoResponseDto::new(f, category)
            })
            .collect())
    }

    pub async fn find_one(&self, id: i64) -> Result<FunkoResponseDto> {
        tracing::info!("Finding funko by id: {}", id);
        let funko = self.get_funko(id).await?;
        self.to_response(funko).await
    }

    pub async fn create(&self, dto: CreateFunkoDto) -> Result<FunkoResponseDto> {
        tracing::info!("Creating funko: {}", dto.name);
        let category = self.active_category(&dto.category).await?;
        let funko = self.repository.insert(dto.to_entity(category.id)).await?;
        Ok(FunkoResponseDto::new(funko, category.name))
    }

    pub async fn update(&self, id: i64, dto: UpdateFunkoDto) -> Result<FunkoResponseDto> {
        tracing::info!("Updating funko with id: {}", id);
        let existing = self.get_funko(id).await?;

        let category = match dto.category {
            Some(ref name) => Some(self.active_category(name).await?),
            None => None,
        };

        let funko = dto.apply_to(existing, category.as_ref().map(|c| c.id));
        let saved = self.repository.save(funko).await?;

        match category {
            Some(category) => Ok(FunkoResponseDto::new(saved, category.name)),
            None => self.to_response(saved).await,
        }
    }

    /// Soft delete
    pub async fn is_deleted_to_true(&self, id: i64) -> Result<FunkoResponseDto> {
        tracing::info!("Soft deleting funko with id: {}", id);
        let mut funko = self.get_funko(id).await?;
        funko.set_deleted(true);
        let saved = self.repository.save(funko).await?;
        self.to_response(saved).await
    }

    async fn get_funko(&self, id: i64) -> Result<Funko> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Funko with id {} not found", id)))
    }

    /// Funkos may only be attached to live categories
    async fn active_category(&self, name: &str) -> Result<Category> {
        match self.categories.find_by_name_case_insensitive(name).await? {
            Some(category) if category.is_active => Ok(category),
            _ => {
                tracing::warn!("Funko references unknown or inactive category: {}", name);
                Err(AppError::BadRequest(format!(
                    "Category with name {} not found",
                    name
                )))
            }
        }
    }

    async fn to_response(&self, funko: Funko) -> Result<FunkoResponseDto> {
        let category = self
            .categories
            .find_by_id(funko.category_id)
            .await?
            .map(|c| c.name)
            .unwrap_or_default();
        Ok(FunkoResponseDto::new(funko, category))
    }
}
