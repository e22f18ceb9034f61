use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::validation::validate_not_blank;

// Create request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

impl CreateCategoryDto {
    pub fn to_entity(&self) -> Category {
        Category::new(self.name.trim())
    }
}

// Update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

impl UpdateCategoryDto {
    /// Apply the requested changes onto the stored entity
    pub fn apply_to(&self, mut category: Category) -> Category {
        category.name = self.name.trim().to_string();
        category.touch();
        category
    }
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
