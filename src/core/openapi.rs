use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::funkos::{dtos as funkos_dtos, handlers as funkos_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::find_all_categories,
        categories_handlers::find_one_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::purge_category,
        // Funkos
        funkos_handlers::find_all_funkos,
        funkos_handlers::find_one_funko,
        funkos_handlers::create_funko,
        funkos_handlers::update_funko,
        funkos_handlers::delete_funko,
    ),
    components(
        schemas(
            // Shared
            ApiResponse,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            // Funkos
            funkos_dtos::CreateFunkoDto,
            funkos_dtos::UpdateFunkoDto,
            funkos_dtos::FunkoResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Funko categories with soft delete and name recycling"),
        (name = "funkos", description = "Collectible funkos"),
    ),
    info(
        title = "Funko API",
        version = "0.1.0",
        description = "API documentation for the funko catalogue",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
