use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/category",
            get(handlers::find_all_categories).post(handlers::create_category),
        )
        .route(
            "/api/category/{id}",
            get(handlers::find_one_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route("/api/category/{id}/purge", delete(handlers::purge_category))
        .with_state(service)
}
