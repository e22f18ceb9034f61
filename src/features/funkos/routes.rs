use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::funkos::handlers;
use crate::features::funkos::services::FunkoService;

/// Create routes for the funkos feature
pub fn routes(service: Arc<FunkoService>) -> Router {
    Router::new()
        .route(
            "/api/funkos",
            get(handlers::find_all_funkos).post(handlers::create_funko),
        )
        .route(
            "/api/funkos/{id}",
            get(handlers::find_one_funko)
                .put(handlers::update_funko)
                .delete(handlers::delete_funko),
        )
        .with_state(service)
}
